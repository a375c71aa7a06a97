use crate::configuration::Settings;
use crate::helpers::ErrorResponse;
use crate::middleware;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http::StatusCode, web, App, HttpServer};
use sqlx::PgPool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: PgPool,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(pg_pool.clone())
            .app_data(settings.clone())
            .configure(configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Route table. Kept separate from [`run`] so tests can mount it on `actix_web::test` services.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(web::scope("/health_check").service(routes::health_check))
        .service(
            web::scope("/reviews")
                .service(
                    web::scope("/{review_id}/comments")
                        .wrap(middleware::ReviewScope)
                        .service(routes::comment::add::item)
                        .service(routes::comment::get::list)
                        .service(routes::comment::get::item)
                        .service(routes::comment::update::item)
                        .service(routes::comment::delete::item),
                )
                .service(routes::review::add::item)
                .service(routes::review::get::list)
                .service(routes::review::get::item)
                .service(routes::review::update::item)
                .service(routes::review::delete::item),
        );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Invalid request body at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            err => err.to_string(),
        };
        tracing::debug!("Rejected request body: {}", message);
        ErrorResponse::new(StatusCode::BAD_REQUEST, message).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        tracing::debug!("Rejected path {}: {}", req.path(), err);
        ErrorResponse::new(StatusCode::BAD_REQUEST, middleware::review_scope::INVALID_REVIEW_ID)
            .into()
    })
}
