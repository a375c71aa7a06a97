use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::{password, JsonResponse};
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add review.", skip(form, pg_pool, settings))]
#[post("")]
pub async fn item(
    form: web::Json<forms::review::Add>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::review::Detail>::build()
            .form_error(forms::error_message(&errors)));
    }

    let form = form.into_inner();
    let password_hash = password::spawn_hash(form.password.clone(), settings.password.cost)
        .await
        .map_err(|err| {
            tracing::error!("Failed to hash review password: {:?}", err);
            JsonResponse::<views::review::Detail>::build().internal_server_error(err.to_string())
        })?;

    db::review::insert(pg_pool.get_ref(), form.into_model(password_hash))
        .await
        .map(|review| {
            JsonResponse::build()
                .set_item(views::review::Detail::from(review))
                .created("작성완료 되었습니다.")
        })
        .map_err(|err| JsonResponse::<views::review::Detail>::build().bad_request(err))
}
