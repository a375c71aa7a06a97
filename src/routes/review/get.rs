use crate::db;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get all reviews.", skip(pg_pool))]
#[get("")]
pub async fn list(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::review::fetch_all(pg_pool.get_ref())
        .await
        .map(|reviews| {
            let reviews = reviews
                .into_iter()
                .map(Into::into)
                .collect::<Vec<views::review::Summary>>();

            JsonResponse::build().set_list(reviews).ok("OK")
        })
        .map_err(|err| JsonResponse::<views::review::Summary>::build().bad_request(err))
}

#[tracing::instrument(name = "Get review.", skip(pg_pool))]
#[get("/{id}")]
pub async fn item(path: web::Path<(i32,)>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    db::review::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<views::review::Detail>::build().bad_request(err))
        .and_then(|review| match review {
            Some(review) => Ok(JsonResponse::build()
                .set_item(views::review::Detail::from(review))
                .ok("OK")),
            None => Err(JsonResponse::<views::review::Detail>::build()
                .not_found("찾는 리뷰가 없습니다.")),
        })
}
