use super::{REVIEW_NOT_FOUND, WRONG_PASSWORD};
use crate::db;
use crate::forms;
use crate::helpers::{password, JsonResponse};
use crate::views;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;

/// Deletes the review together with all of its comments.
#[tracing::instrument(name = "Delete review.", skip(form, pg_pool))]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    form: web::Json<forms::Password>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let mut tx = db::begin(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<views::review::Detail>::build().bad_request(err))?;

    let review = db::review::fetch_for_update(&mut *tx, id)
        .await
        .map_err(|err| JsonResponse::<views::review::Detail>::build().bad_request(err))?
        .ok_or_else(|| JsonResponse::<views::review::Detail>::build().not_found(REVIEW_NOT_FOUND))?;

    if !password::spawn_verify(form.password.clone(), review.password.clone()).await {
        return Err(JsonResponse::<views::review::Detail>::build().bad_request(WRONG_PASSWORD));
    }

    let removed = db::comment::delete_by_review(&mut *tx, review.id)
        .await
        .map_err(|err| JsonResponse::<views::review::Detail>::build().bad_request(err))?;
    tracing::info!("Removed {} comments of review {}", removed, review.id);

    db::review::delete(&mut *tx, review.id)
        .await
        .map_err(|err| JsonResponse::<views::review::Detail>::build().bad_request(err))
        .and_then(|deleted| match deleted {
            true => Ok(()),
            false => Err(JsonResponse::<views::review::Detail>::build().not_found(REVIEW_NOT_FOUND)),
        })?;

    db::commit(tx)
        .await
        .map_err(|err| JsonResponse::<views::review::Detail>::build().bad_request(err))?;

    Ok(JsonResponse::<views::review::Detail>::build().ok("리뷰가 삭제 되었습니다."))
}
