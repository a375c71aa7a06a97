use super::{CommentPath, COMMENT_NOT_FOUND};
use crate::db;
use crate::forms;
use crate::helpers::{password, JsonResponse};
use crate::middleware::ReviewId;
use crate::routes::review::{REVIEW_NOT_FOUND, WRONG_PASSWORD};
use crate::views;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Delete comment.", skip(form, pg_pool))]
#[delete("/{id}")]
pub async fn item(
    review_id: web::ReqData<ReviewId>,
    path: web::Path<CommentPath>,
    form: web::Json<forms::Password>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let ReviewId(review_id) = review_id.into_inner();
    let id = path.into_inner().id;
    let mut tx = db::begin(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<views::comment::Detail>::build().bad_request(err))?;

    db::review::fetch_for_share(&mut *tx, review_id)
        .await
        .map_err(|err| JsonResponse::<views::comment::Detail>::build().bad_request(err))
        .and_then(|review| match review {
            Some(review) => Ok(review),
            None => Err(JsonResponse::<views::comment::Detail>::build().not_found(REVIEW_NOT_FOUND)),
        })?;

    let comment = db::comment::fetch_for_update(&mut *tx, id)
        .await
        .map_err(|err| JsonResponse::<views::comment::Detail>::build().bad_request(err))?
        .filter(|comment| comment.review_id == review_id)
        .ok_or_else(|| JsonResponse::<views::comment::Detail>::build().not_found(COMMENT_NOT_FOUND))?;

    if !password::spawn_verify(form.password.clone(), comment.password.clone()).await {
        return Err(JsonResponse::<views::comment::Detail>::build().bad_request(WRONG_PASSWORD));
    }

    db::comment::delete(&mut *tx, comment.id)
        .await
        .map_err(|err| JsonResponse::<views::comment::Detail>::build().bad_request(err))?;

    db::commit(tx)
        .await
        .map_err(|err| JsonResponse::<views::comment::Detail>::build().bad_request(err))?;

    Ok(JsonResponse::<views::comment::Detail>::build().ok("댓글이 삭제 되었습니다."))
}
