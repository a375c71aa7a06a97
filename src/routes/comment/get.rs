use super::{CommentPath, COMMENT_NOT_FOUND};
use crate::db;
use crate::helpers::JsonResponse;
use crate::middleware::ReviewId;
use crate::routes::review::REVIEW_NOT_FOUND;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get comments of a review.", skip(pg_pool))]
#[get("")]
pub async fn list(
    review_id: web::ReqData<ReviewId>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let ReviewId(review_id) = review_id.into_inner();

    db::review::fetch(pg_pool.get_ref(), review_id)
        .await
        .map_err(|err| JsonResponse::<views::comment::Detail>::build().bad_request(err))
        .and_then(|review| match review {
            Some(review) => Ok(review),
            None => Err(JsonResponse::<views::comment::Detail>::build().not_found(REVIEW_NOT_FOUND)),
        })?;

    db::comment::fetch_by_review(pg_pool.get_ref(), review_id)
        .await
        .map(|comments| {
            let comments = comments
                .into_iter()
                .map(Into::into)
                .collect::<Vec<views::comment::Detail>>();

            JsonResponse::build().set_list(comments).ok("OK")
        })
        .map_err(|err| JsonResponse::<views::comment::Detail>::build().bad_request(err))
}

#[tracing::instrument(name = "Get comment.", skip(pg_pool))]
#[get("/{id}")]
pub async fn item(
    review_id: web::ReqData<ReviewId>,
    path: web::Path<CommentPath>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let ReviewId(review_id) = review_id.into_inner();
    let id = path.into_inner().id;

    db::review::fetch(pg_pool.get_ref(), review_id)
        .await
        .map_err(|err| JsonResponse::<views::comment::Detail>::build().bad_request(err))
        .and_then(|review| match review {
            Some(review) => Ok(review),
            None => Err(JsonResponse::<views::comment::Detail>::build().not_found(REVIEW_NOT_FOUND)),
        })?;

    db::comment::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<views::comment::Detail>::build().bad_request(err))
        .and_then(|comment| match comment {
            Some(comment) if comment.review_id != review_id => {
                tracing::debug!("Comment {} does not belong to review {}", id, review_id);
                Err(JsonResponse::<views::comment::Detail>::build().not_found(COMMENT_NOT_FOUND))
            }
            Some(comment) => Ok(JsonResponse::build()
                .set_item(views::comment::Detail::from(comment))
                .ok("OK")),
            None => Err(JsonResponse::<views::comment::Detail>::build().not_found(COMMENT_NOT_FOUND)),
        })
}
