use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::{password, JsonResponse};
use crate::middleware::ReviewId;
use crate::routes::review::REVIEW_NOT_FOUND;
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add comment.", skip(form, pg_pool, settings))]
#[post("")]
pub async fn item(
    review_id: web::ReqData<ReviewId>,
    form: web::Json<forms::comment::Add>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::comment::Detail>::build()
            .form_error(forms::error_message(&errors)));
    }

    let ReviewId(review_id) = review_id.into_inner();
    let form = form.into_inner();
    let mut tx = db::begin(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<views::comment::Detail>::build().bad_request(err))?;

    // share lock keeps the review from being deleted before the insert commits
    db::review::fetch_for_share(&mut *tx, review_id)
        .await
        .map_err(|err| JsonResponse::<views::comment::Detail>::build().bad_request(err))
        .and_then(|review| match review {
            Some(review) => Ok(review),
            None => Err(JsonResponse::<views::comment::Detail>::build().not_found(REVIEW_NOT_FOUND)),
        })?;

    let password_hash = password::spawn_hash(form.password.clone(), settings.password.cost)
        .await
        .map_err(|err| {
            tracing::error!("Failed to hash comment password: {:?}", err);
            JsonResponse::<views::comment::Detail>::build().internal_server_error(err.to_string())
        })?;

    let comment = db::comment::insert(&mut *tx, form.into_model(review_id, password_hash))
        .await
        .map_err(|err| JsonResponse::<views::comment::Detail>::build().bad_request(err))?;

    db::commit(tx)
        .await
        .map_err(|err| JsonResponse::<views::comment::Detail>::build().bad_request(err))?;

    Ok(JsonResponse::build()
        .set_item(views::comment::Detail::from(comment))
        .created("작성완료 되었습니다."))
}
