use super::{REVIEW_NOT_FOUND, WRONG_PASSWORD};
use crate::db;
use crate::forms;
use crate::helpers::{password, JsonResponse};
use crate::views;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Update review.", skip(form, pg_pool))]
#[put("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    form: web::Json<forms::review::Edit>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::review::Detail>::build()
            .form_error(forms::error_message(&errors)));
    }

    let (id,) = path.into_inner();
    let mut tx = db::begin(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<views::review::Detail>::build().bad_request(err))?;

    let mut review = db::review::fetch_for_update(&mut *tx, id)
        .await
        .map_err(|err| JsonResponse::<views::review::Detail>::build().bad_request(err))?
        .ok_or_else(|| JsonResponse::<views::review::Detail>::build().not_found(REVIEW_NOT_FOUND))?;

    if !password::spawn_verify(form.password.clone(), review.password.clone()).await {
        return Err(JsonResponse::<views::review::Detail>::build().bad_request(WRONG_PASSWORD));
    }

    form.update(&mut review);

    let review = db::review::update(&mut *tx, review)
        .await
        .map_err(|err| JsonResponse::<views::review::Detail>::build().bad_request(err))?;

    db::commit(tx)
        .await
        .map_err(|err| JsonResponse::<views::review::Detail>::build().bad_request(err))?;

    Ok(JsonResponse::build()
        .set_item(views::review::Detail::from(review))
        .ok("수정에 성공했습니다"))
}
