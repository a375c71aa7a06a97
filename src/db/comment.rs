use crate::models;
use sqlx::PgExecutor;
use tracing::Instrument;

pub async fn fetch<'e, E>(executor: E, id: i32) -> Result<Option<models::Comment>, String>
where
    E: PgExecutor<'e>,
{
    tracing::info!("Fetch comment {}", id);
    sqlx::query_as::<_, models::Comment>(r#"SELECT * FROM comment WHERE id = $1 LIMIT 1"#)
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch comment, error: {:?}", err);
            err.to_string()
        })
}

/// Locks the comment row for the rest of the transaction.
pub async fn fetch_for_update<'e, E>(
    executor: E,
    id: i32,
) -> Result<Option<models::Comment>, String>
where
    E: PgExecutor<'e>,
{
    let query_span = tracing::info_span!("Lock comment row.", comment_id = id);
    sqlx::query_as::<_, models::Comment>(r#"SELECT * FROM comment WHERE id = $1 FOR UPDATE"#)
        .bind(id)
        .fetch_optional(executor)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to lock comment, error: {:?}", err);
            err.to_string()
        })
}

pub async fn fetch_by_review<'e, E>(
    executor: E,
    review_id: i32,
) -> Result<Vec<models::Comment>, String>
where
    E: PgExecutor<'e>,
{
    let query_span = tracing::info_span!("Fetch comments by review id.", review_id);
    sqlx::query_as::<_, models::Comment>(
        r#"
        SELECT
            *
        FROM comment
        WHERE review_id=$1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(review_id)
    .fetch_all(executor)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch comments, error: {:?}", err);
        err.to_string()
    })
}

pub async fn insert<'e, E>(executor: E, comment: models::Comment) -> Result<models::Comment, String>
where
    E: PgExecutor<'e>,
{
    let query_span = tracing::info_span!("Saving new comment into the database");
    sqlx::query_as::<_, models::Comment>(
        r#"
        INSERT INTO comment (review_id, content, user_name, password, created_at, updated_at)
        VALUES ($1, $2, $3, $4, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(comment.review_id)
    .bind(comment.content)
    .bind(comment.user_name)
    .bind(comment.password)
    .fetch_one(executor)
    .instrument(query_span)
    .await
    .map(|comment| {
        tracing::info!(
            "New comment {} on review {} has been saved to database",
            comment.id,
            comment.review_id
        );
        comment
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        err.to_string()
    })
}

/// Only `content` is writable; `review_id` and the password hash stay as inserted.
pub async fn update<'e, E>(executor: E, comment: models::Comment) -> Result<models::Comment, String>
where
    E: PgExecutor<'e>,
{
    let query_span = tracing::info_span!("Updating comment", comment_id = comment.id);
    sqlx::query_as::<_, models::Comment>(
        r#"
        UPDATE comment
        SET
            content=$2,
            updated_at=NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(comment.id)
    .bind(comment.content)
    .fetch_one(executor)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        err.to_string()
    })
}

#[tracing::instrument(name = "Delete comment.", skip(executor))]
pub async fn delete<'e, E>(executor: E, id: i32) -> Result<bool, String>
where
    E: PgExecutor<'e>,
{
    sqlx::query::<sqlx::Postgres>("DELETE FROM comment WHERE id = $1;")
        .bind(id)
        .execute(executor)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete comment: {:?}", err);
            err.to_string()
        })
}

#[tracing::instrument(name = "Delete comments of a review.", skip(executor))]
pub async fn delete_by_review<'e, E>(executor: E, review_id: i32) -> Result<u64, String>
where
    E: PgExecutor<'e>,
{
    sqlx::query::<sqlx::Postgres>("DELETE FROM comment WHERE review_id = $1;")
        .bind(review_id)
        .execute(executor)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Failed to delete comments of review: {:?}", err);
            err.to_string()
        })
}
