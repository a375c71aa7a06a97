use crate::models;
use sqlx::PgExecutor;
use tracing::Instrument;

pub async fn fetch<'e, E>(executor: E, id: i32) -> Result<Option<models::Review>, String>
where
    E: PgExecutor<'e>,
{
    tracing::info!("Fetch review {}", id);
    sqlx::query_as::<_, models::Review>(r#"SELECT * FROM review WHERE id = $1 LIMIT 1"#)
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch review, error: {:?}", err);
            err.to_string()
        })
}

/// Locks the review row for the rest of the transaction. Blocks every other writer and locker.
pub async fn fetch_for_update<'e, E>(executor: E, id: i32) -> Result<Option<models::Review>, String>
where
    E: PgExecutor<'e>,
{
    let query_span = tracing::info_span!("Lock review row for update.", review_id = id);
    sqlx::query_as::<_, models::Review>(r#"SELECT * FROM review WHERE id = $1 FOR UPDATE"#)
        .bind(id)
        .fetch_optional(executor)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to lock review, error: {:?}", err);
            err.to_string()
        })
}

/// Share lock on the review row: it cannot be changed or deleted until the transaction ends,
/// other share lockers are not blocked.
pub async fn fetch_for_share<'e, E>(executor: E, id: i32) -> Result<Option<models::Review>, String>
where
    E: PgExecutor<'e>,
{
    let query_span = tracing::info_span!("Lock review row for share.", review_id = id);
    sqlx::query_as::<_, models::Review>(r#"SELECT * FROM review WHERE id = $1 FOR SHARE"#)
        .bind(id)
        .fetch_optional(executor)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to lock review, error: {:?}", err);
            err.to_string()
        })
}

pub async fn fetch_all<'e, E>(executor: E) -> Result<Vec<models::Review>, String>
where
    E: PgExecutor<'e>,
{
    let query_span = tracing::info_span!("Fetch all reviews.");
    sqlx::query_as::<_, models::Review>(
        r#"
        SELECT
            *
        FROM review
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(executor)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch reviews, error: {:?}", err);
        err.to_string()
    })
}

pub async fn insert<'e, E>(executor: E, review: models::Review) -> Result<models::Review, String>
where
    E: PgExecutor<'e>,
{
    let query_span = tracing::info_span!("Saving new review into the database");
    sqlx::query_as::<_, models::Review>(
        r#"
        INSERT INTO review (
        title,
        book_name,
        content,
        user_name,
        password,
        star,
        created_at,
        updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(review.title)
    .bind(review.book_name)
    .bind(review.content)
    .bind(review.user_name)
    .bind(review.password)
    .bind(review.star)
    .fetch_one(executor)
    .instrument(query_span)
    .await
    .map(|review| {
        tracing::info!("New review {} has been saved to database", review.id);
        review
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        err.to_string()
    })
}

/// Writes the mutable fields of `review` and bumps `updated_at`. The password hash is left alone.
pub async fn update<'e, E>(executor: E, review: models::Review) -> Result<models::Review, String>
where
    E: PgExecutor<'e>,
{
    let query_span = tracing::info_span!("Updating review", review_id = review.id);
    sqlx::query_as::<_, models::Review>(
        r#"
        UPDATE review
        SET
            title=$2,
            book_name=$3,
            content=$4,
            user_name=$5,
            star=$6,
            updated_at=NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(review.id)
    .bind(review.title)
    .bind(review.book_name)
    .bind(review.content)
    .bind(review.user_name)
    .bind(review.star)
    .fetch_one(executor)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        err.to_string()
    })
}

#[tracing::instrument(name = "Delete review.", skip(executor))]
pub async fn delete<'e, E>(executor: E, id: i32) -> Result<bool, String>
where
    E: PgExecutor<'e>,
{
    sqlx::query::<sqlx::Postgres>("DELETE FROM review WHERE id = $1;")
        .bind(id)
        .execute(executor)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete review: {:?}", err);
            err.to_string()
        })
}
