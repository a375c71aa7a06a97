pub mod comment;
pub mod review;

use sqlx::{PgPool, Postgres, Transaction};

pub async fn begin(pool: &PgPool) -> Result<Transaction<'static, Postgres>, String> {
    pool.begin().await.map_err(|err| {
        tracing::error!("Failed to begin transaction: {:?}", err);
        err.to_string()
    })
}

pub async fn commit(tx: Transaction<'_, Postgres>) -> Result<(), String> {
    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit transaction: {:?}", err);
        err.to_string()
    })
}
