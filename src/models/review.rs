use chrono::{DateTime, Utc};

/// A row of the `review` table. Holds the password hash, so it is never serialized directly;
/// responses go through `views::review`.
#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct Review {
    pub id: i32,
    pub title: String,
    pub book_name: String,
    pub content: String,
    pub user_name: String,
    pub password: String,
    pub star: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
