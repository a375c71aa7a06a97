use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct Comment {
    pub id: i32,
    pub review_id: i32, // set on insert, never updated
    pub content: String,
    pub user_name: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
