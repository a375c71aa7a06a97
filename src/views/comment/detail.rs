use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;

#[derive(Debug, Serialize)]
pub struct Detail {
    pub id: i32,
    pub review_id: i32,
    pub content: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<models::Comment> for Detail {
    fn from(comment: models::Comment) -> Self {
        Self {
            id: comment.id,
            review_id: comment.review_id,
            content: comment.content,
            user_name: comment.user_name,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
