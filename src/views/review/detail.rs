use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;

#[derive(Debug, Serialize)]
pub struct Detail {
    pub id: i32,
    pub title: String,
    pub book_name: String,
    pub content: String,
    pub user_name: String,
    pub star: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<models::Review> for Detail {
    fn from(review: models::Review) -> Self {
        Self {
            id: review.id,
            title: review.title,
            book_name: review.book_name,
            content: review.content,
            user_name: review.user_name,
            star: review.star,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}
