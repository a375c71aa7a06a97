use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;

/// List projection of a review.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub title: String,
    pub book_name: String,
    pub user_name: String,
    pub star: i32,
    pub created_at: DateTime<Utc>,
}

impl From<models::Review> for Summary {
    fn from(review: models::Review) -> Self {
        Self {
            title: review.title,
            book_name: review.book_name,
            user_name: review.user_name,
            star: review.star,
            created_at: review.created_at,
        }
    }
}
