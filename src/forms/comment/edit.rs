use crate::models;
use serde::Deserialize;
use serde_valid::Validate;

#[derive(Deserialize, Validate)]
pub struct EditComment {
    #[validate(min_length = 1, message = "댓글 내용을 입력하세요!")]
    pub content: String,
    pub password: String,
}

impl EditComment {
    pub fn update(&self, comment: &mut models::Comment) {
        comment.content = self.content.clone();
    }
}
