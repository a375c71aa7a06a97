use crate::models;
use serde::Deserialize;
use serde_valid::Validate;

#[derive(Deserialize, Validate)]
pub struct AddComment {
    #[validate(min_length = 1, message = "댓글을 입력하세요.")]
    pub content: String,
    #[validate(min_length = 1, message = "작성자 이름을 입력하세요.")]
    pub user_name: String,
    #[validate(min_length = 1, message = "비밀번호를 입력하세요.")]
    pub password: String,
}

impl AddComment {
    pub fn into_model(self, review_id: i32, password_hash: String) -> models::Comment {
        models::Comment {
            review_id,
            content: self.content,
            user_name: self.user_name,
            password: password_hash,
            ..Default::default()
        }
    }
}
