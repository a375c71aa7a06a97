use crate::models;
use serde::Deserialize;
use serde_valid::Validate;

#[derive(Deserialize, Validate)]
pub struct ReviewForm {
    #[validate(min_length = 1, message = "제목을 입력하세요.")]
    pub title: String,
    #[validate(min_length = 1, message = "책 이름을 입력하세요.")]
    pub book_name: String,
    #[validate(min_length = 1, message = "내용을 입력하세요.")]
    pub content: String,
    #[validate(min_length = 1, message = "작성자 이름을 입력하세요.")]
    pub user_name: String,
    #[validate(minimum = 0, message = "별점은 0점부터 10점까지 넣을 수 있습니다.")]
    #[validate(maximum = 10, message = "별점은 0점부터 10점까지 넣을 수 있습니다.")]
    pub star: i32,
    #[validate(min_length = 1, message = "비밀번호를 입력하세요.")]
    pub password: String,
}

impl ReviewForm {
    /// Builds the row to insert. `password_hash` replaces the plaintext from the form.
    pub fn into_model(self, password_hash: String) -> models::Review {
        models::Review {
            title: self.title,
            book_name: self.book_name,
            content: self.content,
            user_name: self.user_name,
            star: self.star,
            password: password_hash,
            ..Default::default()
        }
    }

    /// Copies the editable fields onto an existing review.
    pub fn update(&self, review: &mut models::Review) {
        review.title = self.title.clone();
        review.book_name = self.book_name.clone();
        review.content = self.content.clone();
        review.user_name = self.user_name.clone();
        review.star = self.star;
    }
}
