pub mod add;
pub mod delete;
pub mod get;
pub mod update;

pub(crate) const REVIEW_NOT_FOUND: &str = "존재하지 않는 리뷰입니다.";
pub(crate) const WRONG_PASSWORD: &str = "비밀번호가 틀렸습니다.";
