pub mod add;
pub mod delete;
pub mod get;
pub mod update;

use serde::Deserialize;

pub(crate) const COMMENT_NOT_FOUND: &str = "없는 댓글입니다.";

/// `{id}` segment of `/reviews/{review_id}/comments/{id}`. The review id is taken from the
/// request extensions set by the review scope middleware.
#[derive(Debug, Deserialize)]
pub struct CommentPath {
    pub id: i32,
}
