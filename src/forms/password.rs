use serde::Deserialize;

/// Body of the delete endpoints.
#[derive(Deserialize)]
pub struct Password {
    pub password: String,
}
