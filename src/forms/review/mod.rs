mod add;

pub use add::ReviewForm as Add;
/// Update takes the same body as create.
pub use add::ReviewForm as Edit;
