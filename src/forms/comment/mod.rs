mod add;
mod edit;

pub use add::AddComment as Add;
pub use edit::EditComment as Edit;
