pub mod add;
pub mod edit;
pub mod list;
pub mod remove;

pub use add::handle_add;
pub use edit::handle_edit;
pub use list::handle_list;
pub use remove::handle_remove;
