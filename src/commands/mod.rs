pub mod init;
pub mod lifecycle;
pub mod list;

pub use init::handle_init_command;
pub use lifecycle::handle_lifecycle_command;
pub use list::handle_list_command;
