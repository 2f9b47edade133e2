pub mod contact_line;
mod directory;
pub mod errors;
mod handle;
mod message;
pub mod models;

pub use directory::ContactDirectory;
pub use errors::{directory_error::DirectoryError, handle_error::HandleError, parse_error::ParseError};
pub use handle::DirectoryHandle;
pub use models::person::Person;
