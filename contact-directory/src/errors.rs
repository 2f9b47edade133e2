pub mod directory_error;
pub mod handle_error;
pub mod parse_error;
