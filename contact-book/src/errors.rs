pub mod command_error;
pub mod config_error;
