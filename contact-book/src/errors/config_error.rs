use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("CONTACTS_SAVE_ON_EXIT must be true or false, got {0:?}")]
    InvalidSaveOnExit(String),
}
