use super::parse_error::ParseError;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Could not read contacts from {}: {source}", .path.display())]
    CouldNotRead { path: PathBuf, source: io::Error },
    #[error("Could not write contacts to {}: {source}", .path.display())]
    CouldNotWrite { path: PathBuf, source: io::Error },
    #[error("Could not save contact {email}: {reason}")]
    Unrepresentable { email: String, reason: &'static str },
}
