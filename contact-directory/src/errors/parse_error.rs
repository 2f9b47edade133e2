use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Could not parse {} line {line_number}: {line:?}", .path.display())]
pub struct ParseError {
    pub path: PathBuf,
    pub line_number: usize,
    pub line: String,
}
