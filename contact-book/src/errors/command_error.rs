use contact_directory::HandleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Sending error message to client")]
    Reply(String),
    #[error("Could not get transaction ID from command")]
    NoTrId,
    #[error("Could not reach contact directory: {0}")]
    Handle(#[from] HandleError),
}
