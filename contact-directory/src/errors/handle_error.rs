use super::directory_error::DirectoryError;
use thiserror::Error;
use tokio::sync::oneshot::error::RecvError;

#[derive(Error, Debug)]
pub enum HandleError {
    #[error("Could not send to directory task, it has stopped")]
    CouldNotSend,
    #[error("Could not receive reply from directory task: {0}")]
    CouldNotReceive(RecvError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
