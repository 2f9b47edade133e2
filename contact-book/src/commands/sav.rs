use super::traits::command::Command;
use crate::errors::command_error::CommandError;
use contact_directory::{DirectoryHandle, HandleError};
use log::error;

pub struct Sav {
    directory: DirectoryHandle,
}

impl Sav {
    pub fn new(directory: DirectoryHandle) -> Self {
        Sav { directory }
    }
}

impl Command for Sav {
    async fn handle(&self, command: &str) -> Result<Vec<String>, CommandError> {
        let args: Vec<&str> = command.trim().split(' ').collect();
        let tr_id = *args.get(1).ok_or(CommandError::NoTrId)?;

        match self.directory.save().await {
            Ok(()) => (),
            Err(HandleError::Directory(err)) => {
                error!("{err}");
                return Err(CommandError::Reply(format!("603 {tr_id}\r\n")));
            }
            Err(err) => return Err(err.into()),
        }

        let count = self.directory.len().await?;
        Ok(vec![format!("SAV {tr_id} {count}\r\n")])
    }
}
