use super::traits::command::Command;
use crate::errors::command_error::CommandError;
use contact_directory::DirectoryHandle;

pub struct Cnt {
    directory: DirectoryHandle,
}

impl Cnt {
    pub fn new(directory: DirectoryHandle) -> Self {
        Cnt { directory }
    }
}

impl Command for Cnt {
    async fn handle(&self, command: &str) -> Result<Vec<String>, CommandError> {
        let args: Vec<&str> = command.trim().split(' ').collect();

        let tr_id = *args.get(1).ok_or(CommandError::NoTrId)?;
        let alias = *args
            .get(2)
            .ok_or(CommandError::Reply(format!("201 {tr_id}\r\n")))?;

        let person = self
            .directory
            .contact_for(alias)
            .await?
            .ok_or(CommandError::Reply(format!("208 {tr_id}\r\n")))?;

        Ok(vec![format!(
            "CNT {tr_id} {alias} {}\r\n",
            person.full_address()
        )])
    }
}
