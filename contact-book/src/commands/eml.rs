use super::traits::command::Command;
use crate::errors::command_error::CommandError;
use contact_directory::DirectoryHandle;

pub struct Eml {
    directory: DirectoryHandle,
}

impl Eml {
    pub fn new(directory: DirectoryHandle) -> Self {
        Eml { directory }
    }
}

impl Command for Eml {
    async fn handle(&self, command: &str) -> Result<Vec<String>, CommandError> {
        let args: Vec<&str> = command.trim().split(' ').collect();

        let tr_id = *args.get(1).ok_or(CommandError::NoTrId)?;
        let email = *args
            .get(2)
            .ok_or(CommandError::Reply(format!("201 {tr_id}\r\n")))?;

        let person = self
            .directory
            .person_for(email)
            .await?
            .ok_or(CommandError::Reply(format!("208 {tr_id}\r\n")))?;

        let alias = self.directory.alias_for(person.clone()).await?.flatten();

        Ok(vec![format!(
            "EML {tr_id} {} {} {}\r\n",
            person.email(),
            alias.as_deref().unwrap_or("-"),
            person.full_address()
        )])
    }
}
