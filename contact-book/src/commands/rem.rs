use super::traits::command::Command;
use crate::errors::command_error::CommandError;
use contact_directory::{DirectoryHandle, Person};

pub struct Rem {
    directory: DirectoryHandle,
}

impl Rem {
    pub fn new(directory: DirectoryHandle) -> Self {
        Rem { directory }
    }
}

impl Command for Rem {
    async fn handle(&self, command: &str) -> Result<Vec<String>, CommandError> {
        let args: Vec<&str> = command.trim().split(' ').collect();

        let tr_id = *args.get(1).ok_or(CommandError::NoTrId)?;
        let email = *args
            .get(2)
            .ok_or(CommandError::Reply(format!("201 {tr_id}\r\n")))?;

        // Removing an unknown contact is not an error
        let person = Person::from_address(email);
        let email = person.email().to_string();
        self.directory.remove_contact(person).await?;

        Ok(vec![format!("REM {tr_id} {email}\r\n")])
    }
}
