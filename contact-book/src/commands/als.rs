use super::traits::command::Command;
use crate::errors::command_error::CommandError;
use contact_directory::{DirectoryHandle, Person};
use email_address::EmailAddress;

pub struct Als {
    directory: DirectoryHandle,
}

impl Als {
    pub fn new(directory: DirectoryHandle) -> Self {
        Als { directory }
    }
}

impl Command for Als {
    async fn handle(&self, command: &str) -> Result<Vec<String>, CommandError> {
        let args: Vec<&str> = command.trim().split(' ').collect();

        let tr_id = *args.get(1).ok_or(CommandError::NoTrId)?;
        let alias = *args
            .get(2)
            .ok_or(CommandError::Reply(format!("201 {tr_id}\r\n")))?;

        // Colons would break the contacts file
        if alias.is_empty() || alias.contains(':') || args.len() < 4 {
            return Err(CommandError::Reply(format!("201 {tr_id}\r\n")));
        }

        let mut person = Person::from_address(&args[3..].join(" "));
        if !EmailAddress::is_valid(person.email()) {
            return Err(CommandError::Reply(format!("201 {tr_id}\r\n")));
        }

        if let Some(existing) = self.directory.person_for(person.email()).await? {
            if let Some(default_from) = existing.default_from() {
                person.set_default_from(default_from);
            }
        }

        let email = person.email().to_string();
        let alias = (alias != "-").then_some(alias);
        self.directory.upsert_alias(person, alias).await?;

        Ok(vec![format!(
            "ALS {tr_id} {} {email}\r\n",
            alias.unwrap_or("-")
        )])
    }
}
