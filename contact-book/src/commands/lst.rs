use super::traits::command::Command;
use crate::errors::command_error::CommandError;
use contact_directory::DirectoryHandle;

pub struct Lst {
    directory: DirectoryHandle,
}

impl Lst {
    pub fn new(directory: DirectoryHandle) -> Self {
        Lst { directory }
    }
}

impl Command for Lst {
    async fn handle(&self, command: &str) -> Result<Vec<String>, CommandError> {
        let args: Vec<&str> = command.trim().split(' ').collect();

        let tr_id = *args.get(1).ok_or(CommandError::NoTrId)?;
        let aliased_only = match args.get(2) {
            None => false,
            Some(&"AL") => true,
            Some(_) => return Err(CommandError::Reply(format!("201 {tr_id}\r\n"))),
        };

        let mut entries = self.directory.entries().await?;
        if aliased_only {
            entries.retain(|(_, alias)| alias.is_some());
        }

        entries.sort_by_cached_key(|(person, alias)| {
            (person.full_address(), alias.clone().unwrap_or_default())
        });

        let mut replies = vec![format!("LST {tr_id} {}\r\n", entries.len())];
        for (person, alias) in entries {
            replies.push(format!(
                "ITM {} {}\r\n",
                alias.as_deref().unwrap_or("-"),
                person.full_address()
            ));
        }

        Ok(replies)
    }
}

#[cfg(test)]
mod tests {
    use super::Lst;
    use crate::commands::traits::command::Command;
    use contact_directory::{ContactDirectory, DirectoryHandle, Person};
    use tempfile::tempdir;

    #[tokio::test]
    async fn lists_all_or_aliased_contacts() {
        let dir = tempdir().unwrap();
        let mut contacts = ContactDirectory::new();
        contacts.upsert_alias(Person::from_address("zed@example.com"), Some("z"));
        contacts.upsert_alias(Person::from_address("Amy <amy@example.com>"), None);
        let lst = Lst::new(DirectoryHandle::spawn(contacts, dir.path().join("c.txt")));

        assert_eq!(
            lst.handle("LST 1").await.unwrap(),
            vec![
                "LST 1 2\r\n".to_string(),
                "ITM - Amy <amy@example.com>\r\n".to_string(),
                "ITM z zed@example.com\r\n".to_string(),
            ]
        );
        assert_eq!(
            lst.handle("LST 2 AL").await.unwrap(),
            vec![
                "LST 2 1\r\n".to_string(),
                "ITM z zed@example.com\r\n".to_string(),
            ]
        );
    }
}
