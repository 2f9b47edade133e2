use crate::directory::ContactDirectory;
use crate::errors::handle_error::HandleError;
use crate::message::Message;
use crate::models::person::Person;
use log::{error, trace};
use std::path::PathBuf;
use tokio::sync::{mpsc, oneshot};

/// Cloneable handle to a directory owned by a single task.
///
/// Requests are applied one at a time in the order they are received, so
/// callers on different threads never observe a half-applied update.
#[derive(Debug, Clone)]
pub struct DirectoryHandle {
    tx: mpsc::Sender<Message>,
}

impl DirectoryHandle {
    /// Moves `directory` into a new task. `save` and `shutdown` write to `path`.
    /// Must be called from within a tokio runtime.
    pub fn spawn(directory: ContactDirectory, path: impl Into<PathBuf>) -> Self {
        let (tx, rx) = mpsc::channel::<Message>(64);
        tokio::spawn(run(directory, path.into(), rx));
        DirectoryHandle { tx }
    }

    async fn request<T>(
        &self,
        message: impl FnOnce(oneshot::Sender<T>) -> Message,
    ) -> Result<T, HandleError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(message(reply))
            .await
            .or(Err(HandleError::CouldNotSend))?;

        rx.await.map_err(HandleError::CouldNotReceive)
    }

    pub async fn upsert_alias(&self, person: Person, alias: Option<&str>) -> Result<(), HandleError> {
        let alias = alias.map(str::to_string);
        self.request(|reply| Message::UpsertAlias {
            person,
            alias,
            reply,
        })
        .await
    }

    pub async fn remove_contact(&self, person: Person) -> Result<(), HandleError> {
        self.request(|reply| Message::RemoveContact { person, reply })
            .await
    }

    pub async fn contacts(&self) -> Result<Vec<Person>, HandleError> {
        self.request(Message::Contacts).await
    }

    pub async fn aliased_contacts(&self) -> Result<Vec<Person>, HandleError> {
        self.request(Message::AliasedContacts).await
    }

    pub async fn entries(&self) -> Result<Vec<(Person, Option<String>)>, HandleError> {
        self.request(Message::Entries).await
    }

    pub async fn contact_for(&self, alias: &str) -> Result<Option<Person>, HandleError> {
        let alias = alias.to_string();
        self.request(|reply| Message::ContactFor { alias, reply })
            .await
    }

    pub async fn alias_for(&self, person: Person) -> Result<Option<Option<String>>, HandleError> {
        self.request(|reply| Message::AliasFor { person, reply })
            .await
    }

    pub async fn person_for(&self, email: &str) -> Result<Option<Person>, HandleError> {
        let email = email.to_string();
        self.request(|reply| Message::PersonFor { email, reply })
            .await
    }

    pub async fn is_aliased_contact(&self, person: Person) -> Result<bool, HandleError> {
        self.request(|reply| Message::IsAliasedContact { person, reply })
            .await
    }

    pub async fn len(&self) -> Result<usize, HandleError> {
        self.request(Message::Len).await
    }

    pub async fn save(&self) -> Result<(), HandleError> {
        Ok(self.request(Message::Save).await??)
    }

    /// Saves and stops the task. Later requests fail with `CouldNotSend`.
    pub async fn shutdown(&self) -> Result<(), HandleError> {
        Ok(self.request(Message::Shutdown).await??)
    }
}

fn respond<T>(reply: oneshot::Sender<T>, value: T) {
    if reply.send(value).is_err() {
        error!("Could not reply to directory request, requester is gone");
    }
}

async fn run(mut directory: ContactDirectory, path: PathBuf, mut rx: mpsc::Receiver<Message>) {
    while let Some(message) = rx.recv().await {
        match message {
            Message::UpsertAlias {
                person,
                alias,
                reply,
            } => {
                directory.upsert_alias(person, alias.as_deref());
                respond(reply, ());
            }

            Message::RemoveContact { person, reply } => {
                directory.remove_contact(&person);
                respond(reply, ());
            }

            Message::Contacts(reply) => {
                respond(reply, directory.contacts().into_iter().cloned().collect());
            }

            Message::AliasedContacts(reply) => {
                respond(
                    reply,
                    directory.aliased_contacts().into_iter().cloned().collect(),
                );
            }

            Message::Entries(reply) => {
                let entries = directory
                    .entries()
                    .map(|(person, alias)| (person.clone(), alias.map(str::to_string)))
                    .collect();
                respond(reply, entries);
            }

            Message::ContactFor { alias, reply } => {
                respond(reply, directory.contact_for(&alias).cloned());
            }

            Message::AliasFor { person, reply } => {
                let alias = directory
                    .alias_for(&person)
                    .map(|alias| alias.map(str::to_string));
                respond(reply, alias);
            }

            Message::PersonFor { email, reply } => {
                respond(reply, directory.person_for(&email).cloned());
            }

            Message::IsAliasedContact { person, reply } => {
                respond(reply, directory.is_aliased_contact(&person));
            }

            Message::Len(reply) => {
                respond(reply, directory.len());
            }

            Message::Save(reply) => {
                respond(reply, directory.save(&path));
            }

            Message::Shutdown(reply) => {
                rx.close();
                respond(reply, directory.save(&path));
                break;
            }
        }
    }

    trace!("Directory task stopped");
}
