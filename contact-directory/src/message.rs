use crate::{errors::directory_error::DirectoryError, models::person::Person};
use tokio::sync::oneshot::Sender;

#[derive(Debug)]
pub enum Message {
    UpsertAlias {
        person: Person,
        alias: Option<String>,
        reply: Sender<()>,
    },

    RemoveContact {
        person: Person,
        reply: Sender<()>,
    },

    Contacts(Sender<Vec<Person>>),
    AliasedContacts(Sender<Vec<Person>>),
    Entries(Sender<Vec<(Person, Option<String>)>>),

    ContactFor {
        alias: String,
        reply: Sender<Option<Person>>,
    },

    AliasFor {
        person: Person,
        reply: Sender<Option<Option<String>>>,
    },

    PersonFor {
        email: String,
        reply: Sender<Option<Person>>,
    },

    IsAliasedContact {
        person: Person,
        reply: Sender<bool>,
    },

    Len(Sender<usize>),
    Save(Sender<Result<(), DirectoryError>>),
    Shutdown(Sender<Result<(), DirectoryError>>),
}
