use crate::contact_line::{self, LineFormat};
use crate::errors::{directory_error::DirectoryError, parse_error::ParseError};
use crate::models::person::Person;
use log::{info, trace, warn};
use std::collections::{HashMap, HashSet};
use std::{fs, io, path::Path};

/// In-memory index of contacts by person, alias and email.
///
/// Every contact has an entry in `person_to_alias` and `email_to_person`.
/// Only contacts with a non-empty alias appear in `alias_to_person`, and an
/// alias always points back at the person holding it.
#[derive(Debug, Default)]
pub struct ContactDirectory {
    person_to_alias: HashMap<Person, Option<String>>,
    alias_to_person: HashMap<String, Person>,
    email_to_person: HashMap<String, Person>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        ContactDirectory::default()
    }

    /// Loads a directory from `path`. A missing file gives an empty directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let mut directory = ContactDirectory::new();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                info!("No contacts file at {}, starting empty", path.display());
                return Ok(directory);
            }
            Err(source) => {
                return Err(DirectoryError::CouldNotRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        for (index, line) in contents.lines().enumerate() {
            if line.is_empty() {
                continue;
            }

            let contact_line = contact_line::parse(line).ok_or_else(|| ParseError {
                path: path.to_path_buf(),
                line_number: index + 1,
                line: line.to_string(),
            })?;

            if contact_line.format == LineFormat::Legacy {
                trace!("Line {} of {} has no default from", index + 1, path.display());
            }

            let mut person = Person::from_address(contact_line.address);
            if let Some(default_from) = contact_line.default_from.filter(|from| !from.is_empty()) {
                person.set_default_from(default_from);
            }

            directory.upsert_alias(person, Some(contact_line.alias));
        }

        info!("Loaded {} contacts from {}", directory.len(), path.display());
        Ok(directory)
    }

    /// Binds `alias` to `person`, adding the person as a contact if needed.
    /// `None` or an empty alias leaves the person as an unaliased contact.
    ///
    /// The stored record is replaced by `person`. If another contact held
    /// `alias`, it loses it and stays in the directory without an alias.
    pub fn upsert_alias(&mut self, person: Person, alias: Option<&str>) {
        let alias = alias.filter(|alias| !alias.is_empty()).map(str::to_string);

        if let Some(Some(old_alias)) = self.person_to_alias.get(&person) {
            self.alias_to_person.remove(old_alias);
            self.email_to_person.remove(person.email());
        }

        // Remove first so the new record replaces the key
        self.person_to_alias.remove(&person);
        self.person_to_alias.insert(person.clone(), alias.clone());
        self.email_to_person
            .insert(person.email().to_string(), person.clone());

        let Some(alias) = alias else {
            return;
        };

        trace!("Aliasing {} as {alias}", person.email());
        if let Some(previous) = self.alias_to_person.insert(alias.clone(), person.clone()) {
            if previous != person {
                warn!(
                    "Alias {alias} moved from {} to {}",
                    previous.email(),
                    person.email()
                );

                if let Some(previous_alias) = self.person_to_alias.get_mut(&previous) {
                    *previous_alias = None;
                }
            }
        }
    }

    /// Drops `person` from every index. Removing an unknown person does nothing.
    pub fn remove_contact(&mut self, person: &Person) {
        let Some(alias) = self.person_to_alias.remove(person) else {
            return;
        };

        self.email_to_person.remove(person.email());
        if let Some(alias) = alias {
            self.alias_to_person.remove(&alias);
        }
    }

    pub fn contacts(&self) -> Vec<&Person> {
        self.person_to_alias.keys().collect()
    }

    pub fn aliased_contacts(&self) -> Vec<&Person> {
        self.alias_to_person
            .values()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every contact with its alias, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&Person, Option<&str>)> {
        self.person_to_alias
            .iter()
            .map(|(person, alias)| (person, alias.as_deref()))
    }

    pub fn contact_for(&self, alias: &str) -> Option<&Person> {
        self.alias_to_person.get(alias)
    }

    /// `None` if `person` is not a contact, `Some(None)` if it has no alias.
    pub fn alias_for(&self, person: &Person) -> Option<Option<&str>> {
        self.person_to_alias.get(person).map(Option::as_deref)
    }

    pub fn person_for(&self, email: &str) -> Option<&Person> {
        self.email_to_person.get(&email.trim().to_lowercase())
    }

    pub fn is_aliased_contact(&self, person: &Person) -> bool {
        matches!(self.person_to_alias.get(person), Some(Some(_)))
    }

    pub fn len(&self) -> usize {
        self.person_to_alias.len()
    }

    pub fn is_empty(&self) -> bool {
        self.person_to_alias.is_empty()
    }

    /// Rewrites `path` with one line per contact, sorted by full address
    /// then alias. Nothing is written if any contact would not load back.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DirectoryError> {
        let path = path.as_ref();

        let mut entries: Vec<(&Person, Option<&str>)> = self.entries().collect();
        entries.sort_by_cached_key(|(person, alias)| {
            (person.full_address(), alias.unwrap_or_default().to_string())
        });

        if let Some((person, reason)) = entries.iter().find_map(|(person, alias)| {
            contact_line::unrepresentable(person, *alias).map(|reason| (person, reason))
        }) {
            return Err(DirectoryError::Unrepresentable {
                email: person.email().to_string(),
                reason,
            });
        }

        let mut contents = String::new();
        for (person, alias) in entries {
            contents.push_str(&contact_line::format(person, alias));
            contents.push('\n');
        }

        fs::write(path, contents).map_err(|source| DirectoryError::CouldNotWrite {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Saved {} contacts to {}", self.len(), path.display());
        Ok(())
    }
}
