use email_address::EmailAddress;
use log::warn;
use regex::Regex;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

static NAME_AND_ANGLE_ADDR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s*<([^<>]*)>$").expect("Could not compile angle address pattern")
});

static ADDR_AND_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)\s+\((.*)\)$").expect("Could not compile address comment pattern")
});

/// A person known by email address. Equality and hashing only look at the
/// normalized email, so records built from different spellings of the same
/// address are interchangeable as map keys.
#[derive(Debug, Clone)]
pub struct Person {
    name: Option<String>,
    email: String,
    default_from: Option<String>,
}

impl Person {
    pub fn new(name: Option<&str>, email: &str) -> Self {
        let name = name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            warn!("Keeping contact with invalid email address {email:?}");
        }

        Person {
            name,
            email,
            default_from: None,
        }
    }

    /// Builds a person from `Name <email>`, `"Quoted, Name" <email>`,
    /// `<email>`, `email (Name)` or a bare `email`.
    pub fn from_address(address: &str) -> Self {
        let address = address.trim();

        if let Some(captures) = NAME_AND_ANGLE_ADDR.captures(address) {
            let name = unquote(&captures[1]);
            return Person::new(Some(&name), &captures[2]);
        }

        if let Some(captures) = ADDR_AND_COMMENT.captures(address) {
            return Person::new(Some(&captures[2]), &captures[1]);
        }

        Person::new(None, address)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn default_from(&self) -> Option<&str> {
        self.default_from.as_deref()
    }

    pub fn set_default_from(&mut self, default_from: &str) {
        self.default_from = Some(default_from.to_string());
    }

    pub fn full_address(&self) -> String {
        match &self.name {
            Some(name) if name.contains(['"', ',', '@']) => {
                let name = name.replace('"', "\\\"");
                format!("\"{name}\" <{}>", self.email)
            }
            Some(name) => format!("{name} <{}>", self.email),
            None => self.email.clone(),
        }
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.email.hash(state);
    }
}

fn unquote(name: &str) -> String {
    let name = name.trim();
    match name.strip_prefix('"').and_then(|name| name.strip_suffix('"')) {
        Some(inner) => inner.replace("\\\"", "\""),
        None => name.to_string(),
    }
}
