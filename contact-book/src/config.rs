use crate::errors::config_error::ConfigError;
use std::{env, path::PathBuf};

const DEFAULT_CONTACTS_PATH: &str = "contacts.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub contacts_path: PathBuf,
    pub save_on_exit: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let contacts_path = lookup("CONTACTS_PATH")
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| DEFAULT_CONTACTS_PATH.to_string())
            .into();

        let save_on_exit = match lookup("CONTACTS_SAVE_ON_EXIT") {
            None => true,
            Some(value) => match value.to_lowercase().as_str() {
                "" | "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => return Err(ConfigError::InvalidSaveOnExit(value)),
            },
        };

        Ok(Config {
            contacts_path,
            save_on_exit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::errors::config_error::ConfigError;
    use std::path::PathBuf;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.contacts_path, PathBuf::from("contacts.txt"));
        assert!(config.save_on_exit);
    }

    #[test]
    fn reads_variables() {
        let config = Config::from_lookup(|key| match key {
            "CONTACTS_PATH" => Some("/tmp/people.txt".to_string()),
            "CONTACTS_SAVE_ON_EXIT" => Some("False".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.contacts_path, PathBuf::from("/tmp/people.txt"));
        assert!(!config.save_on_exit);
    }

    #[test]
    fn rejects_invalid_save_on_exit() {
        let result = Config::from_lookup(|key| {
            (key == "CONTACTS_SAVE_ON_EXIT").then(|| "sometimes".to_string())
        });

        assert!(matches!(result, Err(ConfigError::InvalidSaveOnExit(value)) if value == "sometimes"));
    }
}
