use crate::models::person::Person;
use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat {
    /// `alias: address: default_from`
    WithDefaultFrom,
    /// `alias: address`, written by older versions
    Legacy,
}

static PATTERNS: LazyLock<[(LineFormat, Regex); 2]> = LazyLock::new(|| {
    [
        (
            LineFormat::WithDefaultFrom,
            Regex::new(r"^([^:]*): ([^:]*): (.*)$").expect("Could not compile contact line pattern"),
        ),
        (
            LineFormat::Legacy,
            Regex::new(r"^([^:]*): (.*)$").expect("Could not compile legacy contact line pattern"),
        ),
    ]
});

#[derive(Debug, PartialEq, Eq)]
pub struct ContactLine<'a> {
    pub format: LineFormat,
    pub alias: &'a str,
    pub address: &'a str,
    pub default_from: Option<&'a str>,
}

/// Tries each line format in order. `None` means no format matched.
pub fn parse(line: &str) -> Option<ContactLine<'_>> {
    PATTERNS.iter().find_map(|(format, pattern)| {
        let captures = pattern.captures(line)?;
        Some(ContactLine {
            format: *format,
            alias: captures.get(1)?.as_str(),
            address: captures.get(2)?.as_str(),
            default_from: captures.get(3).map(|default_from| default_from.as_str()),
        })
    })
}

/// Returns why `person` and `alias` would not read back as the same contact.
pub fn unrepresentable(person: &Person, alias: Option<&str>) -> Option<&'static str> {
    let breaks_line = |field: &str| field.contains(['\n', '\r']);

    if alias.is_some_and(|alias| alias.contains(':')) {
        return Some("alias contains a colon");
    }

    if alias.is_some_and(breaks_line) {
        return Some("alias contains a line break");
    }

    if breaks_line(&person.full_address()) {
        return Some("address contains a line break");
    }

    if person.default_from().is_some_and(breaks_line) {
        return Some("default from contains a line break");
    }

    None
}

pub fn format(person: &Person, alias: Option<&str>) -> String {
    format!(
        "{}: {}: {}",
        alias.unwrap_or_default(),
        person.full_address(),
        person.default_from().unwrap_or_default()
    )
}
