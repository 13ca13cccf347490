//! Locale tags: a language, optionally qualified by a territory.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing a locale tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("empty locale tag")]
    Empty,
    #[error("malformed locale tag: {0:?}")]
    Malformed(String),
}

/// A language plus an optional territory, e.g. `ja` or `zh-HK`.
///
/// Both `-` and `_` are accepted as subtag separators on input; the
/// canonical rendering uses `-` with a lowercase language and an uppercase
/// territory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    language: String,
    territory: Option<String>,
}

/// Endonyms for the languages the shipped data covers. Anything else falls
/// back to the bare tag; a CLDR display-name database is out of scope.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("ja", "日本語"),
    ("ko", "한국어"),
    ("zh", "中文"),
];

/// Hand-maintained territory names, kept short enough for a narrow column.
const TERRITORY_NAMES: &[(&str, &str)] = &[
    ("CN", "中国"),
    ("HK", "香港"),
    ("TW", "臺灣"),
];

impl Locale {
    /// Builds a locale from already-validated subtags, normalizing case.
    #[must_use]
    pub fn new(language: &str, territory: Option<&str>) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            territory: territory.map(str::to_ascii_uppercase),
        }
    }

    /// Parses a tag such as `ja`, `zh-HK` or `zh_HK`.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        if tag.is_empty() {
            return Err(LocaleError::Empty);
        }
        let mut parts = tag.split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        if !is_language_subtag(language) {
            return Err(LocaleError::Malformed(tag.to_owned()));
        }
        let territory = match parts.next() {
            Some(part) if is_territory_subtag(part) => Some(part),
            Some(_) => return Err(LocaleError::Malformed(tag.to_owned())),
            None => None,
        };
        if parts.next().is_some() {
            return Err(LocaleError::Malformed(tag.to_owned()));
        }
        Ok(Self::new(language, territory))
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn territory(&self) -> Option<&str> {
        self.territory.as_deref()
    }

    /// Human-readable name of the language, falling back to the tag.
    #[must_use]
    pub fn language_name(&self) -> &str {
        LANGUAGE_NAMES
            .iter()
            .find(|(tag, _)| *tag == self.language)
            .map_or(self.language.as_str(), |(_, name)| name)
    }

    /// Human-readable name of the territory, falling back to its code.
    #[must_use]
    pub fn territory_name(&self) -> Option<&str> {
        let territory = self.territory.as_deref()?;
        Some(
            TERRITORY_NAMES
                .iter()
                .find(|(code, _)| *code == territory)
                .map_or(territory, |(_, name)| name),
        )
    }
}

fn is_language_subtag(part: &str) -> bool {
    (2..=3).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_territory_subtag(part: &str) -> bool {
    part.len() == 2 && part.bytes().all(|b| b.is_ascii_alphabetic())
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.territory {
            Some(territory) => write!(f, "{}-{}", self.language, territory),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::parse(tag)
    }
}
