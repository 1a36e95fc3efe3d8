//! Supported languages: the ordered set of language codes a message accepts.
//!
//! The order matters. It decides the order of per-language keys in the
//! exported message and which language wins the language-neutral fallback.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Languages used when nothing else is configured: Finnish, English, Swedish.
pub const DEFAULT_LANGUAGES: [&str; 3] = ["fi", "en", "sv"];

/// Ordered, duplicate-free list of language codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SupportedLanguages {
    codes: Vec<String>,
}

impl SupportedLanguages {
    /// Build from any list of codes. Later duplicates are dropped, the
    /// first occurrence keeps its position.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for code in codes {
            let code = code.into();
            if !unique.contains(&code) {
                unique.push(code);
            }
        }
        Self { codes: unique }
    }

    /// Parse a comma-separated list such as `"fi, en, sv"`.
    ///
    /// # Returns
    /// * `Ok(SupportedLanguages)` with at least one code
    /// * `Err` if the list contains no codes at all
    pub fn parse_list(list: &str) -> Result<Self> {
        let languages = Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty()),
        );
        if languages.is_empty() {
            bail!("Language list '{}' contains no language codes", list);
        }
        Ok(languages)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// Codes in configured order.
    pub fn codes(&self) -> Vec<&str> {
        self.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for SupportedLanguages {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGES)
    }
}

impl From<Vec<String>> for SupportedLanguages {
    fn from(codes: Vec<String>) -> Self {
        Self::new(codes)
    }
}

impl From<SupportedLanguages> for Vec<String> {
    fn from(languages: SupportedLanguages) -> Self {
        languages.codes
    }
}

impl<'a> IntoIterator for &'a SupportedLanguages {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        let as_str: fn(&'a String) -> &'a str = String::as_str;
        self.codes.iter().map(as_str)
    }
}

/// Anything that can tell which languages messages should carry.
///
/// The application configuration is the usual provider; tests can hand in a
/// fixed list.
pub trait LanguageProvider {
    fn supported_languages(&self) -> SupportedLanguages;
}

impl LanguageProvider for SupportedLanguages {
    fn supported_languages(&self) -> SupportedLanguages {
        self.clone()
    }
}
