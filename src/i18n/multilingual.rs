//! Multilingual string container.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MessageError;
use crate::i18n::SupportedLanguages;

/// One string per supported language.
///
/// Per-language reads and writes are checked against the supported
/// languages. The bulk accessors (`set_values` / `values`) are not: whatever
/// map is handed in is stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultilingualValue {
    supported_languages: SupportedLanguages,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl MultilingualValue {
    /// Empty value accepting the default languages (fi, en, sv).
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty value accepting the given languages.
    pub fn with_languages(supported_languages: SupportedLanguages) -> Self {
        Self {
            supported_languages,
            values: BTreeMap::new(),
        }
    }

    /// Replace all values, builder style.
    pub fn with_values<I, K, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.set_values(
            values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Store `value` for `language`, overwriting any previous value.
    ///
    /// # Errors
    /// `InvalidInput` if `language` is not one of the supported languages.
    pub fn set_value(
        &mut self,
        value: impl Into<String>,
        language: &str,
    ) -> Result<(), MessageError> {
        self.ensure_supported(language)?;
        self.values.insert(language.to_string(), value.into());
        Ok(())
    }

    /// Value stored for `language`, or `None` when nothing has been set.
    ///
    /// # Errors
    /// `InvalidInput` if `language` is not one of the supported languages.
    pub fn get_value(&self, language: &str) -> Result<Option<&str>, MessageError> {
        self.ensure_supported(language)?;
        Ok(self.values.get(language).map(String::as_str))
    }

    /// `set_value` for untyped input. Both arguments must be JSON strings.
    pub fn set_value_untyped(&mut self, value: &Value, language: &Value) -> Result<(), MessageError> {
        let language = language_str(language)?;
        self.ensure_supported(language)?;
        let Value::String(value) = value else {
            return Err(MessageError::invalid_input("Value must be an string type."));
        };
        self.values.insert(language.to_string(), value.clone());
        Ok(())
    }

    /// `get_value` for an untyped language argument.
    pub fn get_value_untyped(&self, language: &Value) -> Result<Option<&str>, MessageError> {
        self.get_value(language_str(language)?)
    }

    pub fn set_values(&mut self, values: BTreeMap<String, String>) {
        self.values = values;
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn supported_languages(&self) -> &SupportedLanguages {
        &self.supported_languages
    }

    pub fn set_supported_languages(&mut self, supported_languages: SupportedLanguages) {
        self.supported_languages = supported_languages;
    }

    fn ensure_supported(&self, language: &str) -> Result<(), MessageError> {
        if !self.supported_languages.contains(language) {
            return Err(MessageError::invalid_input(format!(
                "Language \"{}\" is not supported.",
                language
            )));
        }
        Ok(())
    }
}

fn language_str(language: &Value) -> Result<&str, MessageError> {
    language
        .as_str()
        .ok_or_else(|| MessageError::invalid_input("Language must be an string type."))
}
