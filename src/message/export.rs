//! Rendering a message to the service's JSON wire format.
//!
//! Keys follow the declared field order. Each multilingual field expands to
//! one `<field><LANG>` key per supported language followed by a bare
//! `<field>` key holding the first non-empty language value (or `""`).

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::dynamic;
use crate::error::MessageError;
use crate::i18n::MultilingualValue;
use crate::message::envelope::MessageEnvelope;
use crate::message::fields::{ExportField, MultilingualField, EXPORT_FIELDS};

/// Ordered key/value pairs, serialized as a JSON object in insertion order.
struct OrderedObject<'a>(&'a [(String, Value)]);

impl Serialize for OrderedObject<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl MessageEnvelope {
    /// Serialize the message to its JSON wire format.
    ///
    /// Does not modify the message; it can be exported any number of times.
    /// Output is compact JSON with raw UTF-8 and unescaped `/`, so it is not
    /// byte-identical to encoders that emit `\u00e4` or `\/`.
    ///
    /// # Errors
    /// - `InvalidInput` if an attached multilingual value does not support
    ///   one of the message's languages
    /// - `InvalidState` if serialization itself fails
    pub fn export(&self) -> Result<String, MessageError> {
        let entries = self.export_entries()?;
        serde_json::to_string(&OrderedObject(&entries))
            .map_err(|e| MessageError::invalid_state(format!("Failed to serialize message: {}", e)))
    }

    /// The exported document as a JSON value. Key order is not preserved.
    pub fn export_value(&self) -> Result<Value, MessageError> {
        Ok(Value::Object(self.export_entries()?.into_iter().collect()))
    }

    fn export_entries(&self) -> Result<Vec<(String, Value)>, MessageError> {
        let mut entries = Vec::new();

        for field in EXPORT_FIELDS {
            match field {
                ExportField::Recipients => {
                    entries.push((field.name().to_string(), Value::from(self.recipients().to_vec())));
                }
                ExportField::String(string_field) => {
                    entries.push((
                        field.name().to_string(),
                        Value::from(self.string_field(string_field)),
                    ));
                }
                ExportField::Timestamp(timestamp_field) => {
                    entries.push((
                        field.name().to_string(),
                        Value::from(self.timestamp_field(timestamp_field).to_export_string()),
                    ));
                }
                ExportField::Multilingual(multilingual_field) => {
                    // Unset text fields are left out of the document.
                    if let Some(value) = self.multilingual_field(multilingual_field) {
                        self.expand_multilingual(multilingual_field, value, &mut entries)?;
                    }
                }
            }
        }

        Ok(entries)
    }

    fn expand_multilingual(
        &self,
        field: MultilingualField,
        value: &MultilingualValue,
        entries: &mut Vec<(String, Value)>,
    ) -> Result<(), MessageError> {
        let mut neutral: Option<&str> = None;

        for language in self.supported_languages() {
            let localized = value.get_value(language)?;
            entries.push((
                field.language_key(language),
                localized.map_or(Value::Null, Value::from),
            ));

            if neutral.is_none() {
                neutral = localized.filter(|s| !dynamic::is_empty_str(s));
            }
        }

        entries.push((field.name().to_string(), Value::from(neutral.unwrap_or(""))));
        Ok(())
    }
}
