//! Building messages from untyped JSON input.
//!
//! Values that arrive from other systems are only known to be JSON. These
//! entry points check runtime types and report mismatches with the messages
//! the notification service uses.

use serde_json::Value;

use crate::dynamic;
use crate::error::MessageError;
use crate::i18n::SupportedLanguages;
use crate::message::envelope::{EnvelopeOptions, MessageEnvelope};
use crate::message::fields::StringField;

impl MessageEnvelope {
    /// Create a message from untyped source and options.
    ///
    /// `options` may be `null` or an object with `priority` and
    /// `supportedLanguages`. An empty priority (null, false, "", "0", 0)
    /// falls back to the default; any other non-string priority is rejected.
    /// A `supportedLanguages` value that is not an array is ignored.
    pub fn from_untyped(
        recipients: Vec<String>,
        source: &Value,
        options: &Value,
    ) -> Result<Self, MessageError> {
        let Value::String(source) = source else {
            return Err(MessageError::invalid_input("Source must be an string."));
        };

        let options = match options {
            Value::Null => serde_json::Map::new(),
            Value::Object(map) => map.clone(),
            other => {
                return Err(MessageError::invalid_input(format!(
                    "Options must be an object, got '{}'.",
                    dynamic::type_name(other)
                )))
            }
        };

        let supported_languages = match options.get("supportedLanguages") {
            Some(Value::Array(items)) => Some(language_list(items)?),
            _ => None,
        };

        let mut envelope = MessageEnvelope::new(
            recipients,
            source.as_str(),
            EnvelopeOptions {
                priority: None,
                supported_languages,
            },
        );

        if let Some(priority) = options.get("priority").filter(|p| !dynamic::is_empty(p)) {
            envelope.set_string_untyped(StringField::Priority, priority)?;
        }

        Ok(envelope)
    }

    /// Append a recipient given as untyped input.
    ///
    /// # Errors
    /// `InvalidInput` if `recipient` is not a string; the list is unchanged.
    pub fn append_recipient_untyped(&mut self, recipient: &Value) -> Result<(), MessageError> {
        let Value::String(recipient) = recipient else {
            return Err(MessageError::invalid_input("Recipient argument must be string."));
        };
        self.append_recipient(recipient.as_str());
        Ok(())
    }

    /// Set a string field from untyped input.
    pub fn set_string_untyped(
        &mut self,
        field: StringField,
        value: &Value,
    ) -> Result<(), MessageError> {
        let Value::String(value) = value else {
            return Err(MessageError::invalid_input(format!(
                "Given value type '{}' for '{}' property is not a string.",
                dynamic::type_name(value),
                field.name()
            )));
        };
        self.set_string_field(field, value.as_str());
        Ok(())
    }

    /// Set a string field named by its wire name, e.g. `"sourceId"`.
    ///
    /// # Errors
    /// - `InvalidState` if no string field has that name
    /// - `InvalidInput` if `value` is not a string
    pub fn set_string_by_name(&mut self, property: &str, value: &Value) -> Result<(), MessageError> {
        let field = StringField::from_name(property)?;
        self.set_string_untyped(field, value)
    }
}

fn language_list(items: &[Value]) -> Result<SupportedLanguages, MessageError> {
    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                MessageError::invalid_input(format!(
                    "Supported language must be a string, got '{}'.",
                    dynamic::type_name(item)
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(SupportedLanguages::new)
}
