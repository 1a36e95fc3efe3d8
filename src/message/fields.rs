//! Declared fields of a message and the order they are exported in.

use crate::error::MessageError;

/// Plain string fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringField {
    Priority,
    Source,
    SourceId,
    AvatarImageUrl,
}

impl StringField {
    pub const ALL: [StringField; 4] = [
        StringField::Priority,
        StringField::Source,
        StringField::SourceId,
        StringField::AvatarImageUrl,
    ];

    /// Property name on the wire.
    pub fn name(self) -> &'static str {
        match self {
            StringField::Priority => "priority",
            StringField::Source => "source",
            StringField::SourceId => "sourceId",
            StringField::AvatarImageUrl => "avatarImageUrl",
        }
    }

    /// Look a field up by its wire name.
    ///
    /// # Errors
    /// `InvalidState` when no string field has that name.
    pub fn from_name(name: &str) -> Result<Self, MessageError> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| {
                MessageError::invalid_state(format!(
                    "There is no such string property as '{}'",
                    name
                ))
            })
    }
}

/// Timestamp fields, all bound to the required timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampField {
    Deadline,
    Expiration,
    Submitted,
}

impl TimestampField {
    pub fn name(self) -> &'static str {
        match self {
            TimestampField::Deadline => "deadline",
            TimestampField::Expiration => "expiration",
            TimestampField::Submitted => "submitted",
        }
    }
}

/// Text fields carried in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultilingualField {
    Heading,
    Message,
    LinkText,
    Link,
}

impl MultilingualField {
    pub fn name(self) -> &'static str {
        match self {
            MultilingualField::Heading => "heading",
            MultilingualField::Message => "message",
            MultilingualField::LinkText => "linkText",
            MultilingualField::Link => "link",
        }
    }

    /// Key of the per-language property, e.g. `headingFI`.
    pub fn language_key(self, language: &str) -> String {
        format!("{}{}", self.name(), language.to_uppercase())
    }
}

/// One exported property, tagged with how its value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportField {
    Recipients,
    String(StringField),
    Timestamp(TimestampField),
    Multilingual(MultilingualField),
}

impl ExportField {
    pub fn name(self) -> &'static str {
        match self {
            ExportField::Recipients => "recipients",
            ExportField::String(field) => field.name(),
            ExportField::Timestamp(field) => field.name(),
            ExportField::Multilingual(field) => field.name(),
        }
    }
}

/// Properties in the order they appear in the exported document.
pub const EXPORT_FIELDS: [ExportField; 12] = [
    ExportField::Recipients,
    ExportField::String(StringField::Priority),
    ExportField::Timestamp(TimestampField::Deadline),
    ExportField::Timestamp(TimestampField::Expiration),
    ExportField::Timestamp(TimestampField::Submitted),
    ExportField::String(StringField::Source),
    ExportField::String(StringField::SourceId),
    ExportField::Multilingual(MultilingualField::Heading),
    ExportField::Multilingual(MultilingualField::Message),
    ExportField::Multilingual(MultilingualField::LinkText),
    ExportField::Multilingual(MultilingualField::Link),
    ExportField::String(StringField::AvatarImageUrl),
];
