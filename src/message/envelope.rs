//! The notification message envelope.

use crate::dynamic;
use crate::error::MessageError;
use crate::i18n::{MultilingualValue, SupportedLanguages};
use crate::message::fields::{MultilingualField, StringField, TimestampField};
use crate::message::timestamp::{Timestamp, REQUIRED_TIMEZONE};

/// Priority used when none is given.
pub const DEFAULT_PRIORITY: &str = "1";

/// Optional construction settings for a [`MessageEnvelope`].
#[derive(Debug, Clone, Default)]
pub struct EnvelopeOptions {
    /// Defaults to `"1"` when missing, `""` or `"0"`
    pub priority: Option<String>,
    /// Defaults to fi, en, sv
    pub supported_languages: Option<SupportedLanguages>,
}

impl EnvelopeOptions {
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_supported_languages(mut self, languages: SupportedLanguages) -> Self {
        self.supported_languages = Some(languages);
        self
    }
}

/// A message bound for the notification service.
///
/// Setters check their rules when they are called, not at export time, and
/// leave the message untouched when they fail. After any sequence of
/// successful calls the following holds:
///
/// - `deadline <= expiration`
/// - `submitted <= expiration`
/// - every timestamp is in [`REQUIRED_TIMEZONE`]
///
/// A deadline before `submitted` is allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageEnvelope {
    recipients: Vec<String>,
    priority: String,
    deadline: Timestamp,
    expiration: Timestamp,
    submitted: Timestamp,
    source: String,
    source_id: String,
    heading: Option<MultilingualValue>,
    message: Option<MultilingualValue>,
    link_text: Option<MultilingualValue>,
    link: Option<MultilingualValue>,
    avatar_image_url: String,
    supported_languages: SupportedLanguages,
}

impl MessageEnvelope {
    /// Create a message. All three timestamps start at the current time.
    pub fn new(
        recipients: Vec<String>,
        source: impl Into<String>,
        options: EnvelopeOptions,
    ) -> Self {
        let priority = options
            .priority
            .filter(|p| !dynamic::is_empty_str(p))
            .unwrap_or_else(|| DEFAULT_PRIORITY.to_string());
        let now = Timestamp::now();

        Self {
            recipients,
            priority,
            deadline: now.clone(),
            expiration: now.clone(),
            submitted: now,
            source: source.into(),
            source_id: String::new(),
            heading: None,
            message: None,
            link_text: None,
            link: None,
            avatar_image_url: String::new(),
            supported_languages: options.supported_languages.unwrap_or_default(),
        }
    }

    // ==================== Recipients ====================

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    pub fn set_recipients(&mut self, recipients: Vec<String>) {
        self.recipients = recipients;
    }

    pub fn append_recipient(&mut self, recipient: impl Into<String>) {
        self.recipients.push(recipient.into());
    }

    // ==================== String fields ====================

    pub fn string_field(&self, field: StringField) -> &str {
        match field {
            StringField::Priority => &self.priority,
            StringField::Source => &self.source,
            StringField::SourceId => &self.source_id,
            StringField::AvatarImageUrl => &self.avatar_image_url,
        }
    }

    pub fn set_string_field(&mut self, field: StringField, value: impl Into<String>) {
        let slot = match field {
            StringField::Priority => &mut self.priority,
            StringField::Source => &mut self.source,
            StringField::SourceId => &mut self.source_id,
            StringField::AvatarImageUrl => &mut self.avatar_image_url,
        };
        *slot = value.into();
    }

    pub fn priority(&self) -> &str {
        &self.priority
    }

    pub fn set_priority(&mut self, priority: impl Into<String>) {
        self.set_string_field(StringField::Priority, priority);
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.set_string_field(StringField::Source, source);
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn set_source_id(&mut self, source_id: impl Into<String>) {
        self.set_string_field(StringField::SourceId, source_id);
    }

    pub fn avatar_image_url(&self) -> &str {
        &self.avatar_image_url
    }

    pub fn set_avatar_image_url(&mut self, url: impl Into<String>) {
        self.set_string_field(StringField::AvatarImageUrl, url);
    }

    // ==================== Timestamps ====================

    pub fn timestamp_field(&self, field: TimestampField) -> &Timestamp {
        match field {
            TimestampField::Deadline => &self.deadline,
            TimestampField::Expiration => &self.expiration,
            TimestampField::Submitted => &self.submitted,
        }
    }

    /// Set any timestamp field, applying that field's ordering rules.
    pub fn set_timestamp_field(
        &mut self,
        field: TimestampField,
        value: Timestamp,
    ) -> Result<(), MessageError> {
        match field {
            TimestampField::Deadline => self.set_deadline(value),
            TimestampField::Expiration => self.set_expiration(value),
            TimestampField::Submitted => self.set_submitted(value),
        }
    }

    pub fn deadline(&self) -> &Timestamp {
        &self.deadline
    }

    /// # Errors
    /// - `OrderingViolation` if the deadline is after expiration
    /// - `TimezoneViolation` if not in the required timezone
    pub fn set_deadline(&mut self, deadline: Timestamp) -> Result<(), MessageError> {
        if deadline.timestamp() > self.expiration.timestamp() {
            return Err(MessageError::ordering("Deadline can not be after expiration."));
        }
        self.store_timestamp(TimestampField::Deadline, deadline)
    }

    pub fn expiration(&self) -> &Timestamp {
        &self.expiration
    }

    /// # Errors
    /// - `OrderingViolation` if expiration is before submitted or deadline
    /// - `TimezoneViolation` if not in the required timezone
    pub fn set_expiration(&mut self, expiration: Timestamp) -> Result<(), MessageError> {
        if expiration.timestamp() < self.submitted.timestamp() {
            return Err(MessageError::ordering("Expiration can not be before submitted."));
        }
        if expiration.timestamp() < self.deadline.timestamp() {
            return Err(MessageError::ordering("Expiration can not be before deadline."));
        }
        self.store_timestamp(TimestampField::Expiration, expiration)
    }

    pub fn submitted(&self) -> &Timestamp {
        &self.submitted
    }

    /// # Errors
    /// - `OrderingViolation` if submitted is after expiration
    /// - `TimezoneViolation` if not in the required timezone
    pub fn set_submitted(&mut self, submitted: Timestamp) -> Result<(), MessageError> {
        if submitted.timestamp() > self.expiration.timestamp() {
            return Err(MessageError::ordering("Submitted can not be after expiration."));
        }
        self.store_timestamp(TimestampField::Submitted, submitted)
    }

    fn store_timestamp(
        &mut self,
        field: TimestampField,
        value: Timestamp,
    ) -> Result<(), MessageError> {
        if !value.is_required_zone() {
            return Err(MessageError::TimezoneViolation {
                property: field.name(),
                required: REQUIRED_TIMEZONE,
            });
        }
        let slot = match field {
            TimestampField::Deadline => &mut self.deadline,
            TimestampField::Expiration => &mut self.expiration,
            TimestampField::Submitted => &mut self.submitted,
        };
        *slot = value;
        Ok(())
    }

    // ==================== Multilingual fields ====================

    pub fn multilingual_field(&self, field: MultilingualField) -> Option<&MultilingualValue> {
        match field {
            MultilingualField::Heading => self.heading.as_ref(),
            MultilingualField::Message => self.message.as_ref(),
            MultilingualField::LinkText => self.link_text.as_ref(),
            MultilingualField::Link => self.link.as_ref(),
        }
    }

    pub fn set_multilingual_field(&mut self, field: MultilingualField, value: MultilingualValue) {
        let slot = match field {
            MultilingualField::Heading => &mut self.heading,
            MultilingualField::Message => &mut self.message,
            MultilingualField::LinkText => &mut self.link_text,
            MultilingualField::Link => &mut self.link,
        };
        *slot = Some(value);
    }

    pub fn heading(&self) -> Option<&MultilingualValue> {
        self.heading.as_ref()
    }

    pub fn set_heading(&mut self, heading: MultilingualValue) {
        self.heading = Some(heading);
    }

    pub fn message(&self) -> Option<&MultilingualValue> {
        self.message.as_ref()
    }

    pub fn set_message(&mut self, message: MultilingualValue) {
        self.message = Some(message);
    }

    pub fn link_text(&self) -> Option<&MultilingualValue> {
        self.link_text.as_ref()
    }

    pub fn set_link_text(&mut self, link_text: MultilingualValue) {
        self.link_text = Some(link_text);
    }

    pub fn link(&self) -> Option<&MultilingualValue> {
        self.link.as_ref()
    }

    pub fn set_link(&mut self, link: MultilingualValue) {
        self.link = Some(link);
    }

    /// Languages expanded during export, in key order.
    pub fn supported_languages(&self) -> &SupportedLanguages {
        &self.supported_languages
    }
}
