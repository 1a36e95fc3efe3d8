//! Notification messages: the envelope, its fields and the JSON export.
//!
//! - `envelope`: `MessageEnvelope` and its checked setters
//! - `fields`: declared fields and the export order
//! - `timestamp`: timezone-tagged timestamps
//! - `export`: JSON wire format
//! - `untyped`: entry points for JSON-typed input

mod envelope;
mod export;
mod fields;
mod timestamp;
mod untyped;

pub use envelope::{EnvelopeOptions, MessageEnvelope, DEFAULT_PRIORITY};
pub use fields::{ExportField, MultilingualField, StringField, TimestampField, EXPORT_FIELDS};
pub use timestamp::{Timestamp, EXPORT_FORMAT, REQUIRED_TIMEZONE};
