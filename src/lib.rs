//! Multilingual notification messages for the MECE notification service.
//!
//! Build a [`message::MessageEnvelope`], attach [`i18n::MultilingualValue`]
//! texts, and export it to the service's JSON format. Delivery goes through a
//! [`notifier::Transport`] supplied by the application.

pub mod config;
pub mod dynamic;
pub mod error;
pub mod i18n;
pub mod message;
pub mod notifier;

pub use error::MessageError;
