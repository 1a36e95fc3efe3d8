//! Internationalization (i18n) support for notification messages.
//!
//! Every text field of a message is carried in several languages at once.
//! This module holds the pieces that make that work.
//!
//! # Architecture
//!
//! - `languages`: ordered set of supported language codes, plus the
//!   `LanguageProvider` seam used to obtain it
//! - `multilingual`: `MultilingualValue`, one string per supported language
//!
//! # Example
//!
//! ```rust
//! use mece_notifications::i18n::{MultilingualValue, SupportedLanguages};
//!
//! let mut heading = MultilingualValue::with_languages(SupportedLanguages::default());
//! heading.set_value("Tervetuloa", "fi").unwrap();
//! assert_eq!(heading.get_value("fi").unwrap(), Some("Tervetuloa"));
//! assert!(heading.set_value("Welcome", "ru").is_err());
//! ```

mod languages;
mod multilingual;

pub use languages::{LanguageProvider, SupportedLanguages, DEFAULT_LANGUAGES};
pub use multilingual::MultilingualValue;
