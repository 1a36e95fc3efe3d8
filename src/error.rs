use thiserror::Error;

/// Errors raised while building or exporting a notification message.
///
/// Every failure is local to the call that produced it. A setter that
/// returns one of these leaves the message exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Wrong-typed or out-of-domain value supplied by the caller
    #[error("{0}")]
    InvalidInput(String),

    /// A submitted/deadline/expiration ordering rule would be broken
    #[error("{0}")]
    OrderingViolation(String),

    /// A timestamp does not carry the required timezone
    #[error("{property} timestamp must be in timezone \"{required}\"")]
    TimezoneViolation {
        property: &'static str,
        required: &'static str,
    },

    /// Internal consistency failure, never caused by a well-behaved caller
    #[error("{0}")]
    InvalidState(String),
}

impl MessageError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub(crate) fn ordering(message: impl Into<String>) -> Self {
        Self::OrderingViolation(message.into())
    }

    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_displays_message_verbatim() {
        let err = MessageError::invalid_input("Recipient argument must be string.");
        assert_eq!(err.to_string(), "Recipient argument must be string.");
    }

    #[test]
    fn test_timezone_violation_names_property_and_zone() {
        let err = MessageError::TimezoneViolation {
            property: "expiration",
            required: "Etc/Zulu",
        };
        assert_eq!(
            err.to_string(),
            "expiration timestamp must be in timezone \"Etc/Zulu\""
        );
    }

    #[test]
    fn test_variants_are_distinguishable() {
        let ordering = MessageError::ordering("Deadline can not be after expiration.");
        let state = MessageError::invalid_state("boom");
        assert!(matches!(ordering, MessageError::OrderingViolation(_)));
        assert!(matches!(state, MessageError::InvalidState(_)));
        assert_ne!(ordering, state);
    }
}
