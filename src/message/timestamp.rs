//! Timestamps that remember which timezone they were expressed in.

use chrono::{DateTime, Duration, Utc};

/// The only timezone the notification service accepts.
pub const REQUIRED_TIMEZONE: &str = "Etc/Zulu";

/// Wire format of exported timestamps.
pub const EXPORT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A point in time plus the name of the timezone it was given in.
///
/// The instant is always stored in UTC; the zone name is what the envelope
/// checks. Two timestamps for the same instant in "UTC" and "Etc/Zulu" are
/// different values, and only the latter is accepted by a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    instant: DateTime<Utc>,
    zone: String,
}

impl Timestamp {
    /// Current time in the required timezone.
    pub fn now() -> Self {
        Self::zulu(Utc::now())
    }

    /// `instant` in the required timezone.
    pub fn zulu(instant: DateTime<Utc>) -> Self {
        Self::in_zone(instant, REQUIRED_TIMEZONE)
    }

    /// `instant` tagged with an arbitrary timezone name.
    pub fn in_zone(instant: DateTime<Utc>, zone: impl Into<String>) -> Self {
        Self {
            instant,
            zone: zone.into(),
        }
    }

    /// Parse an RFC 3339 string.
    ///
    /// Only a `Z` suffix (e.g. `2016-01-24T11:00:00Z`) yields the required
    /// timezone. Any numeric offset, `+00:00` included, is kept as the zone
    /// name (e.g. `+02:00`) and is rejected by the message setters.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        let parsed = DateTime::parse_from_rfc3339(value)?;
        let instant = parsed.with_timezone(&Utc);
        if value.ends_with(['Z', 'z']) {
            Ok(Self::zulu(instant))
        } else {
            Ok(Self::in_zone(instant, parsed.offset().to_string()))
        }
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Unix time in whole seconds. Ordering rules compare these.
    pub fn timestamp(&self) -> i64 {
        self.instant.timestamp()
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn is_required_zone(&self) -> bool {
        self.zone == REQUIRED_TIMEZONE
    }

    /// Same zone, shifted by `delta`.
    pub fn shifted(&self, delta: Duration) -> Self {
        Self {
            instant: self.instant + delta,
            zone: self.zone.clone(),
        }
    }

    /// `YYYY-MM-DDThh:mm:ssZ`
    pub fn to_export_string(&self) -> String {
        self.instant.format(EXPORT_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_now_is_in_required_zone() {
        let now = Timestamp::now();
        assert_eq!(now.zone(), "Etc/Zulu");
        assert!(now.is_required_zone());
    }

    #[test]
    fn test_in_zone_keeps_name() {
        let ts = Timestamp::in_zone(Utc::now(), "Europe/Helsinki");
        assert_eq!(ts.zone(), "Europe/Helsinki");
        assert!(!ts.is_required_zone());
    }

    #[test]
    fn test_same_instant_different_zone_not_equal() {
        let instant = Utc.with_ymd_and_hms(2016, 1, 24, 11, 0, 0).unwrap();
        assert_ne!(Timestamp::zulu(instant), Timestamp::in_zone(instant, "UTC"));
        assert_eq!(
            Timestamp::zulu(instant).timestamp(),
            Timestamp::in_zone(instant, "UTC").timestamp()
        );
    }

    #[test]
    fn test_parse() {
        let ts = Timestamp::parse("2016-01-24T11:00:00Z").unwrap();
        assert_eq!(ts.instant(), Utc.with_ymd_and_hms(2016, 1, 24, 11, 0, 0).unwrap());
        assert!(ts.is_required_zone());
    }

    #[test]
    fn test_parse_keeps_numeric_offset_as_zone() {
        let ts = Timestamp::parse("2016-01-24T13:00:00+02:00").unwrap();
        assert_eq!(ts.zone(), "+02:00");
        assert!(!ts.is_required_zone());
        assert_eq!(ts.to_export_string(), "2016-01-24T11:00:00Z");
    }

    #[test]
    fn test_parse_zero_offset_is_not_zulu() {
        let ts = Timestamp::parse("2016-01-24T11:00:00+00:00").unwrap();
        assert!(!ts.is_required_zone());
        assert_eq!(ts.timestamp(), Timestamp::parse("2016-01-24T11:00:00Z").unwrap().timestamp());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Timestamp::parse("yesterday").is_err());
    }

    #[test]
    fn test_export_format_drops_subseconds() {
        let instant = Utc.with_ymd_and_hms(2016, 1, 24, 15, 0, 0).unwrap() + Duration::milliseconds(750);
        assert_eq!(Timestamp::zulu(instant).to_export_string(), "2016-01-24T15:00:00Z");
    }

    #[test]
    fn test_shifted_keeps_zone() {
        let ts = Timestamp::in_zone(Utc::now(), "Europe/Helsinki");
        let later = ts.shifted(Duration::days(1));
        assert_eq!(later.zone(), "Europe/Helsinki");
        assert_eq!(later.timestamp() - ts.timestamp(), 86_400);
    }
}
