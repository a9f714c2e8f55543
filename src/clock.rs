use chrono::{DateTime, Utc};

use crate::error::{HtmlBasicError, HtmlBasicResult};

/// Source of document timestamps that can be pinned for reproducible output.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
    fn freeze(&mut self, instant: DateTime<Utc>);
    fn unfreeze(&mut self);
}

/// System clock with an optional frozen instant.
#[derive(Debug, Clone, Default)]
pub struct RealClock {
    frozen: Option<DateTime<Utc>>,
}

impl RealClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock frozen at an RFC 3339 timestamp such as `2017-04-01T12:00:00Z`.
    pub fn frozen_at(rfc3339: &str) -> HtmlBasicResult<Self> {
        let instant = DateTime::parse_from_rfc3339(rfc3339)
            .map_err(|e| HtmlBasicError::InvalidTimestamp {
                value: rfc3339.to_string(),
                reason: e.to_string(),
            })?
            .with_timezone(&Utc);
        let mut clock = RealClock::new();
        clock.freeze(instant);
        Ok(clock)
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen.is_some()
    }
}

impl Clock for RealClock {
    fn now(&self) -> DateTime<Utc> {
        self.frozen.unwrap_or_else(Utc::now)
    }

    fn freeze(&mut self, instant: DateTime<Utc>) {
        self.frozen = Some(instant);
    }

    fn unfreeze(&mut self) {
        self.frozen = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_frozen_clock_returns_frozen_instant() {
        let instant = Utc.with_ymd_and_hms(2017, 4, 1, 12, 0, 0).unwrap();
        let mut clock = RealClock::new();
        clock.freeze(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn test_unfreeze_returns_to_system_time() {
        let instant = Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap();
        let mut clock = RealClock::new();
        clock.freeze(instant);
        clock.unfreeze();
        assert!(!clock.is_frozen());
        assert!(clock.now() > instant);
    }

    #[test]
    fn test_frozen_at_parses_offsets() {
        let clock = RealClock::frozen_at("2017-04-01T14:00:00+02:00").unwrap();
        assert_eq!(clock.now(), Utc.with_ymd_and_hms(2017, 4, 1, 12, 0, 0).unwrap());
        assert!(RealClock::frozen_at("yesterday").is_err());
    }
}
