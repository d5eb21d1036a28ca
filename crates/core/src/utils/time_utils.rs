use chrono::{DateTime, SecondsFormat, Utc};

use crate::errors::{Result, ValidationError};

/// Source of the current instant.
///
/// Services take the clock as a dependency so tests can pin timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock in UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Formats an instant as an ISO-8601 / RFC 3339 string with a `Z` suffix.
///
/// Sub-second digits are kept so that parsing the result yields the same instant.
pub fn to_iso_string(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parses an ISO-8601 / RFC 3339 timestamp (any offset) into UTC.
pub fn parse_iso_string(value: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value.trim()).map_err(ValidationError::from)?;
    Ok(parsed.with_timezone(&Utc))
}
