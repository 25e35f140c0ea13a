use time::OffsetDateTime;

use crate::domain::Timestamp;

/// Source of wall-clock time for entity timestamps.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Returns the current instant as Unix milliseconds.
    fn now_millis(&self) -> Timestamp;
}

/// Production clock backed by the system UTC time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> Timestamp {
        let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();

        i64::try_from(nanos / 1_000_000).unwrap_or(i64::MAX)
    }
}
