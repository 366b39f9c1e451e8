use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};
use time::OffsetDateTime;

/// Identifier of a task: the Unix millisecond timestamp at creation.
#[derive(
    Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl TaskId {
    /// Raw millisecond value.
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Allocates task identifiers that stay strictly increasing, even when
/// two tasks are created within the same millisecond or the clock steps
/// backwards.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Generator that has issued no identifiers yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Generator seeded with the largest identifier already in use, so
    /// ids issued after a reload never collide with persisted ones.
    #[must_use]
    pub const fn seeded(last: TaskId) -> Self {
        Self { last: last.0 }
    }

    /// Issue the next identifier for a task created at `now`.
    pub fn next(&mut self, now: OffsetDateTime) -> TaskId {
        let millis = i64::try_from(now.unix_timestamp_nanos() / 1_000_000).unwrap_or(i64::MAX);
        let candidate = millis.max(self.last.saturating_add(1));
        self.last = candidate;
        TaskId(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_strictly_increasing_within_one_millisecond() {
        let mut ids = IdGenerator::new();
        let now = OffsetDateTime::now_utc();
        let first = ids.next(now);
        let second = ids.next(now);
        let third = ids.next(now);
        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn seeded_generator_never_reuses_persisted_ids() {
        let persisted_max = TaskId(2_000_000_000_000);
        let mut ids = IdGenerator::seeded(persisted_max);
        // Clock far behind the seed still yields a fresh id.
        let issued = ids.next(OffsetDateTime::UNIX_EPOCH);
        assert!(issued > persisted_max);
    }

    #[test]
    fn id_tracks_wall_clock_when_ahead_of_last() {
        let mut ids = IdGenerator::new();
        let now = OffsetDateTime::now_utc();
        let millis = i64::try_from(now.unix_timestamp_nanos() / 1_000_000).unwrap_or(i64::MAX);
        assert_eq!(ids.next(now), TaskId(millis));
    }

    #[test]
    fn task_id_parses_from_decimal_string() {
        let parsed: TaskId = "1714060800000".parse().unwrap();
        assert_eq!(parsed, TaskId(1_714_060_800_000));
    }
}
