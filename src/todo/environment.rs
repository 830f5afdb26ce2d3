use super::{Todo, TodoId};
use chrono::{Local, NaiveDateTime};
use std::sync::Arc;

/// Source of the current wall-clock time.
///
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Source of fresh record identifiers.
///
pub trait IdSource: Send + Sync {
    /// Return an id not used by any of the existing records.
    fn next_id(&self, now: NaiveDateTime, existing: &[Todo]) -> TodoId;
}

/// Clock reading the local system time.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Ids derived from the creation time in milliseconds. Never returns an id at
/// or below the current maximum, so records created within the same
/// millisecond still get distinct ids.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct TimestampIds;

impl IdSource for TimestampIds {
    fn next_id(&self, now: NaiveDateTime, existing: &[Todo]) -> TodoId {
        let candidate = now.and_utc().timestamp_millis();
        match existing.iter().map(|t| t.id).max() {
            Some(max) if max >= candidate => max + 1,
            _ => candidate,
        }
    }
}

/// Dependencies state transitions draw on.
///
#[derive(Clone)]
pub struct Environment {
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn IdSource>,
}

impl Environment {
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdSource>) -> Self {
        Environment { clock, ids }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(SystemClock), Arc::new(TimestampIds))
    }
}

/// Clock frozen at a settable instant.
///
#[cfg(test)]
#[derive(Debug)]
pub struct FixedClock(std::sync::Mutex<NaiveDateTime>);

#[cfg(test)]
impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        FixedClock(std::sync::Mutex::new(now))
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.0.lock().unwrap() = now;
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.0.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 2)
            .and_then(|d| d.and_hms_milli_opt(3, 4, 5, 600))
            .unwrap()
    }

    #[test]
    fn timestamp_ids_use_milliseconds() {
        let id = TimestampIds.next_id(instant(), &[]);
        assert_eq!(instant().and_utc().timestamp_millis(), id);
    }

    #[test]
    fn timestamp_ids_skip_taken_ids() {
        let first = TimestampIds.next_id(instant(), &[]);
        let existing = vec![Todo::new(first, "a", "b", instant())];
        let second = TimestampIds.next_id(instant(), &existing);
        assert_eq!(first + 1, second);
    }

    #[test]
    fn timestamp_ids_ignore_smaller_ids() {
        let existing = vec![Todo::new(1700445601, "a", "b", instant())];
        let id = TimestampIds.next_id(instant(), &existing);
        assert_eq!(instant().and_utc().timestamp_millis(), id);
    }

    #[test]
    fn fixed_clock_can_move() {
        let clock = FixedClock::new(instant());
        assert_eq!(instant(), clock.now());
        let later = instant() + chrono::Duration::minutes(5);
        clock.set(later);
        assert_eq!(later, clock.now());
    }
}
