// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::fmt;

/// A representation-independent point on the UTC time line.
///
/// `Instant` is the common ground every temporal representation is projected
/// onto before being ordered. Ordering is lexicographic on
/// `(seconds, nanos)`, which matches chronological order because `nanos` is
/// always normalized to `0..1_000_000_000`.
///
/// # Examples
///
/// ```
/// use chronassert_core::Instant;
///
/// let earlier = Instant::new(10, 500);
/// let later = Instant::new(11, 0);
/// assert!(earlier < later);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    seconds: i64,
    nanos: u32,
}

impl Instant {
    /// The Unix epoch, `1970-01-01T00:00:00Z`.
    pub const EPOCH: Self = Self {
        seconds: 0,
        nanos: 0,
    };

    /// Creates an instant from seconds since the epoch and a sub-second part.
    ///
    /// Nanoseconds beyond one second are carried into `seconds`, saturating at
    /// `i64::MAX`. A `chrono` leap second (`23:59:60.5`, sub-second part above
    /// one second) therefore projects onto the following second (`00:00:00.5`).
    #[must_use]
    pub const fn new(seconds: i64, nanos: u32) -> Self {
        Self {
            seconds: seconds.saturating_add((nanos / 1_000_000_000) as i64),
            nanos: nanos % 1_000_000_000,
        }
    }

    /// Projects any `chrono` date-time onto the UTC time line.
    pub fn from_date_time<Tz: TimeZone>(value: &DateTime<Tz>) -> Self {
        Self::new(value.timestamp(), value.timestamp_subsec_nanos())
    }

    /// Whole seconds since the epoch.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Sub-second part in nanoseconds.
    #[must_use]
    pub const fn nanos(&self) -> u32 {
        self.nanos
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}s", self.seconds, self.nanos)
    }
}

/// A minimal trait for temporal values that can be placed on the time line.
///
/// This is the projection step of every default comparison: two values that
/// denote the same absolute moment must return equal instants, whatever offset
/// or zone they carry. Implementations are pure and total over well-formed
/// values.
///
/// Zone-less representations (`NaiveDateTime`, `NaiveDate`) are projected as if
/// their wall-clock reading were UTC, which preserves their natural time-line
/// order.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, FixedOffset};
/// use chronassert_core::HasInstant;
///
/// let paris = DateTime::parse_from_rfc3339("2000-01-01T01:00:00+01:00").unwrap();
/// let utc = DateTime::parse_from_rfc3339("2000-01-01T00:00:00+00:00").unwrap();
/// assert_eq!(paris.instant(), utc.instant());
/// ```
pub trait HasInstant {
    /// Returns the point on the UTC time line this value denotes.
    fn instant(&self) -> Instant;
}

impl<Tz: TimeZone> HasInstant for DateTime<Tz> {
    fn instant(&self) -> Instant {
        Instant::from_date_time(self)
    }
}

impl HasInstant for NaiveDateTime {
    fn instant(&self) -> Instant {
        Instant::from_date_time(&self.and_utc())
    }
}

impl HasInstant for NaiveDate {
    fn instant(&self) -> Instant {
        self.and_time(NaiveTime::MIN).instant()
    }
}
