// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixed reference points shared by the temporal assertion tests.
//!
//! Every fixture is built around the same moment, `2000-01-01T00:00:00Z`
//! (written `T0` below), so tests over different representations read alike.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chronassert_core::Temporal;

/// Seconds between the Unix epoch and `T0`.
pub const T0_EPOCH_SECONDS: i64 = 946_684_800;

/// A reference value with one value strictly before and one strictly after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline<T> {
    pub before: T,
    pub reference: T,
    pub after: T,
}

impl<T: Temporal> Timeline<T> {
    /// The three values rendered as text, in `before, reference, after` order.
    pub fn rendered(&self) -> [String; 3] {
        [
            self.before.render(),
            self.reference.render(),
            self.after.render(),
        ]
    }
}

pub fn t0_utc() -> DateTime<Utc> {
    Utc.timestamp_opt(T0_EPOCH_SECONDS, 0).unwrap()
}

/// `T0` seen from UTC+01:00.
pub fn t0_paris_offset() -> DateTime<FixedOffset> {
    t0_utc().with_timezone(&FixedOffset::east_opt(3600).unwrap())
}

/// `T0` seen from UTC-05:00.
pub fn t0_new_york_offset() -> DateTime<FixedOffset> {
    t0_utc().with_timezone(&FixedOffset::west_opt(5 * 3600).unwrap())
}

/// `T0 - 1s`, the scenario value for "expected one second earlier".
pub fn t0_minus_one_second() -> DateTime<FixedOffset> {
    t0_paris_offset() - Duration::seconds(1)
}

pub fn offset_timeline() -> Timeline<DateTime<FixedOffset>> {
    let reference = t0_paris_offset();
    Timeline {
        before: reference - Duration::days(1),
        reference,
        after: reference + Duration::days(1),
    }
}

pub fn utc_timeline() -> Timeline<DateTime<Utc>> {
    let reference = t0_utc();
    Timeline {
        before: reference - Duration::milliseconds(1),
        reference,
        after: reference + Duration::milliseconds(1),
    }
}

pub fn local_date_time_timeline() -> Timeline<NaiveDateTime> {
    let reference = t0_utc().naive_utc();
    Timeline {
        before: reference - Duration::nanoseconds(1),
        reference,
        after: reference + Duration::nanoseconds(1),
    }
}

pub fn local_date_timeline() -> Timeline<NaiveDate> {
    Timeline {
        before: NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
        reference: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        after: NaiveDate::from_ymd_opt(2000, 1, 2).unwrap(),
    }
}

#[cfg(feature = "tz")]
pub use zoned::{t0_paris_zoned, t0_tokyo_zoned, zoned_timeline};

#[cfg(feature = "tz")]
mod zoned {
    use super::{t0_utc, Timeline};
    use chrono::{DateTime, Duration};
    use chrono_tz::{Asia::Tokyo, Europe::Paris, Tz};

    /// `T0` in the Europe/Paris zone.
    pub fn t0_paris_zoned() -> DateTime<Tz> {
        t0_utc().with_timezone(&Paris)
    }

    /// `T0` in the Asia/Tokyo zone.
    pub fn t0_tokyo_zoned() -> DateTime<Tz> {
        t0_utc().with_timezone(&Tokyo)
    }

    pub fn zoned_timeline() -> Timeline<DateTime<Tz>> {
        let reference = t0_paris_zoned();
        Timeline {
            before: reference - Duration::hours(1),
            reference,
            after: reference + Duration::hours(1),
        }
    }
}
