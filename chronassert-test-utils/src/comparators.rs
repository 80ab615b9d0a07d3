// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Custom comparators for exercising non-default comparison strategies.

use chrono::{DateTime, TimeZone};
use chronassert_core::{HasInstant, TemporalComparator};
use std::borrow::Cow;
use std::cmp::Ordering;

/// Orders later instants first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseChronological;

impl<T: HasInstant> TemporalComparator<T> for ReverseChronological {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.instant().cmp(&a.instant())
    }

    fn description(&self) -> Cow<'static, str> {
        Cow::Borrowed("reverse chronological")
    }
}

/// Orders date-times by their local wall-clock reading, ignoring offset or zone.
///
/// Unlike the default instant comparison, `10:00+01:00` and `09:00Z` differ here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByWallClock;

impl<Tz: TimeZone> TemporalComparator<DateTime<Tz>> for ByWallClock {
    fn compare(&self, a: &DateTime<Tz>, b: &DateTime<Tz>) -> Ordering {
        a.naive_local().cmp(&b.naive_local())
    }

    fn description(&self) -> Cow<'static, str> {
        Cow::Borrowed("local wall-clock time")
    }
}

/// Considers every pair of values equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysEqual;

impl<T> TemporalComparator<T> for AlwaysEqual {
    fn compare(&self, _a: &T, _b: &T) -> Ordering {
        Ordering::Equal
    }
}
