// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # chronassert
//!
//! Fluent assertions over dates and times, with ordering decided by instant and
//! failure messages that name the comparison used.
//!
//! ## Overview
//!
//! An assertion chain starts with [`assert_that`] and continues with relations
//! such as [`TemporalAssert::is_before_or_equal_to`]. Each relation returns the
//! subject on success and an [`AssertionError`] on failure, so chains compose
//! with `?` inside any test returning a `Result`.
//!
//! Values are compared through a [`ComparisonStrategy`]. By default that is the
//! representation's instant comparison: two values denoting the same absolute
//! moment are equal, whatever offset or zone they carry.
//!
//! ## Supported representations
//!
//! | Type | Name in messages | Text form |
//! |---|---|---|
//! | `DateTime<chrono_tz::Tz>` | `ZonedDateTime` | `2007-12-03T10:15:30+01:00[Europe/Paris]` |
//! | `DateTime<FixedOffset>` | `OffsetDateTime` | `2007-12-03T10:15:30+01:00` |
//! | `DateTime<Utc>` | `UtcDateTime` | `2007-12-03T09:15:30Z` |
//! | `NaiveDateTime` | `LocalDateTime` | `2007-12-03T10:15:30` |
//! | `NaiveDate` | `LocalDate` | `2007-12-03` |
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::DateTime;
//! use chronassert::assert_that;
//!
//! # fn main() -> chronassert::Result<()> {
//! let paris = DateTime::parse_from_rfc3339("2000-01-01T01:00:00+01:00").unwrap();
//!
//! assert_that(paris)
//!     .is_equal_to_text("2000-01-01T00:00:00Z")?
//!     .is_after_text("1999-12-31T23:59:59Z")?;
//!
//! let failure = assert_that(paris).is_before(paris).unwrap_err();
//! assert!(failure.is_assertion_failure());
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
mod logging;
pub mod message;
pub mod subject;

pub use chronassert_core::{
    default_strategy, AssertionError, ComparisonStrategy, HasInstant, Instant, InstantComparator,
    Representation, Result, Temporal, TemporalComparator,
};
pub use message::Relation;
pub use subject::{assert_that, assert_that_option, TemporalAssert};

pub use chrono;
#[cfg(feature = "tz")]
pub use chrono_tz;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::subject::{assert_that, assert_that_option, TemporalAssert};
    pub use chronassert_core::{AssertionError, ComparisonStrategy, Temporal, TemporalComparator};
}
