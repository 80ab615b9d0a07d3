// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the chronassert temporal assertion library.
//!
//! This crate provides reference values, custom comparators and result
//! helpers for testing assertion chains. It is designed for use in
//! development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `Timeline<T>`
//!
//! A reference value framed by one earlier and one later value:
//!
//! ```rust
//! use chronassert_test_utils::test_data::local_date_timeline;
//!
//! let timeline = local_date_timeline();
//! assert!(timeline.before < timeline.reference);
//! assert!(timeline.reference < timeline.after);
//! ```
//!
//! ## Comparators
//!
//! - `ReverseChronological` - orders later instants first
//! - `ByWallClock` - orders date-times by local reading, ignoring offsets
//! - `AlwaysEqual` - considers every pair equal
//!
//! ## Result helpers
//!
//! ```rust
//! use chronassert_error::AssertionError;
//! use chronassert_test_utils::expect_failure;
//!
//! let result: Result<(), _> = Err(AssertionError::failure("boom"));
//! assert_eq!(expect_failure(result), "boom");
//! ```
//!
//! # Module Organization
//!
//! - `test_data` - `Timeline<T>` fixtures around `2000-01-01T00:00:00Z`
//! - `comparators` - custom `TemporalComparator` implementations
//! - `helpers` - unwrapping helpers for `AssertionError` variants

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod comparators;
pub mod helpers;
pub mod test_data;

pub use comparators::{AlwaysEqual, ByWallClock, ReverseChronological};
pub use helpers::{
    expect_failure, expect_illegal_argument, expect_null_actual, expect_parse_error,
};
pub use test_data::Timeline;
