// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types re-exported from `chronassert-error`.
//!
//! # Examples
//!
//! ```
//! use chronassert_core::{AssertionError, Result};
//!
//! fn require(expected: Option<u32>) -> Result<u32> {
//!     expected.ok_or_else(|| AssertionError::null_argument("LocalDate"))
//! }
//!
//! assert!(require(None).is_err());
//! ```

pub use chronassert_error::{AssertionError, Result, ACTUAL_IS_NULL};
