// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error;
pub mod instant;
mod logging;
pub mod representation;
pub mod strategy;
pub mod temporal;

pub use self::error::{AssertionError, Result};
pub use self::instant::{HasInstant, Instant};
pub use self::representation::Representation;
pub use self::strategy::{default_strategy, ComparisonStrategy, InstantComparator, TemporalComparator};
pub use self::temporal::Temporal;
