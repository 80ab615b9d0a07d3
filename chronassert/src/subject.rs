// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The assertion subject and its relation operations.

use crate::logging::{debug, trace};
use crate::message::{self, Relation};
use chronassert_core::{AssertionError, ComparisonStrategy, Result, Temporal};
use std::borrow::Cow;

/// Starts an assertion chain on `actual`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use chronassert::assert_that;
///
/// # fn main() -> chronassert::Result<()> {
/// let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
///
/// assert_that(date)
///     .is_after_text("2024-02-28")?
///     .is_before_or_equal_to(date)?;
/// # Ok(())
/// # }
/// ```
pub fn assert_that<T: Temporal>(actual: T) -> TemporalAssert<T> {
    TemporalAssert::new(Some(actual))
}

/// Starts an assertion chain on a value that may be absent.
///
/// Every relation on an absent actual fails with [`AssertionError::NullActual`].
pub fn assert_that_option<T: Temporal>(actual: Option<T>) -> TemporalAssert<T> {
    TemporalAssert::new(actual)
}

/// Assertions over one temporal value.
///
/// Each relation takes the subject by value and hands it back on success, so
/// relations chain with `?`. The expected side comes either typed
/// (`is_before`) or as text (`is_before_text`); a missing expected value is a
/// usage error, reported before any comparison runs.
///
/// All decisions go through the active [`ComparisonStrategy`], the shared
/// default of `T` unless [`TemporalAssert::using_comparator`] installed another
/// one. Failure messages are built from that same strategy.
#[derive(Clone, Debug)]
pub struct TemporalAssert<T: Temporal> {
    actual: Option<T>,
    strategy: Cow<'static, ComparisonStrategy<T>>,
    description: Option<String>,
}

impl<T: Temporal> TemporalAssert<T> {
    fn new(actual: Option<T>) -> Self {
        Self {
            actual,
            strategy: Cow::Borrowed(T::default_strategy()),
            description: None,
        }
    }

    /// The value under test.
    pub fn actual(&self) -> Option<&T> {
        self.actual.as_ref()
    }

    /// The strategy deciding this chain's relations.
    pub fn strategy(&self) -> &ComparisonStrategy<T> {
        &self.strategy
    }

    /// Prefixes every later failure message with `[description] `.
    #[must_use]
    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Decides the following relations with `strategy` instead of the default.
    #[must_use]
    pub fn using_comparator(mut self, strategy: ComparisonStrategy<T>) -> Self {
        trace!(
            representation = %T::REPRESENTATION,
            strategy = %strategy.description(),
            "comparison strategy overridden"
        );
        self.strategy = Cow::Owned(strategy);
        self
    }

    /// Restores the representation's default strategy.
    #[must_use]
    pub fn using_default_comparator(mut self) -> Self {
        self.strategy = Cow::Borrowed(T::default_strategy());
        self
    }

    /// Verifies that the actual value is strictly before `expected`.
    ///
    /// # Errors
    /// [`AssertionError::NullActual`] if there is no actual value,
    /// [`AssertionError::IllegalArgument`] if `expected` is `None`,
    /// [`AssertionError::Failure`] if the actual value is not before `expected`.
    pub fn is_before(self, expected: impl Into<Option<T>>) -> Result<Self> {
        self.satisfies(Relation::Before, || typed(expected.into()))
    }

    /// Verifies that the actual value is strictly before the value `expected` parses to.
    ///
    /// # Errors
    /// As [`TemporalAssert::is_before`], plus [`AssertionError::Parse`] if
    /// `expected` is malformed.
    pub fn is_before_text<'a>(self, expected: impl Into<Option<&'a str>>) -> Result<Self> {
        self.satisfies(Relation::Before, || textual(expected.into()))
    }

    /// Verifies that the actual value is strictly after `expected`.
    ///
    /// # Errors
    /// See [`TemporalAssert::is_before`].
    pub fn is_after(self, expected: impl Into<Option<T>>) -> Result<Self> {
        self.satisfies(Relation::After, || typed(expected.into()))
    }

    /// Verifies that the actual value is strictly after the value `expected` parses to.
    ///
    /// # Errors
    /// See [`TemporalAssert::is_before_text`].
    pub fn is_after_text<'a>(self, expected: impl Into<Option<&'a str>>) -> Result<Self> {
        self.satisfies(Relation::After, || textual(expected.into()))
    }

    /// Verifies that the actual value is before or at the same instant as `expected`.
    ///
    /// # Errors
    /// See [`TemporalAssert::is_before`].
    pub fn is_before_or_equal_to(self, expected: impl Into<Option<T>>) -> Result<Self> {
        self.satisfies(Relation::BeforeOrEqual, || typed(expected.into()))
    }

    /// Verifies that the actual value is before or at the same instant as the
    /// value `expected` parses to.
    ///
    /// # Errors
    /// See [`TemporalAssert::is_before_text`].
    pub fn is_before_or_equal_to_text<'a>(self, expected: impl Into<Option<&'a str>>) -> Result<Self> {
        self.satisfies(Relation::BeforeOrEqual, || textual(expected.into()))
    }

    /// Verifies that the actual value is after or at the same instant as `expected`.
    ///
    /// # Errors
    /// See [`TemporalAssert::is_before`].
    pub fn is_after_or_equal_to(self, expected: impl Into<Option<T>>) -> Result<Self> {
        self.satisfies(Relation::AfterOrEqual, || typed(expected.into()))
    }

    /// Verifies that the actual value is after or at the same instant as the
    /// value `expected` parses to.
    ///
    /// # Errors
    /// See [`TemporalAssert::is_before_text`].
    pub fn is_after_or_equal_to_text<'a>(self, expected: impl Into<Option<&'a str>>) -> Result<Self> {
        self.satisfies(Relation::AfterOrEqual, || textual(expected.into()))
    }

    /// Verifies that the active strategy considers the actual value equal to `expected`.
    ///
    /// Under the default strategy this means "same instant": offsets and zones
    /// are ignored.
    ///
    /// # Errors
    /// See [`TemporalAssert::is_before`].
    pub fn is_equal_to(self, expected: impl Into<Option<T>>) -> Result<Self> {
        self.satisfies(Relation::Equal, || typed(expected.into()))
    }

    /// Text counterpart of [`TemporalAssert::is_equal_to`].
    ///
    /// # Errors
    /// See [`TemporalAssert::is_before_text`].
    pub fn is_equal_to_text<'a>(self, expected: impl Into<Option<&'a str>>) -> Result<Self> {
        self.satisfies(Relation::Equal, || textual(expected.into()))
    }

    /// Verifies that the active strategy considers the actual value different from `expected`.
    ///
    /// # Errors
    /// See [`TemporalAssert::is_before`].
    pub fn is_not_equal_to(self, expected: impl Into<Option<T>>) -> Result<Self> {
        self.satisfies(Relation::NotEqual, || typed(expected.into()))
    }

    /// Text counterpart of [`TemporalAssert::is_not_equal_to`].
    ///
    /// # Errors
    /// See [`TemporalAssert::is_before_text`].
    pub fn is_not_equal_to_text<'a>(self, expected: impl Into<Option<&'a str>>) -> Result<Self> {
        self.satisfies(Relation::NotEqual, || textual(expected.into()))
    }

    /// Verifies that `start <= actual <= end`.
    ///
    /// # Errors
    /// [`AssertionError::NullActual`] if there is no actual value,
    /// [`AssertionError::IllegalArgument`] if a bound is `None` or `end` is before `start`,
    /// [`AssertionError::Failure`] if the actual value lies outside the period.
    pub fn is_between(self, start: impl Into<Option<T>>, end: impl Into<Option<T>>) -> Result<Self> {
        self.in_period(
            true,
            || typed_bound(start.into(), "start"),
            || typed_bound(end.into(), "end"),
        )
    }

    /// Text counterpart of [`TemporalAssert::is_between`].
    ///
    /// # Errors
    /// As [`TemporalAssert::is_between`], plus [`AssertionError::Parse`] if a bound is malformed.
    pub fn is_between_text<'a>(
        self,
        start: impl Into<Option<&'a str>>,
        end: impl Into<Option<&'a str>>,
    ) -> Result<Self> {
        self.in_period(
            true,
            || textual_bound(start.into(), "start"),
            || textual_bound(end.into(), "end"),
        )
    }

    /// Verifies that `start < actual < end`.
    ///
    /// # Errors
    /// See [`TemporalAssert::is_between`].
    pub fn is_strictly_between(
        self,
        start: impl Into<Option<T>>,
        end: impl Into<Option<T>>,
    ) -> Result<Self> {
        self.in_period(
            false,
            || typed_bound(start.into(), "start"),
            || typed_bound(end.into(), "end"),
        )
    }

    /// Text counterpart of [`TemporalAssert::is_strictly_between`].
    ///
    /// # Errors
    /// See [`TemporalAssert::is_between_text`].
    pub fn is_strictly_between_text<'a>(
        self,
        start: impl Into<Option<&'a str>>,
        end: impl Into<Option<&'a str>>,
    ) -> Result<Self> {
        self.in_period(
            false,
            || textual_bound(start.into(), "start"),
            || textual_bound(end.into(), "end"),
        )
    }

    fn satisfies(self, relation: Relation, expected: impl FnOnce() -> Result<T>) -> Result<Self> {
        let Some(actual) = &self.actual else {
            return Err(AssertionError::NullActual);
        };
        let expected = expected()?;
        if relation.holds(&self.strategy, actual, &expected) {
            return Ok(self);
        }

        debug!(
            relation = %relation,
            representation = %T::REPRESENTATION,
            strategy = %self.strategy.description(),
            "temporal assertion failed"
        );
        Err(self.fail(message::should_satisfy(
            relation,
            actual,
            &expected,
            &self.strategy,
        )))
    }

    fn in_period(
        self,
        inclusive: bool,
        start: impl FnOnce() -> Result<T>,
        end: impl FnOnce() -> Result<T>,
    ) -> Result<Self> {
        let Some(actual) = &self.actual else {
            return Err(AssertionError::NullActual);
        };
        let start = start()?;
        let end = end()?;
        if self.strategy.is_greater_than(&start, &end) {
            return Err(AssertionError::illegal_argument(format!(
                "The end value <{}> must not be before the start value <{}>",
                end.render(),
                start.render()
            )));
        }

        let holds = if inclusive {
            self.strategy.is_greater_or_equal(actual, &start)
                && self.strategy.is_less_or_equal(actual, &end)
        } else {
            self.strategy.is_greater_than(actual, &start) && self.strategy.is_less_than(actual, &end)
        };
        if holds {
            return Ok(self);
        }

        debug!(
            inclusive,
            representation = %T::REPRESENTATION,
            strategy = %self.strategy.description(),
            "temporal period assertion failed"
        );
        Err(self.fail(message::should_be_in_period(
            actual,
            &start,
            &end,
            inclusive,
            &self.strategy,
        )))
    }

    fn fail(&self, message: String) -> AssertionError {
        AssertionError::failure(message::with_description(
            self.description.as_deref(),
            message,
        ))
    }
}

fn typed<T: Temporal>(expected: Option<T>) -> Result<T> {
    expected.ok_or_else(|| AssertionError::null_argument(T::REPRESENTATION.display_name()))
}

fn textual<T: Temporal>(expected: Option<&str>) -> Result<T> {
    let text = expected
        .ok_or_else(|| AssertionError::null_text_argument(T::REPRESENTATION.display_name()))?;
    T::parse(text)
}

fn typed_bound<T: Temporal>(bound: Option<T>, which: &str) -> Result<T> {
    bound.ok_or_else(|| {
        AssertionError::illegal_argument(format!(
            "The {which} {} of the period to compare actual with should not be null",
            T::REPRESENTATION.display_name()
        ))
    })
}

fn textual_bound<T: Temporal>(bound: Option<&str>, which: &str) -> Result<T> {
    let text = bound.ok_or_else(|| {
        AssertionError::illegal_argument(format!(
            "The String representing the {which} {} of the period to compare actual with should not be null",
            T::REPRESENTATION.display_name()
        ))
    })?;
    T::parse(text)
}
