// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Failure message construction.
//!
//! Every function here is pure: identical inputs always render identical text,
//! so tests can compare messages exactly. The strategy passed in must be the
//! one that decided the failure; its description is appended whenever it is not
//! the representation's default.

use chronassert_core::{ComparisonStrategy, Temporal};
use std::fmt;

/// An ordering relation between the actual and an expected value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    Before,
    After,
    BeforeOrEqual,
    AfterOrEqual,
    Equal,
    NotEqual,
}

impl Relation {
    /// Every relation, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Before,
        Self::After,
        Self::BeforeOrEqual,
        Self::AfterOrEqual,
        Self::Equal,
        Self::NotEqual,
    ];

    /// The expectation line of a failure message, without the trailing colon.
    #[must_use]
    pub const fn expectation(self) -> &'static str {
        match self {
            Self::Before => "to be before",
            Self::After => "to be after",
            Self::BeforeOrEqual => "to be before or equal to",
            Self::AfterOrEqual => "to be after or equal to",
            Self::Equal => "to be equal to",
            Self::NotEqual => "not to be equal to",
        }
    }

    /// Decides the relation with a single call into `strategy`.
    pub fn holds<T: 'static>(self, strategy: &ComparisonStrategy<T>, actual: &T, expected: &T) -> bool {
        match self {
            Self::Before => strategy.is_less_than(actual, expected),
            Self::After => strategy.is_greater_than(actual, expected),
            Self::BeforeOrEqual => strategy.is_less_or_equal(actual, expected),
            Self::AfterOrEqual => strategy.is_greater_or_equal(actual, expected),
            Self::Equal => strategy.are_equal(actual, expected),
            Self::NotEqual => !strategy.are_equal(actual, expected),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expectation())
    }
}

/// Renders the failure of `relation` between `actual` and `expected`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use chronassert::message::{should_satisfy, Relation};
/// use chronassert::Temporal;
///
/// let actual = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// let expected = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// let message = should_satisfy(Relation::Before, &actual, &expected, NaiveDate::default_strategy());
/// assert_eq!(message, "\nExpecting actual:\n  2024-01-02\nto be before:\n  2024-01-01\n");
/// ```
pub fn should_satisfy<T: Temporal>(
    relation: Relation,
    actual: &T,
    expected: &T,
    strategy: &ComparisonStrategy<T>,
) -> String {
    let mut message = format!(
        "\nExpecting actual:\n  {}\n{}:\n  {}\n",
        actual.render(),
        relation.expectation(),
        expected.render()
    );
    append_strategy(&mut message, strategy);
    message
}

/// Renders the failure of a range check.
///
/// Inclusive periods are written `[start, end]`, strict ones `(start, end)`.
pub fn should_be_in_period<T: Temporal>(
    actual: &T,
    start: &T,
    end: &T,
    inclusive: bool,
    strategy: &ComparisonStrategy<T>,
) -> String {
    let (open, close) = if inclusive { ('[', ']') } else { ('(', ')') };
    let mut message = format!(
        "\nExpecting actual:\n  {}\nto be in period:\n  {open}{}, {}{close}\n",
        actual.render(),
        start.render(),
        end.render()
    );
    append_strategy(&mut message, strategy);
    message
}

/// Prefixes `message` with a user supplied description, if any.
pub fn with_description(description: Option<&str>, message: String) -> String {
    match description {
        Some(description) => format!("[{description}] {message}"),
        None => message,
    }
}

fn append_strategy<T: 'static>(message: &mut String, strategy: &ComparisonStrategy<T>) {
    if !strategy.is_default() {
        message.push_str("according to '");
        message.push_str(strategy.description());
        message.push_str("' comparator");
    }
}
