// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ordering decisions behind every temporal assertion.
//!
//! Assertions never call `Ord` on the values they check. They ask a
//! [`ComparisonStrategy`], which pairs an ordering function with the
//! description quoted in failure messages, so the text of a failure always
//! names the comparison that produced it.
//!
//! ```text
//! ComparisonStrategy
//!   ├── InstantComparator (default, one static per representation)
//!   └── dyn TemporalComparator (caller supplied)
//! ```

use crate::logging::trace;
use crate::{HasInstant, Instant, Representation, Temporal};
use std::{any::type_name, borrow::Cow, cmp::Ordering, fmt, sync::Arc};

/// An ordering function over values of one temporal representation.
///
/// Implement this to plug a custom ordering into an assertion chain through
/// [`ComparisonStrategy::from_comparator`].
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Datelike};
/// use chronassert_core::{ComparisonStrategy, TemporalComparator};
/// use std::borrow::Cow;
/// use std::cmp::Ordering;
///
/// struct ByYear;
///
/// impl TemporalComparator<NaiveDate> for ByYear {
///     fn compare(&self, a: &NaiveDate, b: &NaiveDate) -> Ordering {
///         a.year().cmp(&b.year())
///     }
///
///     fn description(&self) -> Cow<'static, str> {
///         Cow::Borrowed("by year")
///     }
/// }
///
/// let strategy = ComparisonStrategy::from_comparator(ByYear);
/// assert_eq!(strategy.description(), "by year");
/// ```
pub trait TemporalComparator<T>: Send + Sync {
    /// Orders `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Human-readable description quoted in failure messages.
    ///
    /// Defaults to the comparator's type name.
    fn description(&self) -> Cow<'static, str> {
        Cow::Borrowed(type_name::<Self>())
    }
}

/// Orders values by their projection onto the UTC time line.
///
/// The projection is injected per representation, so a single comparator type
/// serves all of them. Two values with different offsets or zones but the same
/// absolute moment compare [`Ordering::Equal`].
///
/// Outside this crate the comparator is only reachable through [`Default`],
/// which pairs `T`'s own representation with its [`HasInstant`] projection, so
/// its description always matches what it compares.
pub struct InstantComparator<T> {
    representation: Representation,
    project: fn(&T) -> Instant,
}

impl<T> InstantComparator<T> {
    #[must_use]
    pub(crate) const fn new(representation: Representation, project: fn(&T) -> Instant) -> Self {
        Self {
            representation,
            project,
        }
    }

    /// Orders `a` relative to `b` by instant.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.project)(a).cmp(&(self.project)(b))
    }

    /// The representation this comparator was built for.
    #[must_use]
    pub const fn representation(&self) -> Representation {
        self.representation
    }
}

impl<T: Temporal> Default for InstantComparator<T> {
    fn default() -> Self {
        Self::new(T::REPRESENTATION, <T as HasInstant>::instant)
    }
}

impl<T> Clone for InstantComparator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for InstantComparator<T> {}

impl<T> TemporalComparator<T> for InstantComparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        InstantComparator::compare(self, a, b)
    }

    fn description(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.representation.default_description())
    }
}

struct FnComparator<F> {
    compare: F,
}

impl<T, F> TemporalComparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }

    fn description(&self) -> Cow<'static, str> {
        Cow::Borrowed(type_name::<F>())
    }
}

enum Comparator<T: 'static> {
    ByInstant(InstantComparator<T>),
    Custom(Arc<dyn TemporalComparator<T>>),
}

/// An ordering function paired with the description that explains it.
///
/// Every predicate is derived from a single call to the underlying comparator.
/// Strategies are immutable; the defaults are `static` items shared by every
/// assertion on the same representation.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use chronassert_core::{ComparisonStrategy, Temporal};
///
/// let strategy = NaiveDate::default_strategy();
/// let new_year = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
///
/// assert!(strategy.is_less_than(&new_year, &leap_day));
/// assert_eq!(strategy.description(), "default LocalDate comparison by instant");
///
/// let reversed = ComparisonStrategy::custom(|a: &NaiveDate, b: &NaiveDate| b.cmp(a), "reverse chronological");
/// assert!(reversed.is_greater_than(&new_year, &leap_day));
/// ```
pub struct ComparisonStrategy<T: 'static> {
    comparator: Comparator<T>,
    description: Cow<'static, str>,
}

impl<T: 'static> ComparisonStrategy<T> {
    /// The instant-based strategy behind each representation's shared default.
    #[must_use]
    pub(crate) const fn by_instant(representation: Representation, project: fn(&T) -> Instant) -> Self {
        Self {
            comparator: Comparator::ByInstant(InstantComparator::new(representation, project)),
            description: Cow::Borrowed(representation.default_description()),
        }
    }

    /// Creates a strategy from a closure and an explicit description.
    pub fn custom<F>(compare: F, description: impl Into<Cow<'static, str>>) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        let description = description.into();
        trace!(description = %description, "custom comparison strategy");
        Self {
            comparator: Comparator::Custom(Arc::new(FnComparator { compare })),
            description,
        }
    }

    /// Creates a strategy from a closure, describing it by the closure's type name.
    pub fn from_fn<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::from_comparator(FnComparator { compare })
    }

    /// Creates a strategy from a comparator, using the comparator's own description.
    pub fn from_comparator<C>(comparator: C) -> Self
    where
        C: TemporalComparator<T> + 'static,
    {
        let description = comparator.description();
        trace!(description = %description, "custom comparison strategy");
        Self {
            comparator: Comparator::Custom(Arc::new(comparator)),
            description,
        }
    }

    /// Description quoted verbatim in failure messages.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether this is a representation's default instant comparison.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self.comparator, Comparator::ByInstant(_))
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match &self.comparator {
            Comparator::ByInstant(comparator) => comparator.compare(a, b),
            Comparator::Custom(comparator) => comparator.compare(a, b),
        }
    }

    pub fn are_equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    pub fn is_less_than(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    pub fn is_greater_than(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    pub fn is_less_or_equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    pub fn is_greater_or_equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Less
    }
}

impl<T: Temporal> ComparisonStrategy<T> {
    /// Builds an instant-based strategy for `T`'s own representation.
    ///
    /// The result compares like the representation's default, but is a new
    /// instance: prefer [`Temporal::default_strategy`] for the shared one.
    /// Orderings over any other projection go through
    /// [`ComparisonStrategy::custom`] so failures name them.
    #[must_use]
    pub fn instant_based() -> Self {
        Self::by_instant(T::REPRESENTATION, <T as HasInstant>::instant)
    }
}

impl<T: 'static> Clone for ComparisonStrategy<T> {
    fn clone(&self) -> Self {
        let comparator = match &self.comparator {
            Comparator::ByInstant(comparator) => Comparator::ByInstant(*comparator),
            Comparator::Custom(comparator) => Comparator::Custom(Arc::clone(comparator)),
        };
        Self {
            comparator,
            description: self.description.clone(),
        }
    }
}

impl<T: 'static> fmt::Debug for ComparisonStrategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparisonStrategy")
            .field("description", &self.description)
            .field("default", &self.is_default())
            .finish()
    }
}

impl<T: 'static> fmt::Display for ComparisonStrategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Returns the shared default strategy of `T`'s representation.
///
/// Equivalent to [`Temporal::default_strategy`]; every call returns the same
/// `'static` instance.
#[must_use]
pub fn default_strategy<T: Temporal>() -> &'static ComparisonStrategy<T> {
    T::default_strategy()
}
