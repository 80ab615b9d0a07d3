// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ComparisonStrategy, HasInstant, Representation};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use chronassert_error::{AssertionError, Result};

/// A temporal value that assertions can compare, parse and render.
///
/// This trait extends [`HasInstant`] with what the assertion layer needs on top
/// of ordering: a representation tag, a text parser for expected values given
/// as strings, a rendering used in failure messages, and access to the shared
/// default [`ComparisonStrategy`].
///
/// `render` and `parse` agree: the text produced by `render` parses back to a
/// value at the same instant with the same offset or zone.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, FixedOffset};
/// use chronassert_core::{Representation, Temporal};
///
/// let value = <DateTime<FixedOffset> as Temporal>::parse("2000-01-01T01:00:00+01:00").unwrap();
/// assert_eq!(value.render(), "2000-01-01T01:00:00+01:00");
/// assert_eq!(<DateTime<FixedOffset> as Temporal>::REPRESENTATION, Representation::Offset);
/// ```
pub trait Temporal: HasInstant + Clone + Send + Sync + 'static {
    /// The representation this type implements.
    const REPRESENTATION: Representation;

    /// Parses `text` into a value of this representation.
    ///
    /// # Errors
    /// Returns [`AssertionError::Parse`] naming `text` and the representation
    /// when `text` is malformed.
    fn parse(text: &str) -> Result<Self>;

    /// Renders the value for failure messages.
    fn render(&self) -> String;

    /// The shared default strategy for this representation.
    fn default_strategy() -> &'static ComparisonStrategy<Self>;
}

fn parse_error<T: Temporal>(text: &str, reason: impl ToString) -> AssertionError {
    AssertionError::parse(text, T::REPRESENTATION.display_name(), reason)
}

macro_rules! default_strategy {
    ($ty:ty, $representation:expr) => {{
        static DEFAULT: ComparisonStrategy<$ty> =
            ComparisonStrategy::by_instant($representation, <$ty as HasInstant>::instant);
        &DEFAULT
    }};
}

impl Temporal for DateTime<FixedOffset> {
    const REPRESENTATION: Representation = Representation::Offset;

    fn parse(text: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(text).map_err(|e| parse_error::<Self>(text, e))
    }

    fn render(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, false)
    }

    fn default_strategy() -> &'static ComparisonStrategy<Self> {
        default_strategy!(DateTime<FixedOffset>, Representation::Offset)
    }
}

impl Temporal for DateTime<Utc> {
    const REPRESENTATION: Representation = Representation::Utc;

    fn parse(text: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(text)
            .map(|value| value.with_timezone(&Utc))
            .map_err(|e| parse_error::<Self>(text, e))
    }

    fn render(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    fn default_strategy() -> &'static ComparisonStrategy<Self> {
        default_strategy!(DateTime<Utc>, Representation::Utc)
    }
}

impl Temporal for NaiveDateTime {
    const REPRESENTATION: Representation = Representation::LocalDateTime;

    fn parse(text: &str) -> Result<Self> {
        text.parse::<Self>().map_err(|e| parse_error::<Self>(text, e))
    }

    fn render(&self) -> String {
        self.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
    }

    fn default_strategy() -> &'static ComparisonStrategy<Self> {
        default_strategy!(NaiveDateTime, Representation::LocalDateTime)
    }
}

impl Temporal for NaiveDate {
    const REPRESENTATION: Representation = Representation::LocalDate;

    fn parse(text: &str) -> Result<Self> {
        text.parse::<Self>().map_err(|e| parse_error::<Self>(text, e))
    }

    fn render(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }

    fn default_strategy() -> &'static ComparisonStrategy<Self> {
        default_strategy!(NaiveDate, Representation::LocalDate)
    }
}

#[cfg(feature = "tz")]
mod zoned {
    use super::{parse_error, Temporal};
    use crate::{ComparisonStrategy, HasInstant, Representation};
    use chrono::{DateTime, SecondsFormat};
    use chrono_tz::Tz;
    use chronassert_error::Result;

    /// Zoned values are written as an RFC 3339 timestamp followed by the
    /// IANA zone in brackets: `2007-12-03T10:15:30+01:00[Europe/Paris]`.
    impl Temporal for DateTime<Tz> {
        const REPRESENTATION: Representation = Representation::Zoned;

        fn parse(text: &str) -> Result<Self> {
            let (stamp, zone) = text
                .strip_suffix(']')
                .and_then(|rest| rest.split_once('['))
                .ok_or_else(|| parse_error::<Self>(text, "expected a trailing [Area/Location] zone"))?;
            let zone = zone.parse::<Tz>().map_err(|e| parse_error::<Self>(text, e))?;
            let stamp = DateTime::parse_from_rfc3339(stamp).map_err(|e| parse_error::<Self>(text, e))?;
            Ok(stamp.with_timezone(&zone))
        }

        fn render(&self) -> String {
            format!(
                "{}[{}]",
                self.fixed_offset().to_rfc3339_opts(SecondsFormat::AutoSi, false),
                self.timezone().name()
            )
        }

        fn default_strategy() -> &'static ComparisonStrategy<Self> {
            default_strategy!(DateTime<Tz>, Representation::Zoned)
        }
    }
}
