// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use chronassert_core::{AssertionError, HasInstant, Representation, Temporal};

#[test]
fn test_representation_tags() {
    assert_eq!(<DateTime<FixedOffset> as Temporal>::REPRESENTATION, Representation::Offset);
    assert_eq!(<DateTime<Utc> as Temporal>::REPRESENTATION, Representation::Utc);
    assert_eq!(<NaiveDateTime as Temporal>::REPRESENTATION, Representation::LocalDateTime);
    assert_eq!(<NaiveDate as Temporal>::REPRESENTATION, Representation::LocalDate);
}

#[test]
fn test_representation_registry_lists_every_tag_once() {
    // Arrange
    let names: Vec<&str> = Representation::ALL.iter().map(|r| r.display_name()).collect();

    // Assert
    assert_eq!(
        names,
        ["ZonedDateTime", "OffsetDateTime", "UtcDateTime", "LocalDateTime", "LocalDate"]
    );
    for representation in Representation::ALL {
        assert!(representation
            .default_description()
            .contains(representation.display_name()));
        assert_eq!(representation.to_string(), representation.display_name());
    }
}

#[test]
fn test_offset_parse_and_render() {
    // Arrange & Act
    let value = <DateTime<FixedOffset> as Temporal>::parse("2007-12-03T10:15:30.5+01:00").unwrap();

    // Assert
    assert_eq!(value.render(), "2007-12-03T10:15:30.500+01:00");
    assert_eq!(<DateTime<FixedOffset> as Temporal>::parse(&value.render()).unwrap(), value);
}

#[test]
fn test_utc_parse_normalizes_offset() {
    // Arrange & Act
    let value = <DateTime<Utc> as Temporal>::parse("2007-12-03T10:15:30+01:00").unwrap();

    // Assert
    assert_eq!(value.render(), "2007-12-03T09:15:30Z");
}

#[test]
fn test_local_date_time_parse_and_render() {
    // Arrange & Act
    let whole = <NaiveDateTime as Temporal>::parse("2000-01-01T23:59:59").unwrap();
    let fractional = <NaiveDateTime as Temporal>::parse("2000-01-01T23:59:59.123").unwrap();

    // Assert
    assert_eq!(whole.render(), "2000-01-01T23:59:59");
    assert_eq!(fractional.render(), "2000-01-01T23:59:59.123");
    assert!(whole.instant() < fractional.instant());
}

#[test]
fn test_local_date_parse_and_render() {
    // Arrange & Act
    let value = <NaiveDate as Temporal>::parse("2024-02-29").unwrap();

    // Assert
    assert_eq!(value, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert_eq!(value.render(), "2024-02-29");
}

#[test]
fn test_parse_error_names_text_and_representation() {
    // Act
    let err = <NaiveDate as Temporal>::parse("2023-02-29").unwrap_err();

    // Assert
    match &err {
        AssertionError::Parse {
            text,
            representation,
            ..
        } => {
            assert_eq!(text, "2023-02-29");
            assert_eq!(*representation, "LocalDate");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(err.is_usage_error());
    assert!(err.to_string().starts_with("Text '2023-02-29' could not be parsed as LocalDate"));
}

#[test]
fn test_offset_parse_rejects_missing_offset() {
    // Act
    let err = <DateTime<FixedOffset> as Temporal>::parse("2007-12-03T10:15:30").unwrap_err();

    // Assert
    assert!(matches!(
        err,
        AssertionError::Parse {
            representation: "OffsetDateTime",
            ..
        }
    ));
}

#[cfg(feature = "tz")]
mod zoned {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Tz;

    #[test]
    fn test_zoned_parse_and_render() {
        // Arrange
        let text = "2007-12-03T10:15:30+01:00[Europe/Paris]";

        // Act
        let value = <DateTime<Tz> as Temporal>::parse(text).unwrap();

        // Assert
        assert_eq!(value.timezone(), chrono_tz::Europe::Paris);
        assert_eq!(value.render(), text);
        assert_eq!(<DateTime<Tz> as Temporal>::REPRESENTATION, Representation::Zoned);
    }

    #[test]
    fn test_zoned_parse_moves_to_zone() {
        // Act
        let value = <DateTime<Tz> as Temporal>::parse("2024-07-01T12:00:00Z[Europe/Paris]").unwrap();

        // Assert
        assert_eq!(
            value,
            chrono_tz::Europe::Paris
                .with_ymd_and_hms(2024, 7, 1, 14, 0, 0)
                .unwrap()
        );
        assert_eq!(value.render(), "2024-07-01T14:00:00+02:00[Europe/Paris]");
    }

    #[test]
    fn test_zoned_parse_requires_zone() {
        // Act
        let err = <DateTime<Tz> as Temporal>::parse("2007-12-03T10:15:30+01:00").unwrap_err();

        // Assert
        assert!(matches!(
            err,
            AssertionError::Parse {
                representation: "ZonedDateTime",
                ..
            }
        ));
    }

    #[test]
    fn test_zoned_parse_rejects_unknown_zone() {
        // Act
        let err = <DateTime<Tz> as Temporal>::parse("2007-12-03T10:15:30+01:00[Mars/Olympus]")
            .unwrap_err();

        // Assert
        assert!(err.is_usage_error());
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn test_zoned_default_strategy_description() {
        assert_eq!(
            <DateTime<Tz> as Temporal>::default_strategy().description(),
            "default ZonedDateTime comparison by instant"
        );
    }
}
