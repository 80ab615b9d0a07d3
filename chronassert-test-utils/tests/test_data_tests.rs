// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{DateTime, FixedOffset};
use chronassert_core::{HasInstant, Instant, Temporal};
use chronassert_test_utils::test_data::{
    local_date_time_timeline, local_date_timeline, offset_timeline, t0_minus_one_second,
    t0_new_york_offset, t0_paris_offset, t0_utc, utc_timeline, T0_EPOCH_SECONDS,
};

#[test]
fn test_t0_fixtures_share_one_instant() {
    // Arrange
    let expected = Instant::new(T0_EPOCH_SECONDS, 0);

    // Assert
    assert_eq!(t0_utc().instant(), expected);
    assert_eq!(t0_paris_offset().instant(), expected);
    assert_eq!(t0_new_york_offset().instant(), expected);
    assert_ne!(t0_paris_offset().offset(), t0_new_york_offset().offset());
}

#[test]
fn test_t0_minus_one_second() {
    assert_eq!(
        t0_minus_one_second().instant(),
        Instant::new(T0_EPOCH_SECONDS - 1, 0)
    );
}

#[test]
fn test_timelines_are_strictly_ordered() {
    let offset = offset_timeline();
    assert!(offset.before.instant() < offset.reference.instant());
    assert!(offset.reference.instant() < offset.after.instant());

    let utc = utc_timeline();
    assert!(utc.before < utc.reference && utc.reference < utc.after);

    let local = local_date_time_timeline();
    assert!(local.before < local.reference && local.reference < local.after);

    let dates = local_date_timeline();
    assert!(dates.before < dates.reference && dates.reference < dates.after);
}

#[test]
fn test_rendered_timeline_parses_back() -> anyhow::Result<()> {
    // Arrange
    let timeline = offset_timeline();

    // Act
    let [before, reference, after] = timeline.rendered();

    // Assert
    assert_eq!(reference, "2000-01-01T01:00:00+01:00");
    assert_eq!(<DateTime<FixedOffset> as Temporal>::parse(&before)?, timeline.before);
    assert_eq!(<DateTime<FixedOffset> as Temporal>::parse(&after)?, timeline.after);

    Ok(())
}

#[test]
fn test_rendered_local_timelines_parse_back() -> anyhow::Result<()> {
    let dates = local_date_timeline();
    let [before, _, after] = dates.rendered();
    assert_eq!(<chrono::NaiveDate as Temporal>::parse(&before)?, dates.before);
    assert_eq!(<chrono::NaiveDate as Temporal>::parse(&after)?, dates.after);

    let local = local_date_time_timeline();
    let [before, _, after] = local.rendered();
    assert_eq!(<chrono::NaiveDateTime as Temporal>::parse(&before)?, local.before);
    assert_eq!(<chrono::NaiveDateTime as Temporal>::parse(&after)?, local.after);

    Ok(())
}

#[cfg(feature = "tz")]
#[test]
fn test_zoned_fixtures() {
    use chronassert_test_utils::test_data::{t0_paris_zoned, t0_tokyo_zoned, zoned_timeline};

    assert_eq!(t0_paris_zoned().instant(), t0_tokyo_zoned().instant());
    assert_eq!(
        t0_tokyo_zoned().render(),
        "2000-01-01T09:00:00+09:00[Asia/Tokyo]"
    );

    let timeline = zoned_timeline();
    assert!(timeline.before.instant() < timeline.reference.instant());
}
