// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::NaiveDate;
use chronassert_core::{ComparisonStrategy, TemporalComparator};
use chronassert_test_utils::test_data::{offset_timeline, t0_new_york_offset, t0_paris_offset};
use chronassert_test_utils::{AlwaysEqual, ByWallClock, ReverseChronological};
use std::cmp::Ordering;

#[test]
fn test_reverse_chronological() {
    // Arrange
    let timeline = offset_timeline();

    // Act
    let ordering = ReverseChronological.compare(&timeline.before, &timeline.after);

    // Assert
    assert_eq!(ordering, Ordering::Greater);
    assert_eq!(
        TemporalComparator::<NaiveDate>::description(&ReverseChronological),
        "reverse chronological"
    );
}

#[test]
fn test_by_wall_clock_distinguishes_same_instant() {
    // Arrange
    let paris = t0_paris_offset();
    let new_york = t0_new_york_offset();

    // Act
    let ordering = ByWallClock.compare(&paris, &new_york);

    // Assert
    assert_eq!(ordering, Ordering::Greater);
}

#[test]
fn test_always_equal_uses_type_name_description() {
    // Arrange & Act
    let strategy = ComparisonStrategy::<NaiveDate>::from_comparator(AlwaysEqual);

    // Assert
    assert!(strategy.description().ends_with("AlwaysEqual"));
    let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    assert!(strategy.are_equal(&date, &date.succ_opt().unwrap()));
}
