// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::NaiveDate;
use chronassert::message::{should_be_in_period, should_satisfy, with_description, Relation};
use chronassert::{ComparisonStrategy, Temporal};
use chronassert_test_utils::test_data::local_date_timeline;
use chronassert_test_utils::ReverseChronological;

#[test]
fn test_expectation_lines() {
    let lines: Vec<String> = Relation::ALL.iter().map(ToString::to_string).collect();

    assert_eq!(
        lines,
        [
            "to be before",
            "to be after",
            "to be before or equal to",
            "to be after or equal to",
            "to be equal to",
            "not to be equal to",
        ]
    );
}

#[test]
fn test_relations_hold_under_default_strategy() {
    // Arrange
    let timeline = local_date_timeline();
    let strategy = NaiveDate::default_strategy();

    // Act
    let held: Vec<Relation> = Relation::ALL
        .into_iter()
        .filter(|relation| relation.holds(strategy, &timeline.before, &timeline.reference))
        .collect();

    // Assert
    assert_eq!(
        held,
        [Relation::Before, Relation::BeforeOrEqual, Relation::NotEqual]
    );
}

#[test]
fn test_should_satisfy_is_deterministic() {
    // Arrange
    let timeline = local_date_timeline();
    let strategy = NaiveDate::default_strategy();

    // Act
    let first = should_satisfy(Relation::Equal, &timeline.before, &timeline.after, strategy);
    let second = should_satisfy(Relation::Equal, &timeline.before, &timeline.after, strategy);

    // Assert
    assert_eq!(first, second);
    assert_eq!(
        first,
        "\nExpecting actual:\n  1999-12-31\nto be equal to:\n  2000-01-02\n"
    );
}

#[test]
fn test_should_satisfy_names_custom_strategy() {
    // Arrange
    let timeline = local_date_timeline();
    let strategy = ComparisonStrategy::from_comparator(ReverseChronological);

    // Act
    let message = should_satisfy(Relation::After, &timeline.before, &timeline.after, &strategy);

    // Assert
    assert_eq!(
        message,
        "\nExpecting actual:\n  1999-12-31\nto be after:\n  2000-01-02\naccording to 'reverse chronological' comparator"
    );
}

#[test]
fn test_should_be_in_period_brackets() {
    let timeline = local_date_timeline();
    let strategy = NaiveDate::default_strategy();

    let inclusive = should_be_in_period(&timeline.after, &timeline.before, &timeline.reference, true, strategy);
    let strict = should_be_in_period(&timeline.after, &timeline.before, &timeline.reference, false, strategy);

    assert!(inclusive.ends_with("[1999-12-31, 2000-01-01]\n"));
    assert!(strict.ends_with("(1999-12-31, 2000-01-01)\n"));
}

#[test]
fn test_with_description() {
    assert_eq!(with_description(Some("ctx"), "\nboom".to_string()), "[ctx] \nboom");
    assert_eq!(with_description(None, "\nboom".to_string()), "\nboom");
}
