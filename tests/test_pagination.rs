//! Page slicing tests.

mod common;

use catalogue_analyse::normalize::normalize;
use catalogue_analyse::pagination::{clamp_page, page_count, paginate};

#[test]
fn reference_scenario_second_and_third_page() {
    let records = normalize(&common::two_records());

    assert_eq!(common::models(paginate(&records, 2, 1)), vec!["B"]);
    assert!(paginate(&records, 3, 1).is_empty());
}

#[test]
fn page_zero_is_empty() {
    let items = [1, 2, 3];
    assert!(paginate(&items, 0, 2).is_empty());
}

#[test]
fn last_page_may_be_partial() {
    let items: Vec<u32> = (1..=7).collect();
    assert_eq!(paginate(&items, 1, 3), &[1, 2, 3]);
    assert_eq!(paginate(&items, 3, 3), &[7]);
    assert!(paginate(&items, 4, 3).is_empty());
}

#[test]
fn huge_page_number_does_not_overflow() {
    let items = [1, 2, 3];
    assert!(paginate(&items, usize::MAX, 50).is_empty());
}

#[test]
fn pages_concatenate_to_the_full_sequence() {
    let items: Vec<u32> = (0..123).collect();
    let size = 50;

    let mut rebuilt = Vec::new();
    for page in 1..=page_count(items.len(), size) {
        rebuilt.extend_from_slice(paginate(&items, page, size));
    }
    assert_eq!(rebuilt, items);
}

#[test]
fn page_count_rounds_up_with_minimum_one() {
    assert_eq!(page_count(0, 50), 1);
    assert_eq!(page_count(1, 50), 1);
    assert_eq!(page_count(50, 50), 1);
    assert_eq!(page_count(51, 50), 2);
    assert_eq!(page_count(10, 0), 1);
}

#[test]
fn clamp_page_keeps_page_in_range() {
    assert_eq!(clamp_page(0, 3), 1);
    assert_eq!(clamp_page(2, 3), 2);
    assert_eq!(clamp_page(9, 3), 3);
    assert_eq!(clamp_page(5, 0), 1);
}
