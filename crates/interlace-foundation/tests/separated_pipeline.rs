//! End-to-end checks that drive separated delegates the way a host list
//! pipeline does, via the `interlace-testing` harness.

use interlace_foundation::{ChildBehavior, ChildDelegate, ChildKey};
use interlace_testing::{probed_delegate, ListDriver, Probe, ProbeElement};

#[test]
fn three_items_interleave_in_pipeline_order() {
    let delegate = probed_delegate(3);
    let driver = ListDriver::new(&delegate);
    let mut probe = Probe::new();

    assert_eq!(driver.child_count(), 5);
    let elements = driver.build_all(&mut probe);

    let expected = [
        ProbeElement::Item(0),
        ProbeElement::Separator(0),
        ProbeElement::Item(1),
        ProbeElement::Separator(1),
        ProbeElement::Item(2),
    ];
    assert_eq!(elements, expected);
    // The producers ran in exactly that order, once each.
    assert_eq!(probe.calls(), &expected);
}

#[test]
fn empty_list_never_builds() {
    let delegate = probed_delegate(0);
    let driver = ListDriver::new(&delegate);
    let mut probe = Probe::new();

    assert_eq!(driver.child_count(), 0);
    assert!(driver.build_all(&mut probe).is_empty());
    assert!(probe.calls().is_empty());
}

#[test]
fn single_item_skips_the_separator_producer() {
    let delegate = probed_delegate(1);
    let driver = ListDriver::new(&delegate);
    let mut probe = Probe::new();

    assert_eq!(driver.child_count(), 1);
    assert_eq!(driver.build_all(&mut probe), [ProbeElement::Item(0)]);
    assert_eq!(probe.calls(), &[ProbeElement::Item(0)]);
}

#[test]
fn viewport_range_builds_only_its_slice() {
    let delegate = probed_delegate(4);
    let driver = ListDriver::new(&delegate);
    let mut probe = Probe::new();

    // A viewport showing combined indices 2..5 of I S I S I S I.
    let visible = driver.build_range(&mut probe, 2..5);
    assert_eq!(
        visible,
        [
            ProbeElement::Item(1),
            ProbeElement::Separator(1),
            ProbeElement::Item(2),
        ]
    );
}

#[test]
fn out_of_range_requests_build_nothing() {
    let delegate = probed_delegate(2);
    let driver = ListDriver::new(&delegate);
    let mut probe = Probe::new();

    // The combined space has 3 children; ask past the end.
    let elements = driver.build_range(&mut probe, 3..10);
    assert!(elements.is_empty());
    assert!(probe.calls().is_empty());
}

#[test]
fn semantic_map_counts_items_only() {
    let delegate = probed_delegate(3);
    let driver = ListDriver::new(&delegate);

    assert_eq!(
        driver.semantic_map(),
        [
            (0, Some(0)),
            (1, None),
            (2, Some(1)),
            (3, None),
            (4, Some(2)),
        ]
    );
}

#[test]
fn keys_round_trip_through_the_cached_lookup() {
    // 100 items → 199 combined children, past the linear-search threshold.
    let delegate = probed_delegate(100).with_item_keys(|item_index| item_index as u64 + 1);
    let driver = ListDriver::new(&delegate);

    driver.assert_keys_round_trip();
    assert_eq!(driver.relocate(ChildKey::User(100)), Some(198));
    assert_eq!(driver.relocate(ChildKey::User(0)), None);
}

#[test]
fn keys_round_trip_through_the_linear_lookup() {
    let delegate = probed_delegate(4).with_item_keys(|item_index| item_index as u64 * 2);
    let driver = ListDriver::new(&delegate);

    driver.assert_keys_round_trip();
    assert_eq!(
        driver.keys(),
        [
            ChildKey::User(0),
            ChildKey::Index(1),
            ChildKey::User(2),
            ChildKey::Index(3),
            ChildKey::User(4),
            ChildKey::Index(5),
            ChildKey::User(6),
        ]
    );
}

#[test]
fn relocation_override_is_forwarded() {
    let delegate = probed_delegate(3).with_find_index(|key| match key {
        ChildKey::User(9) => Some(4),
        _ => None,
    });
    let driver = ListDriver::new(&delegate);

    assert_eq!(driver.relocate(ChildKey::User(9)), Some(4));
    assert_eq!(driver.relocate(ChildKey::Index(0)), None);
}

#[test]
fn behavior_flags_reach_the_underlying_delegate() {
    let behavior = ChildBehavior::new()
        .automatic_keep_alives(false)
        .repaint_boundaries(false);
    let delegate = probed_delegate(2).with_behavior(behavior);

    assert_eq!(delegate.behavior(), behavior);
    assert_eq!(delegate.inner().behavior(), behavior);
    // Semantic indexes stay on by default and still skip separators.
    assert_eq!(delegate.get_semantic_index(0), Some(0));
    assert_eq!(delegate.get_semantic_index(1), None);
}

#[test]
fn content_types_distinguish_items_from_separators() {
    const DIVIDER: u64 = u64::MAX;
    let delegate = probed_delegate(3)
        .with_item_content_types(|item_index| item_index as u64 % 2)
        .with_separator_content_type(DIVIDER);

    assert_eq!(delegate.get_content_type(0), Some(0));
    assert_eq!(delegate.get_content_type(1), Some(DIVIDER));
    assert_eq!(delegate.get_content_type(2), Some(1));
    assert_eq!(delegate.get_content_type(3), Some(DIVIDER));
    assert_eq!(delegate.get_content_type(4), Some(0));
}
