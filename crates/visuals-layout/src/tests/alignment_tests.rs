use super::*;

#[test]
fn center_offsets_split_remaining_space() {
    assert_eq!(HorizontalAlignment::CenterHorizontally.align(10.0, 4.0), 3.0);
    assert_eq!(VerticalAlignment::CenterVertically.align(3.0, 1.0), 1.0);
}

#[test]
fn oversized_children_overflow_symmetrically() {
    assert_eq!(HorizontalAlignment::CenterHorizontally.align(8.0, 12.0), -2.0);
    assert_eq!(VerticalAlignment::Bottom.align(8.0, 12.0), -4.0);
}
