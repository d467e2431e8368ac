use super::*;

#[test]
fn rect_edges_follow_origin_and_size() {
    let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(rect.min_x(), 10.0);
    assert_eq!(rect.mid_x(), 25.0);
    assert_eq!(rect.max_x(), 40.0);
    assert_eq!(rect.min_y(), 20.0);
    assert_eq!(rect.mid_y(), 40.0);
    assert_eq!(rect.max_y(), 60.0);
}

#[test]
fn negative_height_normalizes_upward() {
    let segment = Rect::new(5.0, 100.0, 1.0, -60.0);
    assert_eq!(segment.min_y(), 40.0);
    assert_eq!(segment.max_y(), 100.0);
    assert_eq!(segment.normalized(), Rect::new(5.0, 40.0, 1.0, 60.0));
}

#[test]
fn relative_to_moves_into_local_space() {
    let global = Rect::new(50.0, 70.0, 10.0, 10.0);
    let local = global.relative_to(Point::new(20.0, 30.0));
    assert_eq!(local, Rect::new(30.0, 40.0, 10.0, 10.0));
}

#[test]
fn inset_never_produces_negative_size() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    let inset = rect.inset(EdgeInsets::uniform(8.0));
    assert_eq!(inset.x, 8.0);
    assert_eq!(inset.width, 0.0);
    assert_eq!(inset.height, 0.0);
}
