//! Edge policy: pointer-to-size mapping, ordering and frame rules

use resizable::edge::{Length, TRAILING_GUARD};
use resizable::view::arrange;
use resizable::{Axis, Edge, Point, Rect};
use winit::window::CursorIcon;

fn frames() -> Vec<Rect> {
    vec![
        Rect::new(0.0, 0.0, 800.0, 600.0),
        Rect::new(120.0, 40.0, 300.0, 200.0),
        Rect::new(-50.0, -10.0, 30.0, 30.0),
    ]
}

fn sample_coords() -> Vec<f32> {
    vec![-100.0, 0.0, 10.0, 19.9, 20.0, 20.1, 21.0, 250.0, 799.0, 5000.0]
}

// ============================================================================
// size_from_pointer
// ============================================================================

#[test]
fn test_leading_always_returns_distance_from_max_x() {
    for frame in frames() {
        for x in sample_coords() {
            let point = Point::new(x, 33.0);
            assert_eq!(
                Edge::Leading.size_from_pointer(point, frame),
                Some(frame.max_x() - x),
                "x = {x}, frame = {frame:?}"
            );
        }
    }
}

#[test]
fn test_trailing_guarded_at_twenty() {
    for frame in frames() {
        for x in sample_coords() {
            let expected = if x > TRAILING_GUARD {
                Some(x - frame.min_x())
            } else {
                None
            };
            assert_eq!(
                Edge::Trailing.size_from_pointer(Point::new(x, 33.0), frame),
                expected,
                "x = {x}, frame = {frame:?}"
            );
        }
    }
}

#[test]
fn test_top_always_returns_distance_from_max_y() {
    for frame in frames() {
        for y in sample_coords() {
            assert_eq!(
                Edge::Top.size_from_pointer(Point::new(7.0, y), frame),
                Some(frame.max_y() - y)
            );
        }
    }
}

#[test]
fn test_bottom_guarded_at_twenty() {
    for frame in frames() {
        for y in sample_coords() {
            let expected = (y > 20.0).then(|| y - frame.min_y());
            assert_eq!(
                Edge::Bottom.size_from_pointer(Point::new(7.0, y), frame),
                expected
            );
        }
    }
}

#[test]
fn test_guard_looks_only_at_the_resize_axis() {
    let frame = Rect::new(0.0, 0.0, 800.0, 600.0);
    // A y of 5 does not block a trailing drag, an x of 5 does not block a bottom drag
    assert_eq!(
        Edge::Trailing.size_from_pointer(Point::new(300.0, 5.0), frame),
        Some(300.0)
    );
    assert_eq!(
        Edge::Bottom.size_from_pointer(Point::new(5.0, 300.0), frame),
        Some(300.0)
    );
}

// ============================================================================
// Ordering, cursor, axis
// ============================================================================

#[test]
fn test_content_before_divider_exactly_trailing_and_bottom() {
    assert!(!Edge::Leading.is_content_before_divider());
    assert!(Edge::Trailing.is_content_before_divider());
    assert!(!Edge::Top.is_content_before_divider());
    assert!(Edge::Bottom.is_content_before_divider());
}

#[test]
fn test_cursor_and_axis_agree() {
    for edge in Edge::ALL {
        let expected = match edge.axis() {
            Axis::Horizontal => CursorIcon::ColResize,
            Axis::Vertical => CursorIcon::RowResize,
        };
        assert_eq!(edge.cursor_icon(), expected, "{edge}");
    }
}

#[test]
fn test_arranged_order_matches_policy() {
    let container = Rect::new(100.0, 100.0, 200.0, 200.0);
    for edge in Edge::ALL {
        let layout = arrange(edge, container, 2.0);
        let axis = edge.axis();
        let content_first = layout.content.start(axis) < layout.divider.start(axis);
        assert_eq!(content_first, edge.is_content_before_divider(), "{edge}");

        // Content and divider tile the container along the axis
        assert_eq!(
            layout.content.extent(axis) + layout.divider.extent(axis),
            container.extent(axis)
        );
        // ...and both span it across
        assert_eq!(layout.content.extent(axis.cross()), container.extent(axis.cross()));
    }
}

// ============================================================================
// Frame rules
// ============================================================================

#[test]
fn test_fixed_stretch_axes_are_complementary() {
    for edge in Edge::ALL {
        let axis = edge.axis();
        assert_eq!(edge.fixed_axis(10.0).length(axis), Length::Fixed(10.0));
        assert_eq!(edge.fixed_axis(10.0).length(axis.cross()), Length::Auto);
        assert_eq!(edge.stretch_content().length(axis), Length::Fill);
        assert_eq!(edge.stretch_container().length(axis.cross()), Length::Fill);
        assert_eq!(edge.stretch_container().length(axis), Length::Auto);
    }
}

#[test]
fn test_place_keeps_measured_edge_fixed() {
    let slot = Rect::new(10.0, 20.0, 700.0, 500.0);
    for size in [0.0, 50.0, 333.0, 900.0] {
        assert_eq!(Edge::Leading.place(size, slot).max_x(), slot.max_x());
        assert_eq!(Edge::Trailing.place(size, slot).min_x(), slot.min_x());
        assert_eq!(Edge::Top.place(size, slot).max_y(), slot.max_y());
        assert_eq!(Edge::Bottom.place(size, slot).min_y(), slot.min_y());
    }
}
