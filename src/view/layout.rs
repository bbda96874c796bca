//! Stack arrangement of content and divider inside the container

use crate::edge::{Anchor, Edge};
use crate::geometry::Rect;

/// Resolved rects for one layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizableLayout {
    /// Outer frame; this is the frame pointer positions are measured against
    pub container: Rect,
    pub content: Rect,
    pub divider: Rect,
    pub edge: Edge,
}

impl ResizableLayout {
    /// Divider rect grown by `slop` on both sides of the resize axis
    pub fn divider_hit_rect(&self, slop: f32) -> Rect {
        self.divider.inflate_along(self.edge.axis(), slop)
    }
}

/// Arrange `[content, divider]` or `[divider, content]` along the edge's axis.
///
/// The divider takes `divider_thickness` and content is stretched over the band
/// that is left. Drawn rects never have negative extents even when the
/// container does.
pub fn arrange(edge: Edge, container: Rect, divider_thickness: f32) -> ResizableLayout {
    let axis = edge.axis();
    let base = container.non_negative();
    let extent = base.extent(axis);
    let divider_extent = divider_thickness.min(extent);
    let rest = extent - divider_extent;

    let start = base.start(axis);
    let (band_start, divider_start) = if edge.is_content_before_divider() {
        (start, start + rest)
    } else {
        (start + divider_extent, start)
    };

    let band = base.with_start(axis, band_start).with_extent(axis, rest);
    // Content has no extent of its own along the axis; the stack offers it the full cross extent
    let natural = band.with_extent(axis, 0.0);
    let content = edge.stretch_content().resolve(band, natural, Anchor::Start);
    let divider = base
        .with_start(axis, divider_start)
        .with_extent(axis, divider_extent);

    ResizableLayout {
        container,
        content,
        divider,
        edge,
    }
}

/// Place the container in `slot` for the current size, then arrange it
pub fn layout_in_slot(edge: Edge, size: f32, slot: Rect, divider_thickness: f32) -> ResizableLayout {
    arrange(edge, edge.place(size, slot), divider_thickness)
}

/// Space left in `slot` for siblings once `container` has been placed in it
pub fn remaining_slot(edge: Edge, slot: Rect, container: Rect) -> Rect {
    let axis = edge.axis();
    let available = slot.extent(axis).max(0.0);
    let taken = container.extent(axis).clamp(0.0, available);
    let rest = available - taken;

    match edge.anchor() {
        Anchor::Start => slot
            .with_start(axis, slot.start(axis) + taken)
            .with_extent(axis, rest),
        Anchor::End => slot.with_extent(axis, rest),
    }
}
