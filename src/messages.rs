//! Message types for the divider's update function
//!
//! Pointer input is translated into these before it reaches
//! [`ResizableView::update`](crate::view::ResizableView::update).

use crate::geometry::Point;

/// Gesture signals delivered to the divider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DividerMsg {
    /// Pointer entered the divider's hit area
    HoverEnter,
    /// Pointer left the divider's hit area
    HoverExit,
    /// Drag started or moved; location is in window-global coordinates
    DragChanged { location: Point },
    /// Pointer released after a drag
    DragEnded,
}
