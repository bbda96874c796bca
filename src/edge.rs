//! Edge policy - where the divider sits and everything that follows from it
//!
//! An [`Edge`] is chosen once when a view is built. Every geometric decision the
//! view makes (cursor icon, child order, pointer-to-size mapping, frame rules)
//! dispatches on it.

use serde::{Deserialize, Serialize};
use winit::window::CursorIcon;

use crate::cursor::CursorController;
use crate::geometry::{Axis, Point, Rect};

/// Pointer coordinate at or below which trailing/bottom drags are ignored.
///
/// Leading and top edges have no such guard.
pub const TRAILING_GUARD: f32 = 20.0;

/// Edge of the container that carries the divider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Leading,
    Trailing,
    Top,
    Bottom,
}

impl Edge {
    /// All edges for iteration
    pub const ALL: [Edge; 4] = [Edge::Leading, Edge::Trailing, Edge::Top, Edge::Bottom];

    /// Axis the size applies to (width for leading/trailing, height for top/bottom)
    pub fn axis(&self) -> Axis {
        match self {
            Edge::Leading | Edge::Trailing => Axis::Horizontal,
            Edge::Top | Edge::Bottom => Axis::Vertical,
        }
    }

    /// Resize cursor shown while hovering or dragging the divider
    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            Edge::Leading | Edge::Trailing => CursorIcon::ColResize,
            Edge::Top | Edge::Bottom => CursorIcon::RowResize,
        }
    }

    /// Apply the resize cursor
    pub fn set_cursor(&self, cursor: &mut dyn CursorController) {
        cursor.set_icon(self.cursor_icon());
    }

    /// Whether content renders before the divider in the stack
    pub fn is_content_before_divider(&self) -> bool {
        match self {
            Edge::Trailing | Edge::Bottom => true,
            Edge::Leading | Edge::Top => false,
        }
    }

    /// Map a global pointer location to a new size.
    ///
    /// Returns `None` when the pointer is too close to the window origin on a
    /// trailing/bottom edge. Results are not clamped and may be negative.
    pub fn size_from_pointer(&self, point: Point, container: Rect) -> Option<f32> {
        match self {
            Edge::Leading => Some(container.max_x() - point.x),
            Edge::Trailing => (point.x > TRAILING_GUARD).then(|| point.x - container.min_x()),
            Edge::Top => Some(container.max_y() - point.y),
            Edge::Bottom => (point.y > TRAILING_GUARD).then(|| point.y - container.min_y()),
        }
    }

    /// Frame applied to the outermost wrapper: the edge's axis is fixed to `size`
    pub fn fixed_axis(&self, size: f32) -> FrameSpec {
        FrameSpec::default().with(self.axis(), Length::Fixed(size))
    }

    /// Frame applied to the content child: it fills the edge's axis
    pub fn stretch_content(&self) -> FrameSpec {
        FrameSpec::default().with(self.axis(), Length::Fill)
    }

    /// Frame applied to the whole widget: it fills the cross axis
    pub fn stretch_container(&self) -> FrameSpec {
        FrameSpec::default().with(self.axis().cross(), Length::Fill)
    }

    /// Side of the slot the container is pinned to, opposite the divider
    pub fn anchor(&self) -> Anchor {
        match self {
            Edge::Leading | Edge::Top => Anchor::End,
            Edge::Trailing | Edge::Bottom => Anchor::Start,
        }
    }

    /// Place the container inside the slot offered by its parent.
    ///
    /// The fixed-axis frame and the stretched cross axis are combined, and the
    /// container is anchored away from the divider so the frame edge used by
    /// [`Edge::size_from_pointer`] does not move while dragging. The container
    /// has no extent of its own; without the stretch it collapses across.
    pub fn place(&self, size: f32, slot: Rect) -> Rect {
        self.fixed_axis(size)
            .merge(self.stretch_container())
            .resolve(slot, Rect::default(), self.anchor())
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Edge::Leading => "leading",
            Edge::Trailing => "trailing",
            Edge::Top => "top",
            Edge::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Edge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "leading" | "left" => Ok(Edge::Leading),
            "trailing" | "right" => Ok(Edge::Trailing),
            "top" => Ok(Edge::Top),
            "bottom" => Ok(Edge::Bottom),
            other => Err(format!("Unknown edge: {}", other)),
        }
    }
}

/// Length rule for one axis of a frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    /// Keep the child's own extent
    #[default]
    Auto,
    /// Exactly this many pixels
    Fixed(f32),
    /// Fill all available space
    Fill,
}

/// Where a frame smaller than its slot is positioned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    End,
}

/// Per-axis frame modifier
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameSpec {
    pub width: Length,
    pub height: Length,
}

impl FrameSpec {
    /// Set the rule for one axis
    pub fn with(mut self, axis: Axis, length: Length) -> Self {
        match axis {
            Axis::Horizontal => self.width = length,
            Axis::Vertical => self.height = length,
        }
        self
    }

    pub fn length(&self, axis: Axis) -> Length {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Combine two frames; explicit rules in `other` win over `Auto`
    pub fn merge(self, other: FrameSpec) -> Self {
        let pick = |a: Length, b: Length| if b == Length::Auto { a } else { b };
        Self {
            width: pick(self.width, other.width),
            height: pick(self.height, other.height),
        }
    }

    /// Resolve the frame against a proposed rect.
    ///
    /// `natural` is the child's own frame; only its extents are read, and only
    /// on `Auto` axes. A result smaller than `proposed` is pinned to `anchor`.
    pub fn resolve(&self, proposed: Rect, natural: Rect, anchor: Anchor) -> Rect {
        let mut rect = proposed;
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let extent = match self.length(axis) {
                Length::Auto => natural.extent(axis),
                Length::Fixed(extent) => extent,
                Length::Fill => proposed.extent(axis),
            };
            let start = match anchor {
                Anchor::Start => proposed.start(axis),
                Anchor::End => proposed.start(axis) + proposed.extent(axis) - extent,
            };
            rect = rect.with_start(axis, start).with_extent(axis, extent);
        }
        rect
    }
}
