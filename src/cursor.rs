//! Pointer cursor seam
//!
//! The cursor icon is process-wide state owned by the windowing system. The view
//! only talks to it through [`CursorController`], so the real window can be
//! swapped for a [`RecordingCursor`] in tests.

use winit::window::{CursorIcon, Window};

/// Sets the pointer cursor icon
pub trait CursorController {
    fn set_icon(&mut self, icon: CursorIcon);

    /// Restore the default arrow
    fn reset(&mut self) {
        self.set_icon(CursorIcon::Default);
    }
}

/// Cursor controller backed by a winit window
pub struct WindowCursor<'a> {
    window: &'a Window,
}

impl<'a> WindowCursor<'a> {
    pub fn new(window: &'a Window) -> Self {
        Self { window }
    }
}

impl CursorController for WindowCursor<'_> {
    fn set_icon(&mut self, icon: CursorIcon) {
        self.window.set_cursor(icon);
    }
}

/// Records every cursor change instead of touching the OS cursor
#[derive(Debug, Default, Clone)]
pub struct RecordingCursor {
    pub history: Vec<CursorIcon>,
}

impl RecordingCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Icon most recently set, if any
    pub fn current(&self) -> Option<CursorIcon> {
        self.history.last().copied()
    }

    /// Number of times the default arrow was restored
    pub fn reset_count(&self) -> usize {
        self.history
            .iter()
            .filter(|icon| **icon == CursorIcon::Default)
            .count()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl CursorController for RecordingCursor {
    fn set_icon(&mut self, icon: CursorIcon) {
        self.history.push(icon);
    }
}
