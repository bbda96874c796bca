//! Resizable - a container that resizes an adjacent panel by dragging a divider
//!
//! The divider sits on one [`Edge`] of the container. Dragging it maps the
//! pointer position to a new size, written straight into a caller-owned
//! [`Binding`]; a completion callback receives the final size once the drag ends.
//!
//! ```no_run
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use resizable::{Binding, Edge, Frame, Rect, ResizableView};
//!
//! fn paint_sidebar(frame: &mut Frame<'_>, rect: Rect) {
//!     frame.fill_rect(rect, 0xFF2B2D30);
//! }
//!
//! let width = Rc::new(Cell::new(240.0_f32));
//! let sidebar = ResizableView::new(
//!     Binding::from_cell(Rc::clone(&width)),
//!     Edge::Trailing,
//!     paint_sidebar,
//! )
//! .on_size_changed(|size| println!("sidebar is now {size}px"));
//! ```

pub mod binding;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod cursor;
pub mod edge;
pub mod geometry;
pub mod messages;
pub mod theme;
pub mod tracing;
pub mod view;

// Re-export commonly used types
pub use binding::Binding;
pub use config::Config;
pub use cursor::{CursorController, RecordingCursor, WindowCursor};
pub use edge::Edge;
pub use geometry::{Axis, Point, Rect};
pub use messages::DividerMsg;
pub use theme::{Color, DividerStyle};
pub use view::{Content, EventResult, Frame, Interaction, ResizableView};
