//! Resizable container view
//!
//! [`ResizableView`] wraps a content closure and a divider on one [`Edge`].
//! Dragging the divider writes a new size into the caller's [`Binding`] on every
//! move, and reports the final size once the drag ends.
//!
//! ## Interaction states
//!
//! - `Idle` → `Hovering` when the pointer enters the divider
//! - `Hovering` → `Idle` when it leaves
//! - `Idle`/`Hovering` → `Dragging` on the first drag movement
//! - `Dragging` → `Idle` on release
//!
//! Hover signals are ignored while dragging; the drag handler owns the cursor
//! until release.

pub mod frame;
pub mod layout;

pub use frame::Frame;
pub use layout::{arrange, layout_in_slot, remaining_slot, ResizableLayout};

use crate::binding::Binding;
use crate::cursor::CursorController;
use crate::edge::Edge;
use crate::geometry::{Point, Rect};
use crate::messages::DividerMsg;
use crate::theme::DividerStyle;

/// Something the view can draw into its content rect
pub trait Content {
    fn draw(&mut self, frame: &mut Frame<'_>, rect: Rect);
}

impl<F> Content for F
where
    F: FnMut(&mut Frame<'_>, Rect),
{
    fn draw(&mut self, frame: &mut Frame<'_>, rect: Rect) {
        self(frame, rect)
    }
}

/// Current pointer interaction with the divider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Hovering,
    Dragging,
}

/// Result of handling a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled by the divider; stop propagation
    Consumed {
        /// Whether a redraw is needed
        redraw: bool,
    },

    /// Event was not for the divider; allow fallback handling
    Bubble,
}

impl EventResult {
    pub fn consumed_redraw() -> Self {
        Self::Consumed { redraw: true }
    }

    /// Event blocked but nothing visible changed
    pub fn consumed_no_redraw() -> Self {
        Self::Consumed { redraw: false }
    }

    pub fn needs_redraw(&self) -> bool {
        matches!(self, Self::Consumed { redraw: true })
    }

    pub fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed { .. })
    }
}

type SizeCallback = Box<dyn FnMut(f32)>;

/// Container that lets the user resize it by dragging a divider on one edge
pub struct ResizableView<C> {
    size: Binding<f32>,
    edge: Edge,
    on_size_changed: Option<SizeCallback>,
    content: C,
    style: DividerStyle,
    /// True strictly between the first drag movement and release
    is_pressed: bool,
    is_hovered: bool,
}

impl<C: Content> ResizableView<C> {
    pub fn new(size: Binding<f32>, edge: Edge, content: C) -> Self {
        Self {
            size,
            edge,
            on_size_changed: None,
            content,
            style: DividerStyle::default(),
            is_pressed: false,
            is_hovered: false,
        }
    }

    /// Called once per completed drag with the final size
    pub fn on_size_changed(mut self, callback: impl FnMut(f32) + 'static) -> Self {
        self.on_size_changed = Some(Box::new(callback));
        self
    }

    pub fn style(mut self, style: DividerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Current value of the bound size
    pub fn size(&self) -> f32 {
        self.size.get()
    }

    pub fn divider_style(&self) -> &DividerStyle {
        &self.style
    }

    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    pub fn interaction(&self) -> Interaction {
        if self.is_pressed {
            Interaction::Dragging
        } else if self.is_hovered {
            Interaction::Hovering
        } else {
            Interaction::Idle
        }
    }

    /// Lay the view out inside the slot offered by its parent
    pub fn layout(&self, slot: Rect) -> ResizableLayout {
        layout_in_slot(self.edge, self.size.get(), slot, self.style.thickness)
    }

    /// Apply a divider message.
    ///
    /// `container` is the view's current on-screen frame; drag locations are
    /// measured against it.
    pub fn update(
        &mut self,
        msg: DividerMsg,
        container: Rect,
        cursor: &mut dyn CursorController,
    ) -> EventResult {
        match msg {
            DividerMsg::HoverEnter => {
                if self.is_pressed {
                    return EventResult::consumed_no_redraw();
                }
                tracing::debug!(edge = %self.edge, "divider hover enter");
                self.is_hovered = true;
                self.edge.set_cursor(cursor);
                EventResult::consumed_redraw()
            }

            DividerMsg::HoverExit => {
                if self.is_pressed {
                    return EventResult::consumed_no_redraw();
                }
                tracing::debug!(edge = %self.edge, "divider hover exit");
                self.is_hovered = false;
                cursor.reset();
                EventResult::consumed_redraw()
            }

            DividerMsg::DragChanged { location } => {
                if !self.is_pressed {
                    tracing::debug!(edge = %self.edge, x = location.x, y = location.y, "divider drag start");
                }
                self.is_pressed = true;
                self.edge.set_cursor(cursor);

                match self.edge.size_from_pointer(location, container) {
                    Some(new_size) => {
                        tracing::trace!(edge = %self.edge, size = new_size, "divider drag");
                        self.size.set(new_size);
                    }
                    None => {
                        tracing::trace!(edge = %self.edge, x = location.x, y = location.y, "drag inside guard, size unchanged");
                    }
                }
                EventResult::consumed_redraw()
            }

            DividerMsg::DragEnded => {
                if !self.is_pressed {
                    return EventResult::Bubble;
                }
                self.is_pressed = false;
                self.is_hovered = false;

                let size = self.size.get();
                tracing::info!(edge = %self.edge, size, "divider drag finished");
                if let Some(callback) = self.on_size_changed.as_mut() {
                    callback(size);
                }
                EventResult::consumed_redraw()
            }
        }
    }

    /// Route a pointer move: continues an active drag, otherwise tracks hover
    pub fn pointer_moved(
        &mut self,
        point: Point,
        slot: Rect,
        cursor: &mut dyn CursorController,
    ) -> EventResult {
        let layout = self.layout(slot);

        if self.is_pressed {
            return self.update(
                DividerMsg::DragChanged { location: point },
                layout.container,
                cursor,
            );
        }

        let inside = layout.divider_hit_rect(self.style.hit_slop).contains(point);
        match (inside, self.is_hovered) {
            (true, false) => self.update(DividerMsg::HoverEnter, layout.container, cursor),
            (false, true) => self.update(DividerMsg::HoverExit, layout.container, cursor),
            (true, true) => EventResult::consumed_no_redraw(),
            (false, false) => EventResult::Bubble,
        }
    }

    /// Route a button press; a press on the divider starts the drag immediately
    pub fn pointer_pressed(
        &mut self,
        point: Point,
        slot: Rect,
        cursor: &mut dyn CursorController,
    ) -> EventResult {
        let layout = self.layout(slot);
        if !layout.divider_hit_rect(self.style.hit_slop).contains(point) {
            return EventResult::Bubble;
        }
        self.update(
            DividerMsg::DragChanged { location: point },
            layout.container,
            cursor,
        )
    }

    /// Route a button release; ends an active drag
    pub fn pointer_released(
        &mut self,
        point: Point,
        slot: Rect,
        cursor: &mut dyn CursorController,
    ) -> EventResult {
        if !self.is_pressed {
            return EventResult::Bubble;
        }

        let container = self.layout(slot).container;
        let result = self.update(DividerMsg::DragEnded, container, cursor);

        // Release away from the divider hands the cursor back
        let layout = self.layout(slot);
        if !layout.divider_hit_rect(self.style.hit_slop).contains(point) {
            cursor.reset();
        }
        result
    }

    /// Route the pointer leaving the window
    pub fn pointer_left(&mut self, slot: Rect, cursor: &mut dyn CursorController) -> EventResult {
        if self.is_hovered {
            let container = self.layout(slot).container;
            self.update(DividerMsg::HoverExit, container, cursor)
        } else {
            EventResult::Bubble
        }
    }

    /// Draw content and divider into the frame
    pub fn render(&mut self, frame: &mut Frame<'_>, slot: Rect) {
        let layout = self.layout(slot);

        frame.set_clip(layout.content.non_negative());
        self.content.draw(frame, layout.content);
        frame.clear_clip();

        let color = match self.interaction() {
            Interaction::Idle => self.style.color,
            Interaction::Hovering => self.style.hover_color,
            Interaction::Dragging => self.style.drag_color,
        };
        frame.fill_rect_blended(layout.divider, color.to_argb_u32());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::RecordingCursor;
    use std::cell::Cell;
    use std::rc::Rc;
    use winit::window::CursorIcon;

    struct Blank;

    impl Content for Blank {
        fn draw(&mut self, _frame: &mut Frame<'_>, _rect: Rect) {}
    }

    struct RecordRect(Rc<Cell<Rect>>);

    impl Content for RecordRect {
        fn draw(&mut self, _frame: &mut Frame<'_>, rect: Rect) {
            self.0.set(rect);
        }
    }

    fn view(edge: Edge, size: f32) -> (ResizableView<Blank>, Rc<Cell<f32>>) {
        let cell = Rc::new(Cell::new(size));
        let view = ResizableView::new(Binding::from_cell(Rc::clone(&cell)), edge, Blank);
        (view, cell)
    }

    #[test]
    fn test_hover_sets_and_resets_cursor() {
        let (mut view, _) = view(Edge::Trailing, 200.0);
        let mut cursor = RecordingCursor::new();
        let frame = Rect::new(0.0, 0.0, 200.0, 400.0);

        view.update(DividerMsg::HoverEnter, frame, &mut cursor);
        assert_eq!(view.interaction(), Interaction::Hovering);
        assert_eq!(cursor.current(), Some(CursorIcon::ColResize));

        view.update(DividerMsg::HoverExit, frame, &mut cursor);
        assert_eq!(view.interaction(), Interaction::Idle);
        assert_eq!(cursor.current(), Some(CursorIcon::Default));
    }

    #[test]
    fn test_hover_ignored_while_pressed() {
        let (mut view, _) = view(Edge::Top, 100.0);
        let mut cursor = RecordingCursor::new();
        let frame = Rect::new(0.0, 500.0, 800.0, 100.0);

        view.update(
            DividerMsg::DragChanged {
                location: Point::new(10.0, 480.0),
            },
            frame,
            &mut cursor,
        );
        cursor.clear();

        let result = view.update(DividerMsg::HoverExit, frame, &mut cursor);
        assert_eq!(result, EventResult::consumed_no_redraw());
        assert!(cursor.history.is_empty());
        assert_eq!(view.interaction(), Interaction::Dragging);
    }

    #[test]
    fn test_drag_end_without_drag_is_ignored() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let (view, _) = view(Edge::Leading, 100.0);
        let mut view = view.on_size_changed(move |_| counter.set(counter.get() + 1));
        let mut cursor = RecordingCursor::new();

        let result = view.update(DividerMsg::DragEnded, Rect::default(), &mut cursor);
        assert_eq!(result, EventResult::Bubble);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_render_draws_divider_in_state_color() {
        let (mut view, _) = view(Edge::Trailing, 10.0);
        let style = *view.divider_style();
        let mut buffer = vec![0u32; 20 * 4];
        let mut frame = Frame::new(&mut buffer, 20, 4);

        view.render(&mut frame, Rect::new(0.0, 0.0, 20.0, 4.0));
        assert_eq!(frame.get_pixel(9, 0), style.color.to_argb_u32());
        assert_eq!(frame.get_pixel(10, 0), 0);
    }

    #[test]
    fn test_content_receives_content_rect() {
        let seen = Rc::new(Cell::new(Rect::default()));
        let size = Rc::new(Cell::new(50.0));
        let mut view = ResizableView::new(
            Binding::from_cell(size),
            Edge::Bottom,
            RecordRect(Rc::clone(&seen)),
        );

        let mut buffer = vec![0u32; 100 * 100];
        let mut frame = Frame::new(&mut buffer, 100, 100);
        view.render(&mut frame, Rect::new(0.0, 0.0, 100.0, 100.0));

        assert_eq!(seen.get(), Rect::new(0.0, 0.0, 100.0, 49.0));
    }
}
