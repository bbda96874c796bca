//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use resizable::{
    Binding, Content, DividerMsg, Edge, EventResult, Frame, Point, Rect, RecordingCursor,
    ResizableView,
};

/// Content that draws nothing
pub struct Blank;

impl Content for Blank {
    fn draw(&mut self, _frame: &mut Frame<'_>, _rect: Rect) {}
}

/// A view wired to a caller-owned size, a callback log and a fake cursor
pub struct Harness {
    pub view: ResizableView<Blank>,
    pub size: Rc<Cell<f32>>,
    pub completed: Rc<RefCell<Vec<f32>>>,
    pub cursor: RecordingCursor,
    /// Frame handed to `update`; tests choose it to match the scenario
    pub container: Rect,
}

impl Harness {
    pub fn new(edge: Edge, initial: f32, container: Rect) -> Self {
        let size = Rc::new(Cell::new(initial));
        let completed = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&completed);

        let view = ResizableView::new(Binding::from_cell(Rc::clone(&size)), edge, Blank)
            .on_size_changed(move |final_size| log.borrow_mut().push(final_size));

        Self {
            view,
            size,
            completed,
            cursor: RecordingCursor::new(),
            container,
        }
    }

    /// Harness without a completion callback
    pub fn without_callback(edge: Edge, initial: f32, container: Rect) -> Self {
        let size = Rc::new(Cell::new(initial));
        let view = ResizableView::new(Binding::from_cell(Rc::clone(&size)), edge, Blank);
        Self {
            view,
            size,
            completed: Rc::new(RefCell::new(Vec::new())),
            cursor: RecordingCursor::new(),
            container,
        }
    }

    pub fn send(&mut self, msg: DividerMsg) -> EventResult {
        self.view.update(msg, self.container, &mut self.cursor)
    }

    pub fn drag_to(&mut self, x: f32, y: f32) -> EventResult {
        self.send(DividerMsg::DragChanged {
            location: Point::new(x, y),
        })
    }

    pub fn release(&mut self) -> EventResult {
        self.send(DividerMsg::DragEnded)
    }

    pub fn completions(&self) -> Vec<f32> {
        self.completed.borrow().clone()
    }
}
