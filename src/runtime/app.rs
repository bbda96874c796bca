use std::cell::Cell;
use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{Context as _, Result};
use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use resizable::cli::StartupConfig;
use resizable::geometry::Axis;
use resizable::view::remaining_slot;
use resizable::{
    Binding, Color, Content, CursorController, DividerStyle, Edge, EventResult, Frame, Interaction, Point, Rect,
    ResizableView, WindowCursor,
};

const BACKGROUND: Color = Color::rgb(0x1E, 0x1F, 0x22);

/// Flat-colored panel body with a thin inner border
pub struct PanelContent {
    fill: Color,
    border: Color,
}

impl PanelContent {
    fn for_edge(edge: Edge) -> Self {
        let fill = match edge {
            Edge::Leading => Color::rgb(0x2B, 0x2D, 0x30),
            Edge::Trailing => Color::rgb(0x27, 0x2A, 0x2E),
            Edge::Top => Color::rgb(0x2E, 0x2B, 0x30),
            Edge::Bottom => Color::rgb(0x2A, 0x2E, 0x2B),
        };
        Self {
            fill,
            border: Color::rgb(0x39, 0x3B, 0x40),
        }
    }
}

impl Content for PanelContent {
    fn draw(&mut self, frame: &mut Frame<'_>, rect: Rect) {
        frame.fill_rect(rect, self.border.to_argb_u32());
        let inner = Rect::new(rect.x + 1.0, rect.y + 1.0, rect.width - 2.0, rect.height - 2.0);
        frame.fill_rect(inner, self.fill.to_argb_u32());
    }
}

/// One resizable panel and the size it owns
struct Panel {
    size: Rc<Cell<f32>>,
    view: ResizableView<PanelContent>,
}

impl Panel {
    fn new(edge: Edge, initial: f32, style: DividerStyle) -> Self {
        let size = Rc::new(Cell::new(initial));
        let view = ResizableView::new(
            Binding::from_cell(Rc::clone(&size)),
            edge,
            PanelContent::for_edge(edge),
        )
        .style(style)
        .on_size_changed(move |final_size| {
            tracing::info!(%edge, final_size, "panel resized");
        });
        Self { size, view }
    }
}

/// Window slot each panel is laid out in, plus what is left in the middle.
///
/// Vertical panels span the full width, horizontal panels share the band
/// between them.
fn panel_slots(window: Rect, panels: &[Panel]) -> (Vec<Rect>, Rect) {
    let mut remaining = window;
    let mut slots = vec![Rect::default(); panels.len()];

    for pass in [Axis::Vertical, Axis::Horizontal] {
        for (slot, panel) in slots.iter_mut().zip(panels) {
            let edge = panel.view.edge();
            if edge.axis() != pass {
                continue;
            }
            *slot = remaining;
            let container = panel.view.layout(remaining).container;
            remaining = remaining_slot(edge, remaining, container);
        }
    }

    (slots, remaining)
}

/// Send a pointer move to every idle panel.
///
/// Panels already hovering see the move first, so leaving one divider for
/// another restores the cursor before the new one claims it. Where hit areas
/// overlap, only the first panel to consume the move may hover; the rest are
/// handed a pointer exit instead. Returns whether to redraw and the index of
/// the panel that consumed the move.
fn route_hover(
    panels: &mut [Panel],
    slots: &[Rect],
    point: Point,
    cursor: &mut dyn CursorController,
) -> (bool, Option<usize>) {
    let mut order: Vec<usize> = (0..panels.len()).collect();
    order.sort_by_key(|&i| panels[i].view.interaction() != Interaction::Hovering);

    let mut redraw = false;
    let mut owner = None;
    for i in order {
        let result = match owner {
            None => panels[i].view.pointer_moved(point, slots[i], cursor),
            Some(_) => panels[i].view.pointer_left(slots[i], cursor),
        };
        redraw |= result.needs_redraw();
        if owner.is_none() && panels[i].view.interaction() == Interaction::Hovering {
            owner = Some(i);
        }
    }
    (redraw, owner)
}

pub struct App {
    startup: StartupConfig,
    panels: Vec<Panel>,
    window: Option<Rc<Window>>,
    // Owns the display connection the surface draws through
    #[allow(dead_code)]
    context: Option<Context<Rc<Window>>>,
    surface: Option<Surface<Rc<Window>, Rc<Window>>>,
    mouse_position: Option<Point>,
}

impl App {
    pub fn new(startup: StartupConfig) -> Self {
        Self {
            startup,
            panels: Vec::new(),
            window: None,
            context: None,
            surface: None,
            mouse_position: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let config = &self.startup.config;
        let window_attributes = Window::default_attributes()
            .with_title("Resizable")
            .with_inner_size(LogicalSize::new(config.window.width, config.window.height));

        let window = Rc::new(
            event_loop
                .create_window(window_attributes)
                .context("Failed to create window")?,
        );
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create softbuffer context: {}", e))?;
        let surface = Surface::new(&context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        // Config sizes are logical; pointer events and the buffer are physical
        let scale = window.scale_factor() as f32;
        let style = config.divider.resolve();
        let style = DividerStyle {
            thickness: style.thickness * scale,
            hit_slop: style.hit_slop * scale,
            ..style
        };
        self.panels = self
            .startup
            .edges
            .iter()
            .map(|&edge| Panel::new(edge, config.panels.get(edge) * scale, style))
            .collect();

        tracing::debug!(panels = self.panels.len(), scale, "window created");

        self.window = Some(window);
        self.context = Some(context);
        self.surface = Some(surface);
        Ok(())
    }

    fn window_rect(&self) -> Rect {
        self.window
            .as_ref()
            .map(|w| {
                let size = w.inner_size();
                Rect::new(0.0, 0.0, size.width as f32, size.height as f32)
            })
            .unwrap_or_default()
    }

    fn handle_event(&mut self, event: &WindowEvent) -> bool {
        let Some(window) = self.window.clone() else {
            return false;
        };
        let mut cursor = WindowCursor::new(&window);
        let (slots, _) = panel_slots(self.window_rect(), &self.panels);

        match event {
            WindowEvent::Resized(_) => true,

            WindowEvent::CursorMoved { position, .. } => {
                let point = Point::from((position.x, position.y));
                self.mouse_position = Some(point);

                // An active drag owns the pointer
                if let Some(i) = self.panels.iter().position(|p| p.view.is_pressed()) {
                    return self.panels[i]
                        .view
                        .pointer_moved(point, slots[i], &mut cursor)
                        .needs_redraw();
                }

                let (redraw, _) = route_hover(&mut self.panels, &slots, point, &mut cursor);
                redraw
            }

            WindowEvent::CursorLeft { .. } => {
                self.mouse_position = None;
                let mut redraw = false;
                for (panel, slot) in self.panels.iter_mut().zip(&slots) {
                    redraw |= panel.view.pointer_left(*slot, &mut cursor).needs_redraw();
                }
                redraw
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let Some(point) = self.mouse_position else {
                    return false;
                };
                for (panel, slot) in self.panels.iter_mut().zip(&slots) {
                    let result = panel.view.pointer_pressed(point, *slot, &mut cursor);
                    if let EventResult::Consumed { redraw } = result {
                        return redraw;
                    }
                }
                false
            }

            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                let point = self.mouse_position.unwrap_or_default();
                let mut redraw = false;
                for (panel, slot) in self.panels.iter_mut().zip(&slots) {
                    redraw |= panel.view.pointer_released(point, *slot, &mut cursor).needs_redraw();
                }
                redraw
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {:#}", e);
                }
                false
            }

            _ => false,
        }
    }

    fn render(&mut self) -> Result<()> {
        let window_rect = self.window_rect();
        let (slots, _) = panel_slots(window_rect, &self.panels);
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };

        let width = window_rect.width as u32;
        let height = window_rect.height as u32;
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            // Minimized
            return Ok(());
        };
        surface
            .resize(w, h)
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        let mut buffer = surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;

        {
            let mut frame = Frame::new(&mut buffer, width as usize, height as usize);
            frame.clear(BACKGROUND.to_argb_u32());
            for (panel, slot) in self.panels.iter_mut().zip(&slots) {
                panel.view.render(&mut frame, *slot);
            }
        }

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }

    /// Current logical sizes, for the exit log line
    fn sizes(&self) -> Vec<(Edge, f32)> {
        let scale = self
            .window
            .as_ref()
            .map_or(1.0, |w| w.scale_factor() as f32);
        self.panels
            .iter()
            .map(|p| (p.view.edge(), p.size.get() / scale))
            .collect()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("{:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        if matches!(event, WindowEvent::CloseRequested) {
            tracing::info!(sizes = ?self.sizes(), "closing");
            event_loop.exit();
            return;
        }

        if self.handle_event(&event) {
            window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}
