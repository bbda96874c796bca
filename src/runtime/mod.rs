//! Runtime module - winit/platform integration for the demo window

pub mod app;

pub use app::App;
