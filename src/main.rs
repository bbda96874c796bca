//! Demo window: one resizable panel per edge around an empty center

mod runtime;

use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use resizable::cli::CliArgs;
use runtime::App;

fn main() -> Result<()> {
    resizable::tracing::init();

    let startup = CliArgs::parse().into_config()?;
    tracing::debug!(edges = ?startup.edges, "starting demo");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(startup);
    event_loop.run_app(&mut app)?;

    Ok(())
}
