//! Command-line argument parsing for the demo window

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::Config;
use crate::edge::Edge;

/// Drag the dividers to resize the panels
#[derive(Parser, Debug)]
#[command(name = "resizable-demo", version, about = "Resizable panel demo")]
pub struct CliArgs {
    /// Only show panels for these edges (repeatable; default: all four)
    #[arg(short, long, value_name = "EDGE")]
    pub edge: Vec<Edge>,

    /// Initial size in pixels for every panel
    #[arg(short, long, value_name = "PX")]
    pub size: Option<f32>,

    /// Load configuration from this file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Settings the demo starts with
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub edges: Vec<Edge>,
    pub config: Config,
}

impl CliArgs {
    /// Resolve arguments against the config file
    pub fn into_config(self) -> Result<StartupConfig> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load(),
        };

        if let Some(size) = self.size {
            config.panels.set_all(size);
        }

        // Canonical order, each edge at most once
        let edges = Edge::ALL
            .into_iter()
            .filter(|edge| self.edge.is_empty() || self.edge.contains(edge))
            .collect();

        Ok(StartupConfig { edges, config })
    }
}
