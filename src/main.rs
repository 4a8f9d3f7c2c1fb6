#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use guides_core::{RevealMode, SectionConfig};
use tracing_subscriber::EnvFilter;

/// Global section configuration, set from command line
static SECTION_CONFIG: OnceLock<SectionConfig> = OnceLock::new();

/// Get the section configuration (set from command line or default)
pub fn get_section_config() -> SectionConfig {
    SECTION_CONFIG.get().copied().unwrap_or_default()
}

/// Guides - browse and publish game guides
#[derive(Parser, Debug)]
#[command(name = "guides-desktop")]
#[command(about = "Guides - browse and publish game guides")]
struct Args {
    /// Share of the section that must be on screen before it animates in
    #[arg(long, default_value_t = 0.3)]
    reveal_threshold: f64,

    /// Replay the entrance animation every time the section scrolls back in
    #[arg(long)]
    retrigger: bool,

    /// Start with an empty list instead of the built-in guides
    #[arg(long)]
    no_seed: bool,

    /// Delay between consecutive card animations, in milliseconds
    #[arg(long, default_value_t = 100)]
    stagger_ms: u64,
}

impl Args {
    fn section_config(&self) -> SectionConfig {
        SectionConfig {
            reveal_threshold: self.reveal_threshold,
            reveal_mode: if self.retrigger {
                RevealMode::Toggle
            } else {
                RevealMode::Latch
            },
            seed: !self.no_seed,
            stagger: Duration::from_millis(self.stagger_ms),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args
        .section_config()
        .validate()
        .context("invalid section configuration")?;

    let _ = SECTION_CONFIG.set(config);

    tracing::info!(
        threshold = config.reveal_threshold,
        mode = ?config.reveal_mode,
        seed = config.seed,
        "Starting Guides"
    );

    let window_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Гайды")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window_config)
        .launch(app::App);

    Ok(())
}
