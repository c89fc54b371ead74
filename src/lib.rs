//! Chartdeck - Multi-Backend Chart Comparison Dashboard
//!
//! Renders one fixed sample dataset through three structurally different
//! chart backends (raster image, declarative JSON document, interactive
//! glyph scene), composes them into one comparison page plus three info
//! pages, and can freeze all pages into a static site.

pub mod charts;
pub mod data;
pub mod web;

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for the binaries (`RUST_LOG` aware,
/// defaults to `info`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
