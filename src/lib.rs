//! riddl-highlight
//!
//! Syntax highlighting for RIDDL (Reactive Interface to Domain Definition
//! Language): a mode-stack token classifier, a colour theme, and output
//! renderers. Also hosts the one-off Hugo to MkDocs documentation
//! migrator used when the RIDDL docs moved to MkDocs Material.

pub mod config;
pub mod error;
pub mod migrate;
pub mod render;
pub mod syntax;

pub use error::{Error, Result};

use tracing_subscriber::EnvFilter;

/// Send diagnostics to stderr, filtered by `RUST_LOG` (default `warn`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
