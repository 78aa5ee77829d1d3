//! Logging
//!
//! Routes `tracing` events to the browser console.

use std::str::FromStr;
use tracing::Level;

/// Install the console subscriber. Unknown level names fall back to INFO.
pub fn init_logging(level: &str) {
    let level = parse_level(level);

    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build(),
    );

    tracing::debug!(%level, "logging initialized");
}

fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}
