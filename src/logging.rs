// Copyright 2023 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! A ready-made `tracing` subscriber for applications that have none.

/// Send the emulator's `tracing` output to the console.
///
/// On native targets this installs a `tracing-subscriber` formatter filtered by
/// `RUST_LOG` (default `debug`); in the browser it logs to the developer console
/// and installs a panic hook. Does nothing if a global subscriber already exists.
pub fn start_console_logging() {
    use tracing_subscriber::prelude::*;

    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;

        let filter_layer =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
        let _ = tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .try_init();
    }
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let config = tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::DEBUG)
            .build();
        let _ = tracing_subscriber::registry()
            .with(tracing_wasm::WASMLayer::new(config))
            .try_init();
    }
}
