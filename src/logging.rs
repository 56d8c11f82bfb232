// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! The filter is read from `ICED_SHOWCASE_LOG` using the `EnvFilter` syntax
//! (e.g. `iced_showcase=debug`). Without it, only this crate's info events
//! are printed.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const ENV_LOG: &str = "ICED_SHOWCASE_LOG";

/// Filter used when the environment does not provide one.
pub const DEFAULT_FILTER: &str = "iced_showcase=info";

/// Builds the filter from the environment, falling back to [`DEFAULT_FILTER`].
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Calling it twice keeps the first one.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();
}
