//! Contas is a terminal client for the Bills Manager API: it renders a
//! dashboard of billing records, adds bills through a validated form, toggles
//! paid status, and deletes bills against the remote REST service.

pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod errors;
pub mod rules;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Logs go to stderr so they never interleave with rendered tables.
pub fn init() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("contas=warn".parse().unwrap());

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
