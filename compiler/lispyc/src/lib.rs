//! Lispy command-line driver.
//!
//! The binary (`lispy`) is a thin argument matcher over the commands in
//! [`commands`]; everything that produces output takes a writer so the
//! integration tests can drive it without a terminal.

pub mod commands;
mod error;
pub mod report;

pub use error::CliError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding an `EnvFilter` directive for debug output.
pub const LOG_ENV: &str = "LISPY_LOG";

/// Install the tree-shaped tracing subscriber.
///
/// Does nothing unless `LISPY_LOG` is set, e.g. `LISPY_LOG=lispy_eval=trace`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let Ok(directives) = std::env::var(LOG_ENV) else {
            return;
        };
        let filter = EnvFilter::new(directives);
        let installed = tracing_subscriber::registry()
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
        if installed.is_err() {
            eprintln!("warning: a tracing subscriber is already installed; {LOG_ENV} ignored");
        }
    });
}
