//! cfgx driver: turns declarations in TypeScript configuration files into
//! plain data.
//!
//! - [`extract_value`] / [`extract_as`]: any declaration, as JSON or as a
//!   caller type
//! - [`load_models`] / [`load_database_config`]: consumer loaders that also
//!   check the shape of the value
//! - [`write_snapshot`]: pretty JSON on disk
//! - [`commands`]: handlers behind the `cfgx` binary

pub mod commands;
mod errors;
mod extract;
mod snapshot;

use std::sync::Once;

pub use errors::Error;
pub use extract::{
    evaluate_symbol, extract_as, extract_value, load_database_config, load_models, ExtractOptions,
};
pub use snapshot::write_snapshot;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set; safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
