//! Hulk driver.
//!
//! Ties the evaluation core together: a parsed [`Program`] has its function
//! declarations registered in the session's environment, its body evaluated,
//! and any failure reported once and returned to the caller.
//!
//! # Tracing
//!
//! Set `RUST_LOG` to enable structured logging, e.g.
//! `RUST_LOG=hulk_eval=debug` for call and registration events or
//! `RUST_LOG=hulk_eval=trace` to also see every binding push and pop.

mod program;
mod session;

pub use program::Program;
pub use session::{Session, SessionConfig};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once; only
/// the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
