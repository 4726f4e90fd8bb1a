//! Diagnostic logging setup.

use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

static FILTER: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "terraform_sbom=debug,warn"
    } else {
        "warn"
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Calling this
/// more than once keeps the first subscriber.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let (filter, handle) = reload::Layer::new(filter);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(verbose))
        .try_init();
    if installed.is_ok() {
        let _ = FILTER.set(handle);
    }
}

/// Change the crate's log level after the config file is merged.
///
/// Does nothing when `RUST_LOG` is set or [`init`] never installed a
/// subscriber.
pub fn set_verbose(verbose: bool) {
    if EnvFilter::try_from_default_env().is_ok() {
        return;
    }
    if let Some(handle) = FILTER.get() {
        reload_filter(handle, verbose);
    }
}

fn reload_filter(handle: &reload::Handle<EnvFilter, Registry>, verbose: bool) {
    let _ = handle.reload(EnvFilter::new(default_filter(verbose)));
}
