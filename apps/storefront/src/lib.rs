//! # Storefront Host Library
//!
//! Core library for the storefront command host.
//! This is the main entry point that configures and runs the host loop.
//!
//! ## Module Organization
//! ```text
//! storefront_app/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── ipc.rs          ◄─── JSON-lines requests, responses, Host
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Owned cart session
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Catalog browsing commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── config.rs   ◄─── Configuration command
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod ipc;
pub mod state;

use std::io;

use storefront_catalog::Catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::StartupError;
use ipc::Host;
use state::ConfigState;

/// Runs the storefront host until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, writing to stderr             │
/// │     • Default: INFO (DEBUG for storefront crates), RUST_LOG overrides   │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults overridden by STOREFRONT_* variables                     │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • STOREFRONT_CATALOG_PATH if set                                    │
/// │     • Otherwise the bundled catalog                                     │
/// │                                                                         │
/// │  4. Start Session ────────────────────────────────────────────────────► │
/// │     • Empty cart following the configured stock policy                  │
/// │                                                                         │
/// │  5. Serve ────────────────────────────────────────────────────────────► │
/// │     • One JSON request per stdin line, one response per stdout line     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), StartupError> {
    init_tracing();

    info!("Starting storefront host");

    let config = ConfigState::from_env()?;
    info!(
        store = %config.store_name,
        enforce_stock_limit = config.cart_policy.enforce_stock_limit,
        "Configuration loaded"
    );

    let catalog = load_catalog(&config)?;
    info!(products = catalog.len(), "Catalog ready");

    let mut host = Host::new(config, catalog);

    let stdin = io::stdin();
    let stdout = io::stdout();
    host.serve(stdin.lock(), stdout.lock())?;

    info!("Storefront host stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr; stdout carries only protocol responses.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for storefront crates only
/// - Default: INFO, DEBUG for storefront crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads the configured catalog file, or the bundled catalog when none is set.
fn load_catalog(config: &ConfigState) -> Result<Catalog, StartupError> {
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_bundled_catalog() {
        let catalog = load_catalog(&ConfigState::default()).unwrap();
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_load_missing_catalog_file() {
        let config = ConfigState {
            catalog_path: Some(PathBuf::from("/no/such/catalog.json")),
            ..ConfigState::default()
        };
        assert!(matches!(load_catalog(&config), Err(StartupError::Catalog(_))));
    }
}
