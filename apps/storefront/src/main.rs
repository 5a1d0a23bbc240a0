//! # Storefront Host Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Host                                  │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Web Front End / Test Driver                   │  │
//! │  │  • Product Grid         • Product Detail                         │  │
//! │  │  • Cart Page            • Header Badge                           │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 │ JSON lines (stdin / stdout)           │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Host (this crate)                        │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Calls run, reports startup failures              │  │
//! │  │                                                                  │  │
//! │  │  lib.rs ─────► Logging, configuration, catalog, serve loop      │  │
//! │  │                                                                  │  │
//! │  │  commands/ ──► list_products, add_to_cart, get_cart, ...        │  │
//! │  │                                                                  │  │
//! │  │  state/ ─────► CartSession, ConfigState                         │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match storefront_app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("storefront: {}", err);
            ExitCode::FAILURE
        }
    }
}
