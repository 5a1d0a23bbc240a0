//! # State Module
//!
//! Application state for the storefront host.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each command
//! handler borrows only the state it needs:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │   Catalog    │  │   CartSession    │  │   ConfigState    │          │
//! │  │              │  │                  │  │                  │          │
//! │  │  products    │  │  CartState       │  │  store_name      │          │
//! │  │  (read-only) │  │  CartPolicy      │  │  delivery policy │          │
//! │  │              │  │  started_at      │  │  cart policy     │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  OWNERSHIP:                                                            │
//! │  • Catalog: read-only after loading                                    │
//! │  • CartSession: borrowed mutably, one command at a time                │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::CartSession;
pub use config::{ConfigError, ConfigState};
