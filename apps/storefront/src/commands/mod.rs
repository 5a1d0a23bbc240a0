//! # Commands Module
//!
//! All commands exposed to storefront clients.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Listing, detail page, categories, related
//! ├── cart.rs     ◄─── Cart manipulation
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Client                                                                 │
//! │  ──────                                                                 │
//! │  {"command":"update_cart_item","productId":"3","quantity":2}            │
//! │         │                                                               │
//! │         │ (one JSON line on stdin)                                      │
//! │         ▼                                                               │
//! │  ipc::Host::handle                                                      │
//! │  ─────────────────                                                      │
//! │  fn update_cart_item(                                                   │
//! │      session: &mut CartSession,  ◄── Borrowed from the host            │
//! │      delivery: &DeliveryPolicy,  ◄── From configuration                │
//! │      product_id: &str,           ◄── From the request                  │
//! │      quantity: i64,                                                     │
//! │  ) -> Result<CartSummary, ApiError>                                     │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Client receives: {"ok":true,"data":{...CartSummary}}                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs: catalog commands borrow the
//! catalog, cart commands borrow the session mutably.

pub mod cart;
pub mod config;
pub mod product;
