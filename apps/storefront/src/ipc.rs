//! # JSON Lines Command Protocol
//!
//! One request per input line, one response per output line.
//!
//! ## Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Request / Response                                   │
//! │                                                                         │
//! │  stdin  ► {"command":"add_to_cart","productId":"3","quantity":2}        │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │           Request::AddToCart { product_id, quantity }                  │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │           commands::cart::add_to_cart(...)                             │
//! │                     │                                                   │
//! │         ┌───────────┴────────────┐                                     │
//! │         ▼                        ▼                                     │
//! │  stdout ► {"ok":true,            {"ok":false,                          │
//! │            "data":{...}}          "error":{"code":"NOT_FOUND",         │
//! │                                            "message":"..."}}           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A line that fails to parse or names an unknown command gets a
//! `BAD_REQUEST` response; the host keeps reading.

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use storefront_catalog::{BrowseQuery, Catalog, CategoryFilter, SortOrder};
use tracing::{debug, info, warn};

use crate::commands::{cart, config, product};
use crate::error::ApiError;
use crate::state::{CartSession, ConfigState};

/// A command sent by the client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Request {
    ListProducts {
        #[serde(default)]
        category: CategoryFilter,
        #[serde(default)]
        sort: SortOrder,
    },
    GetProduct {
        id: String,
    },
    ListCategories,
    RelatedProducts {
        id: String,
        #[serde(default)]
        limit: Option<usize>,
    },
    GetCart,
    AddToCart {
        product_id: String,
        #[serde(default)]
        quantity: Option<i64>,
    },
    RemoveFromCart {
        product_id: String,
    },
    UpdateCartItem {
        product_id: String,
        quantity: i64,
    },
    ClearCart,
    GetConfig,
}

/// Response envelope written for every request line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl Response {
    pub fn success(data: Value) -> Self {
        Response {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Response {
            ok: false,
            data: None,
            error: Some(error),
        }
    }
}

impl From<Result<Value, ApiError>> for Response {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => Response::success(data),
            Err(error) => Response::failure(error),
        }
    }
}

// =============================================================================
// Host
// =============================================================================

/// Everything a running storefront owns: configuration, catalog and the
/// single cart session.
#[derive(Debug)]
pub struct Host {
    config: ConfigState,
    catalog: Catalog,
    session: CartSession,
}

impl Host {
    /// Creates a host with an empty cart that follows the configured policy.
    pub fn new(config: ConfigState, catalog: Catalog) -> Self {
        let session = CartSession::new(config.cart_policy);
        Host {
            config,
            catalog,
            session,
        }
    }

    pub fn session(&self) -> &CartSession {
        &self.session
    }

    /// Runs one command and serializes its result.
    pub fn handle(&mut self, request: Request) -> Result<Value, ApiError> {
        let delivery = &self.config.delivery;

        match request {
            Request::ListProducts { category, sort } => {
                let query = BrowseQuery { category, sort };
                to_data(product::list_products(&self.catalog, &query))
            }
            Request::GetProduct { id } => to_data(product::get_product(&self.catalog, &id)?),
            Request::ListCategories => to_data(product::list_categories(&self.catalog)),
            Request::RelatedProducts { id, limit } => {
                to_data(product::related_products(&self.catalog, &id, limit))
            }
            Request::GetCart => to_data(cart::get_cart(&self.session, delivery)?),
            Request::AddToCart {
                product_id,
                quantity,
            } => to_data(cart::add_to_cart(
                &self.catalog,
                &mut self.session,
                delivery,
                &product_id,
                quantity,
            )?),
            Request::RemoveFromCart { product_id } => to_data(cart::remove_from_cart(
                &mut self.session,
                delivery,
                &product_id,
            )?),
            Request::UpdateCartItem {
                product_id,
                quantity,
            } => to_data(cart::update_cart_item(
                &mut self.session,
                delivery,
                &product_id,
                quantity,
            )?),
            Request::ClearCart => to_data(cart::clear_cart(&mut self.session, delivery)?),
            Request::GetConfig => to_data(config::get_config(&self.config)),
        }
    }

    /// Parses a request line, runs it, and returns the response line.
    pub fn handle_line(&mut self, line: &str) -> String {
        let result = serde_json::from_str::<Request>(line)
            .map_err(ApiError::from)
            .and_then(|request| {
                debug!(?request, "Request received");
                self.handle(request)
            });

        if let Err(err) = &result {
            warn!(code = ?err.code, message = %err.message, "Command rejected");
        }

        encode(&Response::from(result))
    }

    /// Reads request lines until end of input, answering each one.
    ///
    /// Blank lines are skipped. Only I/O failures end the loop early.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        let mut handled = 0usize;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let response = self.handle_line(&line);
            writeln!(output, "{}", response)?;
            output.flush()?;
            handled += 1;
        }

        info!(
            handled,
            session_started = %self.session.started_at().to_rfc3339(),
            "Input closed"
        );
        Ok(())
    }
}

fn to_data<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::internal(format!("Failed to encode response: {}", e)))
}

fn encode(response: &Response) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        tracing::error!("Failed to encode response: {}", e);
        r#"{"ok":false,"error":{"code":"INTERNAL","message":"Failed to encode response"}}"#
            .to_string()
    })
}
