//! # store-api
//!
//! HTTP API layer for storefront-gateway-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints over the payments provider's catalog and hosted sessions
//! - JSON error responses carrying the provider's own failure messages
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Greeting |
//! | GET | `/only-active-products` | List active products |
//! | GET | `/only-active-prices` | List active prices |
//! | GET | `/products` | Active products paired with prices |
//! | POST | `/create-subscription-checkout` | Create checkout session |
//! | POST | `/create-customer-portal` | Create billing portal session |
//! | POST | `/create-checkout-and-portal` | Portal session, then checkout back to it |
//!
//! ## Design notes
//!
//! `POST /create-checkout-and-portal` creates a billing portal session only
//! to read its `url`, which becomes both the success and cancel redirect of
//! the checkout session created right after. The portal session itself is
//! discarded, and nothing cleans it up when the checkout call fails. The
//! shape is kept for backward compatibility with existing callers; treat it
//! as a quirk, not a pattern to copy.
//!
//! Listing endpoints read a single page from the provider, so a catalog
//! larger than the provider's default page size comes back truncated.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
