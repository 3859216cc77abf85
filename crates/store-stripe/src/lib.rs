//! # store-stripe
//!
//! Stripe-backed payments provider for storefront-gateway-rs.
//!
//! This crate implements the `PaymentsProvider` contract from `store-core`
//! against the Stripe REST API:
//!
//! - **Catalog listings** - products, prices, and price-with-product pairs,
//!   filtered to active records and projected to the summary shapes
//! - **Checkout Sessions** - hosted subscription checkout
//! - **Billing Portal Sessions** - hosted subscription management
//!
//! Session-creation responses are passed through verbatim; catalog responses
//! are reduced to a fixed field set before they leave this crate.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use store_core::PaymentsProvider;
//! use store_stripe::StripeGateway;
//!
//! // Reads STRIPE_SECRET_KEY (sk_test_... or sk_live_...)
//! let gateway = StripeGateway::from_env()?;
//!
//! let catalog = gateway.active_products_with_prices().await?;
//!
//! let session = gateway
//!     .create_subscription_checkout(
//!         "price_123",
//!         "cus_123",
//!         "https://example.com/success",
//!         "https://example.com/cancel",
//!     )
//!     .await?;
//!
//! // Redirect the customer to session.url()
//! ```

pub mod client;
pub mod config;

mod types;

// Re-exports
pub use client::StripeGateway;
pub use config::StripeConfig;
