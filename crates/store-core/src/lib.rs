//! # store-core
//!
//! Core types and the provider contract for storefront-gateway-rs.
//!
//! This crate provides:
//! - `PaymentsProvider` trait: the capability contract the gateway requires
//!   from the external payments platform
//! - `ProductSummary`, `PriceSummary`, and `ProductWithPrice` catalog
//!   projections
//! - `CheckoutSession` and `PortalSession` opaque session references
//! - `RedirectUrls` for the fixed service-level redirect targets
//! - `GatewayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use store_core::{PaymentsProvider, RedirectUrls};
//!
//! let urls = RedirectUrls::default();
//!
//! // List the catalog (provider-inactive records already dropped)
//! let products = provider.active_products().await?;
//!
//! // Create a hosted checkout page for one unit of a price
//! let session = provider
//!     .create_subscription_checkout(
//!         "price_123",
//!         "cus_456",
//!         &urls.checkout_success_url,
//!         &urls.checkout_cancel_url,
//!     )
//!     .await?;
//!
//! // Redirect the customer to session.url()
//! ```

pub mod catalog;
pub mod error;
pub mod provider;
pub mod session;

// Re-exports for convenience
pub use catalog::{PriceSummary, ProductSummary, ProductWithPrice};
pub use error::{GatewayError, GatewayResult};
pub use provider::{BoxedPaymentsProvider, PaymentsProvider, RedirectUrls};
pub use session::{CheckoutSession, PortalSession};
