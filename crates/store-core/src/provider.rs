//! # Payments Provider Contract
//!
//! The fixed capability contract the gateway requires from its external
//! payments platform. The HTTP layer depends on this trait, never on a
//! concrete provider, so the provider implementation stays swappable and
//! tests can stand in a mock.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   PaymentsProvider (trait)                  │
//! │  ├── active_products()                                      │
//! │  ├── active_prices()                                        │
//! │  ├── active_products_with_prices()                          │
//! │  ├── create_subscription_checkout()                         │
//! │  └── create_billing_portal()                                │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                            │
//!                   ┌────────┴────────┐
//!                   │  StripeGateway  │
//!                   └─────────────────┘
//! ```

use crate::catalog::{PriceSummary, ProductSummary, ProductWithPrice};
use crate::error::GatewayResult;
use crate::session::{CheckoutSession, PortalSession};
use async_trait::async_trait;
use std::sync::Arc;

/// Capability contract for the external payments platform.
///
/// Catalog operations fetch a single page of records, keep only those the
/// provider marks `active`, and project them. Inactive records are silently
/// dropped; provider ordering is preserved. Records beyond the provider's
/// first page are not fetched, so large catalogs may be truncated to the
/// provider's default page size.
///
/// Session operations return the provider's session object verbatim.
#[async_trait]
pub trait PaymentsProvider: Send + Sync {
    /// List the active products in the provider catalog.
    async fn active_products(&self) -> GatewayResult<Vec<ProductSummary>>;

    /// List the active prices in the provider catalog.
    async fn active_prices(&self) -> GatewayResult<Vec<PriceSummary>>;

    /// List active prices with their product expanded inline, split into
    /// product/price pairs. One provider call, never one per price.
    async fn active_products_with_prices(&self) -> GatewayResult<Vec<ProductWithPrice>>;

    /// Create a subscription-mode checkout session for one unit of the given
    /// price, billed to the given customer.
    ///
    /// # Arguments
    /// * `price_id` - Provider price identifier (opaque, not validated here)
    /// * `customer_id` - Provider customer identifier (opaque)
    /// * `success_url` - Redirect target after successful payment
    /// * `cancel_url` - Redirect target if the customer backs out
    async fn create_subscription_checkout(
        &self,
        price_id: &str,
        customer_id: &str,
        success_url: &str,
        cancel_url: &str,
    ) -> GatewayResult<CheckoutSession>;

    /// Create a billing-portal session for an existing customer.
    ///
    /// # Arguments
    /// * `customer_id` - Provider customer identifier (opaque)
    /// * `return_url` - Where the portal sends the customer when they leave
    async fn create_billing_portal(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> GatewayResult<PortalSession>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a boxed payments provider (dynamic dispatch)
pub type BoxedPaymentsProvider = Arc<dyn PaymentsProvider>;

/// Redirect targets for provider-hosted pages.
///
/// Fixed at the service level and never derived from the request. The
/// defaults are the gateway's configured literals; the builder methods exist
/// so tests can point redirects elsewhere.
#[derive(Debug, Clone)]
pub struct RedirectUrls {
    /// Checkout redirect after successful payment
    pub checkout_success_url: String,
    /// Checkout redirect when the customer backs out
    pub checkout_cancel_url: String,
    /// Where the billing portal returns the customer
    pub portal_return_url: String,
}

impl RedirectUrls {
    /// Builder: set the checkout success URL
    pub fn with_success_url(mut self, url: impl Into<String>) -> Self {
        self.checkout_success_url = url.into();
        self
    }

    /// Builder: set the checkout cancel URL
    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.checkout_cancel_url = url.into();
        self
    }

    /// Builder: set the portal return URL
    pub fn with_portal_return_url(mut self, url: impl Into<String>) -> Self {
        self.portal_return_url = url.into();
        self
    }
}

impl Default for RedirectUrls {
    fn default() -> Self {
        Self {
            checkout_success_url: "https://example.com/success".to_string(),
            checkout_cancel_url: "https://example.com/cancel".to_string(),
            portal_return_url: "https://example.com/account".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;

    struct StubProvider;

    #[async_trait]
    impl PaymentsProvider for StubProvider {
        async fn active_products(&self) -> GatewayResult<Vec<ProductSummary>> {
            Ok(Vec::new())
        }

        async fn active_prices(&self) -> GatewayResult<Vec<PriceSummary>> {
            Ok(Vec::new())
        }

        async fn active_products_with_prices(&self) -> GatewayResult<Vec<ProductWithPrice>> {
            Ok(Vec::new())
        }

        async fn create_subscription_checkout(
            &self,
            _price_id: &str,
            _customer_id: &str,
            _success_url: &str,
            _cancel_url: &str,
        ) -> GatewayResult<CheckoutSession> {
            Err(GatewayError::Network("stub".into()))
        }

        async fn create_billing_portal(
            &self,
            _customer_id: &str,
            _return_url: &str,
        ) -> GatewayResult<PortalSession> {
            Err(GatewayError::Network("stub".into()))
        }

        fn provider_name(&self) -> &'static str {
            "stub"
        }
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let provider: BoxedPaymentsProvider = Arc::new(StubProvider);

        assert_eq!(provider.provider_name(), "stub");
        assert!(provider.active_products().await.unwrap().is_empty());
        assert!(provider
            .create_billing_portal("cus_1", "https://example.com/account")
            .await
            .is_err());
    }

    #[test]
    fn test_redirect_urls_defaults() {
        let urls = RedirectUrls::default();

        assert_eq!(urls.checkout_success_url, "https://example.com/success");
        assert_eq!(urls.checkout_cancel_url, "https://example.com/cancel");
        assert_eq!(urls.portal_return_url, "https://example.com/account");
    }

    #[test]
    fn test_redirect_urls_builder() {
        let urls = RedirectUrls::default()
            .with_success_url("https://shop.test/done")
            .with_cancel_url("https://shop.test/back")
            .with_portal_return_url("https://shop.test/account");

        assert_eq!(urls.checkout_success_url, "https://shop.test/done");
        assert_eq!(urls.checkout_cancel_url, "https://shop.test/back");
        assert_eq!(urls.portal_return_url, "https://shop.test/account");
    }
}
