//! # Stripe Gateway
//!
//! Implementation of the payments provider contract against the Stripe REST
//! API: catalog listings plus Checkout and Billing Portal session creation.
//!
//! Catalog reads are projected down to the summary shapes; session creation
//! responses are returned verbatim, so callers see exactly what Stripe sent.

use crate::config::StripeConfig;
use crate::types::{ApiError, ApiErrorEnvelope, ListEnvelope, PriceRecord, ProductRecord};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use store_core::{
    CheckoutSession, GatewayError, GatewayResult, PaymentsProvider, PortalSession, PriceSummary,
    ProductSummary, ProductWithPrice,
};
use tracing::{debug, error, info, instrument, warn};

/// Stripe-backed payments provider
///
/// Uses Stripe's hosted surfaces for everything: the product/price catalog
/// for listings, Checkout for subscription payment, the Billing Portal for
/// subscription management. No payment state is held here.
pub struct StripeGateway {
    config: StripeConfig,
    client: Client,
}

impl StripeGateway {
    /// Create a new gateway from an explicit configuration
    pub fn new(config: StripeConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> GatewayResult<Self> {
        let config = StripeConfig::from_env()?;

        // Mode only; the key itself is never logged.
        info!(
            "Stripe configured: mode={}",
            if config.is_test_mode() { "test" } else { "live" }
        );

        Ok(Self::new(config))
    }

    /// GET a Stripe endpoint and decode the JSON response
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> GatewayResult<T> {
        let url = format!("{}{}", self.config.api_base_url, path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Self::read_response(path, response).await
    }

    /// POST a form-encoded body to a Stripe endpoint and decode the response
    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form_params: &[(String, String)],
    ) -> GatewayResult<T> {
        let url = format!("{}{}", self.config.api_base_url, path);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(form_params)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Self::read_response(path, response).await
    }

    /// Turn a Stripe HTTP response into a decoded value or a gateway error.
    ///
    /// Non-2xx responses are mapped to `Provider` errors carrying Stripe's
    /// own error message unmodified when the body parses as a Stripe error
    /// envelope, and the raw status/body otherwise.
    async fn read_response<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> GatewayResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if !status.is_success() {
            error!(
                "Stripe API error: path={}, status={}, body={}",
                path, status, body
            );

            if let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(&body) {
                let ApiError {
                    message,
                    code,
                    param,
                } = envelope.error;
                debug!("Stripe error detail: code={:?}, param={:?}", code, param);
                return Err(GatewayError::Provider {
                    provider: "stripe".to_string(),
                    message,
                });
            }

            return Err(GatewayError::Provider {
                provider: "stripe".to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| GatewayError::Decode(format!("Failed to parse Stripe response: {}", e)))
    }

    /// Fetch the first page of a Stripe listing.
    ///
    /// Pagination is not followed; a truncated catalog is logged and the
    /// first page returned as-is.
    async fn list_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> GatewayResult<Vec<T>> {
        let envelope: ListEnvelope<T> = self.get_json(path, query).await?;

        if envelope.has_more {
            warn!(
                "Stripe listing {} has more records than one page; returning the first page only",
                path
            );
        }

        Ok(envelope.data)
    }
}

#[async_trait]
impl PaymentsProvider for StripeGateway {
    #[instrument(skip(self))]
    async fn active_products(&self) -> GatewayResult<Vec<ProductSummary>> {
        debug!("Listing Stripe products");

        let records: Vec<ProductRecord> = self.list_page("/v1/products", &[]).await?;
        let total = records.len();

        let products: Vec<ProductSummary> = records
            .into_iter()
            .filter(|record| record.active)
            .map(ProductRecord::into_summary)
            .collect();

        info!(
            "Listed Stripe products: {} active of {} fetched",
            products.len(),
            total
        );

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn active_prices(&self) -> GatewayResult<Vec<PriceSummary>> {
        debug!("Listing Stripe prices");

        let records: Vec<PriceRecord> = self.list_page("/v1/prices", &[]).await?;
        let total = records.len();

        let prices: Vec<PriceSummary> = records
            .into_iter()
            .filter(|record| record.active)
            .map(PriceRecord::into_summary)
            .collect();

        info!(
            "Listed Stripe prices: {} active of {} fetched",
            prices.len(),
            total
        );

        Ok(prices)
    }

    #[instrument(skip(self))]
    async fn active_products_with_prices(&self) -> GatewayResult<Vec<ProductWithPrice>> {
        debug!("Listing Stripe prices with expanded products");

        let records: Vec<PriceRecord> = self
            .list_page("/v1/prices", &[("expand[]", "data.product")])
            .await?;
        let total = records.len();

        let mut pairs = Vec::with_capacity(records.len());
        for record in records.into_iter().filter(|record| record.active) {
            pairs.push(record.into_pair()?);
        }

        info!(
            "Listed Stripe catalog pairs: {} active of {} fetched",
            pairs.len(),
            total
        );

        Ok(pairs)
    }

    #[instrument(skip(self))]
    async fn create_subscription_checkout(
        &self,
        price_id: &str,
        customer_id: &str,
        success_url: &str,
        cancel_url: &str,
    ) -> GatewayResult<CheckoutSession> {
        debug!("Creating Stripe checkout session: mode=subscription");

        let form_params: Vec<(String, String)> = vec![
            ("mode".to_string(), "subscription".to_string()),
            ("customer".to_string(), customer_id.to_string()),
            ("payment_method_types[0]".to_string(), "card".to_string()),
            ("line_items[0][price]".to_string(), price_id.to_string()),
            ("line_items[0][quantity]".to_string(), "1".to_string()),
            ("success_url".to_string(), success_url.to_string()),
            ("cancel_url".to_string(), cancel_url.to_string()),
        ];

        let session: CheckoutSession = self
            .post_form("/v1/checkout/sessions", &form_params)
            .await?;

        info!(
            "Created Stripe checkout session: id={}, url={}",
            session.id().unwrap_or("<none>"),
            session.url().unwrap_or("<none>")
        );

        Ok(session)
    }

    #[instrument(skip(self))]
    async fn create_billing_portal(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> GatewayResult<PortalSession> {
        debug!("Creating Stripe billing portal session");

        let form_params: Vec<(String, String)> = vec![
            ("customer".to_string(), customer_id.to_string()),
            ("return_url".to_string(), return_url.to_string()),
        ];

        let session: PortalSession = self
            .post_form("/v1/billing_portal/sessions", &form_params)
            .await?;

        info!(
            "Created Stripe billing portal session: id={}, url={}",
            session.id().unwrap_or("<none>"),
            session.url().unwrap_or("<none>")
        );

        Ok(session)
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}
