//! # Request Handlers
//!
//! Axum request handlers for the storefront gateway.
//! Every handler is a thin pass-through: one or two provider calls, a
//! projection or verbatim echo, and JSON out. No state survives a request.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use store_core::{
    CheckoutSession, GatewayError, PortalSession, PriceSummary, ProductSummary, ProductWithPrice,
};
use tracing::{error, info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create checkout request
#[derive(Debug, Deserialize)]
pub struct CreateCheckoutRequest {
    /// Provider price identifier for the single subscription line item
    #[serde(rename = "priceID")]
    pub price_id: String,
    /// Provider customer identifier
    #[serde(rename = "customerID")]
    pub customer_id: String,
}

/// Create billing portal request
#[derive(Debug, Deserialize)]
pub struct CreatePortalRequest {
    /// Provider customer identifier
    #[serde(rename = "customerID")]
    pub customer_id: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

fn gateway_error_to_response(err: GatewayError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Greeting endpoint
pub async fn greeting() -> &'static str {
    "hello world"
}

/// List products whose upstream `active` flag is true
pub async fn list_active_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductSummary>>, (StatusCode, Json<ErrorResponse>)> {
    let products = state.provider.active_products().await.map_err(|e| {
        error!("Failed to list products: {}", e);
        gateway_error_to_response(e)
    })?;

    Ok(Json(products))
}

/// List prices whose upstream `active` flag is true
pub async fn list_active_prices(
    State(state): State<AppState>,
) -> Result<Json<Vec<PriceSummary>>, (StatusCode, Json<ErrorResponse>)> {
    let prices = state.provider.active_prices().await.map_err(|e| {
        error!("Failed to list prices: {}", e);
        gateway_error_to_response(e)
    })?;

    Ok(Json(prices))
}

/// List active prices paired with their expanded products
pub async fn list_products_with_prices(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductWithPrice>>, (StatusCode, Json<ErrorResponse>)> {
    let pairs = state
        .provider
        .active_products_with_prices()
        .await
        .map_err(|e| {
            error!("Failed to list products with prices: {}", e);
            gateway_error_to_response(e)
        })?;

    Ok(Json(pairs))
}

/// Create a subscription checkout session
///
/// Redirect URLs come from service configuration, never from the request.
/// The provider's session object is echoed back verbatim.
#[instrument(skip(state, request), fields(price_id = %request.price_id, customer_id = %request.customer_id))]
pub async fn create_subscription_checkout(
    State(state): State<AppState>,
    Json(request): Json<CreateCheckoutRequest>,
) -> Result<Json<CheckoutSession>, (StatusCode, Json<ErrorResponse>)> {
    let session = state
        .provider
        .create_subscription_checkout(
            &request.price_id,
            &request.customer_id,
            &state.urls.checkout_success_url,
            &state.urls.checkout_cancel_url,
        )
        .await
        .map_err(|e| {
            error!("Failed to create checkout: {}", e);
            gateway_error_to_response(e)
        })?;

    info!(
        "Created checkout session: {}",
        session.id().unwrap_or("<none>")
    );

    Ok(Json(session))
}

/// Create a billing portal session for an existing customer
#[instrument(skip(state, request), fields(customer_id = %request.customer_id))]
pub async fn create_customer_portal(
    State(state): State<AppState>,
    Json(request): Json<CreatePortalRequest>,
) -> Result<Json<PortalSession>, (StatusCode, Json<ErrorResponse>)> {
    let session = state
        .provider
        .create_billing_portal(&request.customer_id, &state.urls.portal_return_url)
        .await
        .map_err(|e| {
            error!("Failed to create billing portal: {}", e);
            gateway_error_to_response(e)
        })?;

    info!(
        "Created billing portal session: {}",
        session.id().unwrap_or("<none>")
    );

    Ok(Json(session))
}

/// Create a billing portal session, then a checkout session that redirects
/// back to the portal on both success and cancel.
///
/// Only the checkout session is returned; the portal session is discarded
/// once its `url` has been read, and it is not cleaned up if the checkout
/// call fails. See the crate docs for why this shape is kept.
#[instrument(skip(state, request), fields(price_id = %request.price_id, customer_id = %request.customer_id))]
pub async fn create_checkout_and_portal(
    State(state): State<AppState>,
    Json(request): Json<CreateCheckoutRequest>,
) -> Result<Json<CheckoutSession>, (StatusCode, Json<ErrorResponse>)> {
    let portal = state
        .provider
        .create_billing_portal(&request.customer_id, &state.urls.portal_return_url)
        .await
        .map_err(|e| {
            error!("Failed to create billing portal: {}", e);
            gateway_error_to_response(e)
        })?;

    let portal_url = portal.url().ok_or_else(|| {
        error!("Billing portal session did not include a url");
        gateway_error_to_response(GatewayError::Decode(
            "billing portal session did not include a url".to_string(),
        ))
    })?;

    let session = state
        .provider
        .create_subscription_checkout(&request.price_id, &request.customer_id, portal_url, portal_url)
        .await
        .map_err(|e| {
            error!("Failed to create checkout: {}", e);
            gateway_error_to_response(e)
        })?;

    info!(
        "Created checkout session with portal redirect: {}",
        session.id().unwrap_or("<none>")
    );

    Ok(Json(session))
}
