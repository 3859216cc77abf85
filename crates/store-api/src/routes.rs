//! # Routes
//!
//! Axum router configuration for the storefront gateway.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /                              - Greeting
/// - GET  /only-active-products          - List active products
/// - GET  /only-active-prices            - List active prices
/// - GET  /products                      - Active products paired with prices
/// - POST /create-subscription-checkout  - Create a subscription checkout session
/// - POST /create-customer-portal        - Create a billing portal session
/// - POST /create-checkout-and-portal    - Portal session, then checkout back to it
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - any origin may call the facade
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::greeting))
        .route("/only-active-products", get(handlers::list_active_products))
        .route("/only-active-prices", get(handlers::list_active_prices))
        .route("/products", get(handlers::list_products_with_prices))
        .route(
            "/create-subscription-checkout",
            post(handlers::create_subscription_checkout),
        )
        .route(
            "/create-customer-portal",
            post(handlers::create_customer_portal),
        )
        .route(
            "/create-checkout-and-portal",
            post(handlers::create_checkout_and_portal),
        )
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
