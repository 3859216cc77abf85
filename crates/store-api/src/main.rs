//! # Storefront Gateway RS
//!
//! Thin payments facade over Stripe's hosted catalog, checkout, and billing
//! portal.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//!
//! # Run the server
//! storefront-gateway
//! ```

use store_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();

    info!("Payments provider: {}", state.provider.provider_name());
    info!(
        "Checkout redirects: success={}, cancel={}",
        state.urls.checkout_success_url, state.urls.checkout_cancel_url
    );
    info!("Portal return: {}", state.urls.portal_return_url);

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🛒 Storefront Gateway starting on http://{}", addr);
    info!("📦 Catalog: GET http://{}/products", addr);
    info!("💳 Checkout: POST http://{}/create-subscription-checkout", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  🛒 Storefront Gateway RS 🛒
  ━━━━━━━━━━━━━━━━━━━━━━━━━━━
  Thin Stripe payments facade
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
