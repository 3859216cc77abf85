//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the payments provider, redirect URLs, and listen configuration.

use std::sync::Arc;
use store_core::{BoxedPaymentsProvider, RedirectUrls};
use store_stripe::StripeGateway;

/// Application configuration
///
/// The service listens on a single fixed port; the only environment-driven
/// value in the whole process is the Stripe secret key, which the gateway
/// reads itself.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl AppConfig {
    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payments provider
    pub provider: BoxedPaymentsProvider,
    /// Redirect URLs for checkout and portal sessions
    pub urls: RedirectUrls,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by the Stripe gateway
    pub fn new() -> anyhow::Result<Self> {
        let gateway = StripeGateway::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;

        Ok(Self {
            provider: Arc::new(gateway) as BoxedPaymentsProvider,
            urls: RedirectUrls::default(),
            config: AppConfig::default(),
        })
    }

    /// Create state around an arbitrary provider (used for wiring tests and
    /// alternative gateways)
    pub fn with_provider(provider: BoxedPaymentsProvider) -> Self {
        Self {
            provider,
            urls: RedirectUrls::default(),
            config: AppConfig::default(),
        }
    }
}
