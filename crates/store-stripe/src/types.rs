//! # Stripe API Types
//!
//! Wire types for the Stripe REST responses this gateway consumes, and the
//! projection step that reduces them to the shapes callers receive.
//!
//! Only the fields the gateway reads are declared; everything else Stripe
//! sends is ignored on decode. The one exception is the session-creation
//! responses, which are passed through verbatim and never typed here.

use serde::Deserialize;
use std::collections::HashMap;
use store_core::{GatewayError, GatewayResult, PriceSummary, ProductSummary, ProductWithPrice};

/// Stripe list envelope: `{"object": "list", "data": [...], "has_more": ...}`.
///
/// Only the first page is ever requested; `has_more` is kept so the caller
/// can log when a catalog was truncated to the provider's page size.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
}

/// A Stripe product record.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProductRecord {
    pub id: String,
    pub active: bool,
    pub created: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub name: String,
}

impl ProductRecord {
    /// Project to the caller-facing summary, dropping the `active` flag and
    /// every field the projection does not carry.
    pub fn into_summary(self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            created: self.created,
            description: self.description,
            images: self.images,
            metadata: self.metadata,
            name: self.name,
        }
    }
}

/// A price's `product` field: an identifier normally, the full record when
/// the listing was requested with `expand[]=data.product`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProductField {
    Id(String),
    Expanded(Box<ProductRecord>),
}

impl ProductField {
    pub fn id(&self) -> &str {
        match self {
            ProductField::Id(id) => id,
            ProductField::Expanded(record) => &record.id,
        }
    }
}

/// A Stripe price record.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PriceRecord {
    pub id: String,
    pub active: bool,
    pub created: i64,
    pub currency: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub product: ProductField,
    #[serde(default)]
    pub recurring: Option<serde_json::Value>,
    #[serde(rename = "type")]
    pub price_type: String,
    #[serde(default)]
    pub unit_amount: Option<i64>,
}

impl PriceRecord {
    /// Project to the caller-facing summary. The `product` field flattens to
    /// its identifier whether or not the record was expanded.
    pub fn into_summary(self) -> PriceSummary {
        let product = self.product.id().to_string();
        PriceSummary {
            id: self.id,
            created: self.created,
            currency: self.currency,
            metadata: self.metadata,
            product,
            recurring: self.recurring,
            price_type: self.price_type,
            unit_amount: self.unit_amount,
        }
    }

    /// Split an expanded price into its `{productData, priceData}` pair.
    ///
    /// Fails if the record arrived without its product expanded; a pair built
    /// from a bare identifier would carry an empty product projection.
    pub fn into_pair(self) -> GatewayResult<ProductWithPrice> {
        let PriceRecord {
            id,
            active: _,
            created,
            currency,
            metadata,
            product,
            recurring,
            price_type,
            unit_amount,
        } = self;

        let product = match product {
            ProductField::Expanded(record) => *record,
            ProductField::Id(_) => {
                return Err(GatewayError::Decode(format!(
                    "price {id} is missing its expanded product"
                )))
            }
        };

        let price_data = PriceSummary {
            id,
            created,
            currency,
            metadata,
            product: product.id.clone(),
            recurring,
            price_type,
            unit_amount,
        };

        Ok(ProductWithPrice {
            product_data: product.into_summary(),
            price_data,
        })
    }
}

/// Stripe error envelope: `{"error": {"message": ..., ...}}`
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub param: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product_json() -> serde_json::Value {
        json!({
            "id": "prod_1",
            "object": "product",
            "active": true,
            "created": 1_700_000_000,
            "default_price": "price_1",
            "description": "Monthly plan",
            "images": ["https://img.example/one.png"],
            "livemode": false,
            "metadata": {"tier": "starter"},
            "name": "Starter",
            "updated": 1_700_000_500
        })
    }

    #[test]
    fn test_product_record_ignores_unknown_fields() {
        let record: ProductRecord = serde_json::from_value(product_json()).unwrap();
        assert_eq!(record.id, "prod_1");
        assert!(record.active);

        let summary = record.into_summary();
        assert_eq!(summary.name, "Starter");
        assert_eq!(summary.metadata.get("tier"), Some(&"starter".to_string()));
    }

    #[test]
    fn test_product_field_plain_id() {
        let record: PriceRecord = serde_json::from_value(json!({
            "id": "price_1",
            "active": true,
            "created": 1_700_000_100,
            "currency": "usd",
            "metadata": {},
            "product": "prod_1",
            "recurring": null,
            "type": "one_time",
            "unit_amount": 4999
        }))
        .unwrap();

        assert_eq!(record.product.id(), "prod_1");
        let summary = record.into_summary();
        assert_eq!(summary.product, "prod_1");
        assert_eq!(summary.price_type, "one_time");
        assert!(summary.recurring.is_none());
    }

    #[test]
    fn test_product_field_expanded() {
        let record: PriceRecord = serde_json::from_value(json!({
            "id": "price_1",
            "active": true,
            "created": 1_700_000_100,
            "currency": "usd",
            "product": product_json(),
            "recurring": {"interval": "month", "interval_count": 1},
            "type": "recurring",
            "unit_amount": 999
        }))
        .unwrap();

        assert_eq!(record.product.id(), "prod_1");

        let pair = record.into_pair().unwrap();
        assert_eq!(pair.product_data.id, "prod_1");
        assert_eq!(pair.price_data.product, "prod_1");
        assert_eq!(pair.price_data.unit_amount, Some(999));
    }

    #[test]
    fn test_into_pair_rejects_unexpanded_product() {
        let record: PriceRecord = serde_json::from_value(json!({
            "id": "price_2",
            "active": true,
            "created": 1_700_000_100,
            "currency": "usd",
            "product": "prod_2",
            "type": "recurring"
        }))
        .unwrap();

        let err = record.into_pair().unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
        assert!(err.to_string().contains("price_2"));
    }

    #[test]
    fn test_error_envelope() {
        let envelope: ApiErrorEnvelope = serde_json::from_value(json!({
            "error": {
                "message": "No such price: 'price_x'",
                "code": "resource_missing",
                "param": "line_items[0][price]",
                "type": "invalid_request_error"
            }
        }))
        .unwrap();

        assert_eq!(envelope.error.message, "No such price: 'price_x'");
        assert_eq!(envelope.error.code.as_deref(), Some("resource_missing"));
        assert_eq!(
            envelope.error.param.as_deref(),
            Some("line_items[0][price]")
        );
    }

    #[test]
    fn test_list_envelope_has_more_defaults_false() {
        let list: ListEnvelope<ProductRecord> =
            serde_json::from_value(json!({"object": "list", "data": []})).unwrap();
        assert!(list.data.is_empty());
        assert!(!list.has_more);
    }
}
