//! # Catalog Projections
//!
//! Reduced-field views of provider catalog records returned to API callers.
//!
//! The provider owns the catalog; these types are transient projections built
//! fresh on every request. Each projection serializes to a fixed field set,
//! so callers always see the same shape: nullable fields serialize as `null`
//! and empty metadata as `{}`, never skipped.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Projection of a provider product record.
///
/// Serializes to exactly `{id, created, description, images, metadata, name}`.
/// `created` is the provider's epoch-seconds timestamp, passed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Provider product identifier (e.g., "prod_...")
    pub id: String,

    /// Creation time, seconds since the Unix epoch
    pub created: i64,

    /// Description, if the product has one
    pub description: Option<String>,

    /// Image URLs
    pub images: Vec<String>,

    /// Provider metadata (string keys and values)
    pub metadata: HashMap<String, String>,

    /// Display name
    pub name: String,
}

/// Projection of a provider price record.
///
/// Serializes to exactly
/// `{id, created, currency, metadata, product, recurring, type, unit_amount}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    /// Provider price identifier (e.g., "price_...")
    pub id: String,

    /// Creation time, seconds since the Unix epoch
    pub created: i64,

    /// ISO 4217 currency code, lowercase, as the provider sends it
    pub currency: String,

    /// Provider metadata (string keys and values)
    pub metadata: HashMap<String, String>,

    /// Identifier of the product this price belongs to
    pub product: String,

    /// Recurrence descriptor, passed through opaquely (`null` for one-time prices)
    pub recurring: Option<serde_json::Value>,

    /// Price type string ("one_time" or "recurring")
    #[serde(rename = "type")]
    pub price_type: String,

    /// Amount in the smallest currency unit (`null` for metered/custom prices)
    pub unit_amount: Option<i64>,
}

/// A price paired with the product it belongs to, produced by expanding the
/// product inline on the price listing (one provider call, never N+1).
///
/// `price_data.product` always names `product_data.id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithPrice {
    pub product_data: ProductSummary,
    pub price_data: PriceSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_product() -> ProductSummary {
        ProductSummary {
            id: "prod_1".to_string(),
            created: 1_700_000_000,
            description: None,
            images: Vec::new(),
            metadata: HashMap::new(),
            name: "Starter Plan".to_string(),
        }
    }

    fn sample_price() -> PriceSummary {
        PriceSummary {
            id: "price_1".to_string(),
            created: 1_700_000_100,
            currency: "usd".to_string(),
            metadata: HashMap::new(),
            product: "prod_1".to_string(),
            recurring: Some(json!({"interval": "month", "interval_count": 1})),
            price_type: "recurring".to_string(),
            unit_amount: Some(999),
        }
    }

    #[test]
    fn test_product_summary_exact_fields() {
        let value = serde_json::to_value(sample_product()).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<_> = obj.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["created", "description", "id", "images", "metadata", "name"]
        );

        // Nullable and empty fields still appear
        assert!(obj["description"].is_null());
        assert_eq!(obj["images"], json!([]));
        assert_eq!(obj["metadata"], json!({}));
    }

    #[test]
    fn test_price_summary_exact_fields() {
        let value = serde_json::to_value(sample_price()).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<_> = obj.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "created",
                "currency",
                "id",
                "metadata",
                "product",
                "recurring",
                "type",
                "unit_amount"
            ]
        );

        assert_eq!(obj["type"], json!("recurring"));
        assert_eq!(obj["unit_amount"], json!(999));
    }

    #[test]
    fn test_price_summary_one_time_nulls() {
        let mut price = sample_price();
        price.recurring = None;
        price.unit_amount = None;
        price.price_type = "one_time".to_string();

        let value = serde_json::to_value(price).unwrap();
        assert!(value["recurring"].is_null());
        assert!(value["unit_amount"].is_null());
    }

    #[test]
    fn test_product_with_price_camel_case_keys() {
        let pair = ProductWithPrice {
            product_data: sample_product(),
            price_data: sample_price(),
        };

        let value = serde_json::to_value(&pair).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("productData"));
        assert!(obj.contains_key("priceData"));
        assert_eq!(value["priceData"]["product"], value["productData"]["id"]);
    }
}
