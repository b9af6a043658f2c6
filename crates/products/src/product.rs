use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{CatalogError, CatalogResult, Entity, ProductId};

/// One row of the product catalog.
///
/// Records are immutable once loaded; the catalog never edits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    id: ProductId,
    name: String,
    category: String,
    subcategory: String,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    sale_price: Option<f64>,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
}

impl ProductRecord {
    /// Build a record without prices.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            subcategory: subcategory.into(),
            price: None,
            sale_price: None,
            created_at,
        }
    }

    pub fn with_price(mut self, price: Option<f64>) -> Self {
        self.price = price;
        self
    }

    pub fn with_sale_price(mut self, sale_price: Option<f64>) -> Self {
        self.sale_price = sale_price;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn subcategory(&self) -> &str {
        &self.subcategory
    }

    /// `None` means "not applicable", which is not the same as zero.
    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn sale_price(&self) -> Option<f64> {
        self.sale_price
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Check the record-level invariants: a non-blank id and name, and
    /// finite nonnegative prices.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.id.is_blank() {
            return Err(CatalogError::invalid_id(format!(
                "product {:?}: id cannot be blank",
                self.name
            )));
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::validation(format!(
                "product {}: name cannot be empty",
                self.id
            )));
        }
        check_amount(&self.id, "price", self.price)?;
        check_amount(&self.id, "sale_price", self.sale_price)?;
        Ok(())
    }
}

fn check_amount(id: &ProductId, field: &str, amount: Option<f64>) -> CatalogResult<()> {
    match amount {
        Some(v) if !v.is_finite() || v < 0.0 => Err(CatalogError::validation(format!(
            "product {id}: {field} must be a nonnegative number, got {v}"
        ))),
        _ => Ok(()),
    }
}

impl Entity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, 14, 30, 0).unwrap()
    }

    #[test]
    fn deserializes_dataset_shape() {
        let json = r#"{
            "id": 3,
            "name": "Trail Shoe",
            "category": "Apparel",
            "subcategory": "Footwear",
            "price": 79.5,
            "sale_price": null,
            "createdAt": "2024-01-05T14:30:00Z"
        }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id(), &ProductId::Numeric(3));
        assert_eq!(record.price(), Some(79.5));
        assert_eq!(record.sale_price(), None);
        assert_eq!(record.created_at(), test_time());
    }

    #[test]
    fn missing_price_fields_default_to_none() {
        let json = r#"{"id":"p-1","name":"Mug","category":"Home","subcategory":"Kitchen","createdAt":"2024-01-05T14:30:00Z"}"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.price(), None);
        assert_eq!(record.sale_price(), None);
    }

    #[test]
    fn zero_price_is_valid_and_distinct_from_missing() {
        let record = ProductRecord::new(1i64, "Sample", "Promo", "Free", test_time())
            .with_price(Some(0.0));
        assert!(record.validate().is_ok());
        assert_eq!(record.price(), Some(0.0));
    }

    #[test]
    fn validate_rejects_negative_price() {
        let record = ProductRecord::new(1i64, "Broken", "Misc", "Misc", test_time())
            .with_price(Some(-1.0));
        let err = record.validate().unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn validate_rejects_nan_sale_price() {
        let record = ProductRecord::new(1i64, "Broken", "Misc", "Misc", test_time())
            .with_sale_price(Some(f64::NAN));
        assert!(record.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_text_id() {
        let json = r#"{"id":"","name":"Mug","category":"Home","subcategory":"Kitchen","createdAt":"2024-01-05T14:30:00Z"}"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        let err = record.validate().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidId(_)));
    }

    #[test]
    fn negative_integer_ids_are_valid() {
        let record = ProductRecord::new(-3i64, "Refund Voucher", "Misc", "Misc", test_time());
        assert!(record.validate().is_ok());
        assert_eq!(record.id(), &ProductId::Numeric(-3));
    }

    #[test]
    fn validate_rejects_blank_name() {
        let record = ProductRecord::new(1i64, "   ", "Misc", "Misc", test_time());
        assert!(record.validate().is_err());
    }
}
