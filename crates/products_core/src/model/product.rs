//! Product domain model.
//!
//! # Responsibility
//! - Define the persisted product record and its creation payload.
//! - Provide the single validation gate used by repository write/read paths.
//!
//! # Invariants
//! - `id` is assigned exactly once and never reused for another product.
//! - Equality is structural over `id`, `name` and `quantity`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a product.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProductId = String;

/// Persisted product record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the id service on create, or supplied by the caller on update.
    pub id: ProductId,
    pub name: String,
    /// Stock on hand. Not range-checked.
    pub quantity: i32,
}

/// Creation/replacement payload without identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i32,
}

/// Validation failures for product records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductValidationError {
    /// `id` is the empty string.
    EmptyId,
}

impl Display for ProductValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "product id must not be empty"),
        }
    }
}

impl Error for ProductValidationError {}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, quantity: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
        }
    }

    /// Builds a product from a creation payload and an already assigned id.
    ///
    /// Shared by the create path (generated id) and the update path
    /// (caller-supplied id).
    pub fn from_new(id: impl Into<ProductId>, new_product: &NewProduct) -> Self {
        Self::new(id, new_product.name.clone(), new_product.quantity)
    }

    /// Validates the record before persistence or after decoding.
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.id.is_empty() {
            return Err(ProductValidationError::EmptyId);
        }
        Ok(())
    }
}

impl NewProduct {
    pub fn new(name: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NewProduct, Product, ProductValidationError};

    #[test]
    fn from_new_copies_payload_fields() {
        let payload = NewProduct::new("Apfel", 30);
        let product = Product::from_new("1", &payload);
        assert_eq!(product, Product::new("1", "Apfel", 30));
    }

    #[test]
    fn validate_rejects_only_empty_id() {
        assert_eq!(
            Product::new("", "product1", 2).validate(),
            Err(ProductValidationError::EmptyId)
        );
        assert!(Product::new("  ", "product1", 2).validate().is_ok());
        assert!(Product::new("1", "", -4).validate().is_ok());
    }

    #[test]
    fn serializes_as_flat_record() {
        let product = Product::new("3", "product3", 3);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "3", "name": "product3", "quantity": 3 })
        );
    }
}
