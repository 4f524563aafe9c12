// ============================================================
// Layer 3 — Product Domain Type
// ============================================================
// A plain value: a name and a price. Created once, never
// mutated, compared by value.
//
// Prices use rust_decimal::Decimal rather than f64 so that
// 0.1 + 0.2 really is 0.3 when carts add things up.
//
// Reference: Rust Book §5 (Structs and Methods)

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::traits::ProductInfo;

/// An item that can be put in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name:  String,
    price: Decimal,
}

impl Product {
    /// Create a new Product.
    ///
    /// Example:
    ///   let apple = Product::new("Apple", Decimal::from(100));
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl ProductInfo for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Decimal {
        self.price
    }
}

/// Lets carts take borrowed products (`&Vec`, `map.values()`)
/// as well as owned ones.
impl From<&Product> for Product {
    fn from(p: &Product) -> Self {
        p.clone()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.price)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_cart_listing() {
        let p = Product::new("Apple", Decimal::from(100));
        assert_eq!(p.to_string(), "Apple - 100");
    }

    #[test]
    fn test_value_equality() {
        let a = Product::new("Banana", Decimal::from(50));
        let b = Product::new("Banana".to_string(), Decimal::new(50, 0));
        assert_eq!(a, b);
        assert_eq!(Product::from(&a), b);
    }

    #[test]
    fn test_capability_accessors() {
        let p = Product::new("Orange", Decimal::new(805, 1));
        assert_eq!(p.name(), "Orange");
        assert_eq!(p.price(), Decimal::new(805, 1));
    }
}
