// ============================================================
// Layer 2 — Loose Coupling Lecture
// ============================================================
// Fills two carts from three differently-shaped collections:
//
//   Step 1: a Vec of products        → both carts accept it
//   Step 2: a fixed-size array       → only FlexibleCart
//   Step 3: a BTreeMap's values      → only FlexibleCart
//
// The calls ListOnlyCart would reject are not here at all —
// they do not compile. See the compile_fail examples on
// ListOnlyCart::add_items.
//
// Reference: Rust Book §13 (Iterators and Closures)

use std::collections::BTreeMap;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::application::report::DemoReport;
use crate::domain::cart::{FlexibleCart, ListOnlyCart};
use crate::domain::product::Product;
use crate::domain::traits::ShoppingCart;

#[derive(Debug, Default)]
pub struct LooseCouplingUseCase;

impl LooseCouplingUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self) -> Result<DemoReport> {
        tracing::info!("Running loose coupling lecture");

        let mut flexible_cart  = FlexibleCart::new();
        let mut list_only_cart = ListOnlyCart::new();

        // ── Three shapes of the same data ────────────────────────────────────
        let list_items = vec![
            Product::new("Apple", Decimal::from(100)),
            Product::new("Banana", Decimal::from(50)),
            Product::new("Orange", Decimal::from(80)),
        ];

        let array_items = [
            Product::new("Grapes", Decimal::from(120)),
            Product::new("Watermelon", Decimal::from(200)),
            Product::new("Pineapple", Decimal::from(150)),
        ];

        let sorted_items = BTreeMap::from([
            (1, Product::new("Tomato", Decimal::from(90))),
            (2, Product::new("Potato", Decimal::from(70))),
            (3, Product::new("Carrot", Decimal::from(60))),
        ]);

        // ── FlexibleCart takes all of them ───────────────────────────────────
        flexible_cart.add_items(&list_items);
        flexible_cart.add_items(array_items);
        flexible_cart.add_items(sorted_items.values());

        // ── ListOnlyCart takes the Vec and nothing else ──────────────────────
        list_only_cart.add_items(&list_items);

        tracing::info!(
            "FlexibleCart holds {} items, ListOnlyCart holds {}",
            flexible_cart.items().len(),
            list_only_cart.items().len()
        );

        Ok(DemoReport::new("Loose coupling: broad vs concrete inputs")
            .section("New Cart Items", listing(&flexible_cart))
            .section("Old Cart Items", listing(&list_only_cart)))
    }
}

/// One "Name - Price" line per item, plus the cart total
fn listing(cart: &impl ShoppingCart) -> Vec<String> {
    cart.items()
        .iter()
        .map(ToString::to_string)
        .chain(std::iter::once(format!("Total: {}", cart.total())))
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cart_holds_all_three_sources_in_order() {
        let report = LooseCouplingUseCase::new().execute().unwrap();
        let lines  = &report.find("New Cart Items").unwrap().lines;

        assert_eq!(
            lines[..9],
            [
                "Apple - 100", "Banana - 50", "Orange - 80",
                "Grapes - 120", "Watermelon - 200", "Pineapple - 150",
                "Tomato - 90", "Potato - 70", "Carrot - 60",
            ]
        );
        assert_eq!(lines[9], "Total: 920");
    }

    #[test]
    fn test_old_cart_holds_only_the_list() {
        let report = LooseCouplingUseCase::new().execute().unwrap();
        let lines  = &report.find("Old Cart Items").unwrap().lines;
        assert_eq!(lines, &["Apple - 100", "Banana - 50", "Orange - 80", "Total: 230"]);
    }
}
