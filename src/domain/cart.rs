// ============================================================
// Layer 3 — Shopping Carts
// ============================================================
// Two carts that differ ONLY in what `add_items` accepts:
//
//   FlexibleCart::add_items(impl IntoIterator<Item: Into<Product>>)
//     → takes a Vec, a fixed array, a BTreeMap's values,
//       an iterator chain... anything that yields products.
//
//   ListOnlyCart::add_items(&Vec<Product>)
//     → takes a Vec and nothing else. An array holding the
//       exact same products is rejected by the compiler.
//
// Accepting the broad abstraction costs nothing at runtime
// (the generic is monomorphised) and frees every caller from
// converting their data into one particular collection first.
//
// Reference: Rust Book §10.1 (Generic Data Types)
//            Rust Book §13.2 (Iterators)

use crate::domain::product::Product;
use crate::domain::traits::ShoppingCart;

// ─── FlexibleCart ─────────────────────────────────────────────────────────────
/// Cart whose `add_items` accepts any sequence of products.
#[derive(Debug, Default, Clone)]
pub struct FlexibleCart {
    items: Vec<Product>,
}

impl FlexibleCart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every product yielded by `items`, in order.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use rust_decimal::Decimal;
    /// use interface_lectures::domain::cart::FlexibleCart;
    /// use interface_lectures::domain::product::Product;
    /// use interface_lectures::domain::traits::ShoppingCart;
    ///
    /// let mut cart = FlexibleCart::new();
    /// cart.add_items(vec![Product::new("Apple", Decimal::from(100))]);
    /// cart.add_items([Product::new("Grapes", Decimal::from(120))]);
    ///
    /// let mut shelf = BTreeMap::new();
    /// shelf.insert(1, Product::new("Tomato", Decimal::from(90)));
    /// cart.add_items(shelf.values());
    ///
    /// assert_eq!(cart.items().len(), 3);
    /// ```
    pub fn add_items<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: Into<Product>,
    {
        let before = self.items.len();
        self.items.extend(items.into_iter().map(Into::into));
        tracing::debug!("FlexibleCart: added {} items", self.items.len() - before);
    }
}

impl ShoppingCart for FlexibleCart {
    fn items(&self) -> &[Product] {
        &self.items
    }
}

// ─── ListOnlyCart ─────────────────────────────────────────────────────────────
/// Cart whose `add_items` insists on a concrete `Vec`.
#[derive(Debug, Default, Clone)]
pub struct ListOnlyCart {
    items: Vec<Product>,
}

impl ListOnlyCart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every product in `items`. Only a `Vec` will do:
    ///
    /// ```compile_fail
    /// use rust_decimal::Decimal;
    /// use interface_lectures::domain::cart::ListOnlyCart;
    /// use interface_lectures::domain::product::Product;
    ///
    /// let mut cart = ListOnlyCart::new();
    /// let array = [Product::new("Grapes", Decimal::from(120))];
    /// cart.add_items(&array); // expected `&Vec<Product>`, found `&[Product; 1]`
    /// ```
    ///
    /// ```compile_fail
    /// use std::collections::BTreeMap;
    /// use rust_decimal::Decimal;
    /// use interface_lectures::domain::cart::ListOnlyCart;
    /// use interface_lectures::domain::product::Product;
    ///
    /// let mut cart = ListOnlyCart::new();
    /// let mut shelf = BTreeMap::new();
    /// shelf.insert(1, Product::new("Tomato", Decimal::from(90)));
    /// cart.add_items(shelf.values()); // expected `&Vec<Product>`, found `Values<..>`
    /// ```
    // The `&Vec` parameter is the anti-pattern on display here.
    #[allow(clippy::ptr_arg)]
    pub fn add_items(&mut self, items: &Vec<Product>) {
        self.items.extend_from_slice(items);
        tracing::debug!("ListOnlyCart: added {} items", items.len());
    }
}

impl ShoppingCart for ListOnlyCart {
    fn items(&self) -> &[Product] {
        &self.items
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::ProductInfo;
    use rust_decimal::Decimal;
    use std::collections::BTreeMap;

    fn product(name: &str, price: i64) -> Product {
        Product::new(name, Decimal::from(price))
    }

    fn names(cart: &impl ShoppingCart) -> Vec<&str> {
        cart.items().iter().map(|p| p.name()).collect()
    }

    #[test]
    fn test_flexible_cart_keeps_call_order_across_sources() {
        let list  = vec![product("Apple", 100), product("Banana", 50)];
        let array = [product("Grapes", 120), product("Watermelon", 200)];
        let mut sorted = BTreeMap::new();
        // Inserted out of order — the map yields values by key
        sorted.insert(2, product("Potato", 70));
        sorted.insert(1, product("Tomato", 90));

        let mut cart = FlexibleCart::new();
        cart.add_items(&list);
        cart.add_items(array);
        cart.add_items(sorted.values());

        assert_eq!(
            names(&cart),
            ["Apple", "Banana", "Grapes", "Watermelon", "Tomato", "Potato"]
        );
    }

    #[test]
    fn test_flexible_cart_accepts_lazy_iterators() {
        let mut cart = FlexibleCart::new();
        cart.add_items((1..=3).map(|i| product(&format!("Item{i}"), i * 10)));
        assert_eq!(names(&cart), ["Item1", "Item2", "Item3"]);
        assert_eq!(cart.total(), Decimal::from(60));
    }

    #[test]
    fn test_list_only_cart_appends_list() {
        let list = vec![product("Apple", 100), product("Orange", 80)];
        let mut cart = ListOnlyCart::new();
        cart.add_items(&list);
        cart.add_items(&list);
        assert_eq!(cart.items().len(), 4);
        assert_eq!(cart.total(), Decimal::from(360));
        // The caller's list is untouched
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_empty_carts() {
        assert!(FlexibleCart::new().items().is_empty());
        assert_eq!(ListOnlyCart::new().total(), Decimal::ZERO);
    }
}
