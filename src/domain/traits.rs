// ============================================================
// Layer 3 — Core Traits (Capabilities)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// the closest thing to interfaces in C# or Java.
//
// Each lecture is built around one of these capabilities:
//   - ProductInfo / ShoppingCart → loose coupling via broad inputs
//   - Animal                     → guaranteed behaviour across kinds
//   - BankAccount                → safe access to internal state
//
// Code written against a trait only sees the members the
// trait declares. Everything else on the concrete type stays
// out of reach until the caller explicitly narrows it.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use std::any::Any;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::domain::account::TransactionHistory;
use crate::domain::product::Product;

// ─── ProductInfo ──────────────────────────────────────────────────────────────
/// Anything that can be sold: a name and a price.
pub trait ProductInfo {
    /// Display name of the product
    fn name(&self) -> &str;

    /// Unit price
    fn price(&self) -> Decimal;
}

// ─── ShoppingCart ─────────────────────────────────────────────────────────────
/// Read side shared by every cart.
///
/// Adding items is deliberately NOT part of this trait:
/// the two carts disagree on what input they accept,
/// and that disagreement is the point of the lecture.
pub trait ShoppingCart {
    /// Items in insertion order, read-only
    fn items(&self) -> &[Product];

    /// Sum of all item prices
    fn total(&self) -> Decimal {
        self.items().iter().map(ProductInfo::price).sum()
    }
}

// ─── AsAny ────────────────────────────────────────────────────────────────────
/// Upcast to `&dyn Any` so a capability reference can be
/// narrowed back to its concrete kind.
///
/// Implemented for every `'static` sized type, so no kind
/// has to write the boilerplate itself.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ─── Animal ───────────────────────────────────────────────────────────────────
/// Guaranteed behaviour of every animal kind.
///
/// Implementations:
///   - Dog  → folds its breed into `speak`
///   - Cat  → folds its age into `speak`
///   - Bird → folds its color into `speak`
pub trait Animal: AsAny {
    /// The animal's name
    fn name(&self) -> &str;

    /// The animal's call, including its kind-specific detail
    fn speak(&self) -> String;
}

// ─── BankAccount ──────────────────────────────────────────────────────────────
/// The only surface callers get for a protected account.
///
/// Implementations:
///   - SafeBankAccount → obtainable only through `SafeBankAccount::create`
pub trait BankAccount {
    /// Account identifier
    fn account_id(&self) -> &str;

    /// Running total of every transaction amount
    fn total_amount(&self) -> Decimal;

    /// Read-only view over the transaction log
    fn transaction_history(&self) -> TransactionHistory<'_>;

    /// Record a transaction: updates the total and appends to the log
    fn add_transaction(&mut self, amount: Decimal);

    /// Persist current state
    fn save(&self) -> Result<()>;
}
