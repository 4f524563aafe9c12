// ============================================================
// Layer 3 — Bank Accounts
// ============================================================
// Two accounts with the same surface and opposite guarantees.
//
//   SafeBankAccount
//     - fields are private, there is no public constructor
//     - the only way in is SafeBankAccount::create, which hands
//       back a Box<dyn BankAccount>, never the concrete struct
//     - the log is exposed as a TransactionHistory: a borrowed,
//       read-only view over the account's own Vec
//     → the log can only grow through add_transaction
//
//   LeakyBankAccount
//     - public constructor
//     - transaction_history() returns &mut Vec<String>
//     → any holder can push fake entries or clear the log,
//       leaving it out of step with the running total
//
// Amounts are not validated in either account. That gap is
// part of the lesson and is left as-is.
//
// Reference: Rust Book §7.2 (Privacy)
//            Rust Book §17.1 (Encapsulation)

use anyhow::Result;
use rust_decimal::Decimal;

use crate::domain::traits::BankAccount;

/// Log line written for every transaction
fn describe(amount: Decimal) -> String {
    format!("Transaction recorded. Amount: {amount}")
}

// ─── TransactionHistory ───────────────────────────────────────────────────────
/// Read-only view over an account's transaction log.
///
/// Borrows the account's storage, so every call to
/// `transaction_history()` sees the log as it is right now.
/// Nothing reachable from the view can add, remove or reorder entries:
///
/// ```compile_fail
/// use interface_lectures::domain::account::SafeBankAccount;
///
/// let account = SafeBankAccount::create("1234567890");
/// account.transaction_history().push("forged".to_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionHistory<'a> {
    entries: &'a [String],
}

impl<'a> TransactionHistory<'a> {
    /// Iterate the entries oldest first
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + 'a {
        let entries = self.entries;
        entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest entry
    pub fn first(&self) -> Option<&'a str> {
        self.entries.first().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.entries.get(index).map(String::as_str)
    }
}

impl<'a> IntoIterator for TransactionHistory<'a> {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}

// ─── SafeBankAccount ──────────────────────────────────────────────────────────
/// Account whose internals are reachable only through `BankAccount`.
///
/// There is no way to build one directly:
///
/// ```compile_fail
/// use interface_lectures::domain::account::SafeBankAccount;
///
/// let account = SafeBankAccount::new("1234567890");
/// ```
///
/// ```compile_fail
/// use rust_decimal::Decimal;
/// use interface_lectures::domain::account::SafeBankAccount;
///
/// let account = SafeBankAccount {
///     account_id: "1234567890".into(),
///     total_amount: Decimal::ZERO,
///     transaction_history: Vec::new(),
/// };
/// ```
#[derive(Debug)]
pub struct SafeBankAccount {
    account_id:          String,
    total_amount:        Decimal,
    transaction_history: Vec<String>,
}

impl SafeBankAccount {
    fn new(account_id: String) -> Self {
        Self {
            account_id,
            total_amount:        Decimal::ZERO,
            transaction_history: Vec::new(),
        }
    }

    /// The only way to obtain a SafeBankAccount.
    ///
    /// Returns the capability, not the struct, so callers never
    /// hold a type that could touch the log directly.
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use interface_lectures::domain::account::SafeBankAccount;
    ///
    /// let mut account = SafeBankAccount::create("1234567890");
    /// account.add_transaction(Decimal::from(1000));
    /// assert_eq!(account.total_amount(), Decimal::from(1000));
    /// ```
    pub fn create(account_id: impl Into<String>) -> Box<dyn BankAccount> {
        Box::new(Self::new(account_id.into()))
    }
}

impl BankAccount for SafeBankAccount {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    fn transaction_history(&self) -> TransactionHistory<'_> {
        TransactionHistory { entries: &self.transaction_history }
    }

    fn add_transaction(&mut self, amount: Decimal) {
        self.total_amount += amount;
        self.transaction_history.push(describe(amount));
        tracing::debug!(account = %self.account_id, %amount, "transaction added");
    }

    fn save(&self) -> Result<()> {
        // Persistence is out of scope; this marks where it would happen.
        tracing::debug!(account = %self.account_id, "save requested (no-op)");
        Ok(())
    }
}

// ─── LeakyBankAccount ─────────────────────────────────────────────────────────
/// Same data as SafeBankAccount, none of the protection.
#[derive(Debug, Default)]
pub struct LeakyBankAccount {
    account_id:          String,
    total_amount:        Decimal,
    transaction_history: Vec<String>,
}

impl LeakyBankAccount {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            ..Self::default()
        }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// Hands out the log itself. Callers can push, clear or
    /// overwrite entries without touching the total.
    pub fn transaction_history(&mut self) -> &mut Vec<String> {
        &mut self.transaction_history
    }

    pub fn add_transaction(&mut self, amount: Decimal) {
        self.total_amount += amount;
        self.transaction_history.push(describe(amount));
        tracing::debug!(account = %self.account_id, %amount, "transaction added");
    }

    pub fn save(&self) -> Result<()> {
        tracing::debug!(account = %self.account_id, "save requested (no-op)");
        Ok(())
    }
}
