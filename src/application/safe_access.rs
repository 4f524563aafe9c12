// ============================================================
// Layer 2 — Safe Access Lecture
// ============================================================
// Runs the same transaction against both accounts, then
// tries to tamper with each log:
//
//   SafeBankAccount  → tampering does not compile, so the
//                      log always matches the total
//   LeakyBankAccount → push / clear / push all succeed, and
//                      the log ends up telling a different
//                      story than the total
//
// Reference: Rust Book §7.2 (Privacy), §17.1 (Encapsulation)

use anyhow::Result;
use rust_decimal::Decimal;

use crate::application::report::DemoReport;
use crate::domain::account::{LeakyBankAccount, SafeBankAccount};

#[derive(Debug, Default)]
pub struct SafeAccessUseCase;

impl SafeAccessUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self) -> Result<DemoReport> {
        tracing::info!("Running safe access lecture");

        let mut safe_account  = SafeBankAccount::create("1234567890");
        let mut leaky_account = LeakyBankAccount::new("0987654321");
        let amount = Decimal::from(1000);

        // ── Protected account: the front door is the only door ───────────────
        safe_account.add_transaction(amount);
        let safe_lines = vec![
            format!("Account: {}", safe_account.account_id()),
            format!("First entry: {}", safe_account.transaction_history().first().unwrap_or("<none>")),
            format!("Entries: {}", safe_account.transaction_history().len()),
            format!("Total: {}", safe_account.total_amount()),
        ];
        safe_account.save()?;

        // ── Leaky account: anyone can rewrite history ────────────────────────
        leaky_account.add_transaction(amount);
        let before = leaky_account.transaction_history().clone();

        let log = leaky_account.transaction_history();
        log.push("Fraudulent transaction. Amount: 1000000".to_string());
        log.clear();
        log.push("New transaction. Amount: -1000000".to_string());
        tracing::warn!(
            account = leaky_account.account_id(),
            "transaction log rewritten from outside the account"
        );

        let mut leaky_lines = vec![format!("Account: {}", leaky_account.account_id())];
        leaky_lines.extend(before.iter().map(|e| format!("Before tampering: {e}")));
        leaky_lines.extend(
            leaky_account
                .transaction_history()
                .iter()
                .map(|e| format!("After tampering: {e}")),
        );
        leaky_lines.push(format!("Entries: {}", leaky_account.transaction_history().len()));
        leaky_lines.push(format!("Total: {}", leaky_account.total_amount()));
        leaky_account.save()?;

        Ok(DemoReport::new("Safe access: read-only views and factories")
            .section("SafeBankAccount", safe_lines)
            .section("LeakyBankAccount", leaky_lines))
    }
}
