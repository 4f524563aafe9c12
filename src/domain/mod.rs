// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits that the lectures are about.
//
// Rules for this layer:
//   - NO printing (use cases build reports, the CLI prints)
//   - NO clap or serde_json types
//   - Only structs, enums, traits and the functions that
//     operate purely in terms of those traits
//
// Each lecture maps onto a pair of modules:
//   loose coupling       → product + cart
//   function guarantee   → animal
//   safe access          → account
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Capability traits shared by the concrete types below
pub mod traits;

// The one runtime error the domain can produce
pub mod error;

// Immutable name + price value
pub mod product;

// FlexibleCart vs ListOnlyCart
pub mod cart;

// Dog, Cat, Bird and capability-only helpers
pub mod animal;

// SafeBankAccount vs LeakyBankAccount
pub mod account;
