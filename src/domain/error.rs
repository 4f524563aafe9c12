// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// The domain has exactly one runtime failure: asserting that
// a capability reference is a kind it is not. Everything else
// the lectures reject is rejected by the compiler.

use thiserror::Error;

/// Failure to narrow a `&dyn Animal` to a concrete kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NarrowingError {
    #[error("'{name}' is not a {expected}")]
    KindMismatch {
        /// Name of the animal that was asserted
        name: String,
        /// The concrete kind the caller asked for
        expected: &'static str,
    },
}
