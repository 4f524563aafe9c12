// ============================================================
// interface-lectures
// ============================================================
// Three small lectures on interface idioms, told with traits:
//
//   loose coupling     — accept IntoIterator, not &Vec
//   function guarantee — many kinds behind one trait
//   safe access        — read-only views and factory-only types
//
// Layer 1 (cli) → Layer 2 (application) → Layer 3 (domain)
//
// The library target exists so the compile-time lessons can
// be checked as compile_fail doctests.

pub mod application;
pub mod cli;
pub mod domain;
