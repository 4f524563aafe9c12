// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// One use case per lecture. Each builds its domain objects,
// exercises them, and returns a DemoReport.
//
// Rules for this layer:
//   - No printing here (that's Layer 1)
//   - No clap types here (CLI args are converted first)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

use anyhow::Result;

// Report type and rendering config shared by all lectures
pub mod report;

// Broad (IntoIterator) vs concrete (&Vec) inputs
pub mod loose_coupling;

// Polymorphism over the Animal capability
pub mod function_guarantee;

// Read-only views and factory-only construction
pub mod safe_access;

use function_guarantee::FunctionGuaranteeUseCase;
use loose_coupling::LooseCouplingUseCase;
use report::DemoReport;
use safe_access::SafeAccessUseCase;

/// The lectures available to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    LooseCoupling,
    FunctionGuarantee,
    SafeAccess,
}

impl DemoKind {
    pub const ALL: [DemoKind; 3] = [
        DemoKind::LooseCoupling,
        DemoKind::FunctionGuarantee,
        DemoKind::SafeAccess,
    ];

    /// Name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            DemoKind::LooseCoupling     => "loose-coupling",
            DemoKind::FunctionGuarantee => "function-guarantee",
            DemoKind::SafeAccess        => "safe-access",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            DemoKind::LooseCoupling     => "Accept IntoIterator, not &Vec: carts fed from a Vec, an array and a BTreeMap",
            DemoKind::FunctionGuarantee => "Dog, Cat and Bird handled through one Animal trait",
            DemoKind::SafeAccess        => "Factory-only account with a read-only log vs a leaky one",
        }
    }
}

/// Run exactly one lecture and return its report
pub fn run_demo(kind: DemoKind) -> Result<DemoReport> {
    match kind {
        DemoKind::LooseCoupling     => LooseCouplingUseCase::new().execute(),
        DemoKind::FunctionGuarantee => FunctionGuaranteeUseCase::new().execute(),
        DemoKind::SafeAccess        => SafeAccessUseCase::new().execute(),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_demo_runs() {
        for kind in DemoKind::ALL {
            let report = run_demo(kind).unwrap();
            assert!(!report.sections.is_empty(), "{} produced no output", kind.name());
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = DemoKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DemoKind::ALL.len());
    }
}
