// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `run` and `list`.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for unknown demos
//   - the kebab-case demo names from the enum variants
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use crate::application::report::{DemoConfig, OutputFormat};
use crate::application::DemoKind;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one lecture and print its report
    Run(RunArgs),

    /// List the available lectures
    List,
}

/// Lecture selector. Variants become `loose-coupling`,
/// `function-guarantee` and `safe-access` on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoArg {
    /// IEnumerable-style broad input vs a concrete list
    LooseCoupling,
    /// One trait, three animal kinds
    FunctionGuarantee,
    /// Read-only view and factory vs exposed Vec
    SafeAccess,
}

impl From<DemoArg> for DemoKind {
    fn from(arg: DemoArg) -> Self {
        match arg {
            DemoArg::LooseCoupling     => DemoKind::LooseCoupling,
            DemoArg::FunctionGuarantee => DemoKind::FunctionGuarantee,
            DemoArg::SafeAccess        => DemoKind::SafeAccess,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}

/// All arguments for the `run` command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Which lecture to run
    #[arg(value_enum)]
    pub demo: DemoArg,

    /// Width of the dashed rule printed between sections
    #[arg(long, default_value_t = 44)]
    pub separator_width: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
}

/// Convert CLI RunArgs into the application-layer DemoConfig.
/// The application layer never sees clap types.
impl From<&RunArgs> for DemoConfig {
    fn from(a: &RunArgs) -> Self {
        DemoConfig {
            separator_width: a.separator_width,
            format: match a.format {
                FormatArg::Text => OutputFormat::Text,
                FormatArg::Json => OutputFormat::Json,
            },
        }
    }
}
