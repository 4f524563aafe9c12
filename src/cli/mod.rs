// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// The lecture selector. Each invocation runs exactly one
// lecture and prints its report to stdout.
//
//   1. `run <demo>` — run one lecture
//   2. `list`       — show what can be run
//
// All lecture logic lives in Layer 2 (application).
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, RunArgs};

use crate::application::{report::DemoConfig, run_demo, DemoKind};

#[derive(Parser, Debug)]
#[command(
    name = "interface-lectures",
    version,
    about = "Console lectures on interface idioms in Rust traits."
)]
pub struct Cli {
    /// The subcommand to run (run or list)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route to the subcommand and print whatever it returns.
    pub fn run(self) -> Result<()> {
        let output = self.execute()?;
        print!("{output}");
        Ok(())
    }

    /// Produce the text the subcommand would print.
    pub fn execute(&self) -> Result<String> {
        match &self.command {
            Commands::Run(args) => self.run_lecture(args),
            Commands::List      => Ok(self.list()),
        }
    }

    fn run_lecture(&self, args: &RunArgs) -> Result<String> {
        let kind: DemoKind = args.demo.into();
        let config = DemoConfig::from(args);
        tracing::info!("Running lecture '{}'", kind.name());

        let report = run_demo(kind)?;
        let mut rendered = report.render(&config)?;
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }
        Ok(rendered)
    }

    fn list(&self) -> String {
        DemoKind::ALL
            .iter()
            .map(|k| format!("{:<20} {}\n", k.name(), k.summary()))
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::report::DemoReport;
    use commands::{DemoArg, FormatArg};

    #[test]
    fn test_parse_run_command() {
        let cli = Cli::try_parse_from(["interface-lectures", "run", "safe-access"]).unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.demo, DemoArg::SafeAccess);
                assert_eq!(args.separator_width, 44);
                assert_eq!(args.format, FormatArg::Text);
            }
            Commands::List => panic!("expected run"),
        }
    }

    #[test]
    fn test_unknown_demo_is_rejected() {
        assert!(Cli::try_parse_from(["interface-lectures", "run", "multiple-dispatch"]).is_err());
    }

    #[test]
    fn test_run_text_uses_separator_width() {
        let cli = Cli::try_parse_from([
            "interface-lectures", "run", "loose-coupling", "--separator-width", "10",
        ])
        .unwrap();
        let out = cli.execute().unwrap();
        assert!(out.contains("New Cart Items:\nApple - 100\n"));
        assert!(out.contains(&format!("\n{}\nOld Cart Items:", "-".repeat(10))));
    }

    #[test]
    fn test_run_json_is_valid() {
        let cli = Cli::try_parse_from([
            "interface-lectures", "run", "function-guarantee", "--format", "json",
        ])
        .unwrap();
        let out = cli.execute().unwrap();
        let report: DemoReport = serde_json::from_str(&out).unwrap();
        assert_eq!(report.find("Speak").unwrap().lines.len(), 3);
    }

    #[test]
    fn test_list_names_every_demo() {
        let cli = Cli::try_parse_from(["interface-lectures", "list"]).unwrap();
        let out = cli.execute().unwrap();
        for kind in DemoKind::ALL {
            assert!(out.contains(kind.name()));
        }
    }
}
