// ============================================================
// Layer 2 — Demo Reports and Configuration
// ============================================================
// Use cases never print. They return a DemoReport — a title
// plus ordered sections of lines — and the CLI decides how to
// show it (plain text with dashed rules, or JSON).
//
// Keeping output as data is what makes every lecture
// testable without capturing stdout.
//
// Reference: Rust Book §8 (Common Collections)
//            serde documentation (derive)

use serde::{Deserialize, Serialize};

// ─── Demo Configuration ──────────────────────────────────────────────────────
// How a report should be rendered. Built from CLI flags via
// From<RunArgs>, so this layer never sees clap types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    pub separator_width: usize,
    pub format:          OutputFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            separator_width: 44,
            format:          OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

// ─── Report ───────────────────────────────────────────────────────────────────

/// One titled block of output lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    pub heading: String,
    pub lines:   Vec<String>,
}

/// Everything a lecture wants to show, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoReport {
    pub title:    String,
    pub sections: Vec<ReportSection>,
}

impl DemoReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title:    title.into(),
            sections: Vec::new(),
        }
    }

    /// Append a section; returns self so use cases can chain
    pub fn section<I, S>(mut self, heading: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections.push(ReportSection {
            heading: heading.into(),
            lines:   lines.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Find a section by heading
    pub fn find(&self, heading: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.heading == heading)
    }

    /// Plain-text rendering: title, then each section separated
    /// by a dashed rule of `separator_width` characters.
    pub fn render_text(&self, separator_width: usize) -> String {
        let rule = "-".repeat(separator_width);
        let mut out = format!("== {} ==\n", self.title);

        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push_str(&rule);
                out.push('\n');
            }
            out.push_str(&section.heading);
            out.push_str(":\n");
            for line in &section.lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    /// Pretty-printed JSON rendering
    pub fn render_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render according to `config`
    pub fn render(&self, config: &DemoConfig) -> anyhow::Result<String> {
        match config.format {
            OutputFormat::Text => Ok(self.render_text(config.separator_width)),
            OutputFormat::Json => self.render_json(),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DemoReport {
        DemoReport::new("Sample")
            .section("First", ["a", "b"])
            .section("Second", vec![String::from("c")])
    }

    #[test]
    fn test_text_rendering_separates_sections() {
        let text = sample().render_text(4);
        assert_eq!(text, "== Sample ==\nFirst:\na\nb\n----\nSecond:\nc\n");
    }

    #[test]
    fn test_json_rendering_is_valid() {
        let json = sample().render_json().unwrap();
        let back: DemoReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_render_follows_config() {
        let report = sample();
        let text = report.render(&DemoConfig::default()).unwrap();
        assert!(text.contains(&"-".repeat(44)));

        let json_cfg = DemoConfig { format: OutputFormat::Json, ..DemoConfig::default() };
        let json = report.render(&json_cfg).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }

    #[test]
    fn test_find_section() {
        let report = sample();
        assert_eq!(report.find("Second").unwrap().lines, ["c"]);
        assert!(report.find("Missing").is_none());
    }
}
