use serde::{Deserialize, Serialize};
use std::fmt;

/// Which built-in rule set to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// `[Init]`, `ANSI_CYAN`/`ANSI_BLUE` and `ANSI_GREEN` success tags to `TAG_COLOR`.
    #[default]
    TagColor,
    /// Tag normalization plus collapsing of doubled `ANSI_RESET` markers.
    ResetCleanup,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::TagColor => write!(f, "tag-color"),
            Variant::ResetCleanup => write!(f, "reset-cleanup"),
        }
    }
}

/// Per-file result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Updated(String),
    Unchanged(String),
    Skipped(String),
    /// Dry run: the file would have been rewritten.
    WouldUpdate(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Updated(name) => write!(f, "Updated {}", name),
            Outcome::Unchanged(name) => write!(f, "No changes in {}", name),
            Outcome::Skipped(name) => write!(f, "Skipped {} (not found)", name),
            Outcome::WouldUpdate(name) => write!(f, "Would update {}", name),
        }
    }
}

pub const DONE_MARKER: &str = "Done!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<Outcome>,
}

impl RunReport {
    pub fn updated(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Updated(_) | Outcome::WouldUpdate(_)))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Unchanged(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped(_)))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_lines() {
        assert_eq!(Outcome::Updated("a.cpp".into()).to_string(), "Updated a.cpp");
        assert_eq!(
            Outcome::Unchanged("a.cpp".into()).to_string(),
            "No changes in a.cpp"
        );
        assert_eq!(
            Outcome::Skipped("a.cpp".into()).to_string(),
            "Skipped a.cpp (not found)"
        );
        assert_eq!(
            Outcome::WouldUpdate("a.cpp".into()).to_string(),
            "Would update a.cpp"
        );
        assert_eq!(DONE_MARKER, "Done!");
    }

    #[test]
    fn test_report_counters() {
        let report = RunReport {
            outcomes: vec![
                Outcome::Updated("a".into()),
                Outcome::Skipped("b".into()),
                Outcome::Unchanged("c".into()),
                Outcome::Skipped("d".into()),
            ],
        };
        assert_eq!(report.updated(), 1);
        assert_eq!(report.unchanged(), 1);
        assert_eq!(report.skipped(), 2);
    }

    #[test]
    fn test_variant_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            variant: Variant,
        }
        let w: Wrapper = toml::from_str(r#"variant = "reset-cleanup""#).unwrap();
        assert_eq!(w.variant, Variant::ResetCleanup);
        assert_eq!(Variant::default().to_string(), "tag-color");
    }
}
