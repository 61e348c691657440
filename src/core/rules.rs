//! Rewrite rules and the built-in rule sets.
//!
//! A rule is a regex plus a replacement template (`$1`, `${1}`, `$name`).
//! Matching is purely textual: a rule happily rewrites inside comments or
//! string literals of the target file.

use crate::domain::model::Variant;
use crate::utils::error::{NormalizeError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Uncompiled rule, as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub name: String,
    pub pattern: String,
    pub replacement: String,
}

impl RuleDefinition {
    pub fn new(name: &str, pattern: &str, replacement: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RewriteRule {
    name: String,
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    pub fn new(name: &str, pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| NormalizeError::InvalidPattern {
            rule: name.to_string(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            pattern,
            replacement: replacement.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces every leftmost, non-overlapping match.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }
}

impl TryFrom<&RuleDefinition> for RewriteRule {
    type Error = NormalizeError;

    fn try_from(def: &RuleDefinition) -> Result<Self> {
        RewriteRule::new(&def.name, &def.pattern, &def.replacement)
    }
}

/// Ordered rules; each one sees the output of the previous one.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<RewriteRule>,
}

impl RuleSet {
    pub fn for_variant(variant: Variant) -> Result<Self> {
        Self::from_definitions(&builtin_definitions(variant))
    }

    pub fn from_definitions(defs: &[RuleDefinition]) -> Result<Self> {
        let rules = defs
            .iter()
            .map(|def| RewriteRule::try_from(def))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs all rules in order. Borrowed result means nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut current = Cow::Borrowed(text);
        for rule in &self.rules {
            let rewritten = match rule.apply(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(rewritten) => rewritten,
            };
            tracing::debug!("rule '{}' rewrote text", rule.name());
            current = Cow::Owned(rewritten);
        }
        current
    }
}

pub fn builtin_definitions(variant: Variant) -> Vec<RuleDefinition> {
    match variant {
        Variant::TagColor => vec![
            RuleDefinition::new(
                "init-tag",
                r#"std::cout\s*<<\s*"\[Init\]\s*"#,
                r#"std::cout << TAG_COLOR << "[INIT]" << ANSI_RESET << " "#,
            ),
            RuleDefinition::new(
                "cyan-blue-tag",
                r#"(?:ANSI_CYAN|ANSI_BLUE)\s*<<\s*"\[([A-Z]+)\]"\s*<<\s*ANSI_RESET\s*<<\s*" ""#,
                r#"TAG_COLOR << "[${1}]" << ANSI_RESET << " ""#,
            ),
            RuleDefinition::new(
                "green-success-tag",
                r#"ANSI_GREEN\s*<<\s*"\[SUCCESS\]"#,
                r#"TAG_COLOR << "[SUCCESS]" << ANSI_RESET << ""#,
            ),
        ],
        Variant::ResetCleanup => vec![
            RuleDefinition::new(
                "green-success-tag",
                r#"ANSI_GREEN\s*<<\s*"\[SUCCESS\]"#,
                r#"TAG_COLOR << "[SUCCESS]" << ANSI_RESET << ""#,
            ),
            RuleDefinition::new(
                "colored-tag",
                r#"(?:ANSI_CYAN|ANSI_BLUE|ANSI_MAGENTA)\s*<<\s*"\[([A-Z_]+)\]""#,
                r#"TAG_COLOR << "[${1}]""#,
            ),
            RuleDefinition::new(
                "empty-literal-after-reset",
                r#"ANSI_RESET(?:\s*<<\s*"")+\s*<<\s*"#,
                "ANSI_RESET << ",
            ),
            RuleDefinition::new(
                "doubled-reset",
                r"ANSI_RESET(?:\s*<<\s*ANSI_RESET)+",
                "ANSI_RESET",
            ),
        ],
    }
}
