use crate::core::rules::RuleDefinition;
use crate::domain::model::Variant;
use crate::utils::error::{NormalizeError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalizerConfig {
    #[serde(default)]
    pub normalizer: NormalizerSection,
    /// When present, replaces the variant's built-in rules.
    pub rules: Option<Vec<RuleDefinition>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalizerSection {
    pub variant: Option<Variant>,
    pub root: Option<String>,
    pub targets: Option<Vec<String>>,
}

impl NormalizerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| NormalizeError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(root) = &self.normalizer.root {
            validation::validate_path("normalizer.root", root)?;
        }

        if let Some(targets) = &self.normalizer.targets {
            validation::validate_non_empty_list("normalizer.targets", targets)?;
            for target in targets {
                validation::validate_path("normalizer.targets", target)?;
            }
        }

        if let Some(rules) = &self.rules {
            validation::validate_non_empty_list("rules", rules)?;
            for rule in rules {
                validation::validate_non_empty_string("rules.name", &rule.name)?;
                validation::validate_non_empty_string(
                    &format!("rules.{}.pattern", rule.name),
                    &rule.pattern,
                )?;
                // surfaces regex errors before any file is touched
                regex::Regex::new(&rule.pattern).map_err(|source| {
                    NormalizeError::InvalidPattern {
                        rule: rule.name.clone(),
                        source,
                    }
                })?;
            }
        }

        Ok(())
    }
}

impl Validate for NormalizerConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[normalizer]
variant = "reset-cleanup"
root = "./src"
targets = ["std_analyzer.cpp", "move_tables.cpp"]

[[rules]]
name = "init-tag"
pattern = 'std::cout\s*<<\s*"\[Init\]\s*'
replacement = 'std::cout << TAG_COLOR << "[INIT]" << ANSI_RESET << " '
"#;

        let config = NormalizerConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.normalizer.variant, Some(Variant::ResetCleanup));
        assert_eq!(config.normalizer.root.as_deref(), Some("./src"));
        assert_eq!(config.normalizer.targets.as_ref().map(Vec::len), Some(2));
        let rules = config.rules.as_ref().unwrap();
        assert_eq!(rules[0].name, "init-tag");
        assert_eq!(rules[0].pattern, r#"std::cout\s*<<\s*"\[Init\]\s*"#);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = NormalizerConfig::from_toml_str("").unwrap();
        assert!(config.normalizer.variant.is_none());
        assert!(config.rules.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let err = NormalizerConfig::from_toml_str("[normalizer]\nvariant = \"rainbow\"\n");
        assert!(matches!(err, Err(NormalizeError::TomlError(_))));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = NormalizerConfig::from_toml_str("[normalizer]\ntarget = [\"a.cpp\"]\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_config_validation() {
        let empty_targets = NormalizerConfig::from_toml_str("[normalizer]\ntargets = []\n").unwrap();
        assert!(matches!(
            empty_targets.validate(),
            Err(NormalizeError::MissingConfigError { .. })
        ));

        let bad_regex = NormalizerConfig::from_toml_str(
            "[[rules]]\nname = \"broken\"\npattern = \"(open\"\nreplacement = \"x\"\n",
        )
        .unwrap();
        assert!(matches!(
            bad_regex.validate(),
            Err(NormalizeError::InvalidPattern { .. })
        ));

        let blank_name = NormalizerConfig::from_toml_str(
            "[[rules]]\nname = \" \"\npattern = \"a\"\nreplacement = \"b\"\n",
        )
        .unwrap();
        assert!(blank_name.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[normalizer]\ntargets = [\"pair_analyzer.cpp\"]\n")
            .unwrap();

        let config = NormalizerConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.normalizer.targets,
            Some(vec!["pair_analyzer.cpp".to_string()])
        );
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let err = NormalizerConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, NormalizeError::Io { .. }));
    }
}
