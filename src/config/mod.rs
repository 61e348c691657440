#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::NormalizerConfig;

use crate::core::rules::RuleSet;
use crate::domain::model::Variant;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation;

/// Files the normalizer processes when nothing else is configured.
pub const DEFAULT_TARGETS: &[&str] = &[
    "std_analyzer.cpp",
    "pair_analyzer.cpp",
    "pseudo_analyzer.cpp",
    "pseudo_pair_analyzer.cpp",
    "eo_cross_analyzer.cpp",
    "analyzer_executor.h",
    "move_tables.cpp",
    "prune_tables.cpp",
];

pub const DEFAULT_ROOT: &str = ".";

/// Effective settings after layering command line over config file over
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub root: String,
    pub targets: Vec<String>,
    pub variant: Variant,
    pub custom_rules: bool,
    pub rules: RuleSet,
    pub dry_run: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            targets: DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect(),
            variant: Variant::default(),
            custom_rules: false,
            rules: RuleSet::default(),
            dry_run: false,
        }
    }
}

impl RunSettings {
    /// Built-in defaults overlaid with a config file. Custom `[[rules]]`
    /// win over the variant's rules.
    pub fn from_config(config: &NormalizerConfig) -> Result<Self> {
        let defaults = Self::default();
        let variant = config.normalizer.variant.unwrap_or(defaults.variant);
        let (rules, custom_rules) = match &config.rules {
            Some(defs) => (RuleSet::from_definitions(defs)?, true),
            None => (RuleSet::for_variant(variant)?, false),
        };

        Ok(Self {
            root: config.normalizer.root.clone().unwrap_or(defaults.root),
            targets: config.normalizer.targets.clone().unwrap_or(defaults.targets),
            variant,
            custom_rules,
            rules,
            dry_run: false,
        })
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig, config: Option<&NormalizerConfig>) -> Result<Self> {
        let mut settings = match config {
            Some(config) => Self::from_config(config)?,
            None => Self::from_config(&NormalizerConfig::default())?,
        };

        // an explicit --variant always selects built-in rules
        if let Some(variant) = cli.variant {
            settings.variant = variant;
            settings.rules = RuleSet::for_variant(variant)?;
            settings.custom_rules = false;
        }
        if let Some(dir) = &cli.dir {
            validation::validate_path("--dir", dir)?;
            settings.root = dir.clone();
        }
        if !cli.targets.is_empty() {
            for target in &cli.targets {
                validation::validate_path("--targets", target)?;
            }
            settings.targets = cli.targets.clone();
        }
        settings.dry_run = cli.dry_run;

        Ok(settings)
    }
}
