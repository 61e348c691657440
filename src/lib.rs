pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{NormalizerConfig, RunSettings};

pub use adapters::{LocalStorage, MemoryStorage};
pub use crate::core::{
    normalizer::Normalizer,
    rules::{RewriteRule, RuleDefinition, RuleSet},
};
pub use domain::model::{Outcome, RunReport, Variant, DONE_MARKER};
pub use utils::error::{NormalizeError, Result};
