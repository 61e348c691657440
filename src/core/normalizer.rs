use crate::core::rules::RuleSet;
use crate::domain::model::{Outcome, RunReport};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::borrow::Cow;

/// Batch text normalizer: read, rewrite, and write back only what changed.
pub struct Normalizer<S: Storage> {
    storage: S,
    targets: Vec<String>,
    rules: RuleSet,
    dry_run: bool,
}

impl<S: Storage> Normalizer<S> {
    pub fn new(storage: S, targets: Vec<String>, rules: RuleSet) -> Self {
        Self {
            storage,
            targets,
            rules,
            dry_run: false,
        }
    }

    /// Report what would change without writing anything.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn run(&self) -> Result<RunReport> {
        self.run_with(|_| {})
    }

    /// Processes targets in order, calling `on_outcome` as each file
    /// finishes. The first fatal error stops the batch; files already
    /// written stay written.
    pub fn run_with<F>(&self, mut on_outcome: F) -> Result<RunReport>
    where
        F: FnMut(&Outcome),
    {
        tracing::info!(
            "Normalizing {} target(s) with {} rule(s){}",
            self.targets.len(),
            self.rules.len(),
            if self.dry_run { " (dry run)" } else { "" }
        );

        let mut report = RunReport::default();
        for name in &self.targets {
            let outcome = self.process(name)?;
            on_outcome(&outcome);
            report.outcomes.push(outcome);
        }

        tracing::info!(
            "Finished: {} updated, {} unchanged, {} skipped",
            report.updated(),
            report.unchanged(),
            report.skipped()
        );
        Ok(report)
    }

    fn process(&self, name: &str) -> Result<Outcome> {
        if !self.storage.exists(name) {
            tracing::debug!("{} does not exist, skipping", name);
            return Ok(Outcome::Skipped(name.to_string()));
        }

        let original = match self.storage.read_text(name) {
            Ok(text) => text,
            // removed between the existence check and the read
            Err(e) if !e.is_fatal() => {
                tracing::debug!("{} vanished before it could be read", name);
                return Ok(Outcome::Skipped(name.to_string()));
            }
            Err(e) => return Err(e),
        };

        let normalized = match self.rules.apply(&original) {
            Cow::Borrowed(_) => None,
            Cow::Owned(text) if text == original => None,
            Cow::Owned(text) => Some(text),
        };

        let Some(normalized) = normalized else {
            tracing::debug!("{} already normalized", name);
            return Ok(Outcome::Unchanged(name.to_string()));
        };

        if self.dry_run {
            return Ok(Outcome::WouldUpdate(name.to_string()));
        }

        self.storage.write_text(name, &normalized)?;
        tracing::debug!(
            "{} rewritten ({} -> {} bytes)",
            name,
            original.len(),
            normalized.len()
        );
        Ok(Outcome::Updated(name.to_string()))
    }
}
