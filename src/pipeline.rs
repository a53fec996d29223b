// Pipeline orchestration
//
// Wires the scope gate, the word-list fetch, the dictionary assembly and
// the spellcheck collaborator into one run. Only a spelling violation or
// an unexpected error fails a run; config absence, fetch failure and
// augmentation failure degrade with a log line.

use std::path::PathBuf;

use crate::dictionary::{self, Dictionary};
use crate::spellcheck::{CheckOptions, Spellchecker};
use crate::{fetch, info, paths, report, scope, versionrc, warn};

/// Resolved inputs for one run.
#[derive(Debug, Clone)]
pub struct RunInputs {
    /// Pull-request title to validate
    pub title: String,
    /// URL of the supplementary word list
    pub spelling_file_url: String,
    /// Optional inline whitespace-separated word list
    pub spelling_list: Option<String>,
    /// Skip titles whose commit type is hidden in .versionrc
    pub validate_visible_sections_only: bool,
}

/// Locations and bundled content used by a run. Defaults point at the
/// checkout-relative artifact names; tests redirect them into sandboxes.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory holding the transient title and download artifacts
    pub work_dir: PathBuf,
    /// Project configuration file with hidden commit types
    pub versionrc_path: PathBuf,
    /// Base dictionary text, one word per line
    pub base_dictionary: String,
    /// Word-list text used when the remote fetch fails
    pub fallback_spelling: String,
}

impl PipelineConfig {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            versionrc_path: PathBuf::from(paths::VERSIONRC_FILE),
            base_dictionary: paths::BUNDLED_DICTIONARY.to_string(),
            fallback_spelling: paths::BUNDLED_FALLBACK.to_string(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

/// How a run ended when no unexpected error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Commit type is hidden and validation was restricted; nothing checked
    Skipped,
    /// Title checked, no violations
    Clean,
    /// Title checked, violations found; the run is failed with `report`
    Violations { count: usize, report: String },
}

/// Unexpected, run-failing errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RunError {
    /// Could not persist the title artifact for the checker
    #[error("Failed to write title artifact {path}: {reason}")]
    TitleArtifact { path: String, reason: String },
    /// The spellcheck collaborator itself failed
    #[error(transparent)]
    Spellcheck(#[from] crate::spellcheck::SpellcheckError),
}

/// Execute one validation run for `inputs.title`.
pub async fn run<C: Spellchecker>(
    inputs: &RunInputs,
    config: &PipelineConfig,
    checker: &C,
) -> Result<RunOutcome, RunError> {
    let excluded = versionrc::hidden_types(&config.versionrc_path);
    let category = scope::commit_type(&inputs.title);

    if !scope::should_run(inputs.validate_visible_sections_only, category, &excluded) {
        info!(
            "Current pull request title \"{}\" will not be validated",
            inputs.title
        );
        return Ok(RunOutcome::Skipped);
    }

    // Persist the title for the collaborator before any dictionary work.
    let title_path = config.work_dir.join(paths::TITLE_ARTIFACT);
    tokio::fs::write(&title_path, &inputs.title)
        .await
        .map_err(|e| RunError::TitleArtifact {
            path: title_path.display().to_string(),
            reason: e.to_string(),
        })?;

    let download_dest = config.work_dir.join(paths::DOWNLOADED_SPELLING);
    let source = fetch::resolve_word_list(&inputs.spelling_file_url, &download_dest).await;

    let mut dictionary = Dictionary::from_base(&config.base_dictionary);
    if let Err(e) =
        dictionary::augment_from_source(&mut dictionary, &source, &config.fallback_spelling).await
    {
        // Degraded but not fatal: the checker runs with whatever words
        // made it into the dictionary.
        warn!(
            "Dictionary augmentation failed, continuing with {} words: {}",
            dictionary.len(),
            e
        );
    }
    if let Some(list) = &inputs.spelling_list {
        dictionary.augment_inline(list);
    }

    let violations = checker.check_file(&title_path, &dictionary, &CheckOptions::default())?;

    if violations.is_empty() {
        info!("Text \"{}\" is free from spelling errors", inputs.title);
        Ok(RunOutcome::Clean)
    } else {
        Ok(RunOutcome::Violations {
            count: violations.len(),
            report: report::format_violations(&violations, &inputs.title),
        })
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
