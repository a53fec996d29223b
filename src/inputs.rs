// Action input resolution
//
// Inputs arrive the GitHub Actions way: flags for local runs, INPUT_*
// environment variables when invoked by the runner. The title comes from
// --title or from the pull_request event payload named by
// GITHUB_EVENT_PATH.

use std::path::Path;

use clap::Parser;
use serde::Deserialize;

/// Error types for input resolution
#[derive(Debug, Clone, thiserror::Error)]
pub enum InputError {
    /// No --title and no usable event payload
    #[error("No pull-request title supplied: pass --title or set GITHUB_EVENT_PATH")]
    MissingTitle,
    /// Event payload file could not be read or parsed
    #[error("Failed to read event payload: {0}")]
    EventPayload(String),
}

/// Inputs of the spellcheck action.
#[derive(Debug, Parser)]
#[command(name = "pr-title-spellcheck", about = "Spellcheck a pull-request title")]
pub struct ActionInputs {
    /// URL of the supplementary .spelling word list
    #[arg(long, env = "INPUT_SPELLING_FILE_URL")]
    pub spelling_file_url: String,

    /// Optional inline whitespace-separated word list
    #[arg(long, env = "INPUT_SPELLING_LIST")]
    pub spelling_list: Option<String>,

    /// Skip validation for commit types hidden in .versionrc
    #[arg(
        long,
        env = "INPUT_VALIDATE_VISIBLE_SECTIONS_ONLY",
        default_value_t = false,
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub validate_visible_sections_only: bool,

    /// Pull-request title; overrides the event payload
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    #[serde(default)]
    pull_request: Option<PullRequest>,
}

#[derive(Debug, Deserialize)]
struct PullRequest {
    #[serde(default)]
    title: Option<String>,
}

/// Resolve the title to validate: the explicit flag wins, otherwise the
/// pull_request.title field of the event payload.
pub fn resolve_title(
    inputs: &ActionInputs,
    event_path: Option<&Path>,
) -> Result<String, InputError> {
    if let Some(title) = &inputs.title {
        return Ok(title.clone());
    }

    let event_path = event_path.ok_or(InputError::MissingTitle)?;
    let raw = std::fs::read_to_string(event_path)
        .map_err(|e| InputError::EventPayload(format!("{}: {}", event_path.display(), e)))?;
    let payload: EventPayload = serde_json::from_str(&raw)
        .map_err(|e| InputError::EventPayload(format!("{}: {}", event_path.display(), e)))?;

    payload
        .pull_request
        .and_then(|pr| pr.title)
        .ok_or(InputError::MissingTitle)
}

#[cfg(test)]
#[path = "inputs_test.rs"]
mod tests;
