// Pull-request title spellcheck pipeline
//
// Validates a pull-request title against a spelling dictionary assembled
// from a bundled base dictionary, a remotely fetched word list (with a
// bundled fallback), and an optional inline word list. Titles whose
// conventional-commit category is marked hidden in .versionrc can be
// exempted from validation.

mod dictionary;
mod fetch;
mod inputs;
mod paths;
mod pipeline;
mod report;
mod scope;
mod spellcheck;
mod versionrc;

pub use dictionary::{Dictionary, DictionaryError};
pub use fetch::{FetchError, WordListSource};
pub use inputs::{resolve_title, ActionInputs, InputError};
pub use pipeline::{run, PipelineConfig, RunError, RunInputs, RunOutcome};
pub use report::format_violations;
pub use spellcheck::{CheckOptions, SpellcheckError, Spellchecker, Violation, WordlistChecker};

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};
