// .versionrc exclusion-set parser
//
// Extracts the set of commit types marked "hidden": true from the
// project's .versionrc file. Derivation never fails: a missing file, an
// unparseable file, or a malformed type entry degrades to logging and an
// empty (or smaller) set.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::{info, warn};

/// One entry of the `types` array in .versionrc.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeEntry {
    /// Commit type this entry configures (e.g. "feat", "chore")
    pub r#type: String,
    /// Whether the section is hidden from generated release notes
    #[serde(default)]
    pub hidden: bool,
}

/// Top-level .versionrc schema; only the `types` array matters here.
#[derive(Debug, Default, Deserialize)]
struct VersionrcFile {
    #[serde(default)]
    types: Vec<serde_json::Value>,
}

/// Outcome of validating a single `types` entry.
#[derive(Debug)]
pub enum EntryOutcome {
    Valid(TypeEntry),
    /// Entry did not match the expected schema; carries the reason
    Malformed(String),
}

fn validate_entry(value: serde_json::Value) -> EntryOutcome {
    match serde_json::from_value::<TypeEntry>(value) {
        Ok(entry) => EntryOutcome::Valid(entry),
        Err(e) => EntryOutcome::Malformed(e.to_string()),
    }
}

/// Collect the commit types marked hidden in the given .versionrc file.
///
/// Recomputed fresh on every call; no caching across runs. Never returns
/// an error: absence or malformation only shrinks the result.
pub fn hidden_types(versionrc_path: &Path) -> HashSet<String> {
    if !versionrc_path.exists() {
        info!("\"{}\" does not exist", versionrc_path.display());
        return HashSet::new();
    }

    let raw = match std::fs::read_to_string(versionrc_path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(
                "Could not read \"{}\": {}; treating as empty",
                versionrc_path.display(),
                e
            );
            return HashSet::new();
        }
    };

    let parsed: VersionrcFile = match serde_json::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(
                "Could not parse \"{}\": {}; treating as empty",
                versionrc_path.display(),
                e
            );
            return HashSet::new();
        }
    };

    let mut hidden = HashSet::new();
    for value in parsed.types {
        match validate_entry(value) {
            EntryOutcome::Valid(entry) => {
                if entry.hidden {
                    hidden.insert(entry.r#type);
                }
            }
            EntryOutcome::Malformed(reason) => {
                warn!(
                    "Skipping malformed type entry in \"{}\": {}",
                    versionrc_path.display(),
                    reason
                );
            }
        }
    }

    hidden
}

#[cfg(test)]
#[path = "versionrc_test.rs"]
mod tests;
