// Spellcheck collaborator seam
//
// The pipeline invokes the checker through the Spellchecker trait so the
// checking engine can be swapped or mocked. The shipped WordlistChecker
// does a plain dictionary lookup per token; it is not a general-purpose
// spellchecker.

use std::path::Path;

use regex::Regex;

use crate::dictionary::Dictionary;

/// One word the checker could not find in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The offending word as it appears in the text
    pub word: String,
    /// Byte offset of the word in the checked text
    pub index: usize,
}

/// Options forwarded to the checker, mirroring the upstream engine's
/// configuration surface.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Skip all-uppercase tokens of two or more letters
    pub ignore_acronyms: bool,
    /// Skip purely numeric tokens
    pub ignore_numbers: bool,
    /// Whether the engine should generate correction suggestions.
    /// The word-list checker has none to offer and ignores this.
    pub suggestions: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            ignore_acronyms: true,
            ignore_numbers: true,
            suggestions: false,
        }
    }
}

/// Error types for checker invocations
#[derive(Debug, Clone, thiserror::Error)]
pub enum SpellcheckError {
    /// Could not read the text artifact to check
    #[error("Failed to read text to check from {path}: {reason}")]
    Read { path: String, reason: String },
}

/// External spellcheck collaborator.
///
/// Violations are reported in token order and are not de-duplicated or
/// re-sorted by implementations.
pub trait Spellchecker {
    fn check_file(
        &self,
        path: &Path,
        dictionary: &Dictionary,
        options: &CheckOptions,
    ) -> Result<Vec<Violation>, SpellcheckError>;
}

/// Dictionary-lookup checker over a word tokenizer.
pub struct WordlistChecker {
    word_re: Regex,
}

impl WordlistChecker {
    pub fn new() -> Self {
        Self {
            // Words with optional internal apostrophes ("doesn't").
            word_re: Regex::new(r"[A-Za-z0-9]+(?:'[A-Za-z]+)*")
                .expect("static word pattern compiles"),
        }
    }

    fn is_acronym(token: &str) -> bool {
        token.len() >= 2 && token.chars().all(|c| c.is_ascii_uppercase())
    }

    fn is_number(token: &str) -> bool {
        token.chars().all(|c| c.is_ascii_digit())
    }

    /// Check in-memory text, reporting each dictionary miss with its byte
    /// offset.
    pub fn check_text(
        &self,
        text: &str,
        dictionary: &Dictionary,
        options: &CheckOptions,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();
        for m in self.word_re.find_iter(text) {
            let token = m.as_str();
            if options.ignore_acronyms && Self::is_acronym(token) {
                continue;
            }
            if options.ignore_numbers && Self::is_number(token) {
                continue;
            }
            if !dictionary.contains(token) {
                violations.push(Violation {
                    word: token.to_string(),
                    index: m.start(),
                });
            }
        }
        violations
    }
}

impl Default for WordlistChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl Spellchecker for WordlistChecker {
    fn check_file(
        &self,
        path: &Path,
        dictionary: &Dictionary,
        options: &CheckOptions,
    ) -> Result<Vec<Violation>, SpellcheckError> {
        let text = std::fs::read_to_string(path).map_err(|e| SpellcheckError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(self.check_text(&text, dictionary, options))
    }
}

#[cfg(test)]
#[path = "spellcheck_test.rs"]
mod tests;
