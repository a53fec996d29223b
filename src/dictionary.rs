// In-memory working dictionary
//
// The dictionary is assembled once per run: base word list, then the
// fetched-or-fallback supplementary list, then any inline words. It is
// append-only and cumulative; entries are never de-duplicated and never
// rolled back. Augmentation failures are explicit results, left to the
// orchestrator to handle.

use crate::fetch::WordListSource;

/// Error types for dictionary augmentation
#[derive(Debug, Clone, thiserror::Error)]
pub enum DictionaryError {
    /// Failed to read the resolved word-list source
    #[error("Failed to read word-list source {path}: {reason}")]
    SourceRead { path: String, reason: String },
}

/// Working word collection used by the spellcheck collaborator.
///
/// Lookup is ASCII case-insensitive, matching the hunspell-style word
/// lists the entries come from. Appending the same word twice keeps both
/// entries; duplicates are harmless for lookup.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from base word-list text, one word per line.
    pub fn from_base(text: &str) -> Self {
        let mut dictionary = Self::default();
        dictionary.append_lines(text);
        dictionary
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the dictionary knows `word`, ignoring ASCII case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.eq_ignore_ascii_case(word))
    }

    /// All entries in insertion order, duplicates included.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    fn append_lines(&mut self, text: &str) {
        self.words.extend(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    /// Append the full content of a supplementary word-list text.
    pub fn augment_from_text(&mut self, text: &str) {
        self.append_lines(text);
    }

    /// Append an inline whitespace-separated word list.
    pub fn augment_inline(&mut self, list: &str) {
        self.words
            .extend(list.split_whitespace().map(str::to_string));
    }
}

/// Append the resolved word-list source onto `dictionary`.
///
/// A downloaded artifact is read from disk; the fallback source appends
/// the bundled text directly. A read failure is returned to the caller
/// instead of being swallowed; the dictionary keeps whatever it already
/// holds.
pub async fn augment_from_source(
    dictionary: &mut Dictionary,
    source: &WordListSource,
    fallback_text: &str,
) -> Result<(), DictionaryError> {
    match source {
        WordListSource::Downloaded(path) => {
            let text = tokio::fs::read_to_string(path).await.map_err(|e| {
                DictionaryError::SourceRead {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
            dictionary.augment_from_text(&text);
        }
        WordListSource::Fallback => {
            dictionary.augment_from_text(fallback_text);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "dictionary_test.rs"]
mod tests;
