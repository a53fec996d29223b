// Scope gate - decides whether a title should be spellchecked at all
//
// The commit type is the part of a conventional-commit title before the
// first ':' and before any '(' scope marker. Titles whose commit type is
// hidden in .versionrc are skipped when validation is restricted to
// visible sections.

use std::collections::HashSet;

use crate::info;

/// Extract the conventional-commit type from a title.
///
/// `"feat(ui): add x"` yields `"feat"`, `"chore: y"` yields `"chore"`.
/// A title without a `:` delimiter yields the whole title up to any `(`.
/// No whitespace trimming is applied.
pub fn commit_type(title: &str) -> &str {
    let head = title.split(':').next().unwrap_or(title);
    head.split('(').next().unwrap_or(head)
}

/// Decide whether validation should run.
///
/// Pure over its inputs: when `restrict_to_visible` is false the answer is
/// always yes; otherwise the commit type must not be in the excluded set.
/// Skips are logged with the category and the reason.
pub fn should_run(restrict_to_visible: bool, category: &str, excluded: &HashSet<String>) -> bool {
    if !restrict_to_visible {
        return true;
    }

    let run = !excluded.contains(category);
    if !run {
        info!(
            "Commit type \"{}\" is marked hidden and \"validate-visible-sections-only\" is set; skipping validation",
            category
        );
    }

    run
}

#[cfg(test)]
#[path = "scope_test.rs"]
mod tests;
