// Violation report formatting

use crate::spellcheck::Violation;

/// Render violations into the single failure message reported to the
/// host: a count header, then one 1-indexed line per violation in input
/// order. Deterministic; no re-ordering, no de-duplication.
pub fn format_violations(violations: &[Violation], text: &str) -> String {
    let mut message = format!("{} spelling errors found in \"{}\":\n", violations.len(), text);
    for (i, violation) in violations.iter().enumerate() {
        message.push_str(&format!(
            "{}) \"{}\" at index: {} \n",
            i + 1,
            violation.word,
            violation.index
        ));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_matches_expected_layout_exactly() {
        let violations = vec![
            Violation {
                word: "helo".to_string(),
                index: 5,
            },
            Violation {
                word: "wrold".to_string(),
                index: 10,
            },
        ];

        let message = format_violations(&violations, "helo wrold");

        assert_eq!(
            message,
            "2 spelling errors found in \"helo wrold\":\n1) \"helo\" at index: 5 \n2) \"wrold\" at index: 10 \n"
        );
    }

    #[test]
    fn test_format_preserves_input_order() {
        let violations = vec![
            Violation {
                word: "zz".to_string(),
                index: 9,
            },
            Violation {
                word: "aa".to_string(),
                index: 0,
            },
        ];

        let message = format_violations(&violations, "aa then zz");

        let first = message.find("\"zz\"").expect("zz present");
        let second = message.find("\"aa\"").expect("aa present");
        assert!(first < second, "violations must keep input order");
    }

    #[test]
    fn test_format_with_no_violations_is_just_the_header() {
        let message = format_violations(&[], "clean text");
        assert_eq!(message, "0 spelling errors found in \"clean text\":\n");
    }
}
