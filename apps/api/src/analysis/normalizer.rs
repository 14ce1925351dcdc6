//! Text normalizer — canonical form used only for skill detection.
//!
//! Heuristic scorers never see this output; they run on the raw text so that
//! punctuation signals (`%`, `+`, special characters) survive.

/// Lowercases `raw`, replaces every character outside `[a-z0-9]` and whitespace
/// with a space, collapses whitespace runs to a single space and trims.
///
/// Total and idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let replaced: String = raw
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Python, SQL & Node.js!"), "python sql node js");
    }

    #[test]
    fn test_collapses_mixed_whitespace_and_trims() {
        assert_eq!(normalize("  Rust\t\tGo\n\nC++  "), "rust go c");
    }

    #[test]
    fn test_empty_input_returns_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
        assert_eq!(normalize("!!!---"), "");
    }

    #[test]
    fn test_non_ascii_letters_become_spaces() {
        assert_eq!(normalize("Café résumé"), "caf r sum");
    }

    proptest! {
        #[test]
        fn prop_output_alphabet_is_restricted(s in any::<String>()) {
            let out = normalize(&s);
            prop_assert!(out
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '));
        }

        #[test]
        fn prop_no_double_or_edge_spaces(s in any::<String>()) {
            let out = normalize(&s);
            prop_assert!(!out.contains("  "));
            prop_assert!(!out.starts_with(' '));
            prop_assert!(!out.ends_with(' '));
        }

        #[test]
        fn prop_idempotent(s in any::<String>()) {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once.clone());
        }
    }
}
