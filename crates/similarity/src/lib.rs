//! docmatch text similarity layer.
//!
//! Scores how much contiguous content two strings share using the
//! Ratcliff/Obershelp "gestalt" method: find the longest common run, recurse
//! on what lies left and right of it, and sum the matched characters `M`.
//! The ratio is `2 * M / (len(a) + len(b))`, reported here as a percentage.
//!
//! ## Guarantees
//!
//! - Pure and deterministic: no normalization, no I/O, no randomness.
//! - `score(a, a) == 100` for every `a`, including the empty string.
//! - `score("", x) == 0` for any non-empty `x`.
//!
//! The popularity heuristic in [`SimilarityConfig`] only kicks in for long
//! second arguments; see its docs for when that makes the score order-sensitive.

mod config;
mod sequence;

pub use crate::config::{SimilarityConfig, AUTOJUNK_MIN_LEN};
pub use crate::sequence::{MatchingBlock, SequenceMatcher};

/// Similarity of `a` against `b` in `[0.0, 100.0]` with the default config.
pub fn score(a: &str, b: &str) -> f64 {
    score_with_config(a, b, &SimilarityConfig::default())
}

/// Similarity of `a` against `b` in `[0.0, 100.0]`.
pub fn score_with_config(a: &str, b: &str, cfg: &SimilarityConfig) -> f64 {
    SequenceMatcher::new(a, b, cfg).ratio() * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "x",
        "abcd",
        "bcda",
        "The quick brown fox jumps over the lazy dog",
        "the quick brown dog jumps over the lazy fox",
        "Invoice #123, dated 2024-01-01, issued in Berlin",
        "Zeugnis über die Prüfung, ausgestellt in München",
    ];

    #[test]
    fn identical_inputs_score_one_hundred() {
        for sample in SAMPLES {
            assert_eq!(score(sample, sample), 100.0, "self score for {sample:?}");
        }
    }

    #[test]
    fn empty_string_edge_cases() {
        assert_eq!(score("", ""), 100.0);
        assert_eq!(score("", "x"), 0.0);
        assert_eq!(score("x", ""), 0.0);
    }

    #[test]
    fn symmetric_when_longest_runs_are_unique() {
        let pairs = [
            ("", "x"),
            ("abcd", "bcda"),
            ("abxcd", "abcd"),
            (SAMPLES[4], SAMPLES[5]),
            (SAMPLES[6], "Invoice #123, dated 2024-01-02, issued in Berlin"),
        ];
        for (a, b) in pairs {
            let forward = score(a, b);
            let backward = score(b, a);
            assert!(
                (forward - backward).abs() < 1e-9,
                "score({a:?}, {b:?}) = {forward} but reversed = {backward}"
            );
        }
    }

    #[test]
    fn tie_breaking_can_change_the_total() {
        // Only single characters match, so the first pick decides what is left.
        assert_eq!(score("tide", "diet"), 25.0);
        assert_eq!(score("diet", "tide"), 50.0);
    }

    #[test]
    fn rotation_keeps_the_longest_run() {
        assert_eq!(score("abcd", "bcda"), 75.0);
    }

    #[test]
    fn single_character_edit_scores_high() {
        let s = score(
            "Invoice #123, dated 2024-01-02, issued in Berlin",
            "Invoice #123, dated 2024-01-01, issued in Berlin",
        );
        assert!((s - 9400.0 / 96.0).abs() < 1e-9, "got {s}");
    }

    #[test]
    fn case_is_not_normalized() {
        assert!(score("HELLO", "hello") < 1e-9);
    }

    #[test]
    fn score_stays_in_range() {
        for a in SAMPLES {
            for b in SAMPLES {
                let s = score(a, b);
                assert!((0.0..=100.0).contains(&s), "score({a:?}, {b:?}) = {s}");
            }
        }
    }
}
