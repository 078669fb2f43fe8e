//! Normalized string similarity.
//!
//! Token-set Dice coefficient on a `[0, 1]` scale:
//!
//! ```text
//! sim(a, b) = 2 * |tokens(a) ∩ tokens(b)| / (|tokens(a)| + |tokens(b)|)
//! ```
//!
//! Tokens are lowercased alphanumeric runs, so punctuation, word order
//! and case never affect the score. Identical strings score 1.0 and
//! token-disjoint strings score 0.0, which is all the matcher requires
//! of a similarity measure.

use std::collections::HashSet;

/// Computes normalized similarity between two strings.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let ta = tokens(a);
    let tb = tokens(b);
    if ta.is_empty() && tb.is_empty() {
        // Two empty titles carry no signal either way.
        return 0.0;
    }
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }

    let shared = ta.intersection(&tb).count();
    #[allow(clippy::cast_precision_loss)] // token counts are tiny
    let score = (2.0 * shared as f64) / (ta.len() + tb.len()) as f64;
    score.clamp(0.0, 1.0)
}

fn tokens(s: &str) -> HashSet<String> {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}
