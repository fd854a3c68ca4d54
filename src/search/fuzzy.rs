//! Approximate substring matching.
//!
//! Scores how well a short pattern occurs *anywhere* inside a longer text,
//! tolerating typos. The score is the smallest edit distance between the
//! pattern and any substring of the text (Sellers' algorithm), divided by the
//! pattern length: `0.0` is an exact occurrence, `1.0` means nothing useful
//! matched. Position inside the text does not affect the score.

/// A text prepared for repeated matching.
#[derive(Debug, Clone, Default)]
pub struct MatchText {
    folded: String,
    chars: Vec<char>,
}

impl MatchText {
    /// Wraps already folded text.
    #[must_use]
    pub fn new(folded: String) -> Self {
        let chars = folded.chars().collect();
        Self { folded, chars }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.folded
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Smallest edit distance between `pattern` and any substring of `text`.
///
/// Runs in `O(pattern.len() * text.len())` time and `O(pattern.len())` space,
/// stopping early once an exact occurrence is found.
#[must_use]
pub fn substring_distance(pattern: &[char], text: &[char]) -> usize {
    let m = pattern.len();
    if m == 0 {
        return 0;
    }

    // column[i]: cost of matching pattern[..i] against a substring ending at
    // the current text position. column[0] stays 0 so a match may start anywhere.
    let mut column: Vec<usize> = (0..=m).collect();
    let mut best = m;

    for &t in text {
        let mut diagonal = column[0];
        for i in 1..=m {
            let above = column[i];
            let substitution = diagonal + usize::from(pattern[i - 1] != t);
            column[i] = substitution.min(above + 1).min(column[i - 1] + 1);
            diagonal = above;
        }
        best = best.min(column[m]);
        if best == 0 {
            break;
        }
    }

    best
}

/// Normalized match score of `pattern` in `text`, if within `threshold`.
///
/// Returns `Some(ratio)` with `ratio = distance / pattern length` when
/// `ratio <= threshold`, otherwise `None`. An empty pattern never matches.
#[must_use]
pub fn match_ratio(pattern: &[char], pattern_str: &str, text: &MatchText, threshold: f64) -> Option<f64> {
    if pattern.is_empty() || text.is_empty() {
        return None;
    }
    if text.folded.contains(pattern_str) {
        return Some(0.0);
    }
    if threshold <= 0.0 {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let ratio = substring_distance(pattern, &text.chars) as f64 / pattern.len() as f64;
    (ratio <= threshold + f64::EPSILON).then_some(ratio)
}
