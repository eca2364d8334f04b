use crate::config::DEFAULT_CHARS_PER_TOKEN;
use crate::orchestrator::Turn;

/// Rough token-count heuristic: character count divided by a chars-per-token ratio.
///
/// Good enough for budget checks before sending context upstream; do not read any
/// stricter semantics into it.
#[derive(Debug, Clone, Copy)]
pub struct TokenEstimator {
    chars_per_token: usize,
}

impl Default for TokenEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_CHARS_PER_TOKEN)
    }
}

impl TokenEstimator {
    /// A ratio of zero is clamped to one.
    pub fn new(chars_per_token: usize) -> Self {
        Self { chars_per_token: chars_per_token.max(1) }
    }

    pub fn estimate(&self, text: &str) -> usize {
        text.chars().count().div_ceil(self.chars_per_token)
    }

    /// Estimated tokens for a whole set of prior turns.
    pub fn estimate_turns(&self, turns: &[Turn]) -> usize {
        turns.iter().map(|turn| self.estimate(&turn.text)).sum()
    }

    pub fn fits(&self, text: &str, budget: usize) -> bool {
        self.estimate(text) <= budget
    }
}
