/// Scoring helpers for pantry matches
///
/// Both the fraction form (suggestions) and the percentage form (recipe
/// cards) come from the same matched/total ratio.

/// Scorer for ingredient coverage
pub struct Scorer;

impl Scorer {
    /// Fraction of ingredients available
    ///
    /// # Arguments
    /// * `matched` - Ingredients found in the pantry
    /// * `total` - Ingredients in the recipe
    ///
    /// # Returns
    /// * Score between 0.0 and 1.0, or 0.0 when `total` is zero
    pub fn match_fraction(matched: usize, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }

        (matched as f64 / total as f64).clamp(0.0, 1.0)
    }

    /// Same ratio as `match_fraction`, scaled to 0-100
    pub fn match_percentage(matched: usize, total: usize) -> f64 {
        Self::match_fraction(matched, total) * 100.0
    }
}
