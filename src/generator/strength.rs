//! Deterministic password strength scoring.
//!
//! The score is additive and reproducible bit-for-bit for the same
//! input: +25 for length ≥ 12, another +25 for length ≥ 16, +12 each
//! for containing a lowercase or uppercase letter, +13 each for a digit
//! or any character outside `[A-Za-z0-9]`.  Length is counted in chars.

use std::fmt;

/// Four-level strength classification of a secret string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl Strength {
    /// Classify a raw score: <30 Weak, <60 Fair, <90 Good, ≥90 Strong.
    pub fn from_score(score: u32) -> Self {
        if score < 30 {
            Strength::Weak
        } else if score < 60 {
            Strength::Fair
        } else if score < 90 {
            Strength::Good
        } else {
            Strength::Strong
        }
    }

    /// Display label, e.g. for the strength meter.
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compute the additive strength score of `secret`.
pub fn score(secret: &str) -> u32 {
    let mut score = 0;
    let len = secret.chars().count();

    if len >= 12 {
        score += 25;
    }
    if len >= 16 {
        score += 25;
    }
    if secret.chars().any(|c| c.is_ascii_lowercase()) {
        score += 12;
    }
    if secret.chars().any(|c| c.is_ascii_uppercase()) {
        score += 12;
    }
    if secret.chars().any(|c| c.is_ascii_digit()) {
        score += 13;
    }
    if secret.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 13;
    }

    score
}

/// Score `secret` and map it to a `Strength` level.
pub fn strength(secret: &str) -> Strength {
    Strength::from_score(score(secret))
}
