//! Password generator — configurable random secrets plus a strength score.
//!
//! `generate` samples every position independently and uniformly from
//! the union of the enabled character classes.  There is deliberately no
//! "at least one of each class" guarantee; a short all-classes password
//! can come out all-lowercase.
//!
//! The sampler is `rand`'s thread RNG, not a CSPRNG.  Callers with
//! hard security requirements should treat generated secrets
//! accordingly.

pub mod strength;

pub use strength::{score, strength, Strength};

use rand::Rng;

use crate::errors::{CredVaultError, Result};

/// Uppercase class alphabet.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase class alphabet.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Digit class alphabet.
pub const DIGITS: &str = "0123456789";

/// Symbol class alphabet.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Smallest length the interactive UI offers.  The engine itself
/// accepts any positive length.
pub const MIN_UI_LENGTH: usize = 4;

/// Largest length the interactive UI offers.
pub const MAX_UI_LENGTH: usize = 50;

/// Default generated-password length.
pub const DEFAULT_LENGTH: usize = 16;

/// One generation request: how long, and which character classes.
///
/// Policies are not persisted; one lives only for the duration of a
/// single `generate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorPolicy {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for GeneratorPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

impl GeneratorPolicy {
    /// The union of the enabled class alphabets.
    fn charset(&self) -> String {
        let mut charset = String::new();
        if self.include_uppercase {
            charset.push_str(UPPERCASE);
        }
        if self.include_lowercase {
            charset.push_str(LOWERCASE);
        }
        if self.include_digits {
            charset.push_str(DIGITS);
        }
        if self.include_symbols {
            charset.push_str(SYMBOLS);
        }
        charset
    }
}

/// Generate a random secret according to `policy`.
///
/// Fails with `EmptyAlphabet` when every class flag is off (checked
/// first, for any length) and with `InvalidLength` when `length` is
/// zero.  Never silently returns an empty or fixed string.
pub fn generate(policy: &GeneratorPolicy) -> Result<String> {
    let charset: Vec<char> = policy.charset().chars().collect();
    if charset.is_empty() {
        return Err(CredVaultError::EmptyAlphabet);
    }
    if policy.length == 0 {
        return Err(CredVaultError::InvalidLength);
    }

    let mut rng = rand::rng();
    let secret = (0..policy.length)
        .map(|_| charset[rng.random_range(0..charset.len())])
        .collect();

    Ok(secret)
}
