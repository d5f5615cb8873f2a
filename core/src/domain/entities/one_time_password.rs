//! One-time password value object.

use rand::rngs::OsRng;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Length of every generated code
pub const CODE_LENGTH: usize = 6;

/// Smallest value a code can take
pub const MIN_CODE: u32 = 100_000;

/// Largest value a code can take
pub const MAX_CODE: u32 = 999_999;

/// A six-digit numeric one-time password
///
/// Values are drawn uniformly from `[100000, 999999]`, so the decimal form is
/// always exactly six characters without any zero padding.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OneTimePassword(String);

impl OneTimePassword {
    /// Generates a fresh code from the operating system CSPRNG
    pub fn generate() -> Self {
        Self::generate_with(&mut OsRng)
    }

    /// Generates a code from the supplied random source
    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let value: u32 = rng.gen_range(MIN_CODE..=MAX_CODE);
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the code
    pub fn value(&self) -> u32 {
        // Constructed only from a u32 in range, so the parse cannot fail.
        self.0.parse().unwrap_or_default()
    }
}

impl fmt::Display for OneTimePassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Codes are secrets; keep them out of debug logs.
impl fmt::Debug for OneTimePassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OneTimePassword(******)")
    }
}

impl AsRef<str> for OneTimePassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
