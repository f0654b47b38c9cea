//! Character pool construction.

use serde::{Deserialize, Serialize};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+{}[]";

/// Longest password drawn; larger requests are truncated to this.
pub const MAX_LENGTH: usize = 4096;

/// Requested password shape. Letters are always part of the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordSpec {
    /// Number of characters to draw. Zero or negative yields an empty password.
    pub length: i64,
    #[serde(default)]
    pub include_numbers: bool,
    #[serde(default)]
    pub include_symbols: bool,
}

impl PasswordSpec {
    pub fn new(length: i64, include_numbers: bool, include_symbols: bool) -> Self {
        Self {
            length,
            include_numbers,
            include_symbols,
        }
    }

    /// Length clamped to `0..=MAX_LENGTH`.
    pub fn effective_length(&self) -> usize {
        usize::try_from(self.length).unwrap_or(0).min(MAX_LENGTH)
    }
}

/// Build the pool in class order: lowercase, uppercase, digits, symbols.
pub fn build(spec: &PasswordSpec) -> Vec<char> {
    let mut chars: Vec<char> = Vec::with_capacity(size(spec));
    chars.extend(LOWERCASE.chars());
    chars.extend(UPPERCASE.chars());

    if spec.include_numbers {
        chars.extend(DIGITS.chars());
    }
    if spec.include_symbols {
        chars.extend(SYMBOLS.chars());
    }

    chars
}

/// Pool size implied by the character-set flags.
pub fn size(spec: &PasswordSpec) -> usize {
    let mut size = LOWERCASE.len() + UPPERCASE.len();
    if spec.include_numbers {
        size += DIGITS.len();
    }
    if spec.include_symbols {
        size += SYMBOLS.len();
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_only() {
        let pool = build(&PasswordSpec::new(8, false, false));
        assert_eq!(pool.len(), 52);
        assert!(pool.iter().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_all_classes() {
        let spec = PasswordSpec::new(8, true, true);
        let pool = build(&spec);
        assert_eq!(pool.len(), 78);
        assert_eq!(pool.len(), size(&spec));
        assert!(pool.contains(&'7'));
        assert!(pool.contains(&'{'));
    }

    #[test]
    fn test_symbols_without_numbers() {
        let pool = build(&PasswordSpec::new(8, false, true));
        assert_eq!(pool.len(), 68);
        assert!(!pool.iter().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_negative_length_clamps() {
        assert_eq!(PasswordSpec::new(-3, true, true).effective_length(), 0);
    }
}
