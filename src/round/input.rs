//! Pending calculator input for one team.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Digits a team has typed but not yet had accepted.
///
/// Only the characters `0`-`9` can ever be stored, so the buffer always
/// parses as a number when non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingInput {
    digits: SmallVec<[u8; 4]>,
}

impl PendingInput {
    /// Create an empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit (0-9) unless the buffer already holds `max_len` digits.
    ///
    /// Returns whether the digit was accepted.
    pub fn push_digit(&mut self, digit: u8, max_len: usize) -> bool {
        if digit > 9 || self.digits.len() >= max_len {
            return false;
        }
        self.digits.push(b'0' + digit);
        true
    }

    /// Remove the last digit. Returns false if there was nothing to remove.
    pub fn backspace(&mut self) -> bool {
        self.digits.pop().is_some()
    }

    /// Remove every digit.
    pub fn clear(&mut self) {
        self.digits.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// The typed digits as text (empty when nothing typed).
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.digits).unwrap_or_default()
    }

    /// Numeric value, or `None` when empty.
    #[must_use]
    pub fn value(&self) -> Option<i64> {
        if self.digits.is_empty() {
            return None;
        }
        self.as_str().parse().ok()
    }

    /// What the calculator display shows: the digits, or `"0"` when empty.
    #[must_use]
    pub fn display(&self) -> &str {
        if self.digits.is_empty() {
            "0"
        } else {
            self.as_str()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_value() {
        let mut input = PendingInput::new();
        assert!(input.push_digit(4, 3));
        assert!(input.push_digit(2, 3));

        assert_eq!(input.as_str(), "42");
        assert_eq!(input.value(), Some(42));
        assert_eq!(input.len(), 2);
    }

    #[test]
    fn test_leading_zero() {
        let mut input = PendingInput::new();
        input.push_digit(0, 3);
        input.push_digit(7, 3);

        assert_eq!(input.as_str(), "07");
        assert_eq!(input.value(), Some(7));
    }

    #[test]
    fn test_max_len() {
        let mut input = PendingInput::new();
        for d in [1, 2, 3] {
            assert!(input.push_digit(d, 3));
        }
        assert!(!input.push_digit(4, 3));
        assert_eq!(input.as_str(), "123");
    }

    #[test]
    fn test_rejects_non_digit() {
        let mut input = PendingInput::new();
        assert!(!input.push_digit(10, 3));
        assert!(input.is_empty());
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut input = PendingInput::new();
        input.push_digit(1, 3);
        input.push_digit(2, 3);

        assert!(input.backspace());
        assert_eq!(input.as_str(), "1");

        input.clear();
        assert_eq!(input.as_str(), "");
        assert!(!input.backspace());
    }

    #[test]
    fn test_display() {
        let mut input = PendingInput::new();
        assert_eq!(input.display(), "0");
        assert_eq!(input.value(), None);

        input.push_digit(9, 3);
        assert_eq!(input.display(), "9");
    }
}
