//! Card face values.

use serde::{Deserialize, Serialize};

/// The face value of a card. Every symbol on a board appears exactly twice.
///
/// Symbols are numbered from 0 and displayed as sequential letter labels:
/// `A`..`Z`, then `AA`, `AB`, and so on.
///
/// ```
/// use memory_match::board::Symbol;
///
/// assert_eq!(Symbol::new(0).label(), "A");
/// assert_eq!(Symbol::new(25).label(), "Z");
/// assert_eq!(Symbol::new(26).label(), "AA");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Create a symbol from its index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> u16 {
        self.0
    }

    /// Letter label shown on the card face.
    #[must_use]
    pub fn label(self) -> String {
        let mut n = self.0 as u32 + 1;
        let mut letters = Vec::new();
        while n > 0 {
            n -= 1;
            letters.push(char::from(b'A' + (n % 26) as u8));
            n /= 26;
        }
        letters.iter().rev().collect()
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letters() {
        let labels: String = (0..26).map(|i| Symbol::new(i).label()).collect();
        assert_eq!(labels, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn test_multi_letter_labels() {
        assert_eq!(Symbol::new(26).label(), "AA");
        assert_eq!(Symbol::new(27).label(), "AB");
        assert_eq!(Symbol::new(51).label(), "AZ");
        assert_eq!(Symbol::new(52).label(), "BA");
        assert_eq!(Symbol::new(701).label(), "ZZ");
        assert_eq!(Symbol::new(702).label(), "AAA");
    }

    #[test]
    fn test_max_symbol_has_label() {
        assert_eq!(Symbol::new(u16::MAX).label().len(), 4);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(format!("{}", Symbol::new(3)), "D");
    }
}
