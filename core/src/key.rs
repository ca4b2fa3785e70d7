//! Physical key tokens.
//!
//! A `KeyToken` is one press of a Latin letter key, optionally with Shift held.
//! A `KeySequence` is the ordered run of presses that types one jamo: a single
//! token for simple jamo, two for diphthongs and consonant clusters.

use serde::Serialize;
use std::fmt;

/// One key press: a lowercase base key plus the shift flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KeyToken {
    key: char,
    shift: bool,
}

impl KeyToken {
    pub const fn new(key: char, shift: bool) -> Self {
        Self { key, shift }
    }

    /// Press `key` without Shift.
    pub const fn plain(key: char) -> Self {
        Self::new(key, false)
    }

    /// Press `key` with Shift held.
    pub const fn shifted(key: char) -> Self {
        Self::new(key, true)
    }

    /// The base key, always one of `a..=z` for tokens built by a layout.
    pub const fn key(self) -> char {
        self.key
    }

    pub const fn shift(self) -> bool {
        self.shift
    }

    /// Whether the base key is one of the 26 lowercase letters.
    pub fn is_valid(self) -> bool {
        self.key.is_ascii_lowercase()
    }

    /// 2-set notation: uppercase means Shift + the lowercase key.
    pub fn as_char(self) -> char {
        if self.shift {
            self.key.to_ascii_uppercase()
        } else {
            self.key
        }
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shift {
            write!(f, "Shift+{}", self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}

/// Immutable, ordered key presses for one jamo.
///
/// Backed by static table data, so copying a sequence never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct KeySequence(&'static [KeyToken]);

impl KeySequence {
    pub const fn new(tokens: &'static [KeyToken]) -> Self {
        Self(tokens)
    }

    pub fn tokens(&self) -> &'static [KeyToken] {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True for sequences that combine two base keys (diphthongs, clusters).
    pub fn is_compound(&self) -> bool {
        self.0.len() > 1
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'static, KeyToken>> {
        self.0.iter().copied()
    }

    /// Render in 2-set notation, e.g. `hk` for ㅘ or `R` for ㄲ.
    pub fn to_keystrokes(&self) -> String {
        self.iter().map(KeyToken::as_char).collect()
    }
}

impl IntoIterator for KeySequence {
    type Item = KeyToken;
    type IntoIter = std::iter::Copied<std::slice::Iter<'static, KeyToken>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl fmt::Display for KeySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_keystrokes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static HK: [KeyToken; 2] = [KeyToken::plain('h'), KeyToken::plain('k')];
    static SHIFT_R: [KeyToken; 1] = [KeyToken::shifted('r')];

    #[test]
    fn token_notation() {
        assert_eq!(KeyToken::plain('r').as_char(), 'r');
        assert_eq!(KeyToken::shifted('r').as_char(), 'R');
        assert_eq!(KeyToken::shifted('r').to_string(), "Shift+r");
        assert!(KeyToken::plain('z').is_valid());
        assert!(!KeyToken::plain('R').is_valid());
    }

    #[test]
    fn sequence_compound_and_render() {
        let seq = KeySequence::new(&HK);
        assert!(seq.is_compound());
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.to_keystrokes(), "hk");

        let tense = KeySequence::new(&SHIFT_R);
        assert!(!tense.is_compound());
        assert_eq!(tense.to_string(), "R");
        assert_eq!(tense.into_iter().collect::<Vec<_>>(), vec![KeyToken::shifted('r')]);
    }
}
