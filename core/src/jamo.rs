//! Jamo values produced by syllable decomposition.

use serde::Serialize;
use std::fmt;

/// Where a jamo sits inside its syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JamoPosition {
    /// Initial consonant (choseong)
    Leading,
    /// Medial vowel (jungseong)
    Vowel,
    /// Final consonant (jongseong)
    Trailing,
    /// Not part of a precomposed syllable: the raw input character itself
    Unattached,
}

/// One decomposed unit: a compatibility-jamo symbol tagged with its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Jamo {
    symbol: char,
    position: JamoPosition,
}

impl Jamo {
    pub const fn new(symbol: char, position: JamoPosition) -> Self {
        Self { symbol, position }
    }

    pub const fn leading(symbol: char) -> Self {
        Self::new(symbol, JamoPosition::Leading)
    }

    pub const fn vowel(symbol: char) -> Self {
        Self::new(symbol, JamoPosition::Vowel)
    }

    pub const fn trailing(symbol: char) -> Self {
        Self::new(symbol, JamoPosition::Trailing)
    }

    pub const fn unattached(symbol: char) -> Self {
        Self::new(symbol, JamoPosition::Unattached)
    }

    pub const fn symbol(self) -> char {
        self.symbol
    }

    pub const fn position(self) -> JamoPosition {
        self.position
    }

    /// Diphthong vowels and consonant clusters, i.e. letters typed with two keys.
    pub fn is_compound(self) -> bool {
        is_compound_symbol(self.symbol)
    }
}

impl fmt::Display for Jamo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Compound jamo: the seven diphthongs and eleven final consonant clusters.
pub fn is_compound_symbol(symbol: char) -> bool {
    matches!(
        symbol,
        'ㅘ' | 'ㅙ' | 'ㅚ' | 'ㅝ' | 'ㅞ' | 'ㅟ' | 'ㅢ'
            | 'ㄳ' | 'ㄵ' | 'ㄶ' | 'ㄺ' | 'ㄻ' | 'ㄼ' | 'ㄽ' | 'ㄾ' | 'ㄿ' | 'ㅀ' | 'ㅄ'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_classification() {
        assert!(Jamo::vowel('ㅘ').is_compound());
        assert!(Jamo::trailing('ㄳ').is_compound());
        assert!(!Jamo::leading('ㄲ').is_compound());
        assert!(!Jamo::vowel('ㅐ').is_compound());
        assert!(!Jamo::unattached('!').is_compound());
    }
}
