//! Dubeolsik (두벌식, 2-set) key layout.
//!
//! Each base jamo sits on one Latin letter key. Tense consonants and ㅒ, ㅖ
//! are the keys of their plain counterparts pressed with Shift. Compound
//! jamo are typed as two base keys in a fixed order, so the table stores
//! them as two-token sequences:
//!
//! - diphthongs: ㅘ = ㅗ+ㅏ (`hk`), ㅢ = ㅡ+ㅣ (`ml`), ...
//! - final clusters: ㄳ = ㄱ+ㅅ (`rt`), ㅄ = ㅂ+ㅅ (`qt`), ...
//!
//! The table is built at compile time and never changes.

use libhangul_core::{KeyLayout, KeySequence, KeyToken};
use phf::phf_map;

const fn k(key: char) -> KeyToken {
    KeyToken::plain(key)
}

const fn s(key: char) -> KeyToken {
    KeyToken::shifted(key)
}

/// Compatibility jamo -> key presses.
static DUBEOLSIK: phf::Map<char, &'static [KeyToken]> = phf_map! {
    // consonants
    'ㄱ' => &[k('r')],
    'ㄲ' => &[s('r')],
    'ㄴ' => &[k('s')],
    'ㄷ' => &[k('e')],
    'ㄸ' => &[s('e')],
    'ㄹ' => &[k('f')],
    'ㅁ' => &[k('a')],
    'ㅂ' => &[k('q')],
    'ㅃ' => &[s('q')],
    'ㅅ' => &[k('t')],
    'ㅆ' => &[s('t')],
    'ㅇ' => &[k('d')],
    'ㅈ' => &[k('w')],
    'ㅉ' => &[s('w')],
    'ㅊ' => &[k('c')],
    'ㅋ' => &[k('z')],
    'ㅌ' => &[k('x')],
    'ㅍ' => &[k('v')],
    'ㅎ' => &[k('g')],

    // vowels
    'ㅏ' => &[k('k')],
    'ㅐ' => &[k('o')],
    'ㅑ' => &[k('i')],
    'ㅒ' => &[s('o')],
    'ㅓ' => &[k('j')],
    'ㅔ' => &[k('p')],
    'ㅕ' => &[k('u')],
    'ㅖ' => &[s('p')],
    'ㅗ' => &[k('h')],
    'ㅛ' => &[k('y')],
    'ㅜ' => &[k('n')],
    'ㅠ' => &[k('b')],
    'ㅡ' => &[k('m')],
    'ㅣ' => &[k('l')],

    // diphthongs
    'ㅘ' => &[k('h'), k('k')],
    'ㅙ' => &[k('h'), k('o')],
    'ㅚ' => &[k('h'), k('l')],
    'ㅝ' => &[k('n'), k('j')],
    'ㅞ' => &[k('n'), k('p')],
    'ㅟ' => &[k('n'), k('l')],
    'ㅢ' => &[k('m'), k('l')],

    // final consonant clusters
    'ㄳ' => &[k('r'), k('t')],
    'ㄵ' => &[k('s'), k('w')],
    'ㄶ' => &[k('s'), k('g')],
    'ㄺ' => &[k('f'), k('r')],
    'ㄻ' => &[k('f'), k('a')],
    'ㄼ' => &[k('f'), k('q')],
    'ㄽ' => &[k('f'), k('t')],
    'ㄾ' => &[k('f'), k('x')],
    'ㄿ' => &[k('f'), k('v')],
    'ㅀ' => &[k('f'), k('g')],
    'ㅄ' => &[k('q'), k('t')],
};

/// The standard Korean 2-set layout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dubeolsik;

impl Dubeolsik {
    pub const NAME: &'static str = "Dubeolsik";

    pub fn new() -> Self {
        Self
    }

    /// Look up a jamo symbol directly.
    pub fn lookup(symbol: char) -> Option<KeySequence> {
        DUBEOLSIK.get(&symbol).map(|tokens| KeySequence::new(*tokens))
    }

    pub fn is_mapped(symbol: char) -> bool {
        DUBEOLSIK.contains_key(&symbol)
    }

    /// Every table entry, in no particular order.
    pub fn entries() -> impl Iterator<Item = (char, KeySequence)> {
        DUBEOLSIK
            .entries()
            .map(|(symbol, tokens)| (*symbol, KeySequence::new(*tokens)))
    }

    /// Number of jamo the layout can type.
    pub fn len() -> usize {
        DUBEOLSIK.len()
    }
}

impl KeyLayout for Dubeolsik {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn map_jamo(&self, symbol: char) -> Option<KeySequence> {
        Self::lookup(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tense_consonant_uses_shift() {
        let seq = Dubeolsik.map_jamo('ㄲ').unwrap();
        assert_eq!(seq.tokens(), &[KeyToken::new('r', true)]);
    }

    #[test]
    fn diphthong_is_two_plain_keys() {
        let seq = Dubeolsik.map_jamo('ㅘ').unwrap();
        assert_eq!(seq.tokens(), &[KeyToken::new('h', false), KeyToken::new('k', false)]);
    }

    #[test]
    fn shifted_vowels() {
        assert_eq!(Dubeolsik::lookup('ㅒ').unwrap().to_keystrokes(), "O");
        assert_eq!(Dubeolsik::lookup('ㅖ').unwrap().to_keystrokes(), "P");
        assert_eq!(Dubeolsik::lookup('ㅐ').unwrap().to_keystrokes(), "o");
    }

    #[test]
    fn clusters() {
        assert_eq!(Dubeolsik::lookup('ㄳ').unwrap().to_keystrokes(), "rt");
        assert_eq!(Dubeolsik::lookup('ㅀ').unwrap().to_keystrokes(), "fg");
        assert_eq!(Dubeolsik::lookup('ㅄ').unwrap().to_keystrokes(), "qt");
    }

    #[test]
    fn unmapped_is_none() {
        for ch in ['!', '1', 'a', 'A', ' ', '\n', '漢', 'ㆍ'] {
            assert_eq!(Dubeolsik.map_jamo(ch), None, "{ch:?} should not be mapped");
            assert!(!Dubeolsik::is_mapped(ch));
        }
        assert!(Dubeolsik::is_mapped('ㅢ'));
        assert_eq!(Dubeolsik::new().name(), "Dubeolsik");
    }

    #[test]
    fn table_shape() {
        // 19 consonants + 14 simple vowels + 7 diphthongs + 11 clusters
        assert_eq!(Dubeolsik::len(), 51);
        for (symbol, seq) in Dubeolsik::entries() {
            assert!(!seq.is_empty(), "{symbol} has no keys");
            assert!(seq.tokens().iter().all(|t| t.is_valid()), "{symbol} has a bad key");
            assert_eq!(seq.is_compound(), libhangul_core::is_compound_symbol(symbol));
        }
    }
}
