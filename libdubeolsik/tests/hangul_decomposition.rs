//! Decomposition over the whole precomposed syllable block.

use libdubeolsik::hangul::{
    compose, decompose, syllable_indices, LEADING, SYLLABLE_BASE, SYLLABLE_COUNT, TRAILING, VOWELS,
};
use libdubeolsik::{Jamo, JamoPosition};

fn all_syllables() -> impl Iterator<Item = char> {
    (SYLLABLE_BASE..SYLLABLE_BASE + SYLLABLE_COUNT).filter_map(char::from_u32)
}

#[test]
fn block_has_11172_syllables() {
    assert_eq!(all_syllables().count(), 11172);
    assert_eq!(all_syllables().last(), Some('힣'));
}

#[test]
fn indices_round_trip_for_every_syllable() {
    for ch in all_syllables() {
        let idx = syllable_indices(ch).unwrap();
        assert_eq!(
            SYLLABLE_BASE + idx.leading * 588 + idx.vowel * 28 + idx.trailing,
            ch as u32
        );
        assert_eq!(compose(idx), Some(ch));
    }
}

#[test]
fn decomposition_shape_for_every_syllable() {
    for ch in all_syllables() {
        let idx = syllable_indices(ch).unwrap();
        let d = decompose(ch);

        assert_eq!(d[0], Jamo::leading(LEADING[idx.leading as usize]));
        assert_eq!(d[1], Jamo::vowel(VOWELS[idx.vowel as usize]));
        if idx.trailing == 0 {
            assert_eq!(d.len(), 2, "{ch} should have no final");
        } else {
            assert_eq!(d.len(), 3, "{ch} should have a final");
            assert_eq!(d[2].position(), JamoPosition::Trailing);
            assert_eq!(Some(d[2].symbol()), TRAILING[idx.trailing as usize]);
        }
    }
}

#[test]
fn known_syllables() {
    assert_eq!(decompose('한').symbols(), vec!['ㅎ', 'ㅏ', 'ㄴ']);
    assert_eq!(decompose('값').symbols(), vec!['ㄱ', 'ㅏ', 'ㅄ']);
    assert_eq!(decompose('꽹').symbols(), vec!['ㄲ', 'ㅙ', 'ㅇ']);
    assert_eq!(decompose('의').symbols(), vec!['ㅇ', 'ㅢ']);
}

#[test]
fn outside_block_is_identity() {
    for ch in ['a', 'Z', '0', ' ', '\t', '。', 'ㄱ', '\u{1100}', '\u{D7A4}', '😀'] {
        let d = decompose(ch);
        assert_eq!(d.len(), 1);
        assert_eq!(d[0], Jamo::unattached(ch));
        assert!(syllable_indices(ch).is_none());
    }
}
