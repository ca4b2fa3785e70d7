/*!
Hangul syllable decomposition - `libdubeolsik/src/hangul.rs`

A precomposed syllable in U+AC00..=U+D7A3 is laid out as

```text
0xAC00 + leading * 588 + vowel * 28 + trailing
```

with 19 leading consonants, 21 vowels and 28 trailing slots (slot 0 meaning
"no final consonant"). Decomposition inverts that arithmetic and names each
component by its compatibility-jamo symbol (U+3131..U+3163), which is what a
keyboard layout table is keyed on.

Anything outside the syllable block decomposes to itself as a single
`Unattached` unit. The function is total and has no failure mode.
*/

use std::ops::Deref;

use libhangul_core::{Jamo, JamoPosition};

/// First precomposed syllable, '가'.
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// Last precomposed syllable, '힣'.
pub const SYLLABLE_LAST: u32 = 0xD7A3;

pub const LEADING_COUNT: u32 = 19;
pub const VOWEL_COUNT: u32 = 21;
pub const TRAILING_COUNT: u32 = 28;
/// Syllables sharing one leading consonant (21 * 28).
pub const BLOCK_SIZE: u32 = VOWEL_COUNT * TRAILING_COUNT;
pub const SYLLABLE_COUNT: u32 = LEADING_COUNT * BLOCK_SIZE;

pub const LEADING: [char; LEADING_COUNT as usize] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

pub const VOWELS: [char; VOWEL_COUNT as usize] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Index 0 is the empty slot and is never emitted.
pub const TRAILING: [Option<char>; TRAILING_COUNT as usize] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

/// Component indices of a precomposed syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyllableIndices {
    pub leading: u32,
    pub vowel: u32,
    /// 0 when the syllable has no final consonant
    pub trailing: u32,
}

/// Whether `ch` is a precomposed Hangul syllable.
pub fn is_syllable(ch: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(ch as u32))
}

/// Whether `ch` is a Hangul compatibility jamo letter (ㄱ..ㅣ).
pub fn is_compatibility_jamo(ch: char) -> bool {
    ('\u{3131}'..='\u{3163}').contains(&ch)
}

/// Split a syllable into its component indices; `None` outside the block.
pub fn syllable_indices(ch: char) -> Option<SyllableIndices> {
    if !is_syllable(ch) {
        return None;
    }
    let index = ch as u32 - SYLLABLE_BASE;
    Some(SyllableIndices {
        leading: index / BLOCK_SIZE,
        vowel: (index % BLOCK_SIZE) / TRAILING_COUNT,
        trailing: index % TRAILING_COUNT,
    })
}

/// Rebuild a syllable from component indices; `None` if any index is out of range.
pub fn compose(indices: SyllableIndices) -> Option<char> {
    let SyllableIndices {
        leading,
        vowel,
        trailing,
    } = indices;
    if leading >= LEADING_COUNT || vowel >= VOWEL_COUNT || trailing >= TRAILING_COUNT {
        return None;
    }
    char::from_u32(SYLLABLE_BASE + leading * BLOCK_SIZE + vowel * TRAILING_COUNT + trailing)
}

/// The decomposed units of one character: 2 or 3 jamo for a syllable,
/// or the character itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposition {
    units: [Jamo; 3],
    len: usize,
}

impl Decomposition {
    fn single(unit: Jamo) -> Self {
        Self {
            units: [unit; 3],
            len: 1,
        }
    }

    fn syllable(leading: Jamo, vowel: Jamo, trailing: Option<Jamo>) -> Self {
        match trailing {
            Some(t) => Self {
                units: [leading, vowel, t],
                len: 3,
            },
            None => Self {
                units: [leading, vowel, vowel],
                len: 2,
            },
        }
    }

    pub fn as_slice(&self) -> &[Jamo] {
        &self.units[..self.len]
    }

    /// True when the source character was a precomposed syllable.
    pub fn is_syllable(&self) -> bool {
        self.units[0].position() == JamoPosition::Leading
    }

    /// Compatibility-jamo symbols in order, e.g. `['ㅎ', 'ㅏ', 'ㄴ']` for 한.
    pub fn symbols(&self) -> Vec<char> {
        self.as_slice().iter().map(|j| j.symbol()).collect()
    }
}

impl Deref for Decomposition {
    type Target = [Jamo];

    fn deref(&self) -> &[Jamo] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a Decomposition {
    type Item = &'a Jamo;
    type IntoIter = std::slice::Iter<'a, Jamo>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Decompose one character into jamo.
pub fn decompose(ch: char) -> Decomposition {
    match syllable_indices(ch) {
        Some(idx) => Decomposition::syllable(
            Jamo::leading(LEADING[idx.leading as usize]),
            Jamo::vowel(VOWELS[idx.vowel as usize]),
            TRAILING[idx.trailing as usize].map(Jamo::trailing),
        ),
        None => Decomposition::single(Jamo::unattached(ch)),
    }
}
