// core/src/layout.rs
//
// The seam between jamo and physical keys. A layout owns its mapping table;
// the sequencer only asks it questions.

use crate::key::KeySequence;

/// A keyboard layout that knows how to type individual jamo.
pub trait KeyLayout {
    /// Human-readable layout name (e.g., "Dubeolsik")
    fn name(&self) -> &'static str;

    /// Key sequence for a jamo symbol, or `None` when the layout has no entry.
    ///
    /// Implementations must be total: every `char` gets an answer and none
    /// of them is an error.
    fn map_jamo(&self, symbol: char) -> Option<KeySequence>;
}

impl<L: KeyLayout + ?Sized> KeyLayout for &L {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn map_jamo(&self, symbol: char) -> Option<KeySequence> {
        (**self).map_jamo(symbol)
    }
}
