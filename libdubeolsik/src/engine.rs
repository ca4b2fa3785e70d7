//! Key event sequencer for libdubeolsik
//!
//! Drives decomposition and layout lookup over a piece of text and produces a
//! flat, ordered event stream. Each character is handled on its own: there is
//! no composition state carried between characters.

use libhangul_core::{CharacterEvent, EventStream, JamoEvent, KeyLayout, TypingPlan};
use tracing::{debug, trace, warn};

use crate::hangul::decompose;
use crate::layout::Dubeolsik;

/// Public engine for libdubeolsik
#[derive(Debug, Clone, Default)]
pub struct Engine<L = Dubeolsik> {
    layout: L,
}

impl Engine<Dubeolsik> {
    /// Engine over the standard 2-set layout.
    pub fn new() -> Self {
        Self { layout: Dubeolsik }
    }
}

impl<L: KeyLayout> Engine<L> {
    pub fn with_layout(layout: L) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Events for a single character.
    ///
    /// Either every jamo of the character maps, giving one `Jamo` event per
    /// jamo in leading, vowel, trailing order, or the character becomes one
    /// `Direct` event. Nothing is pushed until the whole character has been
    /// resolved, so a character is never typed both ways.
    pub fn push_char_events(&self, ch: char, out: &mut Vec<CharacterEvent>) {
        let units = decompose(ch);
        let mut mapped: [Option<JamoEvent>; 3] = [None; 3];

        for (slot, jamo) in mapped.iter_mut().zip(units.iter()) {
            match self.layout.map_jamo(jamo.symbol()) {
                Some(keys) => *slot = Some(JamoEvent::new(*jamo, keys)),
                None => {
                    if units.is_syllable() {
                        warn!(
                            ch = %ch,
                            jamo = %jamo,
                            layout = self.layout.name(),
                            "syllable jamo has no key; typing character directly"
                        );
                    } else {
                        trace!(ch = ?ch, "no key mapping; typing directly");
                    }
                    out.push(CharacterEvent::Direct(ch));
                    return;
                }
            }
        }

        out.extend(mapped.into_iter().flatten().map(CharacterEvent::Jamo));
    }

    /// Build the ordered event stream for `text`, iterating by Unicode scalar.
    pub fn build_event_stream(&self, text: &str) -> Vec<CharacterEvent> {
        let mut events = Vec::with_capacity(text.len());
        for ch in text.chars() {
            self.push_char_events(ch, &mut events);
        }
        events
    }

    /// Plan `text`, reporting empty input as its own outcome.
    pub fn plan(&self, text: &str) -> TypingPlan {
        if text.is_empty() {
            debug!("empty input; nothing to type");
            return TypingPlan::Empty;
        }
        let stream = EventStream::new(self.build_event_stream(text));
        debug!(
            chars = text.chars().count(),
            jamo_events = stream.jamo_events(),
            direct_events = stream.direct_events(),
            keystrokes = stream.keystrokes(),
            "planned event stream"
        );
        TypingPlan::Events(stream)
    }

    /// Plan `text` without any jamo mapping: every character typed as-is.
    pub fn plain_plan(&self, text: &str) -> TypingPlan {
        if text.is_empty() {
            return TypingPlan::Empty;
        }
        TypingPlan::Events(EventStream::new(
            text.chars().map(CharacterEvent::Direct).collect(),
        ))
    }

    /// The 2-set keystrokes for `text`, e.g. `dkssud` for 안녕.
    ///
    /// Uppercase letters mean Shift. Unmapped characters are copied verbatim,
    /// so a Latin letter typed directly looks the same as a key press:
    /// `ㅁa` and `aa` both render as `aa`. Use [`Engine::plan`] when the
    /// difference matters; its events keep `Direct` apart from `Jamo`.
    pub fn keystrokes(&self, text: &str) -> String {
        self.build_event_stream(text)
            .iter()
            .map(CharacterEvent::to_keystrokes)
            .collect()
    }
}
