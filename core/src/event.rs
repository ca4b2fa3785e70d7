//! Character events: the output of sequencing and the input of emission.

use serde::Serialize;

use crate::jamo::Jamo;
use crate::key::{KeySequence, KeyToken};

/// One jamo and the keys that type it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JamoEvent {
    pub jamo: Jamo,
    pub keys: KeySequence,
}

impl JamoEvent {
    pub fn new(jamo: Jamo, keys: KeySequence) -> Self {
        Self { jamo, keys }
    }
}

/// An entry in the event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterEvent {
    /// Press the key sequence for one jamo
    Jamo(JamoEvent),
    /// Type this character verbatim; no key mapping exists for it
    Direct(char),
}

impl CharacterEvent {
    pub fn is_direct(&self) -> bool {
        matches!(self, CharacterEvent::Direct(_))
    }

    /// Key tokens carried by the event; empty for direct events.
    pub fn tokens(&self) -> &'static [KeyToken] {
        match self {
            CharacterEvent::Jamo(ev) => ev.keys.tokens(),
            CharacterEvent::Direct(_) => &[],
        }
    }

    /// 2-set notation for this event; direct characters are copied as-is.
    pub fn to_keystrokes(&self) -> String {
        match self {
            CharacterEvent::Jamo(ev) => ev.keys.to_keystrokes(),
            CharacterEvent::Direct(ch) => ch.to_string(),
        }
    }
}

/// Ordered event stream for a piece of text, with a few summary counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventStream {
    events: Vec<CharacterEvent>,
}

impl EventStream {
    pub fn new(events: Vec<CharacterEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[CharacterEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<CharacterEvent> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CharacterEvent> {
        self.events.iter()
    }

    pub fn jamo_events(&self) -> usize {
        self.events.iter().filter(|e| !e.is_direct()).count()
    }

    pub fn direct_events(&self) -> usize {
        self.events.iter().filter(|e| e.is_direct()).count()
    }

    /// Total physical key presses across all jamo events.
    pub fn keystrokes(&self) -> usize {
        self.events.iter().map(|e| e.tokens().len()).sum()
    }

    pub fn to_keystrokes(&self) -> String {
        self.events.iter().map(CharacterEvent::to_keystrokes).collect()
    }
}

impl From<Vec<CharacterEvent>> for EventStream {
    fn from(events: Vec<CharacterEvent>) -> Self {
        Self::new(events)
    }
}

impl IntoIterator for EventStream {
    type Item = CharacterEvent;
    type IntoIter = std::vec::IntoIter<CharacterEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a EventStream {
    type Item = &'a CharacterEvent;
    type IntoIter = std::slice::Iter<'a, CharacterEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Result of planning a piece of text.
///
/// Empty input is a defined outcome, kept distinct from a stream that merely
/// happens to be short.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "stream", rename_all = "snake_case")]
pub enum TypingPlan {
    /// The source text had no characters; nothing to type
    Empty,
    /// Events to hand to an emitter
    Events(EventStream),
}

impl TypingPlan {
    pub fn is_empty(&self) -> bool {
        matches!(self, TypingPlan::Empty)
    }

    pub fn events(&self) -> &[CharacterEvent] {
        match self {
            TypingPlan::Empty => &[],
            TypingPlan::Events(stream) => stream.events(),
        }
    }

    pub fn into_stream(self) -> EventStream {
        match self {
            TypingPlan::Empty => EventStream::default(),
            TypingPlan::Events(stream) => stream,
        }
    }
}
