//! Emission of event streams.
//!
//! Turning key tokens into real key-down/key-up primitives is the job of an
//! `Emitter` supplied by the host. This module provides the trait, the
//! `Player` that walks an event stream with pacing, and two emitters that
//! never touch the OS: `TranscriptEmitter` writes a readable key script and
//! `RecordingEmitter` keeps the actions in memory.

use std::io::Write;
use std::time::Duration;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::event::CharacterEvent;
use crate::jamo::JamoPosition;
use crate::key::KeyToken;
use crate::Pacing;

/// Receiver of key presses and verbatim characters.
pub trait Emitter {
    /// Press (and release) one key, holding Shift when the token asks for it.
    fn press(&mut self, token: KeyToken) -> Result<()>;

    /// Type a character that has no key mapping, by whatever bulk-text
    /// primitive the host offers.
    fn type_char(&mut self, ch: char) -> Result<()>;
}

impl<E: Emitter + ?Sized> Emitter for &mut E {
    fn press(&mut self, token: KeyToken) -> Result<()> {
        (**self).press(token)
    }

    fn type_char(&mut self, ch: char) -> Result<()> {
        (**self).type_char(ch)
    }
}

/// Source of delays between key presses.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Ignores every delay.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSleep;

impl Sleeper for NoSleep {
    fn sleep(&mut self, _duration: Duration) {}
}

/// Counters reported after a stream has been played.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackStats {
    pub characters: usize,
    pub keystrokes: usize,
    pub direct: usize,
}

/// Whether `event` begins a new input character.
///
/// Every precomposed syllable opens with its leading consonant; anything
/// else stands alone.
pub fn starts_character(event: &CharacterEvent) -> bool {
    match event {
        CharacterEvent::Direct(_) => true,
        CharacterEvent::Jamo(ev) => matches!(
            ev.jamo.position(),
            JamoPosition::Leading | JamoPosition::Unattached
        ),
    }
}

/// Plays an event stream into an emitter.
#[derive(Debug, Clone)]
pub struct Player<S = ThreadSleeper> {
    pacing: Pacing,
    sleeper: S,
}

impl Player<ThreadSleeper> {
    pub fn new(pacing: Pacing) -> Self {
        Self::with_sleeper(pacing, ThreadSleeper)
    }
}

impl<S: Sleeper> Player<S> {
    pub fn with_sleeper(pacing: Pacing, sleeper: S) -> Self {
        Self { pacing, sleeper }
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Emit every event in order.
    ///
    /// Stops at the first emitter failure and returns it; events after the
    /// failure are not emitted.
    pub fn play<'a, I, E>(&mut self, events: I, emitter: &mut E) -> Result<PlaybackStats>
    where
        I: IntoIterator<Item = &'a CharacterEvent>,
        E: Emitter + ?Sized,
    {
        let mut stats = PlaybackStats::default();

        for event in events {
            if starts_character(event) {
                if stats.characters > 0 {
                    self.sleeper.sleep(self.pacing.char_interval());
                }
                stats.characters += 1;
            }

            match event {
                CharacterEvent::Jamo(ev) => {
                    trace!(jamo = %ev.jamo, keys = %ev.keys, "pressing");
                    for token in ev.keys {
                        emitter.press(token)?;
                        stats.keystrokes += 1;
                        self.sleeper.sleep(self.pacing.key_interval());
                    }
                }
                CharacterEvent::Direct(ch) => {
                    trace!(ch = ?ch, "typing directly");
                    emitter.type_char(*ch)?;
                    stats.direct += 1;
                    self.sleeper.sleep(self.pacing.direct_interval());
                }
            }
        }

        debug!(
            characters = stats.characters,
            keystrokes = stats.keystrokes,
            direct = stats.direct,
            "playback finished"
        );
        Ok(stats)
    }
}

/// Writes a human-readable key script on a single line.
///
/// Key presses print in `Shift+r` / `k` form, direct characters print quoted.
pub struct TranscriptEmitter<W: Write> {
    out: W,
    line_open: bool,
}

impl<W: Write> TranscriptEmitter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line_open: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_item(&mut self, item: std::fmt::Arguments<'_>) -> Result<()> {
        if self.line_open {
            self.out.write_all(b" ")?;
        }
        self.out.write_fmt(item)?;
        self.line_open = true;
        Ok(())
    }

    /// Terminate the current line, if any.
    pub fn finish(&mut self) -> Result<()> {
        if self.line_open {
            self.out.write_all(b"\n")?;
            self.line_open = false;
        }
        self.out.flush().map_err(Error::from)
    }
}

impl<W: Write> Emitter for TranscriptEmitter<W> {
    fn press(&mut self, token: KeyToken) -> Result<()> {
        self.write_item(format_args!("{}", token))
    }

    fn type_char(&mut self, ch: char) -> Result<()> {
        self.write_item(format_args!("{:?}", ch))
    }
}

/// An emitted action, as seen by `RecordingEmitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Press(KeyToken),
    Type(char),
}

/// Keeps emitted actions in memory; optionally fails after a fixed count.
#[derive(Debug, Default, Clone)]
pub struct RecordingEmitter {
    actions: Vec<Action>,
    fail_after: Option<usize>,
}

impl RecordingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// An emitter that accepts `n` actions and then reports an error.
    pub fn failing_after(n: usize) -> Self {
        Self {
            actions: Vec::new(),
            fail_after: Some(n),
        }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// The recorded presses in 2-set notation, direct characters verbatim.
    pub fn keystrokes(&self) -> String {
        self.actions
            .iter()
            .map(|a| match a {
                Action::Press(t) => t.as_char(),
                Action::Type(c) => *c,
            })
            .collect()
    }

    fn record(&mut self, action: Action) -> Result<()> {
        if self.fail_after.is_some_and(|n| self.actions.len() >= n) {
            return Err(Error::Emit(format!(
                "refused {:?} after {} actions",
                action,
                self.actions.len()
            )));
        }
        self.actions.push(action);
        Ok(())
    }
}

impl Emitter for RecordingEmitter {
    fn press(&mut self, token: KeyToken) -> Result<()> {
        self.record(Action::Press(token))
    }

    fn type_char(&mut self, ch: char) -> Result<()> {
        self.record(Action::Type(ch))
    }
}
