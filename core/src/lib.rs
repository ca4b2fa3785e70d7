//! libhangul-core
//!
//! Value types and playback machinery shared by the Hangul keystroke crates
//! (currently libdubeolsik).
//!
//! Everything here is immutable once built: key tokens and sequences point at
//! static layout tables, events are `Copy`, and planning never mutates shared
//! state.
//!
//! Public API:
//! - `KeyToken`, `KeySequence` - physical key presses
//! - `Jamo`, `JamoPosition` - decomposed syllable components
//! - `CharacterEvent`, `JamoEvent`, `EventStream`, `TypingPlan` - sequencing output
//! - `KeyLayout` - jamo to key mapping seam implemented by layout crates
//! - `Emitter`, `Player` - playback of event streams with pacing
//! - `Config`, `Pacing` - configuration and timing
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod error;
pub use error::{Error, Result};

pub mod key;
pub use key::{KeySequence, KeyToken};

pub mod jamo;
pub use jamo::{is_compound_symbol, Jamo, JamoPosition};

pub mod event;
pub use event::{CharacterEvent, EventStream, JamoEvent, TypingPlan};

pub mod layout;
pub use layout::KeyLayout;

pub mod emitter;
pub use emitter::{
    Action, Emitter, NoSleep, PlaybackStats, Player, RecordingEmitter, Sleeper, ThreadSleeper,
    TranscriptEmitter,
};

/// Timing applied while playing an event stream.
///
/// Defaults follow a human-ish typing rhythm: a short pause between key
/// presses, a slightly longer one between characters, and a few seconds
/// before typing starts so the user can focus the target text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Pacing {
    /// Countdown before the first key press, in seconds
    pub start_delay_secs: u64,
    /// Pause after each key press, in milliseconds
    pub key_interval_ms: u64,
    /// Pause before each character after the first, in milliseconds
    pub char_interval_ms: u64,
    /// Pause after each directly typed character, in milliseconds
    pub direct_interval_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            start_delay_secs: 5,
            key_interval_ms: 10,
            char_interval_ms: 20,
            direct_interval_ms: 10,
        }
    }
}

impl Pacing {
    /// No delays at all.
    pub fn instant() -> Self {
        Self {
            start_delay_secs: 0,
            key_interval_ms: 0,
            char_interval_ms: 0,
            direct_interval_ms: 0,
        }
    }

    pub fn start_delay(&self) -> Duration {
        Duration::from_secs(self.start_delay_secs)
    }

    pub fn key_interval(&self) -> Duration {
        Duration::from_millis(self.key_interval_ms)
    }

    pub fn char_interval(&self) -> Duration {
        Duration::from_millis(self.char_interval_ms)
    }

    pub fn direct_interval(&self) -> Duration {
        Duration::from_millis(self.direct_interval_ms)
    }
}

/// Generic configuration shared by layout crates.
///
/// Layout-specific options belong in the layout crate's own config type
/// (e.g. `DubeolsikConfig`), which flattens this one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Playback timing
    pub pacing: Pacing,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
