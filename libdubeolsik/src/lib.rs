//! # libdubeolsik
//!
//! Turns composed Hangul text into the key presses that type it on a
//! Dubeolsik (2-set) keyboard, built on libhangul-core.
//!
//! Pipeline:
//! - `hangul::decompose` splits a character into jamo
//! - `Dubeolsik` maps each jamo to a key sequence
//! - `Engine` sequences a whole string into `CharacterEvent`s, typing
//!   anything without a mapping directly
//!
//! ```rust
//! use libdubeolsik::Engine;
//!
//! let engine = Engine::new();
//! assert_eq!(engine.keystrokes("한글"), "gksrmf");
//! ```

pub mod config;
pub mod engine;
pub mod hangul;
pub mod layout;
pub mod source;

// Re-export the shared value types from core
pub use libhangul_core::{
    CharacterEvent, Emitter, EventStream, Jamo, JamoEvent, JamoPosition, KeyLayout, KeySequence,
    KeyToken, Pacing, Player, TypingPlan,
};

pub use config::DubeolsikConfig;
pub use engine::Engine;
pub use hangul::{compose, decompose, Decomposition, SyllableIndices};
pub use layout::Dubeolsik;
pub use source::TextSource;
