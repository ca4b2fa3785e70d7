//! Where the text to type comes from.
//!
//! Sources are deliberately dumb: they return a `String` and leave every
//! decision about empty input to the engine's `TypingPlan`.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

/// A text source selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Text given inline
    Inline(String),
    /// UTF-8 text file
    File(PathBuf),
    /// Everything on standard input
    Stdin,
    /// Current text contents of the system clipboard
    Clipboard,
}

impl TextSource {
    /// Read the full text of the source.
    pub fn read(&self) -> Result<String> {
        let text = match self {
            TextSource::Inline(text) => text.clone(),
            TextSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read text from {}", path.display()))?,
            TextSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read text from stdin")?;
                buf
            }
            TextSource::Clipboard => arboard::Clipboard::new()
                .context("failed to open the system clipboard")?
                .get_text()
                .context("failed to read text from the clipboard")?,
        };
        debug!(source = ?self, chars = text.chars().count(), "read source text");
        Ok(text)
    }

    /// Whether one trailing line ending should be dropped after reading.
    ///
    /// Inline text is taken exactly as given; everything else usually ends
    /// with a newline nobody meant to type.
    pub fn trims_line_ending(&self) -> bool {
        !matches!(self, TextSource::Inline(_))
    }
}

/// Compose conjoining jamo (U+1100 block) into precomposed syllables.
///
/// Text that is already composed comes back unchanged.
pub fn normalize(text: &str) -> String {
    text.nfc().collect()
}

/// Drop one trailing line ending, as left behind by `echo` or an editor.
pub fn trim_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_composes_conjoining_jamo() {
        // ᄒ ᅡ ᆫ (conjoining) -> 한
        assert_eq!(normalize("\u{1112}\u{1161}\u{11AB}"), "한");
        assert_eq!(normalize("안녕"), "안녕");
    }

    #[test]
    fn trims_one_line_ending() {
        assert_eq!(trim_line_ending("안녕\n"), "안녕");
        assert_eq!(trim_line_ending("안녕\r\n"), "안녕");
        assert_eq!(trim_line_ending("안녕\n\n"), "안녕\n");
        assert_eq!(trim_line_ending(""), "");
    }

    #[test]
    fn reads_inline_and_file() {
        assert_eq!(TextSource::Inline("가".into()).read().unwrap(), "가");

        let path = std::env::temp_dir()
            .join(format!("libdubeolsik_source_{}.txt", std::process::id()));
        std::fs::write(&path, "나다").unwrap();
        let text = TextSource::File(path.clone()).read().unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(text, "나다");
    }

    #[test]
    fn only_inline_text_keeps_its_line_ending() {
        assert!(!TextSource::Inline("가\n".into()).trims_line_ending());
        assert!(TextSource::File(PathBuf::from("a.txt")).trims_line_ending());
        assert!(TextSource::Stdin.trims_line_ending());
        assert!(TextSource::Clipboard.trims_line_ending());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = TextSource::File(PathBuf::from("/nonexistent/libdubeolsik.txt"))
            .read()
            .unwrap_err();
        assert!(err.to_string().contains("failed to read text"));
    }
}
