use serde::{Deserialize, Serialize};

/// Dubeolsik-specific configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All generic options from `libhangul_core::Config` (flattened via serde)
/// - NFC normalization of source text before sequencing
/// - Plain mode, which types every character directly without jamo keys
///
/// # Example
///
/// ```rust
/// use libdubeolsik::DubeolsikConfig;
///
/// let toml = "normalize = false\n[pacing]\nstart_delay_secs = 1\n";
/// let config = DubeolsikConfig::from_toml_str(toml).unwrap();
/// assert!(!config.normalize);
/// assert_eq!(config.base().pacing.start_delay_secs, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DubeolsikConfig {
    /// Base configuration fields (pacing)
    #[serde(flatten)]
    pub base: libhangul_core::Config,

    /// Compose conjoining jamo sequences into precomposed syllables (NFC)
    pub normalize: bool,

    /// Type text as-is instead of pressing jamo keys
    pub plain: bool,
}

impl Default for DubeolsikConfig {
    fn default() -> Self {
        Self {
            base: libhangul_core::Config::default(),
            normalize: true,
            plain: false,
        }
    }
}

impl DubeolsikConfig {
    /// Convert this config into the base config.
    pub fn into_base(self) -> libhangul_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libhangul_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libhangul_core::Config {
        &mut self.base
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> libhangul_core::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
