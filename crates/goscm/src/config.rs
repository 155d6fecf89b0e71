//! `goscm.toml` loading.
//!
//! ```toml
//! [emit]
//! strict = true
//! char_literals = "first-byte"
//!
//! [format]
//! max_width = 100
//! indent_size = 4
//! ```
//!
//! Command-line flags override whatever the file sets.

use std::path::{Path, PathBuf};

use goscm_emit::EmitOptions;
use goscm_fmt::FormatConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "goscm.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub emit: EmitOptions,
    pub format: FormatConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Self::parse(&text, path)
    }

    /// The explicit file if given, else `goscm.toml` in `dir` if present,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let implicit = dir.join(DEFAULT_CONFIG);
        if implicit.is_file() {
            Self::load(&implicit)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use goscm_emit::CharLiteralMode;

    use super::*;

    fn parse(text: &str) -> Result<Config, ConfigError> {
        Config::parse(text, Path::new("goscm.toml"))
    }

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn sections_are_independent() {
        let config = parse("[emit]\nchar_literals = \"first-byte\"\n\n[format]\nmax_width = 100\n").unwrap();
        assert_eq!(config.emit.char_literals, CharLiteralMode::FirstByte);
        assert!(!config.emit.strict);
        assert_eq!(config.format.max_width, 100);
        assert_eq!(config.format.indent_size, 2);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse("[format]\nwidth = 10\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config 'goscm.toml'"));
    }

    #[test]
    fn discover_prefers_explicit_then_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::discover(None, dir.path()).unwrap(), Config::default());

        std::fs::write(dir.path().join(DEFAULT_CONFIG), "[emit]\nstrict = true\n").unwrap();
        assert!(Config::discover(None, dir.path()).unwrap().emit.strict);

        let other = dir.path().join("other.toml");
        std::fs::write(&other, "[format]\nindent_size = 8\n").unwrap();
        let config = Config::discover(Some(&other), dir.path()).unwrap();
        assert_eq!(config.format.indent_size, 8);
        assert!(!config.emit.strict);

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            Config::discover(Some(&missing), dir.path()),
            Err(ConfigError::Read { .. })
        ));
    }
}
