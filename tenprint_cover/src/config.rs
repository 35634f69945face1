// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TOML configuration for canvas size and font locations.
//!
//! ```toml
//! width = 400
//! height = 600
//! margin_percent = 2
//!
//! [fonts]
//! sans_bold = "/opt/fonts/NotoSans-Bold.ttf"
//! search_dirs = ["~/fonts"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::spec::{CoverSpec, DEFAULT_HEIGHT, DEFAULT_MARGIN_PERCENT, DEFAULT_WIDTH};

const CONFIG_DIR: &str = "tenprint";
const CONFIG_FILENAME: &str = "config.toml";

/// Collection index of the Simplified Chinese face in the Noto Sans CJK `.ttc` files.
pub const DEFAULT_CJK_INDEX: u32 = 2;

/// Settings shared by every cover rendered in one run.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoverConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Margin as a percentage of the canvas height.
    pub margin_percent: u32,
    /// Where to find fonts.
    pub fonts: FontConfig,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            width: u32::from(DEFAULT_WIDTH),
            height: u32::from(DEFAULT_HEIGHT),
            margin_percent: u32::from(DEFAULT_MARGIN_PERCENT),
            fonts: FontConfig::default(),
        }
    }
}

/// Font file locations.
///
/// Explicit paths must exist and parse. Slots left empty are filled by
/// searching `search_dirs` and then the platform font directories.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    /// Latin regular face.
    pub sans_regular: Option<PathBuf>,
    /// Latin bold face.
    pub sans_bold: Option<PathBuf>,
    /// CJK regular face.
    pub cjk_regular: Option<PathBuf>,
    /// CJK bold face.
    pub cjk_bold: Option<PathBuf>,
    /// Directories searched before the system ones.
    pub search_dirs: Vec<PathBuf>,
    /// Face index used for CJK font collections.
    pub cjk_index: u32,
    /// Whether to fall back to the platform font directories.
    pub system_fonts: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            sans_regular: None,
            sans_bold: None,
            cjk_regular: None,
            cjk_bold: None,
            search_dirs: Vec::new(),
            cjk_index: DEFAULT_CJK_INDEX,
            system_fonts: true,
        }
    }
}

impl CoverConfig {
    /// Parse a configuration from TOML text. `path` is only used in errors.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content, path)?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// `<config dir>/tenprint/config.toml`, when the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
    }

    /// Load the per-user configuration, or the defaults when there is none.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            Some(path) => {
                debug!("No config file at {:?}, using defaults", path);
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Build a validated [`CoverSpec`] for the given texts on this canvas.
    pub fn cover(
        &self,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<CoverSpec> {
        CoverSpec::new(title, subtitle, author).with_canvas(
            self.width,
            self.height,
            self.margin_percent,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = CoverConfig::parse("", Path::new("config.toml")).unwrap();
        assert_eq!(config, CoverConfig::default());
        assert_eq!(config.width, 400);
        assert_eq!(config.height, 600);
        assert_eq!(config.margin_percent, 2);
        assert_eq!(config.fonts.cjk_index, 2);
        assert!(config.fonts.system_fonts);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let toml = r#"
            height = 900

            [fonts]
            sans_bold = "/fonts/Bold.ttf"
            search_dirs = ["/a", "/b"]
        "#;
        let config = CoverConfig::parse(toml, Path::new("config.toml")).unwrap();
        assert_eq!(config.width, 400);
        assert_eq!(config.height, 900);
        assert_eq!(
            config.fonts.sans_bold.as_deref(),
            Some(Path::new("/fonts/Bold.ttf"))
        );
        assert_eq!(config.fonts.sans_regular, None);
        assert_eq!(
            config.fonts.search_dirs,
            vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );
    }

    #[test]
    fn unknown_keys_are_rejected_with_the_path() {
        let err = CoverConfig::parse("widht = 10", Path::new("/etc/cover.toml")).unwrap_err();
        match err {
            Error::ConfigParse { path, .. } => assert_eq!(path, Path::new("/etc/cover.toml")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn cover_validates_the_canvas() {
        let config = CoverConfig {
            margin_percent: 150,
            ..CoverConfig::default()
        };
        assert!(matches!(
            config.cover("T", "", "A"),
            Err(Error::InvalidSpec { .. })
        ));

        let spec = CoverConfig::default().cover("T", "S", "A").unwrap();
        assert_eq!(spec.subtitle(), "S");
        assert_eq!(spec.margin_px(), 12);
    }
}
