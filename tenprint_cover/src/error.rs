// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for cover generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the cover [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while configuring, rendering, or saving a cover.
///
/// The generation pipeline itself cannot fail once a [`CoverSpec`] exists; the
/// variants here come from input validation and from the file system.
///
/// [`CoverSpec`]: crate::CoverSpec
#[derive(Debug, Error)]
pub enum Error {
    /// Canvas dimensions or margin outside the supported range.
    #[error("invalid cover: {message}")]
    InvalidSpec {
        /// What was wrong with the input.
        message: String,
    },

    /// Reading or writing a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The PNG encoder rejected the image or its output stream failed.
    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),

    /// The configuration file is not valid TOML for [`CoverConfig`](crate::CoverConfig).
    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// A font file could not be read.
    #[error("failed to read font {}: {source}", path.display())]
    FontLoad {
        /// Path of the font file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A font file was read but is not a usable font.
    #[error("not a usable font file: {}", path.display())]
    FontParse {
        /// Path of the font file.
        path: PathBuf,
    },

    /// No Noto Sans face was configured or found on the system.
    #[error(
        "no Noto Sans font found; set [fonts] sans_regular in the config or add a font directory to search_dirs"
    )]
    NoFont,
}

impl Error {
    /// Shorthand for [`Error::InvalidSpec`].
    pub fn invalid_spec(message: impl Into<String>) -> Self {
        Self::InvalidSpec {
            message: message.into(),
        }
    }
}
