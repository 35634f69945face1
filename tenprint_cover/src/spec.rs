// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cover inputs and the canvas geometry derived from them.

use crate::error::{Error, Result};

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u16 = 400;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u16 = 600;
/// Default margin, as a percentage of the canvas height.
pub const DEFAULT_MARGIN_PERCENT: u8 = 2;

/// Immutable description of one cover: its three texts and its canvas.
///
/// Width and height are non-zero and the margin percentage is below 100.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverSpec {
    title: String,
    subtitle: String,
    author: String,
    width: u16,
    height: u16,
    margin_percent: u8,
}

impl CoverSpec {
    /// A cover on the default 400×600 canvas with a 2 % margin.
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            author: author.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin_percent: DEFAULT_MARGIN_PERCENT,
        }
    }

    /// Replace the canvas, validating its size and margin.
    ///
    /// Dimensions must be in `1..=65535` (the rasterizer works with 16-bit
    /// sizes) and the margin in `0..100`.
    pub fn with_canvas(mut self, width: u32, height: u32, margin_percent: u32) -> Result<Self> {
        let dim = |name: &str, value: u32| -> Result<u16> {
            match u16::try_from(value) {
                Ok(v) if v > 0 => Ok(v),
                _ => Err(Error::invalid_spec(format!(
                    "{name} must be between 1 and {}, got {value}",
                    u16::MAX
                ))),
            }
        };
        self.width = dim("width", width)?;
        self.height = dim("height", height)?;
        self.margin_percent = match u8::try_from(margin_percent) {
            Ok(m) if m < 100 => m,
            _ => {
                return Err(Error::invalid_spec(format!(
                    "margin must be below 100 percent, got {margin_percent}"
                )));
            }
        };
        Ok(self)
    }

    /// The title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The subtitle text; may be empty.
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    /// The author text.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Margin as a percentage of the canvas height.
    pub fn margin_percent(&self) -> u8 {
        self.margin_percent
    }

    /// Margin in pixels: `height * margin / 100`, truncated.
    pub fn margin_px(&self) -> i32 {
        i32::from(self.height) * i32::from(self.margin_percent) / 100
    }

    /// Top edge of the square artwork region, `height - width`.
    ///
    /// Negative when the canvas is wider than it is tall; the square then
    /// starts above the canvas and is clipped.
    pub fn artwork_top(&self) -> i32 {
        i32::from(self.height) - i32::from(self.width)
    }

    /// Height of the band between the top margin and the artwork square.
    pub fn text_band(&self) -> i32 {
        self.artwork_top() - self.margin_px()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_classic_cover() {
        let spec = CoverSpec::new("Title", "", "Author");
        assert_eq!((spec.width(), spec.height()), (400, 600));
        assert_eq!(spec.margin_px(), 12);
        assert_eq!(spec.artwork_top(), 200);
        assert_eq!(spec.text_band(), 188);
    }

    #[test]
    fn canvas_is_validated() {
        let spec = CoverSpec::new("T", "", "A");
        assert!(spec.clone().with_canvas(0, 600, 2).is_err());
        assert!(spec.clone().with_canvas(400, 70_000, 2).is_err());
        assert!(spec.clone().with_canvas(400, 600, 100).is_err());

        let ok = spec.with_canvas(800, 1200, 0).expect("valid canvas");
        assert_eq!(ok.width(), 800);
        assert_eq!(ok.margin_px(), 0);
    }

    #[test]
    fn invalid_canvas_reports_the_field() {
        let err = CoverSpec::new("T", "", "A")
            .with_canvas(400, 0, 2)
            .unwrap_err();
        assert!(err.to_string().contains("height"), "{err}");
    }
}
