// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-colour palette derived from the title and author.

use peniko::Color;

use crate::scale::{clip, remap};

const SATURATION: f32 = 1.0;
const BASE_BRIGHTNESS: i64 = 90;
const SHAPE_BRIGHTNESS: f32 = 0.9;
const COLOR_DISTANCE: i64 = 100;

/// A colour in hue/saturation/brightness form, each component in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsb {
    /// Hue as a fraction of a full turn.
    pub hue: f32,
    /// Saturation.
    pub saturation: f32,
    /// Brightness.
    pub brightness: f32,
}

impl Hsb {
    /// Convert to 8-bit RGB.
    ///
    /// Uses the classic sextant algorithm with `(c * 255 + 0.5)` truncation
    /// per channel, so the same inputs always give the same bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "channels are in [0, 255.5) and the sextant in [0, 6)"
    )]
    pub fn to_rgb8(self) -> [u8; 3] {
        let channel = |c: f32| (c * 255.0 + 0.5) as u8;
        let v = self.brightness;
        if self.saturation == 0.0 {
            let c = channel(v);
            return [c, c, c];
        }
        let h = (self.hue - self.hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = v * (1.0 - self.saturation);
        let q = v * (1.0 - self.saturation * f);
        let t = v * (1.0 - self.saturation * (1.0 - f));
        let (r, g, b) = match h as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            5 => (v, p, q),
            _ => (0.0, 0.0, 0.0),
        };
        [channel(r), channel(g), channel(b)]
    }

    /// Convert to an opaque [`Color`].
    pub fn to_color(self) -> Color {
        let [r, g, b] = self.to_rgb8();
        Color::from_rgb8(r, g, b)
    }
}

/// Background and shape colours for one cover.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    /// Fill for the margin strip, the artwork square, and glyph cut-outs.
    pub background: Hsb,
    /// Foreground fill for glyphs.
    pub shape: Hsb,
}

impl Palette {
    /// Derive the palette from the title and author.
    ///
    /// Only the combined character count matters.
    pub fn derive(title: &str, author: &str) -> Self {
        Self::from_counts(title.chars().count() + author.chars().count())
    }

    /// Derive the palette from a combined title + author character count.
    ///
    /// The hue seed is the count clipped to `[2, 80]` and remapped onto
    /// `[10, 360]` degrees. The shape colour sits 100° further round the
    /// wheel. When the count is a multiple of ten the two colours swap.
    pub fn from_counts(counts: usize) -> Self {
        let counts = i64::try_from(counts).unwrap_or(i64::MAX);
        let seed = color_seed(counts);
        let background = Hsb {
            hue: hue_fraction(seed),
            saturation: SATURATION,
            brightness: percent(BASE_BRIGHTNESS - counts % 20),
        };
        let shape = Hsb {
            hue: hue_fraction((seed + COLOR_DISTANCE) % 360),
            saturation: SATURATION,
            brightness: SHAPE_BRIGHTNESS,
        };
        if counts % 10 == 0 {
            Self {
                background: shape,
                shape: background,
            }
        } else {
            Self { background, shape }
        }
    }
}

/// Hue seed in degrees, `10..=360`.
pub fn color_seed(counts: i64) -> i64 {
    remap(clip(counts, 2, 80), 2, 80, 10, 360)
}

#[allow(
    clippy::cast_precision_loss,
    reason = "degrees are at most 360 and exactly representable"
)]
fn hue_fraction(degrees: i64) -> f32 {
    degrees as f32 / 60.0 / 6.0
}

#[allow(
    clippy::cast_precision_loss,
    reason = "brightness percentages are in (70, 90]"
)]
fn percent(value: i64) -> f32 {
    value as f32 / 100.0
}
