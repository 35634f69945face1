// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Family and size selection for the three cover text blocks.

use tenprint_text::{FontDescriptor, FontFamily, FontWeight};

/// First codepoint of the CJK Unified Ideographs block.
const CJK_START: char = '\u{4E00}';

const TITLE_RATIO: f32 = 0.08;
const SUBTITLE_RATIO: f32 = 0.05;
const AUTHOR_RATIO: f32 = 0.07;

/// Picks font descriptors for cover text on a canvas of a given width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FontPolicy {
    canvas_width: f32,
}

impl FontPolicy {
    /// A policy for a canvas `canvas_width` pixels wide.
    pub fn new(canvas_width: u16) -> Self {
        Self {
            canvas_width: f32::from(canvas_width),
        }
    }

    /// CJK family if any character is at or above U+4E00, Sans otherwise.
    pub fn family_for(text: &str) -> FontFamily {
        if text.chars().any(|c| c >= CJK_START) {
            FontFamily::SansCjk
        } else {
            FontFamily::Sans
        }
    }

    /// One-shot size adjustment based on a rough text width.
    ///
    /// The width estimate is `chars * size`. Above three canvas widths the size
    /// shrinks by 20 %, below one canvas width it grows by 20 %.
    #[allow(
        clippy::cast_precision_loss,
        reason = "character counts of cover text are far below 2^24"
    )]
    pub fn scale_size(&self, text: &str, size: f32) -> f32 {
        let width = text.chars().count() as f32 * size;
        if width > self.canvas_width * 3.0 {
            size * 0.8
        } else if width < self.canvas_width {
            size * 1.2
        } else {
            size
        }
    }

    /// Bold face for the title, scaled to its length.
    pub fn title(&self, text: &str) -> FontDescriptor {
        FontDescriptor {
            family: Self::family_for(text),
            weight: FontWeight::Bold,
            size: self.scale_size(text, self.canvas_width * TITLE_RATIO),
        }
    }

    /// Regular face for the subtitle, scaled to its length.
    pub fn subtitle(&self, text: &str) -> FontDescriptor {
        FontDescriptor {
            family: Self::family_for(text),
            weight: FontWeight::Regular,
            size: self.scale_size(text, self.canvas_width * SUBTITLE_RATIO),
        }
    }

    /// Regular face for the author. Author text is never rescaled.
    pub fn author(&self, text: &str) -> FontDescriptor {
        FontDescriptor {
            family: Self::family_for(text),
            weight: FontWeight::Regular,
            size: self.canvas_width * AUTHOR_RATIO,
        }
    }
}
