// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TenPrint Text: font faces for cover typography.
//!
//! This crate provides the text side of cover drawing, expressed as
//! [`tenprint_imaging`] operations. It does **not** perform shaping: every
//! character maps to one glyph and glyphs advance left to right, which is all
//! the cover text blocks need.
//!
//! - [`TextMetrics`] and [`TextFace`] are the seams the word-wrapper works
//!   against. Tests provide fixed-advance faces; production uses
//!   [`OutlineFace`].
//! - [`OutlineFace`] is backed by `skrifa`: advance widths, vertical metrics,
//!   and glyph outlines lowered into imaging paths.
//! - [`FontBook`] holds the loaded Sans and CJK faces and resolves a
//!   [`FontDescriptor`] with weight and family fallback.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use peniko::FontData;
use skrifa::instance::{LocationRef, Size};
use skrifa::metrics::GlyphMetrics;
use skrifa::outline::{OutlineGlyphCollection, OutlinePen};
use skrifa::{FontRef, GlyphId, MetadataProvider};
use tenprint_imaging::{
    Affine, DrawOp, ImagingBackend, PaintId, PathCmd, PathDesc, StateOp,
};

/// Horizontal and vertical metrics of a face at a fixed pixel size.
pub trait TextMetrics {
    /// Advance width of `text` in pixels.
    fn measure(&self, text: &str) -> f32;

    /// Distance from the top of a line to its baseline, in pixels.
    fn ascent(&self) -> f32;

    /// Distance between consecutive baselines, in pixels.
    fn line_height(&self) -> f32;
}

/// A face that can also draw a single line of text.
pub trait TextFace: TextMetrics {
    /// Draw `text` with its baseline origin at `(x, baseline)`.
    ///
    /// The backend's transform is left at identity afterwards.
    fn draw_line(
        &self,
        backend: &mut dyn ImagingBackend,
        text: &str,
        x: f32,
        baseline: f32,
        paint: PaintId,
    );
}

/// Font family used for a text block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// Latin sans-serif (Noto Sans).
    Sans,
    /// CJK-capable sans-serif (Noto Sans CJK SC).
    SansCjk,
}

impl FontFamily {
    /// Family name as installed on typical systems.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sans => "Noto Sans",
            Self::SansCjk => "Noto Sans CJK SC",
        }
    }

    const fn other(self) -> Self {
        match self {
            Self::Sans => Self::SansCjk,
            Self::SansCjk => Self::Sans,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Sans => 0,
            Self::SansCjk => 1,
        }
    }
}

/// Font weight used for a text block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Regular (400).
    Regular,
    /// Bold (700).
    Bold,
}

impl FontWeight {
    const fn other(self) -> Self {
        match self {
            Self::Regular => Self::Bold,
            Self::Bold => Self::Regular,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Regular => 0,
            Self::Bold => 1,
        }
    }
}

/// Family, weight, and pixel size requested for a text block.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    /// Requested family.
    pub family: FontFamily,
    /// Requested weight.
    pub weight: FontWeight,
    /// Size in pixels per em.
    pub size: f32,
}

impl FontDescriptor {
    /// Candidate `(family, weight)` pairs in resolution order.
    ///
    /// The exact request comes first, then the other weight of the same family,
    /// then the other family at the requested weight, then anything left.
    pub const fn fallbacks(&self) -> [(FontFamily, FontWeight); 4] {
        let (f, w) = (self.family, self.weight);
        [(f, w), (f, w.other()), (f.other(), w), (f.other(), w.other())]
    }
}

/// Error returned when font bytes cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidFont {
    /// Collection index that was requested.
    pub index: u32,
}

impl fmt::Display for InvalidFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a readable font (collection index {})", self.index)
    }
}

impl core::error::Error for InvalidFont {}

/// A `skrifa`-backed face at a fixed pixel size.
///
/// Vertical metrics are rounded to whole pixels so baselines land on pixel
/// rows. Characters missing from the font use the `.notdef` glyph.
#[derive(Clone)]
pub struct OutlineFace<'a> {
    font: FontRef<'a>,
    size: Size,
    ascent: f32,
    line_height: f32,
}

impl fmt::Debug for OutlineFace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlineFace")
            .field("size", &self.size)
            .field("ascent", &self.ascent)
            .field("line_height", &self.line_height)
            .finish_non_exhaustive()
    }
}

impl<'a> OutlineFace<'a> {
    /// Parse face `index` of `bytes` (a font file or collection) at `size_px`.
    pub fn new(bytes: &'a [u8], index: u32, size_px: f32) -> Result<Self, InvalidFont> {
        let font = FontRef::from_index(bytes, index).map_err(|_| InvalidFont { index })?;
        let size = Size::new(size_px);
        let metrics = font.metrics(size, LocationRef::default());
        let ascent = metrics.ascent.round();
        let descent = (-metrics.descent).round();
        let leading = metrics.leading.round();
        Ok(Self {
            font,
            size,
            ascent,
            line_height: ascent + descent + leading,
        })
    }

    fn glyph_id(&self, ch: char) -> GlyphId {
        self.font.charmap().map(ch).unwrap_or(GlyphId::NOTDEF)
    }
}

impl TextMetrics for OutlineFace<'_> {
    fn measure(&self, text: &str) -> f32 {
        let metrics = GlyphMetrics::new(&self.font, self.size, LocationRef::default());
        text.chars()
            .map(|ch| metrics.advance_width(self.glyph_id(ch)).unwrap_or(0.0))
            .sum()
    }

    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

impl TextFace for OutlineFace<'_> {
    fn draw_line(
        &self,
        backend: &mut dyn ImagingBackend,
        text: &str,
        x: f32,
        baseline: f32,
        paint: PaintId,
    ) {
        let metrics = GlyphMetrics::new(&self.font, self.size, LocationRef::default());
        let outlines = self.font.outline_glyphs();
        let mut pen_x = x;
        let mut drew = false;
        for ch in text.chars() {
            let gid = self.glyph_id(ch);
            if let Some(desc) = glyph_outline_to_path(&outlines, gid, self.size) {
                let path = backend.create_path(desc);
                backend.state(StateOp::SetPaint(paint));
                backend.state(StateOp::SetTransform(Affine::translate((
                    f64::from(pen_x),
                    f64::from(baseline),
                ))));
                backend.draw(DrawOp::FillPath(path));
                backend.destroy_path(path);
                drew = true;
            }
            pen_x += metrics.advance_width(gid).unwrap_or(0.0);
        }
        if drew {
            backend.state(StateOp::SetTransform(Affine::IDENTITY));
        }
    }
}

/// Convert a glyph outline into an imaging path with Y pointing down.
fn glyph_outline_to_path(
    outlines: &OutlineGlyphCollection<'_>,
    glyph_id: GlyphId,
    size: Size,
) -> Option<PathDesc> {
    struct Recorder {
        cmds: Vec<PathCmd>,
    }

    // Font space is y-up; flip while recording.
    impl OutlinePen for Recorder {
        fn move_to(&mut self, x: f32, y: f32) {
            self.cmds.push(PathCmd::MoveTo { x, y: -y });
        }

        fn line_to(&mut self, x: f32, y: f32) {
            self.cmds.push(PathCmd::LineTo { x, y: -y });
        }

        fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
            self.cmds.push(PathCmd::QuadTo {
                x1,
                y1: -y1,
                x,
                y: -y,
            });
        }

        fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
            self.cmds.push(PathCmd::CurveTo {
                x1,
                y1: -y1,
                x2,
                y2: -y2,
                x,
                y: -y,
            });
        }

        fn close(&mut self) {
            self.cmds.push(PathCmd::Close);
        }
    }

    let mut recorder = Recorder { cmds: Vec::new() };
    let outline = outlines.get(glyph_id)?;
    outline.draw(size, &mut recorder).ok()?;
    if recorder.cmds.is_empty() {
        None
    } else {
        Some(PathDesc {
            commands: recorder.cmds.into_boxed_slice(),
        })
    }
}

/// Something that can hand out faces for font descriptors.
pub trait FontSource {
    /// Which loaded family and weight would serve `desc`.
    fn resolve(&self, desc: &FontDescriptor) -> Option<Resolution>;

    /// Returns a face for `desc`, or `None` when nothing suitable is loaded.
    fn face(&self, desc: &FontDescriptor) -> Option<Box<dyn TextFace + '_>>;
}

/// Where a descriptor was resolved to inside a [`FontBook`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Family actually used.
    pub family: FontFamily,
    /// Weight actually used.
    pub weight: FontWeight,
}

impl Resolution {
    /// Whether the resolution differs from what `desc` asked for.
    pub fn is_fallback(&self, desc: &FontDescriptor) -> bool {
        self.family != desc.family || self.weight != desc.weight
    }
}

/// The set of loaded cover faces, one slot per family and weight.
#[derive(Clone, Debug, Default)]
pub struct FontBook {
    slots: [[Option<FontData>; 2]; 2],
}

impl FontBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `data` as the face for `family`/`weight`, replacing any previous one.
    ///
    /// The bytes are parsed once up front so a bad file is reported at load time.
    pub fn insert(
        &mut self,
        family: FontFamily,
        weight: FontWeight,
        data: FontData,
    ) -> Result<(), InvalidFont> {
        FontRef::from_index(data.data.as_ref(), data.index)
            .map_err(|_| InvalidFont { index: data.index })?;
        self.slots[family.slot()][weight.slot()] = Some(data);
        Ok(())
    }

    /// Whether a face is loaded for exactly `family`/`weight`.
    pub fn contains(&self, family: FontFamily, weight: FontWeight) -> bool {
        self.slots[family.slot()][weight.slot()].is_some()
    }

    /// Whether any face of `family` is loaded.
    pub fn has_family(&self, family: FontFamily) -> bool {
        self.slots[family.slot()].iter().any(Option::is_some)
    }

    /// Whether nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().flatten().all(Option::is_none)
    }

    fn data(&self, resolution: Resolution) -> Option<&FontData> {
        self.slots[resolution.family.slot()][resolution.weight.slot()].as_ref()
    }
}

impl FontSource for FontBook {
    fn resolve(&self, desc: &FontDescriptor) -> Option<Resolution> {
        desc.fallbacks()
            .into_iter()
            .find(|(family, weight)| self.contains(*family, *weight))
            .map(|(family, weight)| Resolution { family, weight })
    }

    fn face(&self, desc: &FontDescriptor) -> Option<Box<dyn TextFace + '_>> {
        let data = self.data(self.resolve(desc)?)?;
        let face = OutlineFace::new(data.data.as_ref(), data.index, desc.size).ok()?;
        Some(Box::new(face))
    }
}
