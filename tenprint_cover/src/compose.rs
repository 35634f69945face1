// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The full cover pipeline: background, artwork, and the three text blocks.

use peniko::{Brush, Color};
use tenprint_imaging::{ImagingBackend, PaintDesc, PaintId, ShapeExt};
use tenprint_text::{FontDescriptor, FontSource};
use tracing::{debug, warn};

use crate::artwork::{Inks, draw_artwork};
use crate::font::FontPolicy;
use crate::glyph;
use crate::grid::Grid;
use crate::layout::{LineWrap, TextBox, draw_text_block};
use crate::palette::Palette;
use crate::spec::CoverSpec;

/// Fill colour of all cover text.
pub const TEXT_COLOR: Color = Color::from_rgb8(50, 50, 50);

/// The two text regions above the artwork square.
///
/// The band between the top margin and the artwork is split 3:1 between the
/// title block and the author block.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextRegions {
    /// Box for the title; the subtitle shares its width and height.
    pub title: TextBox,
    /// Box for the author.
    pub author: TextBox,
}

impl TextRegions {
    /// Compute the regions for `spec`.
    pub fn for_spec(spec: &CoverSpec) -> Self {
        let margin = spec.margin_px();
        let band = spec.text_band();
        let title_height = band * 3 / 4;
        let author_height = band / 4;
        let width = i32::from(spec.width()) - 2 * margin;
        Self {
            title: TextBox {
                x: margin,
                y: 2 * margin,
                width,
                height: title_height,
            },
            author: TextBox {
                x: margin,
                y: title_height,
                width,
                height: author_height,
            },
        }
    }
}

/// What [`CoverComposer::draw`] produced.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoverReport {
    /// Palette used for the artwork.
    pub palette: Palette,
    /// Grid the artwork was drawn on.
    pub grid: Grid,
    /// Title block, `None` when no face was available.
    pub title: Option<LineWrap>,
    /// Subtitle block, `None` when the subtitle is empty or had no face.
    pub subtitle: Option<LineWrap>,
    /// Author block, `None` when no face was available.
    pub author: Option<LineWrap>,
}

/// Draws one cover onto an imaging backend.
#[derive(Clone, Debug)]
pub struct CoverComposer {
    spec: CoverSpec,
}

impl CoverComposer {
    /// A composer for `spec`.
    pub fn new(spec: CoverSpec) -> Self {
        Self { spec }
    }

    /// The cover being composed.
    pub fn spec(&self) -> &CoverSpec {
        &self.spec
    }

    /// Draw the whole cover onto `backend` with faces from `fonts`.
    ///
    /// The canvas is filled white, then the artwork is drawn, then the title,
    /// the subtitle (when non-empty) and the author. A text block whose face
    /// cannot be resolved is skipped with a warning; the rest of the cover is
    /// still drawn. Paints created here are destroyed before returning.
    pub fn draw(&self, backend: &mut dyn ImagingBackend, fonts: &dyn FontSource) -> CoverReport {
        let spec = &self.spec;
        let width = f32::from(spec.width());
        let height = f32::from(spec.height());

        let palette = Palette::derive(spec.title(), spec.author());
        let grid = Grid::plan(spec.title().chars().count(), spec.width());
        debug!(
            background = ?palette.background.to_rgb8(),
            shape = ?palette.shape.to_rgb8(),
            grid = grid.count,
            "derived cover layout"
        );

        let white = solid(backend, Color::WHITE);
        let inks = Inks {
            shape: solid(backend, palette.shape.to_color()),
            base: solid(backend, palette.background.to_color()),
        };
        let ink = solid(backend, TEXT_COLOR);

        backend.fill_rect(white, 0.0, 0.0, width, height);

        let glyphs = glyph::cycle(
            &glyph::canonicalize(spec.title()),
            usize::try_from(grid.total).unwrap_or(0),
        );
        draw_artwork(backend, spec, &grid, &glyphs, inks);

        let policy = FontPolicy::new(spec.width());
        let regions = TextRegions::for_spec(spec);

        let title_font = policy.title(spec.title());
        let title = text_block(
            backend,
            fonts,
            "title",
            &title_font,
            spec.title(),
            regions.title,
            ink,
        );

        let subtitle = if spec.subtitle().is_empty() {
            None
        } else {
            let subtitle_font = policy.subtitle(spec.subtitle());
            let bbox = subtitle_box(regions.title, title, subtitle_font.size);
            text_block(
                backend,
                fonts,
                "subtitle",
                &subtitle_font,
                spec.subtitle(),
                bbox,
                ink,
            )
        };

        let author_font = policy.author(spec.author());
        let author = text_block(
            backend,
            fonts,
            "author",
            &author_font,
            spec.author(),
            regions.author,
            ink,
        );

        for paint in [white, inks.shape, inks.base, ink] {
            backend.destroy_paint(paint);
        }

        CoverReport {
            palette,
            grid,
            title,
            subtitle,
            author,
        }
    }
}

fn solid(backend: &mut dyn ImagingBackend, color: Color) -> PaintId {
    backend.create_paint(PaintDesc {
        brush: Brush::Solid(color),
    })
}

/// The subtitle sits right under the drawn title lines, but never lower than
/// one subtitle size above the bottom of the title region.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "cover coordinates are far below 2^24 and truncation toward zero is intended"
)]
fn subtitle_box(title_box: TextBox, title: Option<LineWrap>, size: f32) -> TextBox {
    let below_title = match title {
        Some(wrap) => title_box.y as f32 + wrap.lines as f32 * wrap.line_height,
        None => title_box.y as f32,
    };
    let limit = title_box.height as f32 - size;
    TextBox {
        y: below_title.min(limit) as i32,
        ..title_box
    }
}

fn text_block(
    backend: &mut dyn ImagingBackend,
    fonts: &dyn FontSource,
    role: &'static str,
    font: &FontDescriptor,
    text: &str,
    bbox: TextBox,
    paint: PaintId,
) -> Option<LineWrap> {
    let Some(face) = fonts.face(font) else {
        warn!(
            role,
            family = font.family.name(),
            "no font face available, skipping text block"
        );
        return None;
    };
    if let Some(used) = fonts.resolve(font).filter(|used| used.is_fallback(font)) {
        warn!(
            role,
            family = font.family.name(),
            weight = ?font.weight,
            used_family = used.family.name(),
            used_weight = ?used.weight,
            "requested font not loaded, falling back"
        );
    }
    debug!(
        role,
        family = font.family.name(),
        size = font.size,
        y = bbox.y,
        "drawing text block"
    );
    Some(draw_text_block(backend, &*face, text, bbox, paint))
}
