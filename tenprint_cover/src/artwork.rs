// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing the glyph grid into the artwork square.

use tenprint_imaging::{ImagingBackend, PaintId, ShapeExt};
use tracing::debug;

use crate::glyph::{self, Ink, Placed};
use crate::grid::Grid;
use crate::spec::CoverSpec;

/// Paints for the two palette colours.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Inks {
    /// Glyph foreground.
    pub shape: PaintId,
    /// Background and cut-outs.
    pub base: PaintId,
}

impl Inks {
    fn get(&self, ink: Ink) -> PaintId {
        match ink {
            Ink::Shape => self.shape,
            Ink::Base => self.base,
        }
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "cover coordinates are far below 2^24"
)]
fn px(v: i32) -> f32 {
    v as f32
}

/// Draw the glyph for `c` into the cell at `(x, y)` of size `s`.
///
/// Symbols without a recipe draw nothing. Marks are not clipped to the cell.
pub fn draw_glyph(backend: &mut dyn ImagingBackend, c: char, x: i32, y: i32, s: i32, inks: Inks) {
    let Some(marks) = glyph::recipe(c) else {
        return;
    };
    for mark in marks {
        let paint = inks.get(mark.ink);
        match mark.place(x, y, s) {
            Placed::Rect(x, y, w, h) => backend.fill_rect(paint, px(x), px(y), px(w), px(h)),
            Placed::Ellipse(x, y, w, h) => {
                backend.fill_ellipse(paint, px(x), px(y), px(w), px(h));
            }
            Placed::Triangle(corners) => {
                backend.fill_triangle(paint, corners.map(|(x, y)| (px(x), px(y))));
            }
            Placed::Arc(x, y, w, h, start, sweep, thick) => backend.stroke_arc(
                paint,
                px(x),
                px(y),
                px(w),
                px(h),
                f32::from(start),
                f32::from(sweep),
                px(thick),
            ),
        }
    }
}

/// Fill the top margin strip and the artwork square, then draw one glyph per cell.
///
/// `glyphs` must hold at least `grid.total` symbols; extra symbols are ignored.
pub fn draw_artwork(
    backend: &mut dyn ImagingBackend,
    spec: &CoverSpec,
    grid: &Grid,
    glyphs: &[char],
    inks: Inks,
) {
    let width = px(i32::from(spec.width()));
    let top = spec.artwork_top();
    backend.fill_rect(inks.base, 0.0, 0.0, width, px(spec.margin_px()));
    backend.fill_rect(inks.base, 0.0, px(top), width, width);

    let size = i32::try_from(grid.cell_size).unwrap_or(i32::MAX);
    debug!(
        cells = grid.total,
        cell_size = grid.cell_size,
        "drawing artwork"
    );
    for (index, &c) in (0..grid.total).zip(glyphs) {
        let (col, row) = grid.cell(index);
        // Grid coordinates are below 11, so they fit any integer type.
        let x = i32::try_from(col).unwrap_or(0) * size;
        let y = top + i32::try_from(row).unwrap_or(0) * size;
        draw_glyph(backend, c, x, y, size, inks);
    }
}
