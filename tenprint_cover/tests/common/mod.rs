// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for cover integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]
#![allow(
    dead_code,
    reason = "Each test binary uses a different subset of these helpers."
)]

use std::cell::RefCell;
use std::ops::Range;
use std::path::PathBuf;

use peniko::{Blob, Brush, Color, FontData};
use tenprint_imaging::{DrawOp, ImagingBackend, PaintId, ShapeExt};
use tenprint_imaging_ref::RefBackend;
use tenprint_imaging_vello_cpu::RgbaImage;
use tenprint_text::{
    FontBook, FontDescriptor, FontFamily, FontSource, FontWeight, Resolution, TextFace,
    TextMetrics,
};

/// A face where every character is half an em wide.
///
/// Each drawn line becomes one rectangle spanning the line's advance from the
/// top of the line to the baseline, so tests can see where text went.
#[derive(Debug)]
pub(crate) struct BlockFace {
    pub(crate) size: f32,
}

impl TextMetrics for BlockFace {
    fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.size * 0.5
    }

    fn ascent(&self) -> f32 {
        self.size * 0.8
    }

    fn line_height(&self) -> f32 {
        self.size * 1.2
    }
}

impl TextFace for BlockFace {
    fn draw_line(
        &self,
        backend: &mut dyn ImagingBackend,
        text: &str,
        x: f32,
        baseline: f32,
        paint: PaintId,
    ) {
        let top = baseline - self.ascent();
        backend.fill_rect(paint, x, top, self.measure(text), self.ascent());
    }
}

/// Hands out [`BlockFace`]s and remembers what was asked for.
#[derive(Debug, Default)]
pub(crate) struct BlockFonts {
    missing: bool,
    pub(crate) requests: RefCell<Vec<FontDescriptor>>,
}

impl BlockFonts {
    pub(crate) fn none() -> Self {
        Self {
            missing: true,
            ..Self::default()
        }
    }
}

impl FontSource for BlockFonts {
    fn resolve(&self, desc: &FontDescriptor) -> Option<Resolution> {
        (!self.missing).then_some(Resolution {
            family: desc.family,
            weight: desc.weight,
        })
    }

    fn face(&self, desc: &FontDescriptor) -> Option<Box<dyn TextFace + '_>> {
        self.requests.borrow_mut().push(*desc);
        if self.missing {
            None
        } else {
            Some(Box::new(BlockFace { size: desc.size }))
        }
    }
}

/// Filled rectangles drawn with `color`, as `(x0, y0, x1, y1)`.
pub(crate) fn rects_in(backend: &RefBackend, color: Color) -> Vec<(f32, f32, f32, f32)> {
    let wanted = Brush::Solid(color);
    backend
        .draws()
        .filter_map(|(op, brush)| match *op {
            DrawOp::FillRect { x0, y0, x1, y1 } if brush == Some(&wanted) => {
                Some((x0, y0, x1, y1))
            }
            _ => None,
        })
        .collect()
}

/// Path of the DejaVu Sans file vendored for tests.
pub(crate) fn dejavu_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets/fonts/dejavu/DejaVuSans.ttf")
}

/// A book whose only face is DejaVu Sans, filed as the regular Sans face.
pub(crate) fn dejavu_book() -> FontBook {
    let bytes = include_bytes!("../../../assets/fonts/dejavu/DejaVuSans.ttf");
    let mut book = FontBook::new();
    book.insert(
        FontFamily::Sans,
        FontWeight::Regular,
        FontData::new(Blob::from(bytes.to_vec()), 0),
    )
    .expect("DejaVu Sans should load");
    book
}

/// Number of pixels in `cols` x `rows` that are a dark shade of grey.
///
/// Cover text is the only grey ink drawn above the artwork, so this counts
/// text coverage there.
pub(crate) fn text_pixels(image: &RgbaImage, cols: Range<u16>, rows: Range<u16>) -> usize {
    rows.flat_map(|y| cols.clone().map(move |x| (x, y)))
        .filter_map(|(x, y)| image.pixel(x, y))
        .filter(|[r, g, b, _]| r == g && g == b && *r < 200)
        .count()
}
