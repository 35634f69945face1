// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rasterizing a cover and writing it to disk.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tenprint_imaging_vello_cpu::{RgbaImage, render_rgba8_with};
use tenprint_text::FontSource;
use tracing::info;

use crate::compose::{CoverComposer, CoverReport};
use crate::error::Result;
use crate::spec::CoverSpec;

/// Rasterize `spec` on the CPU.
///
/// The same spec and fonts always produce the same pixels.
pub fn render_cover(spec: &CoverSpec, fonts: &dyn FontSource) -> (RgbaImage, CoverReport) {
    let composer = CoverComposer::new(spec.clone());
    render_rgba8_with(spec.width(), spec.height(), |backend| {
        composer.draw(backend, fonts)
    })
}

/// Encode `image` as PNG and write it to `path`, replacing any existing file.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    image.write_png(BufWriter::new(file))?;
    info!(
        width = image.width,
        height = image.height,
        "Wrote cover to {:?}",
        path
    );
    Ok(())
}
