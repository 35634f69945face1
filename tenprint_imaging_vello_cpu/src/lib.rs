// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vello CPU–backed implementation of the imaging backend.
//!
//! This crate implements [`ImagingBackend`] on top of
//! the sparse-strips [`vello_cpu::RenderContext`], and offers
//! [`render_rgba8`] to run a drawing closure against a fresh context and read
//! the result back as straight-alpha RGBA8 pixels.
//!
//! With the `std` feature, [`RgbaImage`] can also be encoded as PNG.

#![deny(unsafe_code)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use alloc::vec::Vec;
use core::fmt;
use kurbo::{Cap, Join};
use peniko::Brush;
use tenprint_imaging::{
    Affine, DrawOp, ImagingBackend, PaintDesc, PaintId, PathCmd, PathDesc, PathId,
    ResourceBackend, StateOp,
};
use vello_cpu::kurbo::{
    Affine as CpuAffine, BezPath, Cap as CpuCap, Join as CpuJoin, Rect, Stroke,
};
use vello_cpu::{Pixmap, RenderContext, RenderMode, RenderSettings};

/// CPU-backed implementation of the imaging backend using `vello_cpu`.
pub struct VelloCpuImagingBackend<'ctx> {
    /// Underlying Vello CPU render context to draw into.
    pub ctx: &'ctx mut RenderContext,
    paths: Vec<Option<BezPath>>,
    paints: Vec<Option<PaintDesc>>,

    current_paint: Option<PaintId>,
}

impl fmt::Debug for VelloCpuImagingBackend<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VelloCpuImagingBackend { .. }")
    }
}

impl<'ctx> VelloCpuImagingBackend<'ctx> {
    /// Create a new backend that renders into the given CPU render context.
    pub fn new(ctx: &'ctx mut RenderContext) -> Self {
        Self {
            ctx,
            paths: Vec::new(),
            paints: Vec::new(),
            current_paint: None,
        }
    }

    fn path_to_bez(&self, id: PathId) -> Option<&BezPath> {
        self.paths.get(id.0 as usize)?.as_ref()
    }

    fn affine_to_cpu(xf: Affine) -> CpuAffine {
        CpuAffine::new(xf.as_coeffs())
    }

    fn apply_current_paint(&mut self) {
        let Some(id) = self.current_paint else {
            return;
        };
        // Covers only paint solid colours; other brushes leave the paint unchanged.
        if let Some(Some(PaintDesc {
            brush: Brush::Solid(color),
        })) = self.paints.get(id.0 as usize)
        {
            self.ctx.set_paint(*color);
        }
    }
}

impl ResourceBackend for VelloCpuImagingBackend<'_> {
    fn create_path(&mut self, desc: PathDesc) -> PathId {
        let mut p = BezPath::new();
        for cmd in desc.commands.iter() {
            match *cmd {
                PathCmd::MoveTo { x, y } => p.move_to((x as f64, y as f64)),
                PathCmd::LineTo { x, y } => p.line_to((x as f64, y as f64)),
                PathCmd::QuadTo { x1, y1, x, y } => {
                    p.quad_to((x1 as f64, y1 as f64), (x as f64, y as f64));
                }
                PathCmd::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => p.curve_to(
                    (x1 as f64, y1 as f64),
                    (x2 as f64, y2 as f64),
                    (x as f64, y as f64),
                ),
                PathCmd::Close => p.close_path(),
            }
        }
        let id = u32::try_from(self.paths.len())
            .expect("VelloCpuImagingBackend: too many paths for u32 PathId");
        self.paths.push(Some(p));
        PathId(id)
    }

    fn destroy_path(&mut self, id: PathId) {
        let idx = id.0 as usize;
        if let Some(slot) = self.paths.get_mut(idx) {
            *slot = None;
        }
    }

    fn create_paint(&mut self, desc: PaintDesc) -> PaintId {
        let id = u32::try_from(self.paints.len())
            .expect("VelloCpuImagingBackend: too many paints for u32 PaintId");
        self.paints.push(Some(desc));
        PaintId(id)
    }

    fn destroy_paint(&mut self, id: PaintId) {
        let idx = id.0 as usize;
        if let Some(slot) = self.paints.get_mut(idx) {
            *slot = None;
        }
        if self.current_paint == Some(id) {
            self.current_paint = None;
        }
    }
}

impl ImagingBackend for VelloCpuImagingBackend<'_> {
    fn state(&mut self, op: StateOp) {
        match op {
            StateOp::SetTransform(xf) => {
                self.ctx.set_transform(Self::affine_to_cpu(xf));
            }
            StateOp::SetPaint(id) => {
                self.current_paint = Some(id);
                self.apply_current_paint();
            }
            StateOp::SetStroke(style) => {
                let mut stroke = Stroke::new(style.width);
                stroke.miter_limit = style.miter_limit;
                stroke.join = match style.join {
                    Join::Bevel => CpuJoin::Bevel,
                    Join::Miter => CpuJoin::Miter,
                    Join::Round => CpuJoin::Round,
                };
                stroke.start_cap = match style.start_cap {
                    Cap::Butt => CpuCap::Butt,
                    Cap::Round => CpuCap::Round,
                    Cap::Square => CpuCap::Square,
                };
                stroke.end_cap = match style.end_cap {
                    Cap::Butt => CpuCap::Butt,
                    Cap::Round => CpuCap::Round,
                    Cap::Square => CpuCap::Square,
                };
                self.ctx.set_stroke(stroke);
            }
        }
    }

    fn draw(&mut self, op: DrawOp) {
        match op {
            DrawOp::FillPath(id) => {
                if let Some(path) = self.path_to_bez(id).cloned() {
                    self.ctx.fill_path(&path);
                }
            }
            DrawOp::StrokePath(id) => {
                if let Some(path) = self.path_to_bez(id).cloned() {
                    self.ctx.stroke_path(&path);
                }
            }
            DrawOp::FillRect { x0, y0, x1, y1 } => {
                let rect = Rect::new(x0 as f64, y0 as f64, x1 as f64, y1 as f64);
                self.ctx.fill_rect(&rect);
            }
        }
    }
}

/// A rendered image as straight-alpha RGBA8 pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
    /// `width * height * 4` bytes, `[r, g, b, a]` per pixel.
    pub pixels: Vec<u8>,
}

impl RgbaImage {
    /// Returns the `[r, g, b, a]` value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u16, y: u16) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (usize::from(y) * usize::from(self.width) + usize::from(x)) * 4;
        let px = self.pixels.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Encode the image as an 8-bit RGBA PNG into `w`.
    #[cfg(feature = "std")]
    pub fn write_png<W: std::io::Write>(&self, w: W) -> Result<(), png::EncodingError> {
        let mut encoder = png::Encoder::new(w, u32::from(self.width), u32::from(self.height));
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;
        writer.finish()
    }

    /// Encode the image as an in-memory PNG.
    #[cfg(feature = "std")]
    pub fn encode_png(&self) -> Result<Vec<u8>, png::EncodingError> {
        let mut out = Vec::new();
        self.write_png(&mut out)?;
        Ok(out)
    }
}

/// Render a `width × height` scene with a fresh `vello_cpu` context.
///
/// The canvas starts fully transparent; `build` issues every drawing op. The
/// u8 pipeline is forced so output is identical across feature configurations.
pub fn render_rgba8<F>(width: u16, height: u16, build: F) -> RgbaImage
where
    F: FnOnce(&mut VelloCpuImagingBackend<'_>),
{
    render_rgba8_with(width, height, build).0
}

/// Like [`render_rgba8`], but also hands back whatever `build` returned.
pub fn render_rgba8_with<F, R>(width: u16, height: u16, build: F) -> (RgbaImage, R)
where
    F: FnOnce(&mut VelloCpuImagingBackend<'_>) -> R,
{
    let settings = RenderSettings {
        render_mode: RenderMode::OptimizeSpeed,
        ..RenderSettings::default()
    };
    let mut ctx = RenderContext::new_with(width, height, settings);
    let mut backend = VelloCpuImagingBackend::new(&mut ctx);
    let output = build(&mut backend);

    let mut pixmap = Pixmap::new(width, height);
    backend.ctx.flush();
    backend.ctx.render_to_pixmap(&mut pixmap);

    let unpremul = pixmap.take_unpremultiplied();
    let mut pixels = Vec::with_capacity(unpremul.len() * 4);
    for p in unpremul {
        pixels.extend_from_slice(&[p.r, p.g, p.b, p.a]);
    }
    let image = RgbaImage {
        width,
        height,
        pixels,
    };
    (image, output)
}
