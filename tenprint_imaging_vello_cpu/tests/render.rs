// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-level checks for the `vello_cpu` backend.

use peniko::{Brush, Color, Gradient};
use tenprint_imaging::{PaintDesc, ResourceBackend, ShapeExt};
use tenprint_imaging_vello_cpu::{RgbaImage, render_rgba8};

const RED: Color = Color::from_rgb8(200, 10, 10);
const BLUE: Color = Color::from_rgb8(10, 10, 200);

fn two_tone() -> RgbaImage {
    render_rgba8(32, 32, |backend| {
        let white = backend.create_paint(PaintDesc {
            brush: Brush::Solid(Color::WHITE),
        });
        let red = backend.create_paint(PaintDesc {
            brush: Brush::Solid(RED),
        });
        let blue = backend.create_paint(PaintDesc {
            brush: Brush::Solid(BLUE),
        });
        backend.fill_rect(white, 0.0, 0.0, 32.0, 32.0);
        backend.fill_rect(red, 0.0, 0.0, 16.0, 16.0);
        backend.fill_ellipse(blue, 16.0, 16.0, 16.0, 16.0);
    })
}

#[test]
fn rects_land_on_pixel_grid() {
    let image = two_tone();
    assert_eq!(image.pixels.len(), 32 * 32 * 4);
    assert_eq!(image.pixel(2, 2), Some([200, 10, 10, 255]));
    assert_eq!(image.pixel(15, 15), Some([200, 10, 10, 255]));
    assert_eq!(image.pixel(16, 2), Some([255, 255, 255, 255]));
    assert_eq!(image.pixel(32, 0), None);
}

#[test]
fn ellipse_covers_its_centre_but_not_its_corners() {
    let image = two_tone();
    assert_eq!(image.pixel(24, 24), Some([10, 10, 200, 255]));
    assert_eq!(image.pixel(16, 31), Some([255, 255, 255, 255]));
}

#[test]
fn triangle_and_arc_draw_ink() {
    let image = render_rgba8(40, 40, |backend| {
        let ink = backend.create_paint(PaintDesc {
            brush: Brush::Solid(Color::BLACK),
        });
        backend.fill_triangle(ink, [(0.0, 20.0), (10.0, 0.0), (20.0, 20.0)]);
        backend.stroke_arc(ink, 0.0, 20.0, 40.0, 40.0, 90.0, 90.0, 4.0);
    });
    // Inside the triangle, near its base.
    assert_eq!(image.pixel(10, 18), Some([0, 0, 0, 255]));
    // Outside the triangle, top-left corner stays transparent.
    assert_eq!(image.pixel(0, 0).map(|px| px[3]), Some(0));
    // Inset box is (2, 22) 32x32, so the arc starts at the top of a circle
    // centred on (18, 38) with radius 16.
    assert_eq!(image.pixel(18, 22).map(|px| px[3]), Some(255));
    // The quarter sweeps counter-clockwise, leaving the right side empty.
    assert_eq!(image.pixel(34, 38).map(|px| px[3]), Some(0));
}

#[test]
fn non_solid_brushes_keep_the_previous_paint() {
    let image = render_rgba8(8, 8, |backend| {
        let red = backend.create_paint(PaintDesc {
            brush: Brush::Solid(RED),
        });
        let gradient = backend.create_paint(PaintDesc {
            brush: Brush::Gradient(Gradient::new_linear((0.0, 0.0), (8.0, 0.0))),
        });
        backend.fill_rect(red, 0.0, 0.0, 8.0, 4.0);
        backend.fill_rect(gradient, 0.0, 4.0, 8.0, 4.0);
    });
    assert_eq!(image.pixel(4, 2), Some([200, 10, 10, 255]));
    assert_eq!(image.pixel(4, 6), Some([200, 10, 10, 255]));
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(two_tone(), two_tone());
}

#[test]
fn png_encoding_writes_signature() {
    let bytes = two_tone().encode_png().expect("in-memory PNG encoding");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
