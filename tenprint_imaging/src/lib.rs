// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TenPrint Imaging: backend-agnostic imaging IR and backend traits.
//!
//! This crate defines a small, plain‑old‑data (POD) friendly imaging
//! intermediate representation and traits for backends that consume it.
//! It sits between the cover generator and concrete rasterizers
//! (the `vello_cpu` backend, or the recording backend used in tests).
//!
//! # Core concepts
//!
//! - **Resources**: small, opaque handles ([`PathId`], [`PaintId`]) whose
//!   lifetimes are managed via [`ResourceBackend`].
//! - **Imaging operations**: [`StateOp`] (mutate state) and [`DrawOp`]
//!   (produce pixels), combined into [`ImagingOp`] for logging.
//! - **Backends**: [`ImagingBackend`] accepts imaging ops.
//! - **Shapes**: [`ShapeExt`] layers the drawing-surface primitives the cover
//!   generator needs (filled rectangles, ellipses and triangles, stroked arcs)
//!   on top of any backend, lowering each primitive into a transient path.
//!
//! # Example
//!
//! ```ignore
//! # use tenprint_imaging::*;
//! # use peniko::{Brush, Color};
//! # struct MyBackend { /* implements ResourceBackend + ImagingBackend */ }
//! let mut backend = MyBackend { /* ... */ };
//!
//! let paint = backend.create_paint(PaintDesc {
//!     brush: Brush::Solid(Color::WHITE),
//! });
//! backend.fill_rect(paint, 0.0, 0.0, 40.0, 40.0);
//! backend.stroke_arc(paint, 0.0, 0.0, 80.0, 80.0, 90.0, 90.0, 4.0);
//! ```

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Cap, PathEl, Shape};
use peniko::Brush;

/// Tolerance used when flattening curved shapes into path commands.
pub const SHAPE_TOLERANCE: f64 = 0.1;

/// Identifier for a path resource.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// resource.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathId(pub u32);

/// Identifier for a paint resource.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// resource. Paints may be shared by many paths.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaintId(pub u32);

/// Affine transform type used by the imaging IR.
pub type Affine = kurbo::Affine;

/// Stroke style used by `StateOp::SetStroke`.
///
/// This is currently a re-export of [`kurbo::Stroke`], which captures width,
/// joins, caps, dashes, and related stroke parameters.
pub type StrokeStyle = kurbo::Stroke;

/// State operations that mutate the current imaging state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the current transform matrix.
    SetTransform(Affine),
    /// Set the current paint resource.
    SetPaint(PaintId),
    /// Set the current stroke style.
    SetStroke(StrokeStyle),
}

/// Draw operations that produce pixels given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill the given path with the current paint.
    FillPath(PathId),
    /// Stroke the given path with the current stroke and paint.
    StrokePath(PathId),
    /// Fill an axis-aligned rectangle with the current paint.
    FillRect {
        /// Minimum X coordinate.
        x0: f32,
        /// Minimum Y coordinate.
        y0: f32,
        /// Maximum X coordinate.
        x1: f32,
        /// Maximum Y coordinate.
        y1: f32,
    },
}

/// Description of a path resource.
#[derive(Clone, Debug, PartialEq)]
pub struct PathDesc {
    /// Command buffer describing the path geometry.
    pub commands: Box<[PathCmd]>,
}

impl PathDesc {
    /// Lower any kurbo shape into a path description.
    ///
    /// Curves are kept as quadratic/cubic commands; `tolerance` only matters for
    /// shapes (such as arcs) that kurbo approximates with Bézier segments.
    pub fn from_shape(shape: &impl Shape, tolerance: f64) -> Self {
        Self::from_elements(shape.path_elements(tolerance))
    }

    /// Build a path description from a sequence of kurbo path elements.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "path coordinates are pixel-scale and fit comfortably in f32"
    )]
    pub fn from_elements(elements: impl IntoIterator<Item = PathEl>) -> Self {
        let commands: Vec<PathCmd> = elements
            .into_iter()
            .map(|el| match el {
                PathEl::MoveTo(p) => PathCmd::MoveTo {
                    x: p.x as f32,
                    y: p.y as f32,
                },
                PathEl::LineTo(p) => PathCmd::LineTo {
                    x: p.x as f32,
                    y: p.y as f32,
                },
                PathEl::QuadTo(p1, p) => PathCmd::QuadTo {
                    x1: p1.x as f32,
                    y1: p1.y as f32,
                    x: p.x as f32,
                    y: p.y as f32,
                },
                PathEl::CurveTo(p1, p2, p) => PathCmd::CurveTo {
                    x1: p1.x as f32,
                    y1: p1.y as f32,
                    x2: p2.x as f32,
                    y2: p2.y as f32,
                    x: p.x as f32,
                    y: p.y as f32,
                },
                PathEl::ClosePath => PathCmd::Close,
            })
            .collect();
        Self {
            commands: commands.into_boxed_slice(),
        }
    }
}

/// Simple path command enumeration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCmd {
    /// Move the current point without drawing.
    MoveTo {
        /// X coordinate of the new point.
        x: f32,
        /// Y coordinate of the new point.
        y: f32,
    },
    /// Draw a line from the current point to the given point.
    LineTo {
        /// X coordinate of the line end.
        x: f32,
        /// Y coordinate of the line end.
        y: f32,
    },
    /// Draw a quadratic Bézier curve from the current point to the given
    /// point, using a single control point.
    QuadTo {
        /// X coordinate of the control point.
        x1: f32,
        /// Y coordinate of the control point.
        y1: f32,
        /// X coordinate of the curve end.
        x: f32,
        /// Y coordinate of the curve end.
        y: f32,
    },
    /// Draw a cubic Bézier curve from the current point to the given point,
    /// using two control points.
    CurveTo {
        /// X coordinate of the first control point.
        x1: f32,
        /// Y coordinate of the first control point.
        y1: f32,
        /// X coordinate of the second control point.
        x2: f32,
        /// Y coordinate of the second control point.
        y2: f32,
        /// X coordinate of the curve end.
        x: f32,
        /// Y coordinate of the curve end.
        y: f32,
    },
    /// Close the current subpath.
    Close,
}

/// Description of a paint resource.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintDesc {
    /// Brush used when rendering.
    ///
    /// This is a [`peniko::Brush`], so backends can directly map it onto their
    /// native paint representation. Cover rendering only uses solid colors, and
    /// the CPU backend ignores any other brush.
    pub brush: Brush,
}

/// Resource lifetime interface.
///
/// Backends implement this to manage their own resource storage.
///
/// Implementations are free to choose how resources are allocated and stored,
/// but they must ensure that IDs remain valid and refer to the same logical
/// resource until the corresponding `destroy_*` function is called.
pub trait ResourceBackend {
    /// Create a path resource.
    fn create_path(&mut self, desc: PathDesc) -> PathId;
    /// Destroy a previously created path.
    fn destroy_path(&mut self, id: PathId);

    /// Create a paint resource.
    fn create_paint(&mut self, desc: PaintDesc) -> PaintId;
    /// Destroy a previously created paint.
    fn destroy_paint(&mut self, id: PaintId);
}

/// Unified imaging operation, used by backends that log what they were asked to do.
#[derive(Clone, Debug, PartialEq)]
pub enum ImagingOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

/// Minimal imaging backend trait.
///
/// Drawing is append-only: no operation reads back pixels.
pub trait ImagingBackend: ResourceBackend {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);
}

/// Drawing-surface primitives layered on top of any [`ImagingBackend`].
///
/// Each primitive creates a transient path resource, draws it with the given
/// paint, and destroys it again. Geometry follows the raster-graphics
/// conventions the cover artwork was designed against:
///
/// - Boxes are given as origin plus width/height; a box with a non-positive
///   width or height draws nothing.
/// - Arc angles are in degrees, measured counter-clockwise from 3 o'clock in
///   the y-down pixel space, so 90° points straight up.
///
/// This is separate from [`ImagingBackend`] so the helpers can be generic over
/// shapes without complicating trait object usage (`&mut dyn ImagingBackend`).
pub trait ShapeExt: ImagingBackend {
    /// Fill an arbitrary kurbo shape with `paint`.
    fn fill_shape(&mut self, paint: PaintId, shape: &impl Shape) {
        let path = self.create_path(PathDesc::from_shape(shape, SHAPE_TOLERANCE));
        self.state(StateOp::SetPaint(paint));
        self.draw(DrawOp::FillPath(path));
        self.destroy_path(path);
    }

    /// Fill the axis-aligned rectangle with origin `(x, y)` and size `w × h`.
    fn fill_rect(&mut self, paint: PaintId, x: f32, y: f32, w: f32, h: f32) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        self.state(StateOp::SetPaint(paint));
        self.draw(DrawOp::FillRect {
            x0: x,
            y0: y,
            x1: x + w,
            y1: y + h,
        });
    }

    /// Fill the ellipse inscribed in the box with origin `(x, y)` and size `w × h`.
    fn fill_ellipse(&mut self, paint: PaintId, x: f32, y: f32, w: f32, h: f32) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let rect = kurbo::Rect::new(
            f64::from(x),
            f64::from(y),
            f64::from(x + w),
            f64::from(y + h),
        );
        self.fill_shape(paint, &kurbo::Ellipse::from_rect(rect));
    }

    /// Fill the triangle with the given three corners.
    fn fill_triangle(&mut self, paint: PaintId, corners: [(f32, f32); 3]) {
        let [a, b, c] = corners.map(|(x, y)| kurbo::Point::new(f64::from(x), f64::from(y)));
        let path = self.create_path(PathDesc::from_elements([
            PathEl::MoveTo(a),
            PathEl::LineTo(b),
            PathEl::LineTo(c),
            PathEl::ClosePath,
        ]));
        self.state(StateOp::SetPaint(paint));
        self.draw(DrawOp::FillPath(path));
        self.destroy_path(path);
    }

    /// Stroke an elliptical arc of the box with origin `(x, y)` and size `w × h`.
    ///
    /// The stroke is `thickness` wide with square caps. The arc runs along the
    /// ellipse of the box shifted inwards by `floor(thickness / 2)` and shrunk
    /// by `2 * thickness` in each dimension, so a thick arc stays inside the
    /// box it was asked for.
    fn stroke_arc(
        &mut self,
        paint: PaintId,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        start_deg: f32,
        sweep_deg: f32,
        thickness: f32,
    ) {
        let inset = (thickness / 2.0).floor();
        let (w, h) = (w - thickness * 2.0, h - thickness * 2.0);
        if w <= 0.0 || h <= 0.0 || thickness <= 0.0 {
            return;
        }
        let (x, y) = (x + inset, y + inset);
        let center = kurbo::Point::new(f64::from(x + w / 2.0), f64::from(y + h / 2.0));
        let radii = kurbo::Vec2::new(f64::from(w / 2.0), f64::from(h / 2.0));
        // Y grows downwards, so counter-clockwise on screen is a negative angle.
        let arc = kurbo::Arc::new(
            center,
            radii,
            -f64::from(start_deg).to_radians(),
            -f64::from(sweep_deg).to_radians(),
            0.0,
        );
        let path = self.create_path(PathDesc::from_shape(&arc, SHAPE_TOLERANCE));
        self.state(StateOp::SetStroke(
            StrokeStyle::new(f64::from(thickness)).with_caps(Cap::Square),
        ));
        self.state(StateOp::SetPaint(paint));
        self.draw(DrawOp::StrokePath(path));
        self.destroy_path(path);
    }
}

impl<B: ImagingBackend + ?Sized> ShapeExt for B {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use peniko::Color;

    /// Trivial in-memory backend that records operations for testing.
    #[derive(Default)]
    struct RecordingBackend {
        paths: Vec<PathDesc>,
        next_paint: u32,
        destroyed: Vec<PathId>,
        ops: Vec<ImagingOp>,
    }

    impl ResourceBackend for RecordingBackend {
        fn create_path(&mut self, desc: PathDesc) -> PathId {
            let id = self.paths.len() as u32;
            self.paths.push(desc);
            PathId(id)
        }

        fn destroy_path(&mut self, id: PathId) {
            self.destroyed.push(id);
        }

        fn create_paint(&mut self, _desc: PaintDesc) -> PaintId {
            let id = self.next_paint;
            self.next_paint += 1;
            PaintId(id)
        }

        fn destroy_paint(&mut self, _id: PaintId) {}
    }

    impl ImagingBackend for RecordingBackend {
        fn state(&mut self, op: StateOp) {
            self.ops.push(ImagingOp::State(op));
        }

        fn draw(&mut self, op: DrawOp) {
            self.ops.push(ImagingOp::Draw(op));
        }
    }

    fn paint(backend: &mut RecordingBackend) -> PaintId {
        backend.create_paint(PaintDesc {
            brush: Brush::Solid(Color::WHITE),
        })
    }

    #[test]
    fn fill_rect_emits_corner_rect() {
        let mut backend = RecordingBackend::default();
        let p = paint(&mut backend);
        backend.fill_rect(p, 10.0, 20.0, 30.0, 5.0);

        assert_eq!(
            backend.ops,
            vec![
                ImagingOp::State(StateOp::SetPaint(p)),
                ImagingOp::Draw(DrawOp::FillRect {
                    x0: 10.0,
                    y0: 20.0,
                    x1: 40.0,
                    y1: 25.0,
                }),
            ]
        );
    }

    #[test]
    fn degenerate_boxes_draw_nothing() {
        let mut backend = RecordingBackend::default();
        let p = paint(&mut backend);
        backend.fill_rect(p, 0.0, 0.0, 0.0, 10.0);
        backend.fill_rect(p, 0.0, 0.0, 10.0, -1.0);
        backend.fill_ellipse(p, 0.0, 0.0, -4.0, 4.0);
        backend.stroke_arc(p, 0.0, 0.0, 4.0, 4.0, 0.0, 90.0, 3.0);

        assert!(backend.ops.is_empty(), "unexpected ops: {:?}", backend.ops);
        assert!(backend.paths.is_empty());
    }

    #[test]
    fn triangle_is_a_closed_three_point_path() {
        let mut backend = RecordingBackend::default();
        let p = paint(&mut backend);
        backend.fill_triangle(p, [(0.0, 10.0), (5.0, 0.0), (10.0, 10.0)]);

        assert_eq!(backend.destroyed, vec![PathId(0)]);
        assert_eq!(
            &*backend.paths[0].commands,
            &[
                PathCmd::MoveTo { x: 0.0, y: 10.0 },
                PathCmd::LineTo { x: 5.0, y: 0.0 },
                PathCmd::LineTo { x: 10.0, y: 10.0 },
                PathCmd::Close,
            ]
        );
        assert!(matches!(
            backend.ops.as_slice(),
            [
                ImagingOp::State(StateOp::SetPaint(_)),
                ImagingOp::Draw(DrawOp::FillPath(PathId(0)))
            ]
        ));
    }

    #[test]
    fn ellipse_stays_inside_its_box() {
        let rect = kurbo::Rect::new(4.0, 8.0, 24.0, 18.0);
        let desc = PathDesc::from_shape(&kurbo::Ellipse::from_rect(rect), SHAPE_TOLERANCE);
        assert!(matches!(desc.commands.last(), Some(PathCmd::Close)));
        for cmd in desc.commands.iter() {
            if let PathCmd::MoveTo { x, y } | PathCmd::LineTo { x, y } = *cmd {
                assert!((4.0..=24.0).contains(&x), "x out of box: {x}");
                assert!((8.0..=18.0).contains(&y), "y out of box: {y}");
            }
        }
    }

    #[test]
    fn stroke_arc_sets_square_capped_stroke() {
        let mut backend = RecordingBackend::default();
        let p = paint(&mut backend);
        backend.stroke_arc(p, 0.0, 0.0, 72.0, 72.0, 90.0, 90.0, 3.0);

        let stroke = backend
            .ops
            .iter()
            .find_map(|op| match op {
                ImagingOp::State(StateOp::SetStroke(s)) => Some(s.clone()),
                _ => None,
            })
            .expect("stroke_arc should set a stroke");
        assert_eq!(stroke.width, 3.0);
        assert_eq!(stroke.start_cap, Cap::Square);
        assert_eq!(stroke.end_cap, Cap::Square);
        assert!(
            backend
                .ops
                .iter()
                .any(|op| matches!(op, ImagingOp::Draw(DrawOp::StrokePath(_))))
        );
    }

    #[test]
    fn arc_starting_at_ninety_degrees_starts_at_the_top() {
        // Box (0,0) 72x72 with thickness 3 -> inset box (1,1) 66x66, centre (34,34), r=33.
        let mut backend = RecordingBackend::default();
        let p = paint(&mut backend);
        backend.stroke_arc(p, 0.0, 0.0, 72.0, 72.0, 90.0, 90.0, 3.0);

        match backend.paths[0].commands[0] {
            PathCmd::MoveTo { x, y } => {
                assert!((x - 34.0).abs() < 1e-3, "start x {x}");
                assert!((y - 1.0).abs() < 1e-3, "start y {y}");
            }
            other => panic!("expected MoveTo, got {other:?}"),
        }
    }
}
