// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TenPrint Imaging Reference Backend.
//!
//! This crate provides a small, stateful implementation of
//! [`ImagingBackend`] and [`ResourceBackend`]
//! for **IR recording and state tracing**.
//!
//! It does not rasterize. Tests use it to assert on the ops a cover emits and on
//! the imaging state (transform, paint, stroke) at the time each op is applied.
//! Draw events carry the path descriptor and brush as they were when drawn,
//! since cover drawing destroys its transient paths and paints after use.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use peniko::Brush;
use tenprint_imaging::{
    Affine, DrawOp, ImagingBackend, ImagingOp, PaintDesc, PaintId, PathDesc, PathId,
    ResourceBackend, StateOp, StrokeStyle,
};

/// Snapshot of the current imaging state inside the backend.
#[derive(Clone, Debug)]
pub struct StateSnapshot {
    /// Current transform.
    pub transform: Affine,
    /// Current paint, if set.
    pub paint: Option<PaintId>,
    /// Current stroke style, if set.
    pub stroke: Option<StrokeStyle>,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            paint: None,
            stroke: None,
        }
    }
}

/// Event recorded by the reference backend.
#[derive(Clone, Debug)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
        /// Path drawn by `FillPath`/`StrokePath`, if it was alive.
        path: Option<PathDesc>,
        /// Brush of the current paint, if it was alive.
        brush: Option<Brush>,
    },
}

/// Simple reference implementation of the imaging backend.
///
/// This backend:
/// - Stores resource descriptors in vectors keyed by their IDs,
/// - Tracks current imaging state,
/// - Records high-level [`Event`]s as state and draw operations are applied.
#[derive(Default, Debug)]
pub struct RefBackend {
    paths: Vec<Option<PathDesc>>,
    paints: Vec<Option<PaintDesc>>,

    /// Log of events in the order they were applied.
    events: Vec<Event>,
    /// Underlying imaging ops.
    ops: Vec<ImagingOp>,
    /// Current imaging state.
    state: StateSnapshot,
}

impl RefBackend {
    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of raw imaging operations.
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Returns the descriptor of a live path.
    pub fn path(&self, id: PathId) -> Option<&PathDesc> {
        self.paths.get(id.0 as usize).and_then(Option::as_ref)
    }

    /// Returns the descriptor of a live paint.
    pub fn paint(&self, id: PaintId) -> Option<&PaintDesc> {
        self.paints.get(id.0 as usize).and_then(Option::as_ref)
    }

    /// Number of paths that are currently alive.
    pub fn live_paths(&self) -> usize {
        self.paths.iter().filter(|slot| slot.is_some()).count()
    }

    /// Iterates over draw events together with the brush they were drawn with.
    ///
    /// Draws issued without a paint, or with an already destroyed paint, yield
    /// `None`. Destroying a paint after drawing does not affect earlier draws.
    pub fn draws(&self) -> impl Iterator<Item = (&DrawOp, Option<&Brush>)> + '_ {
        self.events.iter().filter_map(|event| match event {
            Event::Draw { op, brush, .. } => Some((op, brush.as_ref())),
            Event::State { .. } => None,
        })
    }

    /// Clears all recorded events and ops but keeps resources.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
    }
}

impl ResourceBackend for RefBackend {
    fn create_path(&mut self, desc: PathDesc) -> PathId {
        let id =
            u32::try_from(self.paths.len()).expect("RefBackend: too many paths for u32 PathId");
        self.paths.push(Some(desc));
        PathId(id)
    }

    fn destroy_path(&mut self, id: PathId) {
        let idx = id.0 as usize;
        if let Some(slot) = self.paths.get_mut(idx) {
            *slot = None;
        }
    }

    fn create_paint(&mut self, desc: PaintDesc) -> PaintId {
        let id =
            u32::try_from(self.paints.len()).expect("RefBackend: too many paints for u32 PaintId");
        self.paints.push(Some(desc));
        PaintId(id)
    }

    fn destroy_paint(&mut self, id: PaintId) {
        let idx = id.0 as usize;
        if let Some(slot) = self.paints.get_mut(idx) {
            *slot = None;
        }
    }
}

impl ImagingBackend for RefBackend {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetTransform(tx) => self.state.transform = *tx,
            StateOp::SetPaint(id) => self.state.paint = Some(*id),
            StateOp::SetStroke(style) => self.state.stroke = Some(style.clone()),
        }

        self.ops.push(ImagingOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        let path = match &op {
            DrawOp::FillPath(id) | DrawOp::StrokePath(id) => self.path(*id).cloned(),
            DrawOp::FillRect { .. } => None,
        };
        let brush = self
            .state
            .paint
            .and_then(|id| self.paint(id))
            .map(|p| p.brush.clone());
        self.ops.push(ImagingOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
            path,
            brush,
        });
    }
}
