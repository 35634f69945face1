// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The PETSCII-flavoured glyph alphabet.
//!
//! Titles are first canonicalized into [`ALPHABET`], then cycled to fill the
//! grid. Each symbol has a [`Mark`] list: a fixed composition of rectangles,
//! ellipses, triangles, and arcs whose coordinates are integer expressions in
//! the cell size `s` and the stroke thickness `t = s * 10 / 100`.
//!
//! Letters share a recipe with their uppercase form.

/// Every symbol the artwork can draw, in canonical order.
///
/// Characters outside this set are replaced by `ALPHABET[codepoint % len]`.
pub const ALPHABET: &str =
    " qQwWeErRtTyYuUiIoOpPaAsSdDfFgGhHjJkKlL:zZxXcCvVbBnNmM,;?<>@[]1234567890.=-+*/";

/// Thickness of glyph strokes, as a percentage of the cell size.
pub const THICKNESS_PERCENT: i32 = 10;

/// Map a title onto the glyph alphabet.
///
/// Characters already in [`ALPHABET`] are kept; any other character is
/// replaced by the alphabet entry at `codepoint % ALPHABET.len()`. An empty
/// title yields a single space so the cycle below always has material.
pub fn canonicalize(title: &str) -> Vec<char> {
    let alphabet = ALPHABET.as_bytes();
    let mut out: Vec<char> = title
        .chars()
        .map(|c| {
            if ALPHABET.contains(c) {
                c
            } else {
                // `c as usize` is lossless; the modulus keeps the index in range.
                char::from(alphabet[c as usize % alphabet.len()])
            }
        })
        .collect();
    if out.is_empty() {
        out.push(' ');
    }
    out
}

/// Repeat `glyphs` end to end until exactly `len` symbols have been produced.
pub fn cycle(glyphs: &[char], len: usize) -> Vec<char> {
    if glyphs.is_empty() {
        return vec![' '; len];
    }
    glyphs.iter().copied().cycle().take(len).collect()
}

/// An integer expression over the cell size and stroke thickness.
///
/// Evaluates to `s*cell + half*(cell/2) + third*(cell/3) + thick*t + half_thick*(t/2)`
/// where every division truncates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    cell: i32,
    half: i32,
    third: i32,
    thick: i32,
    half_thick: i32,
}

impl Expr {
    /// Zero.
    pub const ZERO: Self = Self::new(0, 0, 0, 0, 0);
    /// The cell size `s`.
    pub const CELL: Self = Self::new(1, 0, 0, 0, 0);
    /// `s / 2`.
    pub const HALF: Self = Self::new(0, 1, 0, 0, 0);
    /// `s / 3`.
    pub const THIRD: Self = Self::new(0, 0, 1, 0, 0);
    /// The thickness `t`.
    pub const THICK: Self = Self::new(0, 0, 0, 1, 0);
    /// `t / 2`.
    pub const HALF_THICK: Self = Self::new(0, 0, 0, 0, 1);

    const fn new(cell: i32, half: i32, third: i32, thick: i32, half_thick: i32) -> Self {
        Self {
            cell,
            half,
            third,
            thick,
            half_thick,
        }
    }

    /// Sum of two expressions.
    pub const fn plus(self, o: Self) -> Self {
        Self::new(
            self.cell + o.cell,
            self.half + o.half,
            self.third + o.third,
            self.thick + o.thick,
            self.half_thick + o.half_thick,
        )
    }

    /// Difference of two expressions.
    pub const fn minus(self, o: Self) -> Self {
        self.plus(o.times(-1))
    }

    /// Scale by an integer.
    pub const fn times(self, k: i32) -> Self {
        Self::new(
            self.cell * k,
            self.half * k,
            self.third * k,
            self.thick * k,
            self.half_thick * k,
        )
    }

    /// Evaluate for a cell of `s` pixels.
    pub fn eval(self, s: i32) -> i32 {
        let t = thickness(s);
        self.cell * s + self.half * (s / 2) + self.third * (s / 3) + self.thick * t
            + self.half_thick * (t / 2)
    }
}

/// Stroke thickness for a cell of `s` pixels.
pub fn thickness(s: i32) -> i32 {
    s * THICKNESS_PERCENT / 100
}

/// Which palette colour a mark is painted with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ink {
    /// The palette's shape colour.
    Shape,
    /// The palette's background colour, used for cut-outs.
    Base,
}

/// One primitive of a glyph, positioned relative to the cell origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Prim {
    /// Filled axis-aligned rectangle.
    Rect {
        /// Left edge.
        x: Expr,
        /// Top edge.
        y: Expr,
        /// Width.
        w: Expr,
        /// Height.
        h: Expr,
    },
    /// Filled ellipse inscribed in a box.
    Ellipse {
        /// Left edge of the box.
        x: Expr,
        /// Top edge of the box.
        y: Expr,
        /// Box width.
        w: Expr,
        /// Box height.
        h: Expr,
    },
    /// Filled triangle.
    Triangle([(Expr, Expr); 3]),
    /// Arc of the ellipse in a box, stroked `t` wide.
    Arc {
        /// Left edge of the box.
        x: Expr,
        /// Top edge of the box.
        y: Expr,
        /// Box width.
        w: Expr,
        /// Box height.
        h: Expr,
        /// Start angle in degrees, counter-clockwise from 3 o'clock.
        start: i16,
        /// Sweep in degrees, counter-clockwise.
        sweep: i16,
    },
}

/// A primitive together with its ink.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Mark {
    /// Colour to paint with.
    pub ink: Ink,
    /// Geometry.
    pub prim: Prim,
}

/// A primitive with every expression evaluated for a concrete cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placed {
    /// `(x, y, w, h)`.
    Rect(i32, i32, i32, i32),
    /// Bounding box `(x, y, w, h)`.
    Ellipse(i32, i32, i32, i32),
    /// Three corners.
    Triangle([(i32, i32); 3]),
    /// Box `(x, y, w, h)`, start and sweep degrees, stroke thickness.
    Arc(i32, i32, i32, i32, i16, i16, i32),
}

impl Mark {
    /// Evaluate this mark for a cell with top-left `(x, y)` and size `s`.
    pub fn place(&self, x: i32, y: i32, s: i32) -> Placed {
        let at = |dx: Expr, dy: Expr| (x + dx.eval(s), y + dy.eval(s));
        match self.prim {
            Prim::Rect { x: dx, y: dy, w, h } => {
                let (px, py) = at(dx, dy);
                Placed::Rect(px, py, w.eval(s), h.eval(s))
            }
            Prim::Ellipse { x: dx, y: dy, w, h } => {
                let (px, py) = at(dx, dy);
                Placed::Ellipse(px, py, w.eval(s), h.eval(s))
            }
            Prim::Triangle(corners) => Placed::Triangle(corners.map(|(dx, dy)| at(dx, dy))),
            Prim::Arc {
                x: dx,
                y: dy,
                w,
                h,
                start,
                sweep,
            } => {
                let (px, py) = at(dx, dy);
                Placed::Arc(px, py, w.eval(s), h.eval(s), start, sweep, thickness(s))
            }
        }
    }
}

// Short names keep the table below readable.
const Z: Expr = Expr::ZERO;
const S: Expr = Expr::CELL;
const H: Expr = Expr::HALF;
const R: Expr = Expr::THIRD;
const T: Expr = Expr::THICK;
const HT: Expr = Expr::HALF_THICK;
/// `s/2 - t/2`: offset of a centred bar.
const MID: Expr = H.minus(HT);
/// `s/2 + t/2`: length of a bar reaching from an edge to the far side of the centre.
const REACH: Expr = H.plus(HT);

const fn rect(x: Expr, y: Expr, w: Expr, h: Expr) -> Mark {
    Mark {
        ink: Ink::Shape,
        prim: Prim::Rect { x, y, w, h },
    }
}

const fn base_rect(x: Expr, y: Expr, w: Expr, h: Expr) -> Mark {
    Mark {
        ink: Ink::Base,
        prim: Prim::Rect { x, y, w, h },
    }
}

const fn ellipse(x: Expr, y: Expr, w: Expr, h: Expr) -> Mark {
    Mark {
        ink: Ink::Shape,
        prim: Prim::Ellipse { x, y, w, h },
    }
}

const fn base_ellipse(x: Expr, y: Expr, w: Expr, h: Expr) -> Mark {
    Mark {
        ink: Ink::Base,
        prim: Prim::Ellipse { x, y, w, h },
    }
}

const fn tri(a: (Expr, Expr), b: (Expr, Expr), c: (Expr, Expr)) -> Mark {
    Mark {
        ink: Ink::Shape,
        prim: Prim::Triangle([a, b, c]),
    }
}

const fn base_tri(a: (Expr, Expr), b: (Expr, Expr), c: (Expr, Expr)) -> Mark {
    Mark {
        ink: Ink::Base,
        prim: Prim::Triangle([a, b, c]),
    }
}

const fn arc(x: Expr, y: Expr, start: i16, sweep: i16) -> Mark {
    Mark {
        ink: Ink::Shape,
        prim: Prim::Arc {
            x,
            y,
            w: S.times(2),
            h: S.times(2),
            start,
            sweep,
        },
    }
}

/// Glyph recipes keyed by lowercase symbol.
static RECIPES: &[(char, &[Mark])] = &[
    // Circles.
    ('q', &[ellipse(Z, Z, S, S)]),
    (
        'w',
        &[
            ellipse(Z, Z, S, S),
            base_ellipse(T, T, S.minus(T.times(2)), S.minus(T.times(2))),
        ],
    ),
    // Thin bars.
    ('e', &[rect(Z, T, S, T)]),
    ('r', &[rect(Z, S.minus(T.times(2)), S, T)]),
    ('t', &[rect(T, Z, T, S)]),
    ('y', &[rect(S.minus(T.times(2)), Z, T, S)]),
    ('d', &[rect(Z, T.times(2), S, T)]),
    ('f', &[rect(Z, S.minus(T.times(3)), S, T)]),
    ('g', &[rect(T.times(2), Z, T, S)]),
    ('h', &[rect(S.minus(T.times(3)), Z, T, S)]),
    ('c', &[rect(Z, T.times(3), S, T)]),
    ('b', &[rect(T.times(3), Z, T, S)]),
    // Quarter arcs of a circle twice the cell size.
    ('u', &[arc(Z, Z, 90, 90)]),
    ('i', &[arc(Z.minus(S), Z, 0, 90)]),
    ('j', &[arc(Z, Z.minus(S), 180, 90)]),
    ('k', &[arc(Z.minus(S), Z.minus(S), 270, 90)]),
    // Corners.
    ('o', &[rect(Z, Z, S, T), rect(Z, Z, T, S)]),
    ('p', &[rect(Z, Z, S, T), rect(S.minus(T), Z, T, S)]),
    ('l', &[rect(Z, Z, T, S), rect(Z, S.minus(T), S, T)]),
    (':', &[rect(S.minus(T), Z, T, S), rect(Z, S.minus(T), S, T)]),
    // Wedges.
    ('a', &[tri((Z, S), (H, Z), (S, S))]),
    ('s', &[tri((Z, Z), (H, S), (S, Z))]),
    ('z', &[tri((Z, H), (H, Z), (S, H)), tri((Z, H), (H, S), (S, H))]),
    // Dots.
    (
        'x',
        &[
            ellipse(H, R, T.times(2), T.times(2)),
            ellipse(R, S.minus(R), T.times(2), T.times(2)),
            ellipse(S.minus(R), S.minus(R), T.times(2), T.times(2)),
        ],
    ),
    // Filled squares with corners cut out in the background colour.
    (
        'v',
        &[
            rect(Z, Z, S, S),
            base_tri((T, Z), (H, H.minus(T)), (S.minus(T), Z)),
            base_tri((Z, T), (H.minus(T), H), (Z, S.minus(T))),
            base_tri((T, S), (H, H.plus(T)), (S.minus(T), S)),
            base_tri((S, T), (S, S.minus(T)), (H.plus(T), H)),
        ],
    ),
    (
        'n',
        &[
            rect(Z, Z, S, S),
            base_tri((Z, Z), (S.minus(T), Z), (Z, S.minus(T))),
            base_tri((T, S), (S, S), (S, T)),
        ],
    ),
    (
        'm',
        &[
            rect(Z, Z, S, S),
            base_tri((T, Z), (S, Z), (S, S.minus(T))),
            base_tri((Z, T), (Z, S), (S.minus(T), S)),
        ],
    ),
    // Quadrants.
    (',', &[rect(H, H, H, H)]),
    (';', &[rect(Z, H, H, H)]),
    ('?', &[rect(Z, Z, H, H), rect(H, H, H, H)]),
    ('<', &[rect(H, Z, H, H)]),
    ('>', &[rect(Z, Z, H, H)]),
    // Centred lines and junctions.
    ('@', &[rect(Z, MID, S, T)]),
    ('[', &[rect(MID, Z, T, S)]),
    (']', &[rect(Z, MID, S, T), rect(MID, Z, T, S)]),
    ('0', &[rect(MID, MID, T, REACH), rect(MID, MID, REACH, T)]),
    ('1', &[rect(Z, MID, S, T), rect(MID, Z, T, REACH)]),
    ('2', &[rect(Z, MID, S, T), rect(MID, MID, T, REACH)]),
    ('3', &[rect(Z, MID, REACH, T), rect(MID, Z, T, S)]),
    ('.', &[rect(MID, MID, T, REACH), rect(Z, MID, REACH, T)]),
    ('=', &[rect(MID, Z, T, REACH), rect(Z, MID, H, T)]),
    ('-', &[rect(MID, Z, T, REACH), rect(MID, MID, REACH, T)]),
    ('+', &[rect(MID, MID, REACH, T), rect(MID, Z, T, S)]),
    // Thick bars.
    ('4', &[rect(Z, Z, T.times(2), S)]),
    ('5', &[rect(Z, Z, T.times(3), S)]),
    ('6', &[rect(S.minus(T.times(3)), Z, T.times(3), S)]),
    ('7', &[rect(Z, Z, S, T.times(2))]),
    ('8', &[rect(Z, Z, S, T.times(3))]),
    ('9', &[rect(Z, S.minus(T.times(3)), S, T.times(3))]),
    ('*', &[rect(S.minus(T.times(2)), Z, T.times(2), S)]),
    ('/', &[rect(Z, S.minus(T.times(2)), S, T.times(2))]),
    // Blank cell.
    (' ', &[base_rect(Z, Z, S, S)]),
];

/// The marks that draw `c`, or `None` for symbols without a recipe.
pub fn recipe(c: char) -> Option<&'static [Mark]> {
    let key = c.to_ascii_lowercase();
    RECIPES
        .iter()
        .find(|(symbol, _)| *symbol == key)
        .map(|(_, marks)| *marks)
}
