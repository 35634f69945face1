// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Square artwork grid sized by title length.

use crate::scale::{clip, remap};

const MIN_TITLE: i64 = 2;
const MAX_TITLE: i64 = 60;
const MIN_CELLS: i64 = 2;
const MAX_CELLS: i64 = 11;

/// Layout of the artwork grid.
///
/// `count` is in `[2, 11]` and `count * cell_size <= width`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Cells per side.
    pub count: u32,
    /// Total number of cells, `count²`.
    pub total: u32,
    /// Edge length of one cell in pixels, `floor(width / count)`.
    pub cell_size: u32,
}

impl Grid {
    /// Plan the grid for a title of `title_len` characters on a canvas `width` wide.
    ///
    /// The length is clipped to `[2, 60]` and remapped onto `[2, 11]` cells per side.
    pub fn plan(title_len: usize, width: u16) -> Self {
        let len = clip(
            i64::try_from(title_len).unwrap_or(i64::MAX),
            MIN_TITLE,
            MAX_TITLE,
        );
        let count = remap(len, MIN_TITLE, MAX_TITLE, MIN_CELLS, MAX_CELLS);
        // `count` is in [2, 11] by construction.
        let count = u32::try_from(count).unwrap_or(2);
        Self {
            count,
            total: count * count,
            cell_size: u32::from(width) / count,
        }
    }

    /// Grid coordinates `(column, row)` of cell `index`.
    pub fn cell(&self, index: u32) -> (u32, u32) {
        (index % self.count, index / self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_gets_the_smallest_grid() {
        let grid = Grid::plan(0, 400);
        assert_eq!(grid.count, 2);
        assert_eq!(grid.total, 4);
        assert_eq!(grid.cell_size, 200);
    }

    #[test]
    fn long_titles_clip_to_eleven() {
        for len in [60, 61, 500] {
            let grid = Grid::plan(len, 400);
            assert_eq!(grid.count, 11, "len {len}");
            assert_eq!(grid.total, 121, "len {len}");
            assert_eq!(grid.cell_size, 36, "len {len}");
        }
    }

    #[test]
    fn grid_always_fits_the_canvas() {
        for len in 0..=80 {
            for width in [1_u16, 7, 100, 399, 400, 1024] {
                let grid = Grid::plan(len, width);
                assert!((2..=11).contains(&grid.count), "len {len}");
                assert!(
                    grid.count * grid.cell_size <= u32::from(width),
                    "len {len} width {width}"
                );
            }
        }
    }

    #[test]
    fn cells_run_row_major() {
        let grid = Grid::plan(10, 400);
        // 2 + 9 * 8 / 58 = 3
        assert_eq!(grid.count, 3);
        assert_eq!(grid.cell(0), (0, 0));
        assert_eq!(grid.cell(2), (2, 0));
        assert_eq!(grid.cell(4), (1, 1));
        assert_eq!(grid.cell(8), (2, 2));
    }
}
