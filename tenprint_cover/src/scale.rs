// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer clip and linear remap helpers.

/// Clamp `value` to `[lower, upper]`.
pub fn clip(value: i64, lower: i64, upper: i64) -> i64 {
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// Map `value` linearly from `[istart, istop]` onto `[ostart, ostop]`.
///
/// Integer arithmetic throughout; the division truncates toward zero, so
/// results are reproducible bit-for-bit. An empty input range maps everything
/// to `ostart`.
pub fn remap(value: i64, istart: i64, istop: i64, ostart: i64, ostop: i64) -> i64 {
    if istop == istart {
        return ostart;
    }
    ostart + (ostop - ostart) * (value - istart) / (istop - istart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_bounds() {
        assert_eq!(clip(0, 2, 80), 2);
        assert_eq!(clip(81, 2, 80), 80);
        assert_eq!(clip(40, 2, 80), 40);
    }

    #[test]
    fn remap_truncates() {
        // 350 * 2 / 78 = 8.97..
        assert_eq!(remap(4, 2, 80, 10, 360), 18);
        // 350 * 8 / 78 = 35.89..
        assert_eq!(remap(10, 2, 80, 10, 360), 45);
        assert_eq!(remap(2, 2, 80, 10, 360), 10);
        assert_eq!(remap(80, 2, 80, 10, 360), 360);
        assert_eq!(remap(59, 2, 60, 2, 11), 10);
        assert_eq!(remap(60, 2, 60, 2, 11), 11);
    }

    #[test]
    fn remap_handles_degenerate_range() {
        assert_eq!(remap(5, 3, 3, 7, 9), 7);
    }
}
