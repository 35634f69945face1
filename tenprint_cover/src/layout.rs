// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy word wrap with ellipsis truncation.
//!
//! The wrap is deliberately not a full reflow. Words are appended to the
//! current line while it stays narrower than the box. The first word that does
//! not fit as a continuation is drawn on its own (truncated with an ellipsis
//! when it is itself too wide) and layout stops there, dropping the rest of the
//! text.

use tenprint_imaging::{ImagingBackend, PaintId};
use tenprint_text::{TextFace, TextMetrics};
use tracing::trace;

/// Marker appended to truncated words.
pub const ELLIPSIS: &str = "\u{2026}";

/// Pixel box a text block is laid out in.
///
/// `height` is compared against the absolute baseline position, not against
/// the distance from `y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextBox {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Lines must stay narrower than this.
    pub width: i32,
    /// Baselines below this stop the layout.
    pub height: i32,
}

/// One line of text positioned at its baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    /// Text to draw.
    pub text: String,
    /// Left edge of the line.
    pub x: f32,
    /// Baseline.
    pub baseline: f32,
}

/// What a text block reports back to the caller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineWrap {
    /// Number of lines the block occupies, at least one.
    pub lines: u32,
    /// Line height of the face used.
    pub line_height: f32,
}

/// A fully planned text block.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPlan {
    /// Lines with visible text, top to bottom.
    pub lines: Vec<PlacedLine>,
    /// Line count and height.
    pub wrap: LineWrap,
}

/// Split on single spaces like a classic `split(" ")`.
///
/// Consecutive spaces produce empty words, trailing empty words are dropped,
/// and an empty string yields a single empty word.
pub fn split_words(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return vec![""];
    }
    let mut words: Vec<&str> = text.split(' ').collect();
    while words.last() == Some(&"") {
        words.pop();
    }
    words
}

/// Truncate `word` so that it plus [`ELLIPSIS`] is narrower than `width`.
///
/// Characters are taken one by one until adding the next one plus the ellipsis
/// would reach `width`. When the ellipsis alone does not fit, the result is
/// empty.
///
/// # Panics
///
/// Panics if `word` followed by the ellipsis already fits, since then there is
/// nothing to truncate and the caller broke its own contract.
pub fn chop(word: &str, width: f32, metrics: &dyn TextMetrics) -> String {
    if metrics.measure(ELLIPSIS) >= width {
        return String::new();
    }
    let mut total = String::new();
    for c in word.chars() {
        let mut candidate = total.clone();
        candidate.push(c);
        candidate.push_str(ELLIPSIS);
        if metrics.measure(&candidate) >= width {
            total.push_str(ELLIPSIS);
            return total;
        }
        total.push(c);
    }
    panic!("chop: {word:?} fits in {width}px and should not be truncated");
}

#[allow(
    clippy::cast_precision_loss,
    reason = "cover coordinates are far below 2^24"
)]
fn px(v: i32) -> f32 {
    v as f32
}

/// Plan `text` into `bbox` using `metrics`.
pub fn plan_text(text: &str, bbox: TextBox, metrics: &dyn TextMetrics) -> TextPlan {
    let width = px(bbox.width);
    let height = px(bbox.height);
    let line_height = metrics.line_height();
    let x = px(bbox.x);
    let mut baseline = px(bbox.y) + metrics.ascent();
    let mut lines = Vec::new();
    let push = |lines: &mut Vec<PlacedLine>, text: String, baseline: f32| {
        if !text.trim().is_empty() {
            lines.push(PlacedLine { text, x, baseline });
        }
    };

    let mut line = String::new();
    let mut count = 1_u32;
    let finish = |lines, count| TextPlan {
        lines,
        wrap: LineWrap {
            lines: count,
            line_height,
        },
    };

    for word in split_words(text) {
        let candidate = format!("{line} {word}");
        if metrics.measure(&candidate) < width {
            line = candidate;
        } else if !line.is_empty() {
            // Only `word` is drawn here; the pending line is dropped.
            let shown = if !word.is_empty() && metrics.measure(word) >= width {
                chop(word, width, metrics)
            } else {
                word.to_owned()
            };
            trace!(word, shown = shown.as_str(), baseline, "word overflows, stopping");
            push(&mut lines, shown, baseline);
            return finish(lines, count);
        } else {
            push(&mut lines, std::mem::take(&mut line), baseline);
            line = word.to_owned();
            baseline += line_height;
            if baseline > height {
                trace!(baseline, height, "text box full");
                return finish(lines, count);
            }
            count += 1;
        }
    }

    push(&mut lines, line, baseline);
    finish(lines, count)
}

/// Plan `text` into `bbox` with `face` and draw it in `paint`.
pub fn draw_text_block(
    backend: &mut dyn ImagingBackend,
    face: &dyn TextFace,
    text: &str,
    bbox: TextBox,
    paint: PaintId,
) -> LineWrap {
    let plan = plan_text(text, bbox, face);
    trace!(
        lines = plan.wrap.lines,
        drawn = plan.lines.len(),
        line_height = plan.wrap.line_height,
        "laid out text block"
    );
    for line in &plan.lines {
        face.draw_line(backend, &line.text, line.x, line.baseline, paint);
    }
    plan.wrap
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is 10px wide; ascent 8, line height 12.
    struct Mono;

    impl TextMetrics for Mono {
        fn measure(&self, text: &str) -> f32 {
            text.chars().count() as f32 * 10.0
        }

        fn ascent(&self) -> f32 {
            8.0
        }

        fn line_height(&self) -> f32 {
            12.0
        }
    }

    fn texts(plan: &TextPlan) -> Vec<&str> {
        plan.lines.iter().map(|l| l.text.as_str()).collect()
    }

    const WIDE: TextBox = TextBox {
        x: 5,
        y: 20,
        width: 200,
        height: 1000,
    };

    #[test]
    fn split_matches_classic_semantics() {
        assert_eq!(split_words(""), vec![""]);
        assert_eq!(split_words("a b"), vec!["a", "b"]);
        assert_eq!(split_words("a  b "), vec!["a", "", "b"]);
        assert!(split_words("   ").is_empty());
    }

    #[test]
    fn short_text_is_one_line_with_leading_space() {
        let plan = plan_text("hello world", WIDE, &Mono);
        assert_eq!(texts(&plan), vec![" hello world"]);
        assert_eq!(plan.lines[0].x, 5.0);
        assert_eq!(plan.lines[0].baseline, 28.0);
        assert_eq!(
            plan.wrap,
            LineWrap {
                lines: 1,
                line_height: 12.0
            }
        );
    }

    #[test]
    fn overflowing_continuation_draws_only_that_word_and_stops() {
        // " aaaa bbbb" is 100px, adding " cccc" reaches 150px which is not < 150.
        let bbox = TextBox {
            width: 150,
            ..WIDE
        };
        let plan = plan_text("aaaa bbbb cccc dddd", bbox, &Mono);
        assert_eq!(texts(&plan), vec!["cccc"]);
        assert_eq!(plan.lines[0].baseline, 28.0);
        assert_eq!(plan.wrap.lines, 1);
    }

    #[test]
    fn overflowing_continuation_is_chopped_when_too_wide() {
        let bbox = TextBox {
            width: 60,
            ..WIDE
        };
        // " ab" fits, " ab abcdefgh" does not, and "abcdefgh" alone is 80px.
        let plan = plan_text("ab abcdefgh", bbox, &Mono);
        assert_eq!(texts(&plan), vec!["abcd\u{2026}"]);
    }

    #[test]
    fn first_word_too_wide_moves_to_next_line() {
        let bbox = TextBox {
            width: 60,
            ..WIDE
        };
        let plan = plan_text("abcdefgh", bbox, &Mono);
        // The empty accumulator is "drawn" on the first row, then the word on the second.
        assert_eq!(texts(&plan), vec!["abcdefgh"]);
        assert_eq!(plan.lines[0].baseline, 40.0);
        assert_eq!(plan.wrap.lines, 2);
    }

    #[test]
    fn height_is_checked_against_the_absolute_baseline() {
        // Baseline starts at 28; one wrap moves it to 40 which is past 30.
        let bbox = TextBox {
            width: 60,
            height: 30,
            ..WIDE
        };
        let plan = plan_text("abcdefgh", bbox, &Mono);
        assert!(plan.lines.is_empty());
        assert_eq!(plan.wrap.lines, 1);
    }

    #[test]
    fn empty_text_draws_nothing() {
        let plan = plan_text("", WIDE, &Mono);
        assert!(plan.lines.is_empty());
        assert_eq!(plan.wrap.lines, 1);
    }

    #[test]
    fn chop_stays_under_width() {
        let chopped = chop("abcdefghij", 55.0, &Mono);
        assert_eq!(chopped, "abcd\u{2026}");
        assert!(Mono.measure(&chopped) < 55.0);
    }

    #[test]
    fn chop_gives_up_when_even_the_ellipsis_is_too_wide() {
        assert_eq!(chop("abc", 10.0, &Mono), "");
        assert_eq!(chop("abc", 5.0, &Mono), "");
    }

    #[test]
    #[should_panic(expected = "should not be truncated")]
    fn chop_rejects_words_that_fit() {
        let _ = chop("ab", 100.0, &Mono);
    }

    #[test]
    fn layout_terminates_on_tiny_boxes() {
        let bbox = TextBox {
            x: 0,
            y: 0,
            width: 1,
            height: 10_000,
        };
        let plan = plan_text("a bb ccc dddd eeeee", bbox, &Mono);
        assert!(plan.lines.iter().all(|l| Mono.measure(&l.text) <= 10.0));
    }
}
