// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TenPrint Cover: deterministic generative book covers.
//!
//! A cover is derived entirely from its title, subtitle, and author. Nothing
//! random is involved, so the same inputs always give the same image.
//!
//! - [`Palette`] picks a background and a shape colour from the combined
//!   length of the title and author.
//! - [`Grid`] sizes a square grid of 2 to 11 cells per side from the title
//!   length.
//! - [`glyph`] maps each title character into a small PETSCII-like alphabet
//!   and knows how to draw every symbol from rectangles, ellipses, triangles,
//!   and arcs.
//! - [`layout`] wraps the cover text into its boxes, truncating with an
//!   ellipsis where a word does not fit.
//! - [`CoverComposer`] runs the whole pipeline against any
//!   [`tenprint_imaging::ImagingBackend`], and [`render_cover`] does so on the
//!   CPU to produce an RGBA image that [`save_png`] writes out.
//!
//! ```no_run
//! use std::path::Path;
//! use tenprint_cover::{CoverConfig, load_font_book, render_cover, save_png};
//!
//! # fn main() -> tenprint_cover::Result<()> {
//! let config = CoverConfig::default();
//! let fonts = load_font_book(&config.fonts)?;
//! let spec = config.cover("Ten Print", "A Generative Cover", "Anonymous")?;
//! let (image, _report) = render_cover(&spec, &fonts);
//! save_png(&image, Path::new("cover.png"))?;
//! # Ok(())
//! # }
//! ```
//!
//! Fonts are Noto Sans for Latin text and Noto Sans CJK for text containing
//! CJK ideographs. They are read from disk with [`load_font_book`]; see
//! [`FontConfig`] for where they are looked up.

mod artwork;
mod compose;
mod config;
mod error;
mod font;
mod font_files;
mod grid;
mod palette;
mod render;
mod spec;

pub mod glyph;
pub mod layout;
pub mod scale;

pub use artwork::{Inks, draw_artwork, draw_glyph};
pub use compose::{CoverComposer, CoverReport, TEXT_COLOR, TextRegions};
pub use config::{CoverConfig, DEFAULT_CJK_INDEX, FontConfig};
pub use error::{Error, Result};
pub use font::FontPolicy;
pub use font_files::load_font_book;
pub use grid::Grid;
pub use palette::{Hsb, Palette, color_seed};
pub use render::{render_cover, save_png};
pub use spec::{CoverSpec, DEFAULT_HEIGHT, DEFAULT_MARGIN_PERCENT, DEFAULT_WIDTH};
