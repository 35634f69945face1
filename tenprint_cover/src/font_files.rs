// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locating and loading the Noto font files into a [`FontBook`].

use std::path::{Path, PathBuf};

use peniko::{Blob, FontData};
use tenprint_text::{FontBook, FontFamily, FontWeight};
use tracing::{debug, info, warn};

use crate::config::FontConfig;
use crate::error::{Error, Result};

/// Platform font directories searched after the configured ones.
const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "/System/Library/Fonts",
    "C:\\Windows\\Fonts",
];

/// How deep font directories are walked.
const MAX_DEPTH: usize = 4;

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

struct Slot<'a> {
    family: FontFamily,
    weight: FontWeight,
    explicit: Option<&'a Path>,
    names: &'static [&'static str],
}

fn slots(config: &FontConfig) -> [Slot<'_>; 4] {
    [
        Slot {
            family: FontFamily::Sans,
            weight: FontWeight::Regular,
            explicit: config.sans_regular.as_deref(),
            names: &["NotoSans-Regular.ttf", "NotoSans-Regular.otf"],
        },
        Slot {
            family: FontFamily::Sans,
            weight: FontWeight::Bold,
            explicit: config.sans_bold.as_deref(),
            names: &["NotoSans-Bold.ttf", "NotoSans-Bold.otf"],
        },
        Slot {
            family: FontFamily::SansCjk,
            weight: FontWeight::Regular,
            explicit: config.cjk_regular.as_deref(),
            names: &[
                "NotoSansCJK-Regular.ttc",
                "NotoSansCJKsc-Regular.otf",
                "NotoSansSC-Regular.otf",
                "NotoSansSC-Regular.ttf",
            ],
        },
        Slot {
            family: FontFamily::SansCjk,
            weight: FontWeight::Bold,
            explicit: config.cjk_bold.as_deref(),
            names: &[
                "NotoSansCJK-Bold.ttc",
                "NotoSansCJKsc-Bold.otf",
                "NotoSansSC-Bold.otf",
                "NotoSansSC-Bold.ttf",
            ],
        },
    ]
}

/// Load every configured or discoverable cover face.
///
/// Explicit paths are authoritative: a missing or unparsable file is an error.
/// Discovered files that fail to parse are skipped with a warning. At least
/// one Noto Sans face must load, otherwise [`Error::NoFont`] is returned; a
/// missing CJK family only produces a warning since covers then fall back to
/// Sans.
pub fn load_font_book(config: &FontConfig) -> Result<FontBook> {
    let mut book = FontBook::new();
    let slots = slots(config);

    for slot in &slots {
        let Some(path) = slot.explicit else {
            continue;
        };
        let index = collection_index(path, slot.family, config.cjk_index);
        let data = read_font(path, index)?;
        book.insert(slot.family, slot.weight, data)
            .map_err(|_| Error::FontParse {
                path: path.to_path_buf(),
            })?;
        debug!(
            family = slot.family.name(),
            weight = ?slot.weight,
            "Using configured font {:?}",
            path
        );
    }

    if slots.iter().any(|s| s.explicit.is_none()) {
        let found = discover(&search_dirs(config));
        for slot in slots.iter().filter(|s| s.explicit.is_none()) {
            load_discovered(&mut book, slot, &found, config.cjk_index);
        }
    }

    if !book.has_family(FontFamily::Sans) {
        return Err(Error::NoFont);
    }
    if !book.has_family(FontFamily::SansCjk) {
        warn!("No Noto Sans CJK font found; CJK text will be drawn with Noto Sans");
    }
    Ok(book)
}

fn load_discovered(book: &mut FontBook, slot: &Slot<'_>, found: &[PathBuf], cjk_index: u32) {
    for name in slot.names {
        let matches = found
            .iter()
            .filter(|path| path.file_name().is_some_and(|f| f == *name));
        for path in matches {
            let index = collection_index(path, slot.family, cjk_index);
            let loaded = read_font(path, index).and_then(|data| {
                book.insert(slot.family, slot.weight, data)
                    .map_err(|_| Error::FontParse { path: path.clone() })
            });
            match loaded {
                Ok(()) => {
                    info!(
                        family = slot.family.name(),
                        weight = ?slot.weight,
                        "Found font {:?}",
                        path
                    );
                    return;
                }
                Err(e) => warn!("Skipping font {:?}: {}", path, e),
            }
        }
    }
    debug!(
        family = slot.family.name(),
        weight = ?slot.weight,
        "No font file found"
    );
}

/// CJK collections hold several regional faces; pick the configured one.
fn collection_index(path: &Path, family: FontFamily, cjk_index: u32) -> u32 {
    let is_collection = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ttc"));
    if is_collection && family == FontFamily::SansCjk {
        cjk_index
    } else {
        0
    }
}

fn read_font(path: &Path, index: u32) -> Result<FontData> {
    let bytes = std::fs::read(path).map_err(|source| Error::FontLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(FontData::new(Blob::from(bytes), index))
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Configured directories first, then the user and system font directories.
fn search_dirs(config: &FontConfig) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = config.search_dirs.iter().map(|d| expand_home(d)).collect();
    if config.system_fonts {
        out.extend(dirs::font_dir());
        out.extend(SYSTEM_FONT_DIRS.iter().map(PathBuf::from));
    }
    out
}

/// All Noto Sans font files under `dirs`, in search order.
fn discover(dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for dir in dirs {
        walk(dir, 0, &mut found);
    }
    debug!(files = found.len(), "Scanned font directories");
    found
}

fn walk(dir: &Path, depth: usize, found: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
    paths.sort();
    for path in paths {
        if path.is_dir() {
            if depth < MAX_DEPTH {
                walk(&path, depth + 1, found);
            }
        } else if is_noto_sans(&path) {
            found.push(path);
        }
    }
}

fn is_noto_sans(path: &Path) -> bool {
    let named = path
        .file_name()
        .and_then(|f| f.to_str())
        .is_some_and(|f| f.starts_with("NotoSans"));
    let font = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| FONT_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)));
    named && font
}
