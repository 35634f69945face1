// Copyright 2026 the TenPrint Cover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Warnings emitted while composing a cover.

use std::io;
use std::sync::{Arc, Mutex};

use tenprint_cover::{CoverComposer, CoverSpec};
use tenprint_imaging_ref::RefBackend;

mod common;

use common::{BlockFonts, dejavu_book};

/// Collects formatted log output.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn warnings_while_drawing(spec: CoverSpec, fonts: &dyn tenprint_text::FontSource) -> String {
    let logs = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer({
            let logs = logs.clone();
            move || logs.clone()
        })
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let mut backend = RefBackend::default();
        CoverComposer::new(spec).draw(&mut backend, fonts);
    });
    logs.text()
}

#[test]
fn font_fallback_and_missing_faces_are_reported() {
    // Only a regular face is loaded, so the bold title falls back and the
    // regular subtitle and author do not.
    let spec = CoverSpec::new("Ten Print", "A Generative Cover", "Anonymous");
    let logs = warnings_while_drawing(spec.clone(), &dejavu_book());
    assert_eq!(logs.matches("falling back").count(), 1, "{logs}");
    assert!(logs.contains("title"), "{logs}");
    assert!(logs.contains("Bold"), "{logs}");

    // With every face present nothing is reported.
    let logs = warnings_while_drawing(spec.clone(), &BlockFonts::default());
    assert!(logs.is_empty(), "{logs}");

    // Without faces every block is skipped with a warning.
    let logs = warnings_while_drawing(spec, &BlockFonts::none());
    assert_eq!(logs.matches("skipping text block").count(), 3, "{logs}");
}
