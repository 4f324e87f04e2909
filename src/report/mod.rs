//! Output writers for a built gallery
//!
//! Two formats, picked by the output file's extension:
//!
//! - **HTML**: the fragment file embedded into the demo site — one block per
//!   sample, concatenated, no document wrapper
//! - **JSON**: a manifest describing the run for programmatic consumption
//!
//! # Usage
//!
//! ```ignore
//! use galleria::report;
//!
//! report::generate("examples.html", &gallery, &config)?; // fragments
//! report::generate("examples.json", &gallery, &config)?; // manifest
//! ```

pub mod html;
pub mod json;

use crate::gallery::{Gallery, GalleryConfig, SkipReason};
use serde::Serialize;
use std::io;
use std::path::Path;

/// Write the gallery to `path` in the format its extension implies.
pub fn generate<P: AsRef<Path>>(
    path: P,
    gallery: &Gallery,
    config: &GalleryConfig,
) -> io::Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut file = std::fs::File::create(path)?;

    match ext.as_str() {
        "json" => json::write(&mut file, gallery, config),
        _ => html::write(&mut file, gallery),
    }
}

/// Summary statistics for one build pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub candidates: usize,
    pub valid: usize,
    pub missing: usize,
    pub denylisted: usize,
}

impl Summary {
    pub fn from_gallery(gallery: &Gallery) -> Self {
        let mut summary = Self {
            candidates: gallery.candidates,
            valid: gallery.samples.len(),
            ..Self::default()
        };

        for skip in &gallery.skipped {
            match skip.reason {
                SkipReason::MissingCompanions => summary.missing += 1,
                SkipReason::Denylisted => summary.denylisted += 1,
            }
        }

        summary
    }
}
