//! JSON manifest writer

use crate::gallery::{Gallery, GalleryConfig, Sample, Skip};
use crate::report::Summary;
use serde::Serialize;
use std::io::{self, Write};

/// Machine-readable record of one gallery build.
#[derive(Serialize)]
pub struct Manifest<'a> {
    pub generated: String,
    pub root: &'a str,
    pub summary: Summary,
    pub samples: &'a [Sample],
    pub skipped: &'a [Skip],
}

impl<'a> Manifest<'a> {
    pub fn new(gallery: &'a Gallery, config: &'a GalleryConfig) -> Self {
        Self {
            generated: chrono::Local::now().to_rfc3339(),
            root: &config.root,
            summary: Summary::from_gallery(gallery),
            samples: &gallery.samples,
            skipped: &gallery.skipped,
        }
    }
}

pub fn write<W: Write>(writer: &mut W, gallery: &Gallery, config: &GalleryConfig) -> io::Result<()> {
    let manifest = Manifest::new(gallery, config);
    serde_json::to_writer_pretty(&mut *writer, &manifest)?;
    writer.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{Skip, SkipReason};

    fn gallery() -> Gallery {
        Gallery {
            candidates: 2,
            samples: vec![],
            skipped: vec![
                Skip {
                    base_name: "broken".to_string(),
                    reason: SkipReason::MissingCompanions,
                },
                Skip {
                    base_name: "001_004".to_string(),
                    reason: SkipReason::Denylisted,
                },
            ],
        }
    }

    #[test]
    fn test_manifest_shape() {
        let config = GalleryConfig::new();
        let gallery = gallery();
        let mut out = Vec::new();

        write(&mut out, &gallery, &config).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["root"], "./assets/audio");
        assert_eq!(value["summary"]["candidates"], 2);
        assert_eq!(value["summary"]["missing"], 1);
        assert_eq!(value["summary"]["denylisted"], 1);
        assert_eq!(value["skipped"][0]["reason"], "missing_companions");
        assert!(value["generated"].is_string());
    }

    #[test]
    fn test_manifest_ends_with_newline() {
        let config = GalleryConfig::new();
        let gallery = gallery();
        let mut out = Vec::new();

        write(&mut out, &gallery, &config).unwrap();
        assert!(out.ends_with(b"\n"));
    }
}
