//! Galleria - Build static HTML comparison galleries for audio model outputs
//!
//! Galleria turns a directory tree of matched audio files into the HTML
//! fragment file behind a model-comparison demo page: for each sample it
//! shows the input performance, the ground-truth score, and the outputs of
//! one proposed model and two baselines.
//!
//! # Overview
//!
//! Samples are discovered by listing the `inputs` directory under a common
//! root. Each input's base name, combined with a fixed per-category
//! subdirectory and filename suffix, resolves the four companion files.
//! Samples missing a companion, or denylisted by base name, are skipped
//! with a warning; the survivors are numbered sequentially and rendered
//! through a fixed template into one concatenated fragment file.
//!
//! # Quick Start
//!
//! ```no_run
//! use galleria::{gallery, report, GalleryConfig};
//!
//! let config = GalleryConfig::new().with_root("./assets/audio");
//! let inputs = config.scan_inputs();
//! let built = gallery::build(&config, &inputs, |_| {});
//!
//! report::generate("examples.html", &built, &config)?;
//! println!("kept {} of {} samples", built.samples.len(), built.candidates);
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`gallery`]: sample discovery, filtering, and id assignment
//! - [`report`]: output writers (HTML fragments, JSON manifest)
//! - [`serve`]: local preview server with working audio playback

pub mod gallery;
pub mod report;
pub mod serve;

pub use gallery::{Gallery, GalleryConfig, Sample, Skip, SkipReason};
pub use report::Summary;
