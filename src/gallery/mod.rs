//! Sample discovery and filtering
//!
//! A gallery is built from five sibling directories under a common root,
//! one per category. A sample is identified by the base name of a file in
//! the `inputs` directory; its companion files in the other four
//! directories share that base name plus a fixed per-category suffix:
//!
//! | category | subdir         | suffix          |
//! |----------|----------------|-----------------|
//! | input    | `inputs`       | (none)          |
//! | ours     | `ours`         | `_perf_2_score` |
//! | base1    | `pm2s`         | `_PM2S`         |
//! | base2    | `midi2score`   | `_MIDI2Score`   |
//! | truth    | `ground_truth` | (none)          |
//!
//! A sample is kept only when all four companion files exist and its base
//! name is not denylisted. Kept samples are numbered 1, 2, 3, … in sorted
//! discovery order; skipped samples consume no id.

use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default root directory holding the per-category audio folders.
pub const DEFAULT_ROOT: &str = "./assets/audio";

/// Default output file for the generated fragment gallery.
pub const DEFAULT_OUTPUT: &str = "./examples.html";

/// Base names excluded regardless of file presence.
pub const DEFAULT_DENYLIST: [&str; 3] = ["001_004", "1027_014", "968_026"];

/// One of the five audio sources shown per sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Input,
    Ours,
    Base1,
    Base2,
    Truth,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Input,
        Category::Ours,
        Category::Base1,
        Category::Base2,
        Category::Truth,
    ];

    /// Categories whose file must exist for a sample to be kept. The input
    /// file's existence is implied by the directory listing itself.
    pub const REQUIRED: [Category; 4] = [
        Category::Ours,
        Category::Base1,
        Category::Base2,
        Category::Truth,
    ];

    /// Subdirectory under the root holding this category's files.
    pub fn subdir(&self) -> &'static str {
        match self {
            Category::Input => "inputs",
            Category::Ours => "ours",
            Category::Base1 => "pm2s",
            Category::Base2 => "midi2score",
            Category::Truth => "ground_truth",
        }
    }

    /// Filename suffix appended to the base name before the extension.
    pub fn suffix(&self) -> &'static str {
        match self {
            Category::Input | Category::Truth => "",
            Category::Ours => "_perf_2_score",
            Category::Base1 => "_PM2S",
            Category::Base2 => "_MIDI2Score",
        }
    }
}

/// Run-scoped configuration for a gallery build.
///
/// The directory layout, suffixes, and template are fixed conventions; only
/// the root, the output path, and extra denylist entries vary per run.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub root: String,
    pub output: PathBuf,
    pub denylist: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryConfig {
    pub fn new() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            denylist: DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_root<S: Into<String>>(mut self, root: S) -> Self {
        let mut root = root.into();
        while root.ends_with('/') && root.len() > 1 {
            root.pop();
        }
        self.root = root;
        self
    }

    pub fn with_output<P: Into<PathBuf>>(mut self, output: P) -> Self {
        self.output = output.into();
        self
    }

    /// Extend the built-in denylist with extra base names.
    pub fn with_excludes<I, S>(mut self, excludes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.denylist.extend(excludes.into_iter().map(Into::into));
        self
    }

    /// Directory scanned for input performances.
    pub fn input_dir(&self) -> PathBuf {
        Path::new(&self.root).join(Category::Input.subdir())
    }

    /// `{root}/{subdir}/{base}{suffix}.wav`, with forward slashes so the
    /// same string works as a filesystem path and an audio `src` attribute.
    pub fn category_path(&self, category: Category, base_name: &str) -> String {
        format!(
            "{}/{}/{}{}.wav",
            self.root,
            category.subdir(),
            base_name,
            category.suffix()
        )
    }

    pub fn is_denylisted(&self, base_name: &str) -> bool {
        self.denylist.iter().any(|d| d == base_name)
    }

    /// List `.wav` files directly inside the inputs directory, sorted
    /// lexicographically by path. Subdirectories are not descended into.
    pub fn scan_inputs(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(self.input_dir())
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.eq_ignore_ascii_case("wav"))
                    .unwrap_or(false)
            })
            .map(|e| e.path().to_path_buf())
            .collect();
        files.sort();
        files
    }
}

/// A sample that passed filtering, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    pub base_name: String,
    pub title: String,
    /// 1-based position among kept samples, in sorted discovery order.
    pub display_id: usize,
    pub input_path: String,
    pub ours_path: String,
    pub base1_path: String,
    pub base2_path: String,
    pub truth_path: String,
}

/// Why a candidate was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingCompanions,
    Denylisted,
}

#[derive(Debug, Clone, Serialize)]
pub struct Skip {
    pub base_name: String,
    pub reason: SkipReason,
}

/// Result of one build pass over the input listing.
#[derive(Debug, Clone)]
pub struct Gallery {
    /// Number of input files considered, kept or not.
    pub candidates: usize,
    pub samples: Vec<Sample>,
    pub skipped: Vec<Skip>,
}

/// Build the gallery from a sorted input listing.
///
/// `on_checked` is called once per candidate after its companion files have
/// been checked, with the candidate's base name.
pub fn build<F: FnMut(&str)>(
    config: &GalleryConfig,
    inputs: &[PathBuf],
    mut on_checked: F,
) -> Gallery {
    let mut samples = Vec::new();
    let mut skipped = Vec::new();

    for input_path in inputs {
        let base_name = match input_path.file_stem().and_then(|s| s.to_str()) {
            Some(s) => s.to_string(),
            None => continue,
        };

        let skip = if config.is_denylisted(&base_name) {
            Some(SkipReason::Denylisted)
        } else if Category::REQUIRED
            .iter()
            .any(|c| !Path::new(&config.category_path(*c, &base_name)).exists())
        {
            Some(SkipReason::MissingCompanions)
        } else {
            None
        };

        match skip {
            Some(reason) => skipped.push(Skip {
                base_name: base_name.clone(),
                reason,
            }),
            None => {
                let display_id = samples.len() + 1;
                samples.push(Sample {
                    title: title_case(&base_name),
                    display_id,
                    input_path: config.category_path(Category::Input, &base_name),
                    ours_path: config.category_path(Category::Ours, &base_name),
                    base1_path: config.category_path(Category::Base1, &base_name),
                    base2_path: config.category_path(Category::Base2, &base_name),
                    truth_path: config.category_path(Category::Truth, &base_name),
                    base_name: base_name.clone(),
                });
            }
        }

        on_checked(&base_name);
    }

    Gallery {
        candidates: inputs.len(),
        samples,
        skipped,
    }
}

/// Title-case a base name: uppercase the first letter of each word, where
/// words are separated by whitespace or underscores, lowercase the rest.
/// Separators are preserved.
pub fn title_case(base_name: &str) -> String {
    let mut out = String::with_capacity(base_name.len());
    let mut word_start = true;
    for c in base_name.chars() {
        if c.is_whitespace() || c == '_' {
            word_start = true;
            out.push(c);
        } else if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
