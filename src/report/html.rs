//! HTML fragment writer
//!
//! Renders one block per sample and joins them with a newline. The output
//! is a fragment file, not a standalone document: it is included into a
//! Tailwind-styled demo page that supplies the surrounding markup and the
//! tab-switching script wired to the `data-target` buttons.

use crate::gallery::{Gallery, Sample};
use std::io::{self, Write};

/// Render a single sample into its gallery block.
pub fn render(sample: &Sample) -> String {
    format!(
        r#"
<div class="example-item sample-card bg-white p-6 rounded-xl shadow-lg border border-slate-200">
    <h4 class="text-xl font-semibold mb-6 text-slate-900">Sample {sample_id}: {sample_title}</h4>
    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 text-center mb-6">
        <div>
            <h5 class="font-medium mb-2">Input Performance</h5>
            <audio controls class="w-full"><source src="{input_path}" type="audio/wav"></audio>
        </div>
        <div>
            <h5 class="font-medium mb-2">Ground Truth Score</h5>
            <audio controls class="w-full"><source src="{truth_path}" type="audio/wav"></audio>
        </div>
    </div>
    <hr class="my-6">
    <div class="flex justify-center border-b border-slate-200 mb-4">
        <button data-target="ours-{sample_id}" class="tab-button active font-medium text-slate-800 py-2 px-4 rounded-t-lg">Our Model</button>
        <button data-target="base1-{sample_id}" class="tab-button font-medium text-slate-800 py-2 px-4 rounded-t-lg">Baseline 1 (PM2S)</button>
        <button data-target="base2-{sample_id}" class="tab-button font-medium text-slate-800 py-2 px-4 rounded-t-lg">Baseline 2 (MIDI2Score)</button>
    </div>
    <div class="text-center">
        <div id="ours-{sample_id}" class="tab-content"><audio controls class="w-full mx-auto max-w-md"><source src="{ours_path}" type="audio/wav"></audio></div>
        <div id="base1-{sample_id}" class="tab-content hidden"><audio controls class="w-full mx-auto max-w-md"><source src="{base1_path}" type="audio/wav"></audio></div>
        <div id="base2-{sample_id}" class="tab-content hidden"><audio controls class="w-full mx-auto max-w-md"><source src="{base2_path}" type="audio/wav"></audio></div>
    </div>
</div>
"#,
        sample_id = sample.display_id,
        sample_title = sample.title,
        input_path = sample.input_path,
        truth_path = sample.truth_path,
        ours_path = sample.ours_path,
        base1_path = sample.base1_path,
        base2_path = sample.base2_path,
    )
}

/// Render every kept sample and join the blocks with a newline.
pub fn render_all(gallery: &Gallery) -> String {
    let fragments: Vec<String> = gallery.samples.iter().map(render).collect();
    fragments.join("\n")
}

pub fn write<W: Write>(writer: &mut W, gallery: &Gallery) -> io::Result<()> {
    writer.write_all(render_all(gallery).as_bytes())
}
