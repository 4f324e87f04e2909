use clap::{Parser, Subcommand};
use galleria::gallery::{self, DEFAULT_OUTPUT, DEFAULT_ROOT};
use galleria::report::{self, Summary};
use galleria::{GalleryConfig, SkipReason};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "galleria")]
#[command(author, version, about = "Build a static HTML gallery comparing audio model outputs")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Root directory holding the per-category audio folders
    #[arg(default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Output file (.html for the fragment file, .json for a manifest)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Also write a JSON manifest of the run
    #[arg(long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Additional base names to exclude (repeatable)
    #[arg(long = "exclude", value_name = "BASE_NAME")]
    exclude: Vec<String>,

    /// Don't prompt to open the generated file
    #[arg(long)]
    no_open: bool,

    /// Only show summary
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Preview the gallery in a local web server
    Serve {
        /// Root directory holding the per-category audio folders
        #[arg(default_value = DEFAULT_ROOT)]
        root: PathBuf,

        /// Port to listen on
        #[arg(short, long, default_value = "3001")]
        port: u16,
    },
}

fn main() {
    let args = Args::parse();

    // Handle subcommands first
    if let Some(cmd) = args.command {
        match cmd {
            Command::Serve { root, port } => {
                let config = GalleryConfig::new().with_root(root.display().to_string());
                if let Err(e) = galleria::serve::start(port, config) {
                    eprintln!("Server error: {}", e);
                    std::process::exit(1);
                }
                return;
            }
        }
    }

    let config = GalleryConfig::new()
        .with_root(args.root.display().to_string())
        .with_output(args.output.clone())
        .with_excludes(args.exclude);

    let inputs = config.scan_inputs();

    if inputs.is_empty() {
        eprintln!(
            "Error: No input files found in '{}'. Please check your file structure.",
            config.input_dir().display()
        );
        std::process::exit(1);
    }

    if !args.quiet {
        eprintln!("\x1b[1mGalleria - Audio Comparison Gallery\x1b[0m");
        eprintln!("{}", "─".repeat(70));
        eprintln!("Found {} input sample(s)\n", inputs.len());
    }

    // Set up progress bar
    let pb = if !args.quiet && inputs.len() > 1 {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let built = gallery::build(&config, &inputs, |base_name| {
        if let Some(ref pb) = pb {
            pb.inc(1);
            pb.set_message(base_name.to_string());
        }
    });

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if !args.quiet {
        for skip in &built.skipped {
            match skip.reason {
                SkipReason::MissingCompanions => eprintln!(
                    "\x1b[33m--> Warning: Skipping sample '{}' because one or more corresponding output files are missing.\x1b[0m",
                    skip.base_name
                ),
                SkipReason::Denylisted => eprintln!(
                    "\x1b[33m--> Warning: Skipping sample '{}' (denylisted).\x1b[0m",
                    skip.base_name
                ),
            }
        }
    }

    // Write the gallery
    if let Err(e) = report::generate(&config.output, &built, &config) {
        eprintln!("Failed to write gallery: {}", e);
        std::process::exit(1);
    }

    if let Some(ref manifest_path) = args.manifest {
        if let Err(e) = report::generate(manifest_path, &built, &config) {
            eprintln!("Failed to write manifest: {}", e);
            std::process::exit(1);
        }
    }

    // Summary
    let summary = Summary::from_gallery(&built);
    if !args.quiet {
        eprintln!("\n{}", "─".repeat(70));
        eprintln!("\x1b[1mSummary:\x1b[0m");
        eprintln!("  \x1b[32m✓ Kept:\x1b[0m       {}", summary.valid);
        eprintln!("  \x1b[33m- Incomplete:\x1b[0m {}", summary.missing);
        eprintln!("  \x1b[90m- Denylisted:\x1b[0m {}", summary.denylisted);
    }

    eprintln!(
        "\n\x1b[32m✅ Successfully generated '{}' with {} examples.\x1b[0m",
        config.output.display(),
        built.samples.len()
    );

    // Open output
    if !args.no_open && !args.quiet {
        eprint!("\nOpen gallery in browser? [Y/n] ");
        io::stderr().flush().ok();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_ok() {
            let input = input.trim().to_lowercase();
            if input.is_empty() || input == "y" || input == "yes" {
                if let Err(e) = open::that(&config.output) {
                    eprintln!("Failed to open gallery: {}", e);
                }
            }
        }
    }
}
