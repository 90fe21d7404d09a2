mod actions;
mod config;
mod fingerprint;
mod grouping;
mod output;
mod scanner;
mod selection;
mod util;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use config::Config;
use output::DuplicateReport;
use util::format_number;

#[derive(Parser, Debug)]
#[command(name = "picsort")]
#[command(version, about = "Find duplicate images and sort them into an output directory", long_about = None)]
struct Cli {
    /// Directory to scan for images
    #[arg(default_value = ".")]
    input: PathBuf,

    /// Directory selected images are copied or moved into
    #[arg(default_value = "./duplicates")]
    output: PathBuf,

    /// Enable copying/moving of selected images (on its own, copies every
    /// duplicate except the first of each group)
    #[arg(short = 'm', long = "move")]
    move_files: bool,

    /// Do not descend into subdirectories
    #[arg(long)]
    no_recursive: bool,

    /// Copy only the first image of each duplicate group
    #[arg(short = 's', long)]
    select_one: bool,

    /// Copy images that have no duplicates
    #[arg(short = 'u', long)]
    copy_unique: bool,

    /// One image per duplicate group plus every unique image
    #[arg(short = 'a', long)]
    select_all: bool,

    /// Move selected images out of the scanned tree instead of copying
    #[arg(long)]
    relocate: bool,

    /// Copy a single image without scanning (SOURCE:DEST)
    #[arg(short = 'c', long, value_name = "SOURCE:DEST")]
    copy: Option<String>,

    /// Skip paths matching the glob (can be repeated)
    #[arg(short = 'e', long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON output for scripting
    Json,
}

fn main() {
    let cli = Cli::parse();

    // Standalone copy bypasses scanning entirely
    if let Some(spec) = &cli.copy {
        run_standalone_copy(spec);
    }

    if !cli.input.is_dir() {
        eprintln!(
            "{} input directory {} does not exist",
            "error:".red().bold(),
            cli.input.display()
        );
        process::exit(1);
    }

    let exclude = match scanner::build_exclude_set(&cli.exclude) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("{} invalid exclude pattern: {}", "error:".red().bold(), e);
            process::exit(1);
        }
    };

    let config = Config::resolve(
        cli.move_files,
        cli.no_recursive,
        cli.select_one,
        cli.copy_unique,
        cli.select_all,
        cli.relocate,
    );
    let human = matches!(cli.format, OutputFormat::Human);

    // Stage 1: enumerate candidate images
    if human {
        println!(
            "Scanning {} for images{}...",
            cli.input.display(),
            if config.recursive {
                " (including subdirectories)"
            } else {
                ""
            }
        );
    }
    let files = scanner::scan_directory(&cli.input, config.recursive, &exclude);
    if human {
        println!("Found {} images", format_number(files.len()).cyan());
    }

    // Stage 2: fingerprint in parallel, results in enumeration order
    let progress = progress_bar(files.len(), cli.no_progress || !human);
    let fingerprints = fingerprint::fingerprint_files(&files, &progress);
    progress.finish_and_clear();

    // Stage 3: fold into the index and partition into groups/uniques
    let outcome = grouping::build_index(files, fingerprints);

    // Stage 4: apply the selection policy and materialize
    let actions = selection::plan_actions(&outcome, &config, &cli.output);
    let report = DuplicateReport::from_outcome(&outcome);

    match cli.format {
        OutputFormat::Human => {
            report.print_human(config.materialize);
            let result = actions::materialize_all(&actions, config.transfer, true);
            if config.materialize {
                println!(
                    "\nMaterialized {} file(s) into {}{}",
                    format_number(result.completed).cyan(),
                    cli.output.display(),
                    if result.errors.is_empty() {
                        String::new()
                    } else {
                        format!(", {} failed", format_number(result.errors.len()).red())
                    }
                );
            }
        }
        OutputFormat::Json => {
            actions::materialize_all(&actions, config.transfer, false);
            report.print_json();
        }
    }
}

fn progress_bar(len: usize, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} images")
            .unwrap()
            .progress_chars("##-"),
    );
    bar
}

fn run_standalone_copy(spec: &str) -> ! {
    let Some((source, dest)) = spec.split_once(':') else {
        eprintln!(
            "{} invalid --copy value, expected SOURCE:DEST",
            "error:".red().bold()
        );
        process::exit(1);
    };

    if source.is_empty() || dest.is_empty() {
        eprintln!(
            "{} invalid --copy value, expected SOURCE:DEST",
            "error:".red().bold()
        );
        process::exit(1);
    }

    match actions::copy_single_image(Path::new(source), Path::new(dest)) {
        Ok(dest_path) => {
            println!("Copied {} -> {}", source, dest_path.display());
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            process::exit(1);
        }
    }
}
