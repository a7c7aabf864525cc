use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use exifscope::exif::{humanize_label, ExifMetadata, NomExifDecoder};
use exifscope::pipeline;

#[derive(Parser, Debug)]
#[command(
    name = "exifscope",
    version,
    about = "EXIF metadata inspector — decode, normalize, and report embedded image metadata"
)]
struct Cli {
    /// Image files or directories to inspect
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Write a text report file (exif-report-<name>.txt) for each image
    #[arg(short, long)]
    report: bool,

    /// Directory to write report files into (default: next to each image)
    #[arg(long, value_name = "DIR")]
    report_dir: Option<PathBuf>,

    /// Output structured metadata as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if cli.paths.is_empty() {
        anyhow::bail!("No input files or directories specified. Use --help for usage.");
    }

    let images = pipeline::collect_images(&cli.paths);
    if images.is_empty() {
        anyhow::bail!("No supported image files found in the specified paths.");
    }

    let decoder = NomExifDecoder::new();
    let mut results = Vec::new();
    let total = images.len();

    for image_path in &images {
        let result = pipeline::process_image(image_path, &decoder);

        if let Some(ref err) = result.error {
            log::error!("{}: {err}", image_path.display());
        } else if !cli.json {
            match result.metadata {
                Some(ref metadata) => print_metadata(image_path, metadata),
                None => {
                    println!();
                    println!("{BOLD}File:{RESET} {}", image_path.display());
                    println!("  {DIM}(no EXIF metadata found){RESET}");
                }
            }
        }

        if cli.report {
            if result.metadata.is_some() {
                match pipeline::write_report(&result, cli.report_dir.as_deref()) {
                    Ok(report_path) => log::debug!("Wrote {}", report_path.display()),
                    Err(e) => log::error!("{}: {e}", image_path.display()),
                }
            } else if result.error.is_none() {
                log::warn!("{}: no EXIF data, skipping report", image_path.display());
            }
        }

        results.push(result);
    }

    // JSON output
    if cli.json {
        let json_results: Vec<serde_json::Value> = results
            .iter()
            .map(|r| {
                serde_json::json!({
                    "path": r.path.display().to_string(),
                    "metadata": r.metadata,
                    "error": r.error,
                })
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&json_results)?);
    }

    let with_metadata = results.iter().filter(|r| r.metadata.is_some()).count();
    let failed = results.iter().filter(|r| r.error.is_some()).count();
    log::info!("Done: {with_metadata} with metadata, {failed} failed out of {total} images");

    Ok(())
}

// ANSI color codes
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Print one image's metadata, organized by category.
fn print_metadata(path: &Path, metadata: &ExifMetadata) {
    println!();
    println!("{BOLD}File:{RESET} {}", path.display());
    println!("{DIM}{}{RESET}", "═".repeat(72));

    if let Some(date) = metadata
        .date_time_original
        .as_deref()
        .or(metadata.date_time.as_deref())
    {
        print_row("Date Taken", date);
    }
    if let Some(date) = metadata.date_time_digitized.as_deref() {
        print_row("Date Digitized", date);
    }
    if let (Some(width), Some(height)) = (metadata.width, metadata.height) {
        print_row("Dimensions", &format!("{width} × {height}"));
    }
    println!();

    let sections: [(&str, Vec<(&'static str, String)>); 6] = [
        ("Camera Information", metadata.camera.entries()),
        ("Lens Information", metadata.lens.entries()),
        ("Exposure Settings", metadata.exposure.entries()),
        ("Location Data", metadata.location.entries()),
        ("Technical Details", metadata.technical.entries()),
        (
            "Thumbnail Information",
            metadata
                .thumbnail
                .as_ref()
                .map(|t| t.entries())
                .unwrap_or_default(),
        ),
    ];

    for (title, entries) in sections {
        if entries.is_empty() {
            continue;
        }
        println!("  {BOLD}{title}{RESET}");
        println!("  {DIM}{}{RESET}", "─".repeat(70));
        for (key, value) in entries {
            print_row(&humanize_label(key), &value);
        }
        println!();
    }
}

/// Max width for the value column before wrapping.
const VAL_WIDTH: usize = 46;
/// Indent for continuation lines (label column width + " : " = 25 chars + 2 leading spaces).
const INDENT: &str = "                           ";

/// Print a single row in the metadata display table.
fn print_row(label: &str, value: &str) {
    let label_col = format!("{:<22}", label);
    let lines = wrap_text(value, VAL_WIDTH);
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            println!("  {label_col} : {line}");
        } else {
            println!("  {INDENT}{line}");
        }
    }
}

/// Wrap text at word boundaries to fit within max_width.
fn wrap_text(s: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in s.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(s.to_string());
    }

    lines
}
