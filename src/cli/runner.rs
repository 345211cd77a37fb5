use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use png2svg::{BatchReport, process_directory_with_progress};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Drop a leading `./` so default-directory paths print as `a.png`.
fn display_path(path: &Path) -> String {
    match path.strip_prefix(".") {
        Ok(rest) if !rest.as_os_str().is_empty() => rest.display().to_string(),
        _ => path.display().to_string(),
    }
}

fn progress_line(input: &Path, output: &Path) -> String {
    format!("{} → {}", display_path(input), display_path(output))
}

/// Final console line. The count is every listed entry, not only the converted PNGs.
fn summary_line(report: &BatchReport) -> String {
    if report.found_no_png() {
        format!(
            "No .png files found in the provided directory: {}",
            report.scanned_dir.display()
        )
    } else {
        format!("{} .png files converted to .svg", report.entries)
    }
}

pub fn run(args: CliArgs) -> Result<BatchReport, AppError> {
    if args.log {
        init_logging();
    }

    let params = args.conversion_params()?;
    info!("Input directory: {:?}", args.input_dir);
    info!("Output subdirectory: {:?}", params.output_subdir);

    let report = process_directory_with_progress(&args.input_dir, &params, |input, output| {
        println!("{}", progress_line(input, output));
    })?;

    println!("{}", summary_line(&report));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if report.errors > 0 {
        return Err(AppError::FailedFiles {
            count: report.errors,
        });
    }

    Ok(report)
}
