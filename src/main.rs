mod extract;
mod process;
mod transcript;

use clap::Parser;
use eyre::{Context, Result, eyre};
use process::{BatchOutcome, ConvertOptions};
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert Gemini chat JSON files to Markdown (.md) files.
/// Provide either a path to a single file or a directory containing chat files.
#[derive(Parser)]
#[command(author, version, long_about = None)]
struct Cli {
    /// Path to a single .json chat file, or a directory containing .json chat files.
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Exclude user messages from the output Markdown.
    #[arg(long)]
    exclude_user: bool,

    /// Include internal thought entries from the assistant.
    #[arg(long)]
    include_thought: bool,
}

fn run(cli: Cli) -> Result<ExitCode> {
    let opts = ConvertOptions {
        exclude_user: cli.exclude_user,
        include_thought: cli.include_thought,
    };

    let outcome = if cli.path.is_file() {
        let processed = process::convert_and_report(&cli.path, opts);
        BatchOutcome {
            processed: processed as usize,
            skipped: !processed as usize,
        }
    } else if cli.path.is_dir() {
        println!("Searching for files in directory: {}", cli.path.display());
        let files = process::list_files(&cli.path).wrap_err_with(|| {
            format!("Failed to list directory: {}", cli.path.display())
        })?;

        if files.is_empty() {
            println!("No files found in {}", cli.path.display());
            return Ok(ExitCode::SUCCESS);
        }

        process::run_batch(&files, opts)
    } else {
        return Err(eyre!(
            "Provided path '{}' is neither a file nor a directory.",
            cli.path.display()
        ));
    };

    println!("\n--- Summary ---");
    println!("Total files processed successfully: {}", outcome.processed);
    if outcome.skipped > 0 {
        eprintln!("Total files skipped or failed: {}", outcome.skipped);
        Ok(ExitCode::FAILURE)
    } else {
        println!("All specified files processed successfully.");
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
