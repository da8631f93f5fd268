//! unmark CLI - Markdown plain-text extraction tool
//!
//! A command-line tool for rendering Markdown files as readable plain text.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use unmark::extract_file;

/// Markdown to plain-text conversion
#[derive(Parser)]
#[command(
    name = "unmark",
    author = "iyulab",
    version,
    about = "Extract plain text from Markdown documents",
    long_about = "unmark - Markdown plain-text extraction tool.\n\n\
                  Renders a Markdown file as readable plain text: block\n\
                  structure is kept, syntax markers are stripped, link\n\
                  targets are preserved.\n\n\
                  Usage:\n  \
                  unmark <file>             Print plain text to stdout\n  \
                  unmark <file> -o out.txt  Write plain text to a file"
)]
struct Cli {
    /// Input Markdown file path
    input: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> unmark::Result<()> {
    let text = extract_file(&cli.input)?;

    match &cli.output {
        Some(path) => fs::write(path, text)?,
        None => println!("{text}"),
    }

    Ok(())
}
