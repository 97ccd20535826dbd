//! Purpose: `five-letter-words` CLI entry point.
//! Role: Binary crate root; refreshes the two five-letter word files from the fixed source.
//! Invariants: Parameters are compile-time constants; unexpected arguments are ignored.
//! Invariants: Extraction failures are reported on stderr and never change the exit code.
//! Invariants: Logs go to stderr via tracing; verbosity follows `RUST_LOG` (default `info`).
use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use tracing::info;
use tracing_subscriber::EnvFilter;

use five_letter_words::core::config::{SOURCE_URL, WORD_LENGTH, WORD_LIST_PATH, WORD_SET_PATH};
use five_letter_words::{DictionaryExtractor, ExtractorConfig, error_chain};

#[derive(Parser)]
#[command(
    name = "five-letter-words",
    version,
    about = "Refresh the five-letter word list and membership map",
    long_about = None,
    after_help = help_footer()
)]
struct Cli {}

fn help_footer() -> String {
    format!(
        "SOURCE\n  {SOURCE_URL}\n\n\
         OUTPUTS\n  {WORD_LIST_PATH}  JSON array of every {WORD_LENGTH}-letter word\n  \
         {WORD_SET_PATH}  JSON object mapping each word to 1\n\n\
         Existing files are overwritten; parent directories must already exist."
    )
}

fn main() {
    if let Err(err) = Cli::try_parse() {
        match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                if let Err(io_err) = err.print() {
                    eprintln!("five-letter-words: failed to write help: {io_err}");
                }
                return;
            }
            _ => eprintln!(
                "five-letter-words: ignoring arguments: {}",
                clap_error_summary(&err)
            ),
        }
    }
    init_tracing();

    let extractor = DictionaryExtractor::new(ExtractorConfig::default());
    match extractor.run() {
        Ok(summary) => info!(
            source_words = summary.source_words,
            selected_words = summary.selected_words,
            "word files refreshed"
        ),
        // Reported, not propagated: the refresh always exits 0.
        Err(err) => eprintln!("five-letter-words: {}", error_chain(&err)),
    }
}

fn clap_error_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or("invalid arguments");
    first.strip_prefix("error: ").unwrap_or(first).trim().to_string()
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
