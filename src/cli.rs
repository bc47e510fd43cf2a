use clap::Parser;
use std::path::PathBuf;

/// Translate a list of Czech words into flashcard CSV rows
#[derive(Parser, Debug, Clone)]
#[command(name = "czech-flashcards")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Input file with one Czech word per line
    #[arg(short, long, default_value = "czech_words.csv")]
    pub input: PathBuf,

    /// Output CSV file for flashcard import (overwritten)
    #[arg(short, long, default_value = "czech_translations.csv")]
    pub output: PathBuf,

    /// Number of parallel workers (default: 5, or the config file value)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Model name (default: gpt-4o-mini, or the config file value)
    #[arg(short, long)]
    pub model: Option<String>,

    /// API key (default: OPENAI_API_KEY environment variable)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Optional TOML config file
    #[arg(short, long, default_value = "flashcards.toml")]
    pub config: PathBuf,

    /// Do not write a header row to the output file
    #[arg(long)]
    pub no_header: bool,
}
