use anyhow::Context;
use clap::Parser;
use czech_flashcards::csv_processor::{extract_first_words, write_word_list};
use std::path::PathBuf;

/// Extract the first word of every line of a deck export into a word list
#[derive(Parser, Debug)]
#[command(name = "extract-words")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Exported deck, one note per line
    input: PathBuf,

    /// Output CSV, one word per row
    #[arg(short, long, default_value = "result.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let words = extract_first_words(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    write_word_list(&args.output, &words)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Successfully extracted {} words to {}",
        words.len(),
        args.output.display()
    );
    Ok(())
}
