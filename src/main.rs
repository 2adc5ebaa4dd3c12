//! One-shot converter: read the vocabulary JSON, write the Anki CSV

use std::process::ExitCode;

use vocab2anki::{from_file, to_file};

/// Input vocabulary list, relative to the working directory
const INPUT_PATH: &str = "englishWords.json";
/// Output CSV, overwritten if it exists
const OUTPUT_PATH: &str = "anki_words.csv";

fn main() -> ExitCode {
    match run() {
        Ok(count) => {
            println!("Wrote {} words to {}", count, OUTPUT_PATH);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> vocab2anki::Result<usize> {
    let records = from_file(INPUT_PATH)?;
    to_file(&records, OUTPUT_PATH)?;
    Ok(records.len())
}
