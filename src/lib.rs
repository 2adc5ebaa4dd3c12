//! # vocab2anki
//!
//! A Rust library for converting vocabulary word lists from JSON into a CSV
//! file importable into Anki (or any flashcard app with a matching note type)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vocab2anki::{from_file, to_file};
//!
//! // Read a JSON array of vocabulary records
//! let records = from_file("englishWords.json").unwrap();
//!
//! // Print some data
//! println!("Words: {}", records.len());
//! for record in &records {
//!     if let Some(word) = &record.word {
//!         println!("Word: {}", word);
//!     }
//! }
//!
//! // Export to CSV
//! to_file(&records, "anki_words.csv").unwrap();
//! ```
//!
//! ## Features
//!
//! - Tolerant input parsing: missing and null fields become empty cells
//! - Fixed 15-column layout matching the Anki note type
//! - All-quoted CSV dialect with UTF-8 text and `\n` record separators

pub mod csv;
pub mod error;
pub mod json;
pub mod record;
pub mod row;

pub use crate::csv::{to_buffer, to_file, to_writer};
pub use crate::error::{Result, VocabError};
pub use crate::json::{from_file, from_str};
pub use crate::record::{ExampleLevels, Examples, Phonetics, VocabRecord};
pub use crate::row::{CardRow, HEADER, NUM_COLUMNS};
