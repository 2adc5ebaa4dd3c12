//! Row (card) construction from vocabulary records

use crate::record::VocabRecord;

/// Number of columns in the export format
pub const NUM_COLUMNS: usize = 15;

/// The fixed header row. Column names must match the field names of the
/// Anki note type the CSV is imported into, in this exact order
pub const HEADER: [&str; NUM_COLUMNS] = [
    "Word",
    "Part of speech",
    "Phon UK",
    "Phon US",
    "Core meaning",
    "Literal meaning",
    "Figurative meaning",
    "Collocations",
    "Example simple",
    "Example intermediate",
    "Example advanced",
    "Synonyms",
    "Antonyms",
    "CEFR level",
    "Mnemonic",
];

/// Separator between items of a term list (collocations, synonyms, antonyms)
/// when flattened into a single cell
const TERM_SEPARATOR: &str = "; ";

/// One output row: exactly [`NUM_COLUMNS`] cells in header order
///
/// Built from a single [`VocabRecord`], serialized once, never mutated.
/// Missing input fields become empty cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRow {
    cells: [String; NUM_COLUMNS],
}

impl CardRow {
    /// Get the cells in header order
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

impl From<&VocabRecord> for CardRow {
    fn from(record: &VocabRecord) -> Self {
        let levels = record.example_levels();

        let cells = [
            cell(record.word.as_deref()),
            cell(record.part_of_speech.as_deref()),
            cell(record.phon_uk()),
            cell(record.phon_us()),
            cell(record.core_meaning.as_deref()),
            cell(record.literal_meaning.as_deref()),
            cell(record.figurative_meaning.as_deref()),
            join_terms(record.collocations.as_deref()),
            cell(levels.and_then(|l| l.simple.as_deref())),
            cell(levels.and_then(|l| l.intermediate.as_deref())),
            cell(levels.and_then(|l| l.advanced.as_deref())),
            join_terms(record.synonyms.as_deref()),
            join_terms(record.antonyms.as_deref()),
            cell(record.cefr_level.as_deref()),
            cell(record.mnemonic.as_deref()),
        ];

        Self { cells }
    }
}

/// Default an absent value to the empty string
fn cell(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Flatten a term list into one cell, preserving input order.
/// An absent list is treated as empty
fn join_terms(terms: Option<&[String]>) -> String {
    terms.unwrap_or_default().join(TERM_SEPARATOR)
}
