use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};

use crate::error::{Result, VocabError};
use crate::record::VocabRecord;
use crate::row::{CardRow, HEADER};

/// Serialize vocabulary records as CSV into a byte buffer
///
/// The output uses the all-quoted dialect expected by the Anki importer:
/// every cell, header included, is wrapped in double quotes, embedded quotes
/// are doubled, records are separated by `\n` and there is no trailing
/// newline. The first record is always the fixed 15-column header, so an
/// empty record list produces exactly one line
///
/// # Arguments
/// - `records` - The records to serialize, one CSV row each, in order
///
/// # Returns
/// The complete UTF-8 CSV document as bytes, or an error if serialization fails
pub fn to_buffer(records: &[VocabRecord]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;

    for record in records {
        let row = CardRow::from(record);
        writer.write_record(row.cells())?;
    }

    let mut buffer = writer
        .into_inner()
        .map_err(|e| VocabError::Csv(e.to_string()))?;

    // The csv writer terminates every record; drop the final terminator so
    // the document ends on the last row
    if buffer.last() == Some(&b'\n') {
        buffer.pop();
    }

    Ok(buffer)
}

/// Serialize vocabulary records as CSV to an arbitrary writer
///
/// The document is rendered fully in memory first, so nothing is written if
/// serialization fails
pub fn to_writer<W: Write>(records: &[VocabRecord], mut writer: W) -> Result<()> {
    let buffer = to_buffer(records)?;
    writer.write_all(&buffer)?;
    writer.flush()?;
    Ok(())
}

/// Write vocabulary records as a CSV file
///
/// An existing file at `path` is overwritten. The whole document is rendered
/// before the file is created, so a failed conversion leaves no partial output
///
/// # Arguments
/// - `records` - The records to serialize, one CSV row each, in order
/// - `path` - The path to the CSV file to write
///
/// # Returns
/// Ok(()) if the export was successful, or an error if the file could not be written
pub fn to_file<P: AsRef<Path>>(records: &[VocabRecord], path: P) -> Result<()> {
    let buffer = to_buffer(records)?;
    let mut file = File::create(path)?;
    file.write_all(&buffer)?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::from_str;

    const HEADER_LINE: &str = "\"Word\",\"Part of speech\",\"Phon UK\",\"Phon US\",\
        \"Core meaning\",\"Literal meaning\",\"Figurative meaning\",\"Collocations\",\
        \"Example simple\",\"Example intermediate\",\"Example advanced\",\
        \"Synonyms\",\"Antonyms\",\"CEFR level\",\"Mnemonic\"";

    fn render(json: &str) -> String {
        let records = from_str(json).unwrap();
        String::from_utf8(to_buffer(&records).unwrap()).unwrap()
    }

    #[test]
    fn empty_input_is_header_only() {
        assert_eq!(render("[]"), HEADER_LINE);
    }

    #[test]
    fn every_cell_is_quoted() {
        let output = render(r#"[{"word":"run"}]"#);
        let second = output.lines().nth(1).unwrap();
        assert_eq!(
            second,
            "\"run\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\""
        );
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let output = render(r#"[{"core_meaning":"He said \"hi\""}]"#);
        assert!(output.contains("\"He said \"\"hi\"\"\""));
    }

    #[test]
    fn rows_follow_input_order() {
        let output = render(r#"[{"word":"alpha"},{"word":"beta"}]"#);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("\"alpha\""));
        assert!(lines[2].starts_with("\"beta\""));
    }

    #[test]
    fn scenario_row_matches_expected_line() {
        let json = r#"[{"word":"run","part_of_speech":"verb",
            "phonetics":{"uk":"/rʌn/"},"synonyms":["sprint","jog"]}]"#;
        let output = render(json);
        assert_eq!(
            output.lines().nth(1).unwrap(),
            "\"run\",\"verb\",\"/rʌn/\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"sprint; jog\",\"\",\"\",\"\""
        );
    }

    #[test]
    fn output_is_stable_across_runs() {
        let records = from_str(r#"[{"word":"run","antonyms":["walk"]}]"#).unwrap();
        assert_eq!(to_buffer(&records).unwrap(), to_buffer(&records).unwrap());
    }

    #[test]
    fn no_trailing_newline() {
        let output = render(r#"[{"word":"run"}]"#);
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn to_writer_renders_into_the_sink() {
        let records = from_str(r#"[{"word":"run","antonyms":["walk"]}]"#).unwrap();
        let mut sink = Vec::new();

        to_writer(&records, &mut sink).unwrap();

        assert_eq!(sink, to_buffer(&records).unwrap());
    }

    #[test]
    fn file_round_trip_writes_the_buffer() {
        let records = from_str(r#"[{"word":"run"}]"#).unwrap();
        let path = std::env::temp_dir().join("vocab2anki_csv_test.csv");

        to_file(&records, &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(written, to_buffer(&records).unwrap());
    }
}
