//! Example: Build a few records in code and export them to CSV

use vocab2anki::{to_file, Phonetics, VocabRecord};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let records = vec![
        VocabRecord {
            word: Some("run".to_string()),
            part_of_speech: Some("verb".to_string()),
            phonetics: Some(Phonetics {
                uk: Some("/rʌn/".to_string()),
                us: Some("/rʌn/".to_string()),
            }),
            synonyms: Some(vec!["sprint".to_string(), "jog".to_string()]),
            cefr_level: Some("A1".to_string()),
            ..Default::default()
        },
        VocabRecord {
            word: Some("bridge".to_string()),
            part_of_speech: Some("noun".to_string()),
            collocations: Some(vec![
                "suspension bridge".to_string(),
                "bridge the gap".to_string(),
            ]),
            ..Default::default()
        },
    ];

    println!("Words: {}", records.len());

    to_file(&records, "demo_output.csv")?;
    println!("\nExported to demo_output.csv");

    Ok(())
}
