//! Typed data model for vocabulary-word records

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// One vocabulary word as it appears in the input JSON array
///
/// Every field is optional: missing keys and explicit `null` both read as
/// `None`, and unknown keys are ignored. Nothing is validated beyond shape
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VocabRecord {
    pub word: Option<String>,
    pub part_of_speech: Option<String>,
    pub phonetics: Option<Phonetics>,
    pub core_meaning: Option<String>,
    pub literal_meaning: Option<String>,
    pub figurative_meaning: Option<String>,
    pub collocations: Option<Vec<String>>,
    pub examples: Option<Examples>,
    pub synonyms: Option<Vec<String>>,
    pub antonyms: Option<Vec<String>>,
    pub cefr_level: Option<String>,
    pub mnemonic: Option<String>,
}

/// IPA transcriptions for UK and US pronunciation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Phonetics {
    pub uk: Option<String>,
    pub us: Option<String>,
}

/// Example sentences for a word
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Examples {
    pub by_level: Option<ExampleLevels>,
}

/// Example sentences graded by difficulty
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExampleLevels {
    pub simple: Option<String>,
    pub intermediate: Option<String>,
    pub advanced: Option<String>,
}

impl VocabRecord {
    /// Build a record from one element of the input array, field by field
    ///
    /// Each field is read independently and defaults to `None` on its own:
    /// a missing, `null` or ill-typed field blanks only its own cells and
    /// leaves the rest of the record intact. A non-object element yields an
    /// all-empty record
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };

        Self {
            word: field(map, "word"),
            part_of_speech: field(map, "part_of_speech"),
            phonetics: field(map, "phonetics"),
            core_meaning: field(map, "core_meaning"),
            literal_meaning: field(map, "literal_meaning"),
            figurative_meaning: field(map, "figurative_meaning"),
            collocations: field(map, "collocations"),
            examples: field(map, "examples"),
            synonyms: field(map, "synonyms"),
            antonyms: field(map, "antonyms"),
            cefr_level: field(map, "cefr_level"),
            mnemonic: field(map, "mnemonic"),
        }
    }

    /// UK phonetic transcription, if present
    pub fn phon_uk(&self) -> Option<&str> {
        self.phonetics.as_ref().and_then(|p| p.uk.as_deref())
    }

    /// US phonetic transcription, if present
    pub fn phon_us(&self) -> Option<&str> {
        self.phonetics.as_ref().and_then(|p| p.us.as_deref())
    }

    /// Graded example sentences, if present
    pub fn example_levels(&self) -> Option<&ExampleLevels> {
        self.examples.as_ref().and_then(|e| e.by_level.as_ref())
    }
}

/// Deserialize one field from the element map, defaulting to `None` if the
/// key is absent or its value does not have the expected type
fn field<T: DeserializeOwned>(map: &Map<String, Value>, key: &str) -> Option<T> {
    map.get(key).and_then(|value| T::deserialize(value).ok())
}
