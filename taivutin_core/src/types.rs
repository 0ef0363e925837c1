// Shared output types for the morphology engine.
//
// A paradigm is an ordered list of `InflectedForm` entries. Labels are
// stable, human-readable grammatical tags ("1ps present", "genetiivi",
// "partitiivi (alt 1)") that downstream indexing code matches verbatim,
// so they are part of the crate's compatibility surface.

use serde::{Deserialize, Serialize};

/// One labeled surface form of a paradigm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectedForm {
    /// Grammatical tag, e.g. "3ps present" or "genetiivi (alt 1)".
    pub label: String,
    /// The inflected surface form.
    pub form: String,
}

impl InflectedForm {
    pub fn new(label: impl Into<String>, form: impl Into<String>) -> Self {
        InflectedForm {
            label: label.into(),
            form: form.into(),
        }
    }
}

/// Grammatical category of the input word, selecting the synthesis
/// pipeline. Adjectives decline exactly like nouns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordCategory {
    Verb,
    Noun,
    Adjective,
}

impl WordCategory {
    /// Parse a category name as passed on the command line.
    pub fn parse(s: &str) -> Option<WordCategory> {
        match s {
            "verb" => Some(WordCategory::Verb),
            "noun" => Some(WordCategory::Noun),
            "adjective" => Some(WordCategory::Adjective),
            _ => None,
        }
    }
}
