// Finnish phoneme classification: vowel sets and vowel harmony.
//
// Finnish vowels fall into three harmony groups. Front (ä, ö, y) and back
// (a, o, u) vowels never mix within a native word, and every harmony-bearing
// suffix exists in a front and a back variant. Neutral vowels (e, i) are
// transparent: they co-occur with either group and never decide the class.
//
// `vowel_class` is the single harmony oracle for the whole crate — suffix
// vowels in the declension engine, the 3pp present ending, and the ko/kö
// question clitic all go through it.

use serde::{Deserialize, Serialize};

/// Front vowels — select front-harmony suffix variants.
pub const FRONT_VOWELS: [char; 3] = ['ä', 'ö', 'y'];
/// Back vowels — select back-harmony suffix variants.
pub const BACK_VOWELS: [char; 3] = ['a', 'o', 'u'];
/// Neutral vowels — transparent to vowel harmony.
pub const NEUTRAL_VOWELS: [char; 2] = ['e', 'i'];

/// Whether `c` is one of the eight Finnish vowels.
pub fn is_vowel(c: char) -> bool {
    FRONT_VOWELS.contains(&c) || BACK_VOWELS.contains(&c) || NEUTRAL_VOWELS.contains(&c)
}

/// Vowel class for suffix harmony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VowelClass {
    /// Front vowels (ä, ö, y).
    Front,
    /// Back vowels (a, o, u).
    Back,
}

impl VowelClass {
    /// The harmony-selected suffix vowel, used by case and 3pp endings.
    pub fn suffix_vowel(self) -> char {
        match self {
            VowelClass::Front => 'ä',
            VowelClass::Back => 'a',
        }
    }

    /// The harmony-selected variant of the interrogative clitic.
    pub fn question_clitic(self) -> &'static str {
        match self {
            VowelClass::Front => "kö",
            VowelClass::Back => "ko",
        }
    }
}

/// Determine the vowel harmony class of a word.
///
/// Scans right-to-left and returns the class of the first front or back
/// vowel found, skipping neutral vowels. A word with no decisive vowel
/// (all-neutral words, consonant-only input, the empty string) defaults
/// to `Front`.
pub fn vowel_class(word: &str) -> VowelClass {
    for c in word.chars().rev() {
        if BACK_VOWELS.contains(&c) {
            return VowelClass::Back;
        }
        if FRONT_VOWELS.contains(&c) {
            return VowelClass::Front;
        }
    }
    VowelClass::Front
}
