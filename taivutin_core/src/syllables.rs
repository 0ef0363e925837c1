// Syllable segmentation for Finnish words.
//
// A heuristic splitter, good enough to locate the syllable boundaries that
// consonant gradation cares about: we pretend a syllable starts at every
// consonant that directly follows a vowel. When two consonants meet, the
// boundary goes between them and the first one closes the previous syllable.
// Exact Finnish syllabification is considerably more involved; see
// https://web.stanford.edu/~laurik/fsmbook/exercises/FinnishSyllabification.html
// for what a full rule set looks like. The known mis-splits do not matter
// for the gradation contexts built on top of this module.

use crate::phonemes::is_vowel;

/// State of the splitter within the current syllable. The deferred
/// consonant lives inside `PendingConsonant`, so a pending state without
/// a consonant cannot be represented.
enum SyllableState {
    /// Start of a syllable, no vowel seen yet.
    Init,
    /// Inside the syllable's vowel run.
    InVowel,
    /// One consonant seen after the vowel run; whether it ends this
    /// syllable or starts the next depends on the following character.
    PendingConsonant(char),
}

/// Split a word into syllables.
///
/// The returned syllables concatenate back to the input exactly; callers
/// rely on this to rebuild words after editing a single syllable.
pub fn split_syllables(word: &str) -> Vec<String> {
    let mut syllables = Vec::new();
    let mut current = String::new();
    let mut state = SyllableState::Init;

    for c in word.chars() {
        state = match state {
            SyllableState::Init => {
                current.push(c);
                if is_vowel(c) {
                    SyllableState::InVowel
                } else {
                    SyllableState::Init
                }
            }
            SyllableState::InVowel => {
                if is_vowel(c) {
                    current.push(c);
                    SyllableState::InVowel
                } else {
                    SyllableState::PendingConsonant(c)
                }
            }
            SyllableState::PendingConsonant(held) => {
                if is_vowel(c) {
                    // The held consonant opens a new syllable.
                    syllables.push(std::mem::take(&mut current));
                    current.push(held);
                    current.push(c);
                    SyllableState::InVowel
                } else {
                    // Two consonants in a row: the held one closes the
                    // current syllable, the new one starts the next.
                    current.push(held);
                    syllables.push(std::mem::take(&mut current));
                    current.push(c);
                    SyllableState::Init
                }
            }
        };
    }

    if let SyllableState::PendingConsonant(held) = state {
        // Consonants cannot stand alone at the end of the word.
        current.push(held);
    }
    if !current.is_empty() {
        syllables.push(current);
    }
    syllables
}
