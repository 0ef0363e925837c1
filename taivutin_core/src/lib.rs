// Finnish morphological synthesis engine.
//
// Given a word in dictionary form (perusmuoto) and its grammatical
// category, the crate deterministically derives its paradigm of surface
// forms with phonological rules — no lookup dictionary. Everything is a
// pure function over string input; no state survives a call and no I/O
// happens anywhere, so every operation is freely callable from multiple
// threads.
//
// Architecture, leaf first:
// - `phonemes.rs`: vowel sets and the vowel harmony oracle
// - `syllables.rs`: heuristic syllable splitter (three-state machine)
// - `gradation.rs`: kpt consonant gradation, both directions, built on
//   the syllable splitter
// - `verbs.rs`: verbityyppi classification, present and imperfekti
//   synthesis
// - `nouns.rs`: sanatyyppi classification, genitive-stem and partitive
//   candidates, case suffixes
// - `types.rs`: `InflectedForm`, `WordCategory`
// - `lib.rs` (this file): `inflect` — dispatch plus ko/kö clitic expansion
//
// The engine is a documented heuristic: it aims at the regular core of
// each word class and produces known-incorrect output for some subtypes
// (see the module docs in `nouns.rs` and `verbs.rs`). It synthesizes
// forms only; morphological analysis (surface form back to perusmuoto)
// is out of scope.

mod chars;
pub mod gradation;
pub mod nouns;
pub mod phonemes;
pub mod syllables;
pub mod types;
pub mod verbs;

// Re-export the main entry points at the crate root.
pub use phonemes::{VowelClass, is_vowel, vowel_class};
pub use types::{InflectedForm, WordCategory};

/// Produce every inflection of `word`, with ko/kö clitic variants.
///
/// Verbs get the present and imperfekti conjugations, nouns and
/// adjectives the case suite. Each produced entry is then repeated with
/// the harmony-selected interrogative clitic appended to both label and
/// form, and a final `perusmuoto + <clitic>` entry closes the paradigm.
///
/// An unclassifiable verb produces no conjugations; the result then
/// holds only the perusmuoto clitic entry, and callers detect the case
/// by the paradigm size rather than by an error.
pub fn inflect(word: &str, category: WordCategory) -> Vec<InflectedForm> {
    let mut forms = match category {
        WordCategory::Verb => verbs::conjugations(word),
        WordCategory::Noun | WordCategory::Adjective => nouns::declensions(word),
    };
    append_question_clitic(word, &mut forms);
    forms
}

/// Append the interrogative-clitic variant of every entry, then the
/// clitic-marked base form. The clitic attaches to essentially any
/// inflected Finnish word, so the expansion is mechanical.
pub fn append_question_clitic(word: &str, forms: &mut Vec<InflectedForm>) {
    let clitic = vowel_class(word).question_clitic();
    let variants: Vec<InflectedForm> = forms
        .iter()
        .map(|entry| {
            InflectedForm::new(
                format!("{} + {clitic}", entry.label),
                format!("{}{clitic}", entry.form),
            )
        })
        .collect();
    forms.extend(variants);
    forms.push(InflectedForm::new(
        format!("perusmuoto + {clitic}"),
        format!("{word}{clitic}"),
    ));
}
