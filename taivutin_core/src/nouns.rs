// Noun and adjective declension.
//
// Case synthesis runs off the genitive stem (genetiivivartalo): detect the
// stem type from the word's suffix shape, apply weak-grade gradation, do
// the type-specific suffix surgery, then attach the case endings. The
// partitive is the exception — it derives from the raw word, never from
// the genitive stem, which is why 'pöytä' keeps its strong 't' in
// 'pöytää' but weakens to 'pöydän'.
//
// Stem classification is genuinely ambiguous for -i words: 'nimi' takes
// the e-stem ('nimen') while loanwords like 'taksi' keep the i. Both
// candidates are produced, because these paradigms feed an index and a
// missing valid form is strictly worse than a spurious one. The e-stem
// words in -e and -in (osoite, puhelin) come out wrong by one rule and
// are documented as known bad output.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::chars::{chars_of, from_end, replace_tail, strip_last};
use crate::gradation::weaken;
use crate::phonemes::{NEUTRAL_VOWELS, is_vowel, vowel_class};
use crate::types::InflectedForm;

/// Declension stem type (sanatyyppi), detected from the word's suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemType {
    /// Fallback: vowel- or consonant-final words with no special suffix.
    Default,
    /// Words in -e (osoite, huone).
    EFinal,
    /// Words in -nen (nainen, suomalainen).
    Nen,
    /// Words in -si (käsi, vesi).
    Si,
    /// Words in -i: two stem candidates, i kept or replaced by e.
    IAmbiguous,
}

/// Classify a word's declension stem type. Rules are tried in order;
/// -si would otherwise also match -i, so the order is pinned by tests.
pub fn classify_stem(word: &str) -> StemType {
    let rules = [
        (word.ends_with('e'), StemType::EFinal),
        (word.ends_with("nen"), StemType::Nen),
        (word.ends_with("si"), StemType::Si),
        (word.ends_with('i'), StemType::IAmbiguous),
    ];
    rules
        .iter()
        .find(|(matched, _)| *matched)
        .map(|&(_, stem_type)| stem_type)
        .unwrap_or(StemType::Default)
}

/// Default-type genitive stem: weak grade, plus an 'i' glued onto a
/// consonant-final result so case endings have a vowel to attach to.
fn genitive_stem_default(word: &str) -> String {
    let mut stem = weaken(word);
    if !stem.chars().last().is_some_and(is_vowel) {
        stem.push('i');
    }
    stem
}

/// Genitive stem candidates for a word.
///
/// Every candidate is a valid base for the case suite in `declensions`.
/// Only the ambiguous -i type produces more than one.
pub fn genitive_stems(word: &str) -> SmallVec<[String; 2]> {
    match classify_stem(word) {
        StemType::EFinal => smallvec![format!("{}e", weaken(word))],
        StemType::Nen => smallvec![replace_tail(&weaken(word), 3, "se")],
        StemType::Si => smallvec![replace_tail(&weaken(word), 2, "de")],
        StemType::IAmbiguous => {
            let with_e = format!("{}e", strip_last(word, 1));
            smallvec![
                genitive_stem_default(word),
                genitive_stem_default(&with_e),
            ]
        }
        StemType::Default => smallvec![genitive_stem_default(word)],
    }
}

/// Partitive candidates for a word, built from the raw (ungraded) word.
///
/// The -i type produces three candidates: i kept, i dropped before -ta,
/// and i replaced by e.
pub fn partitive(word: &str) -> SmallVec<[String; 3]> {
    let v = vowel_class(word).suffix_vowel();
    match classify_stem(word) {
        StemType::EFinal => smallvec![format!("{word}tt{v}")],
        StemType::Nen => smallvec![format!("{}st{v}", strip_last(word, 3))],
        StemType::Si => smallvec![format!("{}tt{v}", strip_last(word, 2))],
        StemType::IAmbiguous => {
            let stem = strip_last(word, 1);
            smallvec![
                format!("{word}{v}"),
                format!("{stem}t{v}"),
                format!("{stem}e{v}"),
            ]
        }
        StemType::Default => {
            let cs = chars_of(word);
            let last = from_end(&cs, 1);
            let second = from_end(&cs, 2);
            // -ta after a final consonant, or after a vowel pair that is
            // not neutral + a/ä; a bare harmony vowel otherwise.
            let takes_t = !last.is_some_and(is_vowel)
                || (second.is_some_and(is_vowel)
                    && !(second.is_some_and(|c| NEUTRAL_VOWELS.contains(&c))
                        && matches!(last, Some('a' | 'ä'))));
            if takes_t {
                smallvec![format!("{word}t{v}")]
            } else {
                smallvec![format!("{word}{v}")]
            }
        }
    }
}

fn alt_label(candidate: usize) -> String {
    if candidate == 0 {
        String::new()
    } else {
        format!(" (alt {candidate})")
    }
}

/// All declensions of a noun or adjective.
///
/// Per genitive-stem candidate: genetiivi, monikko, and the locative
/// cases (inessiivi, elatiivi, allatiivi, adessiivi, ablatiivi); then the
/// partitive candidates. Illatiivi is not synthesized. Candidates beyond
/// the first carry an " (alt N)" label suffix.
pub fn declensions(word: &str) -> Vec<InflectedForm> {
    let v = vowel_class(word).suffix_vowel();
    let mut results = Vec::new();

    for (candidate, stem) in genitive_stems(word).iter().enumerate() {
        let alt = alt_label(candidate);
        results.push(InflectedForm::new(format!("genetiivi{alt}"), format!("{stem}n")));
        results.push(InflectedForm::new(format!("monikko{alt}"), format!("{stem}t")));
        results.push(InflectedForm::new(format!("inessiivi{alt}"), format!("{stem}ss{v}")));
        results.push(InflectedForm::new(format!("elatiivi{alt}"), format!("{stem}st{v}")));
        results.push(InflectedForm::new(format!("allatiivi{alt}"), format!("{stem}lle")));
        results.push(InflectedForm::new(format!("adessiivi{alt}"), format!("{stem}ll{v}")));
        results.push(InflectedForm::new(format!("ablatiivi{alt}"), format!("{stem}lt{v}")));
    }

    for (candidate, form) in partitive(word).iter().enumerate() {
        results.push(InflectedForm::new(
            format!("partitiivi{}", alt_label(candidate)),
            form.clone(),
        ));
    }
    results
}
