// Verb classification and conjugation.
//
// `classify` assigns one of the six Finnish conjugation classes
// (verbityyppi 1-6) from the infinitive's suffix shape, evaluated as an
// ordered rule cascade — the suffix signatures overlap, so rule order is
// part of the contract. Present-tense synthesis strips the class suffix,
// then builds the six person/number slots from a per-class connector and
// per-slot gradation strength. The imperfekti is synthesized from the
// finished present-tense forms, not from the raw infinitive: a vowel
// rewrite (insert 'i' or replace with 'i') preceded by three corrective
// passes (diphthong metathesis, the vt4/exception 'si' substitution, and
// the second-syllable a -> o shift).
//
// This is a curated heuristic. It covers the regular core of each class;
// subclasses whose strong grade needs consonant insertion (the ∅ -> k row,
// see `gradation`) come out wrong and are documented as such.

use serde::{Deserialize, Serialize};

use crate::chars::{chars_of, from_end, strip_last};
use crate::gradation::{strengthen, weaken};
use crate::phonemes::is_vowel;
use crate::syllables::split_syllables;
use crate::types::InflectedForm;

/// Finnish conjugation class (verbityyppi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbClass {
    /// Not recognizably a verb in dictionary form.
    Unknown,
    /// Vowel + a/ä (sanoa, antaa).
    Vt1,
    /// da/dä (syödä, juoda).
    Vt2,
    /// la/lä, na/nä, ra/rä, sta/stä (tulla, mennä, purra, nousta).
    Vt3,
    /// Vowel + ta/tä (haluta, herätä).
    Vt4,
    /// ita/itä (tarvita, häiritä).
    Vt5,
    /// eta/etä (vanheta, lämmetä).
    Vt6,
}

/// Classify a verb by its infinitive suffix.
///
/// The rules are tried strictly top to bottom; several suffix shapes
/// overlap (ita/itä also matches the vowel+ta/tä signature, which also
/// matches vowel+a/ä), so the order is load-bearing and pinned by tests.
pub fn classify(word: &str) -> VerbClass {
    let cs = chars_of(word);
    let last = from_end(&cs, 1);
    if !matches!(last, Some('a' | 'ä')) {
        return VerbClass::Unknown;
    }
    let penult = from_end(&cs, 2);
    let antepenult = from_end(&cs, 3);

    let rules = [
        (antepenult == Some('e') && penult == Some('t'), VerbClass::Vt6),
        (antepenult == Some('i') && penult == Some('t'), VerbClass::Vt5),
        (penult == Some('t') && antepenult.is_some_and(is_vowel), VerbClass::Vt4),
        (
            matches!(penult, Some('l' | 'n' | 'r'))
                || (antepenult == Some('s') && penult == Some('t')),
            VerbClass::Vt3,
        ),
        (penult == Some('d'), VerbClass::Vt2),
        (penult.is_some_and(is_vowel), VerbClass::Vt1),
    ];
    rules
        .iter()
        .find(|(matched, _)| *matched)
        .map(|&(_, class)| class)
        .unwrap_or(VerbClass::Unknown)
}

/// Vt1 infinitives that build their imperfekti with the vt4 'si'
/// substitution. Language-specific irregularity; no rule recovers this
/// set, so it stays an explicit table.
const VT1_SI_EXCEPTIONS: &[&str] = &[
    "huutaa", "kieltää", "kääntää", "lentää", "löytää", "piirtää", "pyytää",
    "rakentaa", "siirtä", "tietää", "tuntea", "työntää", "ymmärtää",
];

/// Gradation strength applied to the stem of one conjugation slot.
#[derive(Debug, Clone, Copy)]
enum StemStrength {
    /// Weak grade (heikko).
    Weaken,
    /// Strong grade (vahva).
    Strengthen,
    /// Stem used as stripped.
    Plain,
}

/// Whether the 3ps present doubles the stem's final vowel. True for all
/// classes except vt2 (da/dä) and the ata/ätä subset of vt4.
pub fn doubles_in_3ps(infinitive: &str) -> bool {
    let non_doubling = ["da", "dä", "ata", "ätä"];
    !non_doubling.iter().any(|s| infinitive.ends_with(s))
}

fn person_label(slot: usize, tense: &str) -> String {
    let number = if slot < 3 { 's' } else { 'p' };
    format!("{}p{number} {tense}", slot % 3 + 1)
}

/// Generic present-tense builder shared by all six classes.
fn conjugate_present(
    infinitive: &str,
    stem: &str,
    connector: &str,
    strengths: [StemStrength; 6],
    suffix_vowel: char,
) -> Vec<InflectedForm> {
    let third_singular = if doubles_in_3ps(infinitive) {
        // The slot's ending is the stem's own final vowel, doubled.
        format!("{stem}{connector}")
            .chars()
            .last()
            .map(String::from)
            .unwrap_or_default()
    } else {
        String::new()
    };
    let third_plural = format!("v{suffix_vowel}t");
    let endings = [
        "n",
        "t",
        third_singular.as_str(),
        "mme",
        "tte",
        third_plural.as_str(),
    ];

    endings
        .iter()
        .zip(strengths)
        .enumerate()
        .map(|(slot, (ending, strength))| {
            let graded = match strength {
                StemStrength::Weaken => weaken(stem),
                StemStrength::Strengthen => strengthen(stem),
                StemStrength::Plain => stem.to_string(),
            };
            InflectedForm::new(
                person_label(slot, "present"),
                format!("{graded}{connector}{ending}"),
            )
        })
        .collect()
}

/// Conjugate a verb in the present tense: six slots in 1ps..3pp order.
/// An unclassifiable word yields an empty paradigm, not an error.
pub fn present(word: &str) -> Vec<InflectedForm> {
    use StemStrength::{Plain, Strengthen, Weaken};

    let Some(final_vowel) = word.chars().last() else {
        return Vec::new();
    };
    match classify(word) {
        VerbClass::Unknown => Vec::new(),
        VerbClass::Vt1 => conjugate_present(
            word,
            &strip_last(word, 1),
            "",
            [Weaken, Weaken, Plain, Weaken, Weaken, Plain],
            final_vowel,
        ),
        VerbClass::Vt2 => {
            conjugate_present(word, &strip_last(word, 2), "", [Plain; 6], final_vowel)
        }
        VerbClass::Vt3 => {
            conjugate_present(word, &strip_last(word, 2), "e", [Strengthen; 6], final_vowel)
        }
        VerbClass::Vt4 => {
            let connector = final_vowel.to_string();
            conjugate_present(
                word,
                &strip_last(word, 2),
                &connector,
                [Strengthen; 6],
                final_vowel,
            )
        }
        VerbClass::Vt5 => {
            conjugate_present(word, &strip_last(word, 2), "tse", [Plain; 6], final_vowel)
        }
        VerbClass::Vt6 => {
            conjugate_present(word, &strip_last(word, 2), "ne", [Strengthen; 6], final_vowel)
        }
    }
}

/// Per-slot person endings for the imperfekti rewrite. The 3pp vowel is
/// read back from the produced 3pp present form so it tracks any vowel
/// shifts the corrective passes made.
fn person_endings(forms: &[String]) -> [String; 6] {
    let third_plural_vowel = from_end(&chars_of(&forms[5]), 2).unwrap_or('a');
    [
        "n".to_string(),
        "t".to_string(),
        String::new(),
        "mme".to_string(),
        "tte".to_string(),
        format!("v{third_plural_vowel}t"),
    ]
}

/// Rewrite a trailing ie/yö/uo diphthong to ei/öi/oi in every slot.
/// The pair is read off the 1ps form, two characters before its ending.
fn apply_diphthong_metathesis(forms: &mut [String]) {
    let cs = chars_of(&forms[0]);
    let Some((a, b)) = from_end(&cs, 3).zip(from_end(&cs, 2)) else {
        return;
    };
    let pair: String = [a, b].iter().collect();
    let replacement = match pair.as_str() {
        "ie" => "ei",
        "yö" => "öi",
        "uo" => "oi",
        _ => return,
    };
    for form in forms.iter_mut() {
        // Only the last occurrence moves.
        if let Some(pos) = form.rfind(&pair) {
            form.replace_range(pos..pos + pair.len(), replacement);
        }
    }
}

/// The vt4 (and listed vt1 exception) imperfekti marker: the stem-final
/// vowel material becomes 'si' in every slot.
fn apply_si_substitution(word: &str, forms: &mut [String]) {
    let replaced = match classify(word) {
        VerbClass::Vt4 => 1,
        VerbClass::Vt1 if VT1_SI_EXCEPTIONS.contains(&word) => 2,
        _ => return,
    };
    let stem_len = chars_of(&forms[0]).len().saturating_sub(replaced + 1);
    for form in forms.iter_mut() {
        let cs = chars_of(form);
        let head: String = cs[..stem_len.min(cs.len())].iter().collect();
        let tail: String = cs
            .get(stem_len + replaced..)
            .map(|t| t.iter().collect())
            .unwrap_or_default();
        *form = format!("{head}si{tail}");
    }
}

/// The imperfekti a -> o shift: when the 3ps form splits into exactly two
/// syllables that both contain an 'a', the second syllable's final 'a'
/// becomes 'o' in every slot. Runs last because it would otherwise break
/// the passes above.
fn apply_second_syllable_a_to_o(forms: &mut [String]) {
    let third_singular = split_syllables(&forms[2]);
    if third_singular.len() != 2
        || !third_singular[0].contains('a')
        || !third_singular[1].contains('a')
    {
        return;
    }
    // Weak-grade slots may have lost the syllable boundary (e.g. 'jaan'
    // from 'jakaa'); for those the shift targets the first syllable. The
    // 3ps and 3pp slots are always strong and keep the boundary.
    let collapsed = split_syllables(&forms[0]).len() < third_singular.len();

    for (slot, form) in forms.iter_mut().enumerate() {
        let mut syllables = split_syllables(form);
        let target_index = if collapsed && slot != 2 && slot != 5 { 0 } else { 1 };
        let Some(target) = syllables.get_mut(target_index) else {
            continue;
        };
        if target.ends_with("aa") {
            // The doubled vowel becomes 'oo'; the surplus 'o' is removed
            // again by the i-replacement for doubling 3ps slots.
            let cut = target.len() - "aa".len();
            target.replace_range(cut.., "oo");
        } else if let Some(pos) = target.rfind('a') {
            target.replace_range(pos..pos + 1, "o");
        }
        *form = syllables.concat();
    }
}

/// Imperfekti branch (a): insert 'i' after a non-doubled o/ö/u/y stem
/// vowel. Empty when the branch does not apply.
fn add_i_slots(word: &str, forms: &[String]) -> Vec<InflectedForm> {
    let first = chars_of(&forms[0]);
    let Some(last_vowel) = from_end(&first, 2) else {
        return Vec::new();
    };
    if !matches!(last_vowel, 'o' | 'ö' | 'u' | 'y') || from_end(&first, 3) == Some(last_vowel) {
        return Vec::new();
    }

    let endings = person_endings(forms);
    // Doubling 3ps slots carry one extra vowel to make room for.
    let doubled = if doubles_in_3ps(word) { 1 } else { 0 };
    forms
        .iter()
        .zip(&endings)
        .enumerate()
        .map(|(slot, (form, ending))| {
            let cs = chars_of(form);
            let new_form = if slot == 2 {
                let head: String = cs[..cs.len().saturating_sub(doubled)].iter().collect();
                format!("{head}i")
            } else {
                let keep = cs.len().saturating_sub(ending.chars().count());
                let head: String = cs[..keep].iter().collect();
                format!("{head}i{ending}")
            };
            InflectedForm::new(person_label(slot, "imperfekti"), new_form)
        })
        .collect()
}

/// Imperfekti branch (b): replace an a/ä/e/i or doubled stem vowel (and
/// the ending) with 'i'. Empty when the branch does not apply.
fn replace_with_i_slots(word: &str, forms: &[String]) -> Vec<InflectedForm> {
    let first = chars_of(&forms[0]);
    let Some(last_vowel) = from_end(&first, 2) else {
        return Vec::new();
    };
    let doubled_vowel = from_end(&first, 3) == Some(last_vowel);
    if !matches!(last_vowel, 'a' | 'ä' | 'e' | 'i') && !doubled_vowel {
        return Vec::new();
    }

    let endings = person_endings(forms);
    let removed_3ps = if doubles_in_3ps(word) { 2 } else { 1 };
    forms
        .iter()
        .zip(&endings)
        .enumerate()
        .map(|(slot, (form, ending))| {
            let cs = chars_of(form);
            let new_form = if slot == 2 {
                let head: String = cs[..cs.len().saturating_sub(removed_3ps)].iter().collect();
                format!("{head}i")
            } else {
                let keep = cs.len().saturating_sub(ending.chars().count() + 1);
                let head: String = cs[..keep].iter().collect();
                format!("{head}i{ending}")
            };
            InflectedForm::new(person_label(slot, "imperfekti"), new_form)
        })
        .collect()
}

/// Conjugate a verb in the imperfekti (past tense).
///
/// Operates on the already-synthesized present-tense forms. An
/// unclassifiable word yields an empty paradigm.
pub fn past(word: &str) -> Vec<InflectedForm> {
    let mut forms: Vec<String> = present(word).into_iter().map(|f| f.form).collect();
    if forms.is_empty() {
        return Vec::new();
    }

    apply_diphthong_metathesis(&mut forms);
    apply_si_substitution(word, &mut forms);
    apply_second_syllable_a_to_o(&mut forms);

    // Exactly one of the two branches applies to any given stem vowel.
    let mut out = add_i_slots(word, &forms);
    out.extend(replace_with_i_slots(word, &forms));
    out
}

/// All conjugations of a verb: present tense followed by imperfekti.
pub fn conjugations(word: &str) -> Vec<InflectedForm> {
    let mut forms = present(word);
    forms.extend(past(word));
    forms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms(entries: &[InflectedForm]) -> Vec<(&str, &str)> {
        entries
            .iter()
            .map(|e| (e.label.as_str(), e.form.as_str()))
            .collect()
    }

    #[test]
    fn test_classify_all_classes() {
        assert_eq!(classify("antaa"), VerbClass::Vt1);
        assert_eq!(classify("sanoa"), VerbClass::Vt1);
        assert_eq!(classify("syödä"), VerbClass::Vt2);
        assert_eq!(classify("tulla"), VerbClass::Vt3);
        assert_eq!(classify("mennä"), VerbClass::Vt3);
        assert_eq!(classify("purra"), VerbClass::Vt3);
        assert_eq!(classify("nousta"), VerbClass::Vt3);
        assert_eq!(classify("haluta"), VerbClass::Vt4);
        assert_eq!(classify("tarvita"), VerbClass::Vt5);
        assert_eq!(classify("vanheta"), VerbClass::Vt6);
    }

    #[test]
    fn test_classify_priority_order() {
        // eta/etä beats ita/itä beats vowel+ta beats the rest: each of
        // these matches more than one signature and must take the first.
        assert_eq!(classify("lämmetä"), VerbClass::Vt6);
        assert_eq!(classify("häiritä"), VerbClass::Vt5);
        assert_eq!(classify("herätä"), VerbClass::Vt4);
        // 'nousta' has penultimate 't' but antepenultimate 's' (not a
        // vowel), so it falls through vt4 to the 'st' rule of vt3.
        assert_eq!(classify("nousta"), VerbClass::Vt3);
    }

    #[test]
    fn test_classify_rejects_non_verbs() {
        assert_eq!(classify("talo"), VerbClass::Unknown);
        assert_eq!(classify("puhelin"), VerbClass::Unknown);
        assert_eq!(classify(""), VerbClass::Unknown);
        assert_eq!(classify("a"), VerbClass::Unknown);
    }

    #[test]
    fn test_doubles_in_3ps() {
        assert!(doubles_in_3ps("antaa"));
        assert!(doubles_in_3ps("haluta"));
        assert!(!doubles_in_3ps("syödä"));
        assert!(!doubles_in_3ps("saada"));
        assert!(!doubles_in_3ps("herätä"));
        assert!(!doubles_in_3ps("tavata"));
    }

    #[test]
    fn test_present_vt1() {
        assert_eq!(
            forms(&present("antaa")),
            vec![
                ("1ps present", "annan"),
                ("2ps present", "annat"),
                ("3ps present", "antaa"),
                ("1pp present", "annamme"),
                ("2pp present", "annatte"),
                ("3pp present", "antavat"),
            ]
        );
        assert_eq!(
            forms(&present("jakaa")),
            vec![
                ("1ps present", "jaan"),
                ("2ps present", "jaat"),
                ("3ps present", "jakaa"),
                ("1pp present", "jaamme"),
                ("2pp present", "jaatte"),
                ("3pp present", "jakavat"),
            ]
        );
    }

    #[test]
    fn test_present_vt2() {
        assert_eq!(
            forms(&present("syödä")),
            vec![
                ("1ps present", "syön"),
                ("2ps present", "syöt"),
                ("3ps present", "syö"),
                ("1pp present", "syömme"),
                ("2pp present", "syötte"),
                ("3pp present", "syövät"),
            ]
        );
    }

    #[test]
    fn test_present_vt3() {
        let golden = [
            ("tulla", ["tulen", "tulet", "tulee", "tulemme", "tulette", "tulevat"]),
            ("nousta", ["nousen", "nouset", "nousee", "nousemme", "nousette", "nousevat"]),
            ("mennä", ["menen", "menet", "menee", "menemme", "menette", "menevät"]),
            ("purra", ["puren", "puret", "puree", "puremme", "purette", "purevat"]),
            ("jutella", ["juttelen", "juttelet", "juttelee", "juttelemme", "juttelette", "juttelevat"]),
        ];
        for (infinitive, expected) in golden {
            let produced = present(infinitive);
            assert_eq!(produced.len(), 6, "paradigm size for '{infinitive}'");
            for (slot, want) in expected.iter().enumerate() {
                assert_eq!(&produced[slot].form, want, "'{infinitive}' slot {slot}");
            }
        }
    }

    #[test]
    fn test_present_vt4() {
        let golden = [
            ("haluta", ["haluan", "haluat", "haluaa", "haluamme", "haluatte", "haluavat"]),
            ("herätä", ["herään", "heräät", "herää", "heräämme", "heräätte", "heräävät"]),
            ("tavata", ["tapaan", "tapaat", "tapaa", "tapaamme", "tapaatte", "tapaavat"]),
        ];
        for (infinitive, expected) in golden {
            let produced = present(infinitive);
            for (slot, want) in expected.iter().enumerate() {
                assert_eq!(&produced[slot].form, want, "'{infinitive}' slot {slot}");
            }
        }
    }

    #[test]
    fn test_present_vt5() {
        let golden = [
            ("tarvita", ["tarvitsen", "tarvitset", "tarvitsee", "tarvitsemme", "tarvitsette", "tarvitsevat"]),
            ("häiritä", ["häiritsen", "häiritset", "häiritsee", "häiritsemme", "häiritsette", "häiritsevät"]),
        ];
        for (infinitive, expected) in golden {
            let produced = present(infinitive);
            for (slot, want) in expected.iter().enumerate() {
                assert_eq!(&produced[slot].form, want, "'{infinitive}' slot {slot}");
            }
        }
    }

    #[test]
    fn test_present_vt6() {
        let golden = [
            ("vanheta", ["vanhenen", "vanhenet", "vanhenee", "vanhenemme", "vanhenette", "vanhenevat"]),
            ("lämmetä", ["lämpenen", "lämpenet", "lämpenee", "lämpenemme", "lämpenette", "lämpenevät"]),
        ];
        for (infinitive, expected) in golden {
            let produced = present(infinitive);
            for (slot, want) in expected.iter().enumerate() {
                assert_eq!(&produced[slot].form, want, "'{infinitive}' slot {slot}");
            }
        }
    }

    #[test]
    fn test_present_unknown_is_empty() {
        assert!(present("talo").is_empty());
        assert!(present("").is_empty());
    }

    #[test]
    fn test_past_golden() {
        let golden: [(&str, [&str; 6]); 14] = [
            // o/ö/u/y insertion branch.
            ("sanoa", ["sanoin", "sanoit", "sanoi", "sanoimme", "sanoitte", "sanoivat"]),
            // a/ä/e/i replacement branch.
            ("odottaa", ["odotin", "odotit", "odotti", "odotimme", "odotitte", "odottivat"]),
            ("opiskella", ["opiskelin", "opiskelit", "opiskeli", "opiskelimme", "opiskelitte", "opiskelivat"]),
            // a -> o substitution.
            ("laulaa", ["lauloin", "lauloit", "lauloi", "lauloimme", "lauloitte", "lauloivat"]),
            ("alkaa", ["aloin", "aloit", "alkoi", "aloimme", "aloitte", "alkoivat"]),
            ("jakaa", ["jaoin", "jaoit", "jakoi", "jaoimme", "jaoitte", "jakoivat"]),
            // Doubled vowel shortens.
            ("saada", ["sain", "sait", "sai", "saimme", "saitte", "saivat"]),
            ("myydä", ["myin", "myit", "myi", "myimme", "myitte", "myivät"]),
            // Diphthong metathesis.
            ("viedä", ["vein", "veit", "vei", "veimme", "veitte", "veivät"]),
            ("syödä", ["söin", "söit", "söi", "söimme", "söitte", "söivät"]),
            ("juoda", ["join", "joit", "joi", "joimme", "joitte", "joivat"]),
            // vt4 'si' substitution.
            ("herätä", ["heräsin", "heräsit", "heräsi", "heräsimme", "heräsitte", "heräsivät"]),
            ("haluta", ["halusin", "halusit", "halusi", "halusimme", "halusitte", "halusivat"]),
            // vt1 exception-table 'si' substitution.
            ("tietää", ["tiesin", "tiesit", "tiesi", "tiesimme", "tiesitte", "tiesivät"]),
        ];
        for (infinitive, expected) in golden {
            let produced = past(infinitive);
            assert_eq!(produced.len(), 6, "paradigm size for '{infinitive}'");
            for (slot, want) in expected.iter().enumerate() {
                assert_eq!(&produced[slot].form, want, "'{infinitive}' slot {slot}");
            }
        }
    }

    #[test]
    fn test_past_labels() {
        let produced = past("antaa");
        let labels: Vec<&str> = produced.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "1ps imperfekti",
                "2ps imperfekti",
                "3ps imperfekti",
                "1pp imperfekti",
                "2pp imperfekti",
                "3pp imperfekti",
            ]
        );
    }

    #[test]
    fn test_past_unknown_is_empty() {
        assert!(past("talo").is_empty());
    }

    #[test]
    fn test_conjugations_order() {
        let all = conjugations("antaa");
        assert_eq!(all.len(), 12);
        assert_eq!(all[0].label, "1ps present");
        assert_eq!(all[6].label, "1ps imperfekti");
        assert_eq!(all[2].form, "antaa");
        assert_eq!(all[8].form, "antoi");
        assert_eq!(all[6].form, "annoin");
    }

    #[test]
    fn test_si_exception_table_member() {
        // 'tuntea' sits in the exception table: its imperfekti takes the
        // 'si' marker even though it classifies as vt1.
        let produced = past("tuntea");
        assert_eq!(produced[0].form, "tunsin");
        assert_eq!(produced[2].form, "tunsi");
    }
}
