// Consonant gradation (kpt-vaihtelu): strong/weak stem alternation.
//
// Finnish stems alternate a k, p, or t at the boundary before the last
// syllable between a strong and a weak grade, depending on the inflection
// slot. Both directions here are pure rewrites of the last syllable's
// leading consonant, keyed on the single character that precedes it (the
// last character of the second-to-last syllable).
//
// `weaken` (vahva -> heikko) is lossy: 'k' between vowels is deleted
// outright, so 'luke' -> 'lue' cannot be inverted from the surface form
// alone. `strengthen` (heikko -> vahva) therefore covers only the
// recoverable rows of the table; the deletion inverse (inserting a 'k',
// e.g. maata -> makaan) is lexically conditioned and deliberately not
// attempted — such words come back unchanged.

use crate::syllables::split_syllables;

/// Weak-grade outcome for the consonant at the gradation site.
enum WeakGrade {
    /// No alternation applies.
    Keep,
    /// The consonant is replaced.
    Replace(char),
    /// The consonant is deleted (the 'k' -> ∅ and geminate rows).
    Delete,
}

/// Strong-grade outcome for the consonant at the gradation site.
enum StrongGrade {
    /// No alternation applies.
    Keep,
    /// The consonant is replaced.
    Replace(char),
    /// The consonant doubles (k -> kk, p -> pp, t -> tt).
    Geminate,
}

fn weak_grade(candidate: char, left: Option<char>) -> WeakGrade {
    match candidate {
        'k' => match left {
            Some('n') => WeakGrade::Replace('g'),
            // 'sk' and 'tk' do not gradate.
            Some('s' | 't') => WeakGrade::Keep,
            _ => WeakGrade::Delete,
        },
        'p' => match left {
            Some('m') => WeakGrade::Replace('m'),
            Some('p') => WeakGrade::Delete,
            _ => WeakGrade::Replace('v'),
        },
        't' => match left {
            Some('n') => WeakGrade::Replace('n'),
            Some('l') => WeakGrade::Replace('l'),
            Some('r') => WeakGrade::Replace('r'),
            Some('t') => WeakGrade::Delete,
            // 'st' does not gradate.
            Some('s') => WeakGrade::Keep,
            _ => WeakGrade::Replace('d'),
        },
        _ => WeakGrade::Keep,
    }
}

fn strong_grade(candidate: char, left: Option<char>) -> StrongGrade {
    match candidate {
        // A strong grade 'skk' or 'tkk' is implausible, keep 'sk'/'tk'.
        'k' if !matches!(left, Some('s' | 't')) => StrongGrade::Geminate,
        'p' => StrongGrade::Geminate,
        // Likewise 'stt' for 'st'.
        't' if left != Some('s') => StrongGrade::Geminate,
        'v' => StrongGrade::Replace('p'),
        'd' if !matches!(left, Some('s' | 't')) => StrongGrade::Replace('t'),
        'g' if left == Some('n') => StrongGrade::Replace('k'),
        'n' if left == Some('n') => StrongGrade::Replace('t'),
        'm' if left == Some('m') => StrongGrade::Replace('p'),
        'l' if left == Some('l') => StrongGrade::Replace('t'),
        'r' if left == Some('r') => StrongGrade::Replace('t'),
        _ => StrongGrade::Keep,
    }
}

/// The gradation site of a syllabified word: everything before the last
/// syllable, the left-context character, the candidate consonant, and the
/// remainder of the last syllable.
struct GradationSite {
    prefix: String,
    left: Option<char>,
    candidate: char,
    rest: String,
}

fn gradation_site(word: &str) -> Option<GradationSite> {
    let mut syllables = split_syllables(word);
    // The first (or only) syllable is never subject to gradation.
    if syllables.len() < 2 {
        return None;
    }
    let last = syllables.pop()?;
    let left = syllables.last().and_then(|s| s.chars().last());
    let candidate = last.chars().next()?;
    Some(GradationSite {
        prefix: syllables.concat(),
        left,
        candidate,
        rest: last.chars().skip(1).collect(),
    })
}

/// Convert a strong-grade stem to its weak grade (vahva -> heikko).
///
/// Words with fewer than two syllables, or without a gradating consonant
/// at the boundary, are returned unchanged.
pub fn weaken(word: &str) -> String {
    let Some(site) = gradation_site(word) else {
        return word.to_string();
    };
    let mut out = site.prefix;
    match weak_grade(site.candidate, site.left) {
        WeakGrade::Keep => out.push(site.candidate),
        WeakGrade::Replace(c) => out.push(c),
        WeakGrade::Delete => {}
    }
    out.push_str(&site.rest);
    out
}

/// Convert a weak-grade stem to its strong grade (heikko -> vahva).
///
/// The designed inverse of `weaken`, minus the unrecoverable deletion row:
/// a word whose strong grade re-inserts a deleted 'k' is returned in its
/// weak form unchanged.
pub fn strengthen(word: &str) -> String {
    let Some(site) = gradation_site(word) else {
        return word.to_string();
    };
    let mut out = site.prefix;
    match strong_grade(site.candidate, site.left) {
        StrongGrade::Keep => out.push(site.candidate),
        StrongGrade::Replace(c) => out.push(c),
        StrongGrade::Geminate => {
            out.push(site.candidate);
            out.push(site.candidate);
        }
    }
    out.push_str(&site.rest);
    out
}
