// Character-level string helpers.
//
// All suffix inspection and stem surgery in this crate works on `char`
// positions counted from the end of the word. Byte indexing would split
// the two-byte vowels ä and ö, so these helpers are the only way words
// are sliced anywhere in the crate.

/// The characters of `s`, for positional access.
pub(crate) fn chars_of(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// The character `i` positions from the end (1 = last), if it exists.
pub(crate) fn from_end(cs: &[char], i: usize) -> Option<char> {
    cs.len().checked_sub(i).and_then(|k| cs.get(k)).copied()
}

/// `s` without its last `n` characters.
pub(crate) fn strip_last(s: &str, n: usize) -> String {
    let cs = chars_of(s);
    cs[..cs.len().saturating_sub(n)].iter().collect()
}

/// `s` with its last `n` characters replaced by `replacement`.
pub(crate) fn replace_tail(s: &str, n: usize, replacement: &str) -> String {
    let mut out = strip_last(s, n);
    out.push_str(replacement);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_end() {
        let cs = chars_of("syödä");
        assert_eq!(from_end(&cs, 1), Some('ä'));
        assert_eq!(from_end(&cs, 2), Some('d'));
        assert_eq!(from_end(&cs, 5), Some('s'));
        assert_eq!(from_end(&cs, 6), None);
    }

    #[test]
    fn test_strip_last_counts_chars_not_bytes() {
        assert_eq!(strip_last("syödä", 2), "syö");
        assert_eq!(strip_last("pöytä", 1), "pöyt");
        assert_eq!(strip_last("ab", 5), "");
    }

    #[test]
    fn test_replace_tail() {
        assert_eq!(replace_tail("nainen", 3, "se"), "naise");
        assert_eq!(replace_tail("käsi", 2, "de"), "käde");
    }
}
