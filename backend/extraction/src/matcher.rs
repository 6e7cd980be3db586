//! Deterministic candidate matching for blank-type questions.

/// If `candidate` starts with `prefix`, ends with `suffix`, and has a
/// non-empty middle, return that middle.
///
/// The match is exact and case-sensitive: `prefix + middle + suffix` must
/// reassemble the candidate byte for byte. The middle carries no bias toward
/// dictionary words; a single letter, digit, or syllable is as valid as a
/// longer fragment.
pub fn strip_affixes<'a>(prefix: &str, suffix: &str, candidate: &'a str) -> Option<&'a str> {
    candidate
        .strip_prefix(prefix)?
        .strip_suffix(suffix)
        .filter(|middle| !middle.is_empty())
}

/// Apply the affix rule over a candidate set and return the first answer.
///
/// Candidates are tried in order; the first one embedding a non-empty blank
/// between the affixes wins. Returns `None` when no candidate matches, which
/// callers must surface as a failure rather than an empty answer.
pub fn extract_answer<'a, S: AsRef<str>>(
    prefix: &str,
    suffix: &str,
    candidates: &'a [S],
) -> Option<&'a str> {
    candidates
        .iter()
        .find_map(|c| strip_affixes(prefix, suffix, c.as_ref()))
}
