//! Query variation generator for sold-listing searches.
//!
//! The sold/completed search only does literal keyword matching, so one card
//! description is rewritten into several phrasings sellers commonly use. Each
//! rule is a standalone function; [`build_variations`] runs them in a fixed
//! order, most literal first:
//!
//! 1. normalized original
//! 2. bracket punctuation stripped
//! 3. years removed
//! 4. `autograph` swapped for `auto`
//! 5. player name quoted (when one is found)
//! 6. serial-number notations (when a `/<n>` is present)
//!
//! Every candidate is re-normalized, anything under five characters is
//! dropped and case-insensitive duplicates keep their first position.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::utils::collapse_whitespace;

/// Shortest variant worth searching for.
pub const MIN_VARIANT_LEN: usize = 5;

static BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[|()\[\]{}]").expect("bracket pattern is valid"));
static SERIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/([0-9]+)").expect("serial pattern is valid"));
static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)[0-9]{2}\b").expect("year pattern is valid"));
static AUTOGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bautograph\b").expect("autograph pattern is valid"));
static NAME_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+$").expect("name pattern is valid"));

/// Straightens curly quotes and collapses whitespace.
pub fn normalize(q: &str) -> String {
    let straight: String = q
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .collect();
    collapse_whitespace(&straight)
}

/// Replaces `|()[]{}` with spaces.
pub fn strip_punctuation(q: &str) -> String {
    collapse_whitespace(&BRACKETS.replace_all(q, " "))
}

/// Removes standalone years between 1900 and 2099.
pub fn remove_years(q: &str) -> String {
    collapse_whitespace(&YEAR.replace_all(q, ""))
}

/// Swaps the whole word `autograph`, in any case, for `auto`.
pub fn swap_terminology(q: &str) -> String {
    collapse_whitespace(&AUTOGRAPH.replace_all(q, "auto"))
}

/// Wraps the likely player name in double quotes.
///
/// Looks for the first run of two or more adjacent capitalized words
/// (`[A-Z][a-z]+`). Card titles lead with the brand and set, so the name is
/// taken as the last two words of that run: in `Topps Field Access Eli
/// Manning` the quoted phrase is `"Eli Manning"`.
pub fn quote_name(q: &str) -> Option<String> {
    let words: Vec<&str> = q.split(' ').collect();
    let is_name = |w: &str| NAME_WORD.is_match(w);

    let start = (0..words.len().saturating_sub(1))
        .find(|&i| is_name(words[i]) && is_name(words[i + 1]))?;

    let mut end = start + 1;
    while end + 1 < words.len() && is_name(words[end + 1]) {
        end += 1;
    }

    let mut quoted: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    quoted[end - 1] = format!("\"{}", words[end - 1]);
    quoted[end] = format!("{}\"", words[end]);
    Some(quoted.join(" "))
}

/// Alternate serial-number notations for a `/<n>` print run.
///
/// The first `/<n>` is removed and re-appended as ` /n`, ` #/n` and ` n/n`.
/// Returns nothing when the text has no serial.
pub fn serial_variants(q: &str) -> Vec<String> {
    let Some(serial) = SERIAL.captures(q).and_then(|c| c.get(1)) else {
        return Vec::new();
    };
    let n = serial.as_str();
    let base = SERIAL.replace(q, "");

    vec![
        format!("{base} /{n}"),
        format!("{base} #/{n}"),
        format!("{base} {n}/{n}"),
    ]
}

/// Builds the ranked, deduplicated variant list for one raw query.
///
/// Deterministic: the same input always yields the same list. The list is
/// empty when even the normalized input is shorter than [`MIN_VARIANT_LEN`].
pub fn build_variations(raw: &str) -> Vec<String> {
    let q = normalize(raw);

    let mut candidates = vec![
        q.clone(),
        strip_punctuation(&q),
        remove_years(&q),
        swap_terminology(&q),
    ];
    candidates.extend(quote_name(&q));
    candidates.extend(serial_variants(&q));

    let mut seen = HashSet::new();
    candidates
        .iter()
        .map(|c| normalize(c))
        .filter(|c| c.chars().count() >= MIN_VARIANT_LEN)
        .filter(|c| seen.insert(c.to_lowercase()))
        .collect()
}
