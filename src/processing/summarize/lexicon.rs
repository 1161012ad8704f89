//! Word-level linguistic helpers for extractive scoring: stop-words, numerals, lemmas.

use std::collections::HashSet;
use std::sync::LazyLock;

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "almost", "also", "although",
    "always", "am", "among", "an", "and", "another", "any", "anyone", "anything", "are", "around",
    "as", "at", "be", "became", "because", "become", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "cannot", "could", "did", "do", "does", "doing",
    "done", "down", "during", "each", "either", "else", "enough", "etc", "even", "ever", "every",
    "few", "for", "from", "further", "get", "gets", "got", "had", "has", "have", "having", "he",
    "her", "here", "hers", "herself", "him", "himself", "his", "how", "however", "i", "if", "in",
    "into", "is", "it", "its", "itself", "just", "least", "less", "made", "make", "many", "may",
    "me", "might", "mine", "more", "most", "much", "must", "my", "myself", "neither", "never",
    "no", "nor", "not", "now", "of", "off", "often", "on", "once", "only", "onto", "or", "other",
    "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps",
    "quite", "rather", "really", "same", "say", "says", "said", "see", "seem", "seemed", "seems",
    "several", "shall", "she", "should", "since", "so", "some", "something", "such", "than",
    "that", "the", "their", "theirs", "them", "themselves", "then", "there", "therefore",
    "these", "they", "this", "those", "though", "through", "throughout", "thus", "to", "too",
    "toward", "towards", "under", "unless", "until", "up", "upon", "us", "used", "using", "very",
    "via", "was", "we", "well", "were", "what", "whatever", "when", "whence", "whenever", "where",
    "whereas", "whether", "which", "while", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion",
];

const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("went", "go"),
    ("gone", "go"),
    ("took", "take"),
    ("taken", "take"),
    ("gave", "give"),
    ("given", "give"),
    ("wrote", "write"),
    ("written", "write"),
    ("began", "begin"),
    ("begun", "begin"),
    ("found", "find"),
    ("thought", "think"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("built", "build"),
    ("kept", "keep"),
    ("left", "leave"),
    ("felt", "feel"),
    ("knew", "know"),
    ("known", "know"),
    ("ran", "run"),
    ("saw", "see"),
    ("seen", "see"),
    ("came", "come"),
    ("told", "tell"),
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());
static NUMBER_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NUMBER_WORDS.iter().copied().collect());

/// Whether a lowercase word carries no content for scoring.
pub(crate) fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Whether a lowercase word reads as a number: digits with separators, ordinals, or number words.
pub(crate) fn is_numeral(word: &str) -> bool {
    if NUMBER_WORD_SET.contains(word) {
        return true;
    }
    let digits = word
        .strip_suffix("st")
        .or_else(|| word.strip_suffix("nd"))
        .or_else(|| word.strip_suffix("rd"))
        .or_else(|| word.strip_suffix("th"))
        .unwrap_or(word);
    digits.chars().any(|c| c.is_ascii_digit())
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '/'))
}

/// Reduce a lowercase word to a dictionary-like base form.
///
/// A deterministic suffix stripper with a small irregular table. It is not a full morphological
/// analyzer; consistency across inflections is what scoring needs.
pub(crate) fn lemmatize(word: &str) -> String {
    if let Some((_, lemma)) = IRREGULAR_LEMMAS.iter().find(|(form, _)| *form == word) {
        return (*lemma).to_string();
    }
    if word.chars().count() <= 3 {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if stem.chars().count() >= 2 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("sses") {
        return format!("{stem}ss");
    }
    for suffix in ["ches", "shes", "xes", "zzes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if let Some(stem) = word.strip_suffix("ing") {
        if stem.chars().count() >= 3 {
            return undouble(stem);
        }
    }
    if let Some(stem) = word.strip_suffix("ied") {
        if stem.chars().count() >= 2 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("ed") {
        if stem.chars().count() >= 3 {
            return undouble(stem);
        }
    }
    if word.ends_with('s') && !["ss", "us", "is"].iter().any(|tail| word.ends_with(tail)) {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

/// Collapse a doubled final consonant left behind by `-ing`/`-ed` ("runn" → "run").
fn undouble(stem: &str) -> String {
    let mut chars = stem.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(last), Some(before))
            if last == before && !matches!(last, 'l' | 's' | 'z' | 'e' | 'o') && is_consonant(last) =>
        {
            stem[..stem.len() - last.len_utf8()].to_string()
        }
        _ => stem.to_string(),
    }
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
