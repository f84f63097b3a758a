//! Word tokenizer used for skill matching.
//!
//! Tokens are runs of ASCII alphanumerics plus `+`, `#` and `.`, so `c++`, `c#`
//! and `node.js` survive as single tokens. Leading/trailing dots are trimmed
//! (sentence punctuation), a leading `#` is split off (`#python` → `python`),
//! and stopwords are dropped. No stemming.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9+#.]+").expect("word pattern is valid"));

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "done",
        "down", "during", "each", "either", "etc", "every", "few", "for", "from", "further",
        "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
        "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
        "least", "less", "made", "make", "many", "may", "me", "more", "most", "much", "must",
        "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or",
        "other", "our", "ours", "ourselves", "out", "over", "own", "per", "same", "she",
        "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
        "themselves", "then", "there", "these", "they", "this", "those", "through", "to",
        "too", "under", "until", "up", "upon", "us", "used", "using", "very", "via", "was",
        "we", "well", "were", "what", "when", "where", "whether", "which", "while", "who",
        "whom", "whose", "why", "will", "with", "within", "without", "would", "yet", "you",
        "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// Splits already lower-cased text into tokens, dropping stopwords and pure punctuation.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches('.').trim_start_matches(['.', '#']))
        .filter(|t| t.chars().any(|c| c.is_ascii_alphanumeric()))
        .filter(|t| !is_stopword(t))
        .map(String::from)
        .collect()
}

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}
