// Token and keyword counting over assembled document text
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::config::PERCENT_DECIMALS;
use crate::keywords::fold_keyword;
use crate::pdf_extraction::assemble_text;
use crate::types::Result;

// Unicode-aware \w: alphabetic, marks, decimal digits, connector punctuation
static WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word run pattern"));
static WORD_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w$").expect("word char pattern"));

/// Counts for one document. Keys are folded (lowercase) keywords in
/// first-seen order; a repeated keyword keeps its first position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CountResult {
    pub total_words: usize,
    pub counts: IndexMap<String, usize>,
    pub percents: IndexMap<String, f64>,
}

pub fn is_word_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    WORD_CHAR.is_match(c.encode_utf8(&mut buf))
}

/// Number of maximal word-character runs in `text`.
pub fn count_words(text: &str) -> usize {
    WORD_RUN.find_iter(text).count()
}

/// Whole-word, non-overlapping occurrences of `keyword` in `text`.
///
/// Both arguments are expected to be folded already. A candidate counts only
/// when neither neighbour is a word character. A rejected candidate resumes
/// the scan one character past its start, so "a a" is still found once in
/// "ba a a".
pub fn count_occurrences(text: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut pos = 0;
    while let Some(offset) = text[pos..].find(keyword) {
        let start = pos + offset;
        let end = start + keyword.len();

        let clear_before = text[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
        let clear_after = text[end..].chars().next().map_or(true, |c| !is_word_char(c));

        if clear_before && clear_after {
            count += 1;
            pos = end;
        } else {
            pos = start + text[start..].chars().next().map_or(1, char::len_utf8);
        }
    }
    count
}

/// `count / total_words * 100`, rounded to four decimals. Zero when there are no words.
pub fn percentage(count: usize, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    let scale = 10f64.powi(PERCENT_DECIMALS);
    (count as f64 / total_words as f64 * 100.0 * scale).round() / scale
}

/// Count tokens and keywords in already extracted text.
pub fn count_text(text: &str, keywords: &[String]) -> CountResult {
    let total_words = count_words(text);
    let folded = text.to_lowercase();

    let mut counts = IndexMap::new();
    let mut percents = IndexMap::new();
    for keyword in keywords {
        let Some(key) = fold_keyword(keyword) else {
            continue;
        };
        let count = count_occurrences(&folded, &key);
        debug!(keyword = %key, count, "keyword counted");

        percents.insert(key.clone(), percentage(count, total_words));
        counts.insert(key, count);
    }

    CountResult {
        total_words,
        counts,
        percents,
    }
}

/// Extract a PDF's text and count it. Any load or extraction failure is
/// returned for this document alone.
pub fn count_document(bytes: &[u8], keywords: &[String]) -> Result<CountResult> {
    let text = assemble_text(bytes)?;
    Ok(count_text(&text, keywords))
}
