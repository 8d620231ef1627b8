//! Keyword-overlap similarity between question texts.

/// Overlap ratio above which two texts count as similar.
const SIMILARITY_THRESHOLD: f64 = 0.6;

/// Minimum token length considered a keyword.
const MIN_KEYWORD_LEN: usize = 4;

/// Returns true when two texts share enough keywords to be treated as
/// the same question.
///
/// Tokens shorter than four characters are ignored; the overlap count
/// is divided by the smaller keyword count, so a short question fully
/// contained in a longer one still matches. Texts with no keywords at
/// all never match.
pub fn questions_similar(first: &str, second: &str) -> bool {
    let keywords_first = keyword_tokens(first);
    let keywords_second = keyword_tokens(second);

    let smaller = keywords_first.len().min(keywords_second.len());
    if smaller == 0 {
        return false;
    }

    let overlap = keywords_first
        .iter()
        .filter(|k| keywords_second.contains(k))
        .count();

    overlap as f64 / smaller as f64 > SIMILARITY_THRESHOLD
}

fn keyword_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() >= MIN_KEYWORD_LEN)
        .map(|w| w.to_string())
        .collect()
}
