use regex::Regex;

/// Normalize a prompt for case-insensitive matching.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// Whitespace-delimited word count of the raw prompt.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Keyword search anchored on word boundaries, so "implement" does not hit
/// "implementation". The haystack is expected to be normalized already.
pub fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    let pattern = format!(r"\b{}\b", regex::escape(keyword.to_lowercase().as_str()));
    Regex::new(&pattern)
        .map(|re| re.is_match(haystack))
        .unwrap_or(false)
}
