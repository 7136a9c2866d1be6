/// Title-cases `text`: the first letter of every run of letters is upper-cased
/// and the rest lower-cased. Anything that is not a letter (spaces, commas,
/// apostrophes, hyphens, digits) starts a new run.
///
/// # Example
/// ```
/// use busyblocks::utils::text::title_case;
///
/// assert_eq!(title_case("SMITH, JOHN"), "Smith, John");
/// assert_eq!(title_case("O'BRIEN-LEE"), "O'Brien-Lee");
/// ```
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}

/// Decodes report bytes, dropping any invalid UTF-8 sequences.
pub fn decode_report(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => String::from_utf8_lossy(bytes)
            .chars()
            .filter(|&c| c != char::REPLACEMENT_CHARACTER)
            .collect(),
    }
}

/// True when the line is a rule made only of dashes (`-----`)
pub fn is_separator_rule(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c == '-')
}

/// Truncates text to a maximum length, adding ellipsis if needed
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        "...".to_string()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    }
}
