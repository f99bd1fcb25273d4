use std::sync::LazyLock;

use regex::Regex;

use super::types::TriageError;
use crate::config::MAX_SYMPTOM_TEXT_LENGTH;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Clean a free-text symptom description before keyword matching.
///
/// Returns `Validation` when nothing usable is left.
pub fn sanitize_symptom_text(raw: &str) -> Result<String, TriageError> {
    sanitize_with_limit(raw, MAX_SYMPTOM_TEXT_LENGTH)
}

pub fn sanitize_with_limit(raw: &str, max_length: usize) -> Result<String, TriageError> {
    let text = remove_invisible_unicode(raw);
    let text = remove_control_characters(&text);
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    let mut text = text.trim().to_string();

    if text.len() > max_length {
        text = truncate_at_word_boundary(&text, max_length);
    }

    if text.is_empty() {
        return Err(TriageError::validation(
            "symptom_text",
            "describe at least one symptom",
        ));
    }
    Ok(text)
}

/// Remove zero-width and invisible Unicode characters.
fn remove_invisible_unicode(text: &str) -> String {
    text.chars()
        .filter(|c| {
            !matches!(
                *c,
                '\u{200B}'..='\u{200F}'
                | '\u{202A}'..='\u{202E}'
                | '\u{2060}'..='\u{2064}'
                | '\u{FEFF}'
            )
        })
        .collect()
}

/// Newlines and tabs become spaces later; everything else is dropped.
fn remove_control_characters(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t' | '\r'))
        .collect()
}

/// Truncate on a char boundary, backing off to the last space when there is one.
fn truncate_at_word_boundary(text: &str, max_length: usize) -> String {
    let mut end = max_length.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let cut = &text[..end];
    match cut.rfind(' ') {
        Some(space) if space > 0 => cut[..space].to_string(),
        _ => cut.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        let text = sanitize_symptom_text("chest \t  pain\n\nand cough").unwrap();
        assert_eq!(text, "chest pain and cough");
    }

    #[test]
    fn strips_zero_width_characters() {
        let text = sanitize_symptom_text("chest\u{200B} pain").unwrap();
        assert_eq!(text, "chest pain");
    }

    #[test]
    fn blank_input_is_validation_failure() {
        assert!(matches!(
            sanitize_symptom_text("   \n\t "),
            Err(TriageError::Validation { .. })
        ));
        assert!(sanitize_symptom_text("").is_err());
    }

    #[test]
    fn truncates_at_word_boundary() {
        let text = sanitize_with_limit("fever and cough since monday", 12).unwrap();
        assert_eq!(text, "fever and");
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        let text = sanitize_with_limit("बुखार", 4).unwrap();
        assert_eq!(text, "ब");
    }
}
