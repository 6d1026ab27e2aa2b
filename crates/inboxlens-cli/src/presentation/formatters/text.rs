pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Uppercase the first letter of every word, as a field label is shown.
///
/// Word boundaries are whitespace; the rest of each word is left alone, so
/// `loan_number` stays one word and `due date` becomes `Due Date`.
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if at_word_start && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }

    out
}

/// Collapse line breaks so a value fits on one console line.
pub fn single_line(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Refund Request", 20), "Refund Request");
        assert_eq!(truncate("Refund Request", 9), "Refund...");
        assert_eq!(truncate("Refund", 2), "Re");
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("amount"), "Amount");
        assert_eq!(capitalize_words("due date"), "Due Date");
        assert_eq!(capitalize_words("loan_number"), "Loan_number");
        assert_eq!(capitalize_words("iBAN code"), "IBAN Code");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("a\nb\r\nc"), "a b  c");
    }
}
