/// Number of code lines shown in human-readable result listings.
pub const DEFAULT_PREVIEW_LINES: usize = 3;

/// Case-fold text for comparison.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Split already-folded text into words.
///
/// Punctuation and whitespace separate words; underscores and digits are
/// kept inside them.
#[cfg(feature = "linguistic")]
pub fn tokenize(text: &str) -> Vec<&str> {
    use unicode_segmentation::UnicodeSegmentation;

    text.unicode_words().collect()
}

/// Return the first `max_lines` lines of `code`, followed by a marker
/// line when anything was cut.
pub fn code_preview(code: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = code.lines().collect();
    if lines.len() <= max_lines {
        return lines.join("\n");
    }

    let mut preview = lines[..max_lines].join("\n");
    preview.push_str(&format!(
        "\n[... {} more lines]",
        lines.len() - max_lines
    ));
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_lowercases() {
        assert_eq!(fold("For LOOP"), "for loop");
    }

    #[cfg(feature = "linguistic")]
    #[test]
    fn tokenize_splits_on_punctuation() {
        assert_eq!(
            tokenize("try-catch block, for_each!"),
            vec!["try", "catch", "block", "for_each"]
        );
    }

    #[cfg(feature = "linguistic")]
    #[test]
    fn tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  -- ").is_empty());
    }

    #[test]
    fn preview_short_code_is_unchanged() {
        assert_eq!(code_preview("a\nb", 3), "a\nb");
    }

    #[test]
    fn preview_truncates_long_code() {
        let preview = code_preview("1\n2\n3\n4\n5", 2);
        assert!(preview.starts_with("1\n2\n"));
        assert!(preview.ends_with("[... 3 more lines]"));
    }

    #[test]
    fn preview_empty_code() {
        assert_eq!(code_preview("", 3), "");
    }
}
