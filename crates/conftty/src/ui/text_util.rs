use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Truncates `text` to at most `max_width` terminal columns, appending an
/// ellipsis when anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut truncated = String::new();
    let mut used_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used_width + ch_width > budget {
            break;
        }

        truncated.push(ch);
        used_width += ch_width;
    }

    truncated.push(ELLIPSIS);

    truncated
}

/// Splits `text` into word-wrapped rows of at most `width` columns.
///
/// Words wider than `width` keep a row of their own. Blank input lines are
/// kept as empty rows.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let mut current_row = String::new();
        let mut current_width = 0;

        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            rows.push(String::new());
            continue;
        }

        for word in words {
            let word_width = word.width();
            let space_width = usize::from(current_width != 0);

            if current_width + space_width + word_width > width && !current_row.is_empty() {
                rows.push(std::mem::take(&mut current_row));
                current_width = 0;
            }

            if current_width > 0 {
                current_row.push(' ');
                current_width += 1;
            }
            current_row.push_str(word);
            current_width += word_width;
        }
        rows.push(current_row);
    }

    rows
}

/// Returns initials of `name`, at most two letters.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
