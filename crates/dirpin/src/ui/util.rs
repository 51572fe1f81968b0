const ELLIPSIS: char = '…';

/// Truncates `text` to at most `max_width` characters, ending with an
/// ellipsis when anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut truncated: String = text.chars().take(max_width - 1).collect();
    truncated.push(ELLIPSIS);

    truncated
}

/// Truncates `path` to at most `max_width` characters by cutting from the
/// front, so the most specific trailing segments stay visible.
pub fn truncate_path_start(path: &str, max_width: usize) -> String {
    let char_count = path.chars().count();
    if char_count <= max_width {
        return path.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let skip = char_count - (max_width - 1);
    let tail: String = path.chars().skip(skip).collect();

    format!("{ELLIPSIS}{tail}")
}
