//! Pure path math over display paths.
//!
//! Repository identifiers and display paths are plain strings with `/`
//! separators; these helpers never touch the filesystem.

/// Normalizes a path to forward slashes with no trailing separator.
///
/// The filesystem root stays `/`; an empty input stays empty (and degrades
/// downstream as an unresolvable target).
pub fn normalize(path: &str) -> String {
    let mut normalized = path.replace('\\', "/");
    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }

    normalized
}

/// Returns the containing folder of a normalized path, `None` at a root.
pub fn parent(path: &str) -> Option<String> {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    let separator = trimmed.rfind('/')?;
    if separator == 0 {
        return Some("/".to_string());
    }

    Some(trimmed[..separator].to_string())
}

/// Returns the last path segment, extension included.
pub fn file_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');

    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Returns the basename without its extension (dotfiles keep their name).
pub fn display_name(path: &str) -> String {
    let name = file_name(path);

    std::path::Path::new(name)
        .file_stem()
        .map_or_else(|| name.to_string(), |stem| stem.to_string_lossy().into_owned())
}
