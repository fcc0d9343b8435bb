/// Lexically normalise a path, collapsing `.`, `..` and repeated separators.
///
/// Backslashes are treated as separators so that paths assembled on Windows still match the
/// forward-slash form stored in the index. A leading `/` is preserved. Returns `None` when a
/// `..` segment would climb above the first segment.
pub fn normalize(path: &str) -> Option<String> {
    let path = path.replace('\\', "/");
    let absolute = path.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    Some(if absolute { format!("/{joined}") } else { joined })
}

/// Folder portion of a full path, including the trailing separator.
///
/// `ns/lib/1.0/css/app.css` yields `ns/lib/1.0/css/`; a path without separators yields an
/// empty string.
pub fn parent_folder(full_path: &str) -> &str {
    match full_path.rfind('/') {
        Some(idx) => &full_path[..=idx],
        None => "",
    }
}

/// Remove a leading namespace prefix from a path, leaving other occurrences untouched.
pub fn strip_namespace<'a>(path: &'a str, namespace: &str) -> &'a str {
    path.strip_prefix(namespace).unwrap_or(path)
}
