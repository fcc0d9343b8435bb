use std::borrow::Cow;

/// Reverse the `/`-separated segments of a path, e.g. `aa/bb/cc` becomes `cc/bb/aa`.
///
/// Applying the function twice yields the original string.
pub fn reverse_path(path: &str) -> String {
    path.split('/').rev().collect::<Vec<_>>().join("/")
}

/// Prepend a forward slash unless the path already starts with one.
pub fn prepend_slash(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}
