//! Asset path helpers
//!
//! Lock files record package-relative asset paths with `/`, but hand-written
//! entries and older tooling use `\`. Everything here accepts both.

use std::path::{Path, PathBuf};

/// File name of a placeholder entry (marks an intentionally empty folder)
pub const PLACEHOLDER_FILE_NAME: &str = "_._";

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Last segment of an asset path
pub fn asset_file_name(path: &str) -> &str {
    path.rsplit(is_separator).next().unwrap_or(path)
}

/// File name without its final extension (`Foo.Bar.dll` -> `Foo.Bar`)
pub fn asset_file_stem(path: &str) -> &str {
    let name = asset_file_name(path);
    match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

/// True iff the file name is exactly `_._` (case-sensitive)
pub fn is_placeholder_file(path: &str) -> bool {
    asset_file_name(path) == PLACEHOLDER_FILE_NAME
}

/// True iff `path` lives under the top-level folder `dir` (`lib/...`)
pub fn starts_with_directory(path: &str, dir: &str) -> bool {
    match path.split_once(is_separator) {
        Some((first, _)) => first == dir,
        None => false,
    }
}

/// Join a package-relative asset path onto an install root
pub fn join_asset_path(root: &Path, relative: &str) -> PathBuf {
    relative
        .split(is_separator)
        .filter(|segment| !segment.is_empty())
        .fold(root.to_path_buf(), |acc, segment| acc.join(segment))
}

/// True iff `candidate` is strictly below `dir`
pub fn is_child_of_directory(dir: &Path, candidate: &Path) -> bool {
    candidate.starts_with(dir) && candidate.components().count() > dir.components().count()
}

fn segment_eq(a: &str, b: &str) -> bool {
    if cfg!(windows) {
        a.eq_ignore_ascii_case(b)
    } else {
        a == b
    }
}

/// Relative path from `from` to `to`, using `/` separators
///
/// `from` is treated as a file unless it ends with a separator; the result
/// ends with a separator iff `to` does.
pub fn relative_path(from: &str, to: &str) -> String {
    let from_segments: Vec<&str> = from.split(is_separator).collect();
    let to_segments: Vec<&str> = to.split(is_separator).collect();

    // the last segment of `from` is a file name (or empty), never walked into
    let from_len = from_segments.len() - 1;
    let to_len = to_segments.len();

    let mut index = 0;
    while from_len.min(to_len) > index {
        if !segment_eq(from_segments[index], to_segments[index]) {
            break;
        }
        // a folder and a file may share a name: /file/name vs /file/name/app
        if (from_len == index && to_len > index + 1) || (from_len > index && to_len == index + 1)
        {
            break;
        }
        index += 1;
    }

    if from_len + 1 == to_len
        && !from_segments[index].is_empty()
        && segment_eq(from_segments[index], to_segments[index])
    {
        return String::new();
    }

    let mut path = String::new();
    for _ in index..from_len {
        path.push_str("../");
    }
    for segment in to_segments.iter().take(to_len - 1).skip(index) {
        path.push_str(segment);
        path.push('/');
    }
    if let Some(last) = to_segments.last().filter(|s| !s.is_empty()) {
        path.push_str(last);
    }
    path
}
