use std::path::{Component, Path, PathBuf};

/// Strip trailing separators from a working tree path.
///
/// The path is rebuilt from its components, so repeated separators and
/// interior `.` segments also disappear. A path made of nothing but
/// separators has no components beyond the root and collapses to an
/// empty path.
pub fn trim_trailing_separators(path: &Path) -> PathBuf {
    let mut components = path.components();
    if let (Some(Component::RootDir), None) = (components.next(), components.next()) {
        return PathBuf::new();
    }

    path.components().collect()
}
