//! Filesystem access shared by file and secret loading.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};

/// Return the parent directory of `path`, falling back to `"."` when the path
/// has no parent or the parent is empty.
fn parent_or_dot(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."))
}

/// Read `path` to a string through a `cap-std` handle on its parent
/// directory.
///
/// # Errors
///
/// Returns an [`std::io::Error`] if the file name cannot be determined, the
/// parent directory cannot be opened, or the file cannot be read as UTF-8.
pub(crate) fn read_to_string(path: &Utf8Path) -> std::io::Result<String> {
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "cannot determine file name for path",
        )
    })?;
    let dir = Dir::open_ambient_dir(parent_or_dot(path), ambient_authority())?;
    dir.read_to_string(file_name)
}
