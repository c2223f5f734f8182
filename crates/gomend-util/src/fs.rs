use std::io::Write;
use std::path::{Path, PathBuf};

/// Permission bits applied to rewritten files on Unix (`rw-r--r--`).
pub const FILE_MODE: u32 = 0o644;

/// Walk up from `start` looking for a file named `filename`.
/// Returns the path to the directory containing the file, or `None`.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Replace the contents of `path` with `content`.
///
/// The data is written to a temporary file in the same directory and then
/// renamed over `path`, so readers never observe a half-written file. On Unix
/// the result carries [`FILE_MODE`].
pub fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    set_mode(tmp.path())?;
    tmp.persist(path).map_err(|e| e.error)?;
    tracing::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(unix)]
fn set_mode(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(FILE_MODE))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
