use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Writes `bytes` to a sibling temp file, then renames it over `path`.
///
/// Readers see either the previous file or the complete new one. On error
/// the temp file is removed when it drops.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
