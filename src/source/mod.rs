use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::SourceError;
use crate::incident::IncidentTable;
use crate::io::incidents::read_incidents;
use crate::region::Region;

/// Where the rows of an analysis came from.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceKind {
    Files(Vec<PathBuf>),
    Synthetic,
}

/// Lists the CSV exports for a region, sorted by file name.
///
/// Empty when the region has no folder or the folder does not exist.
pub fn locate(data_dir: &Path, region: &Region) -> Vec<PathBuf> {
    let Some(folder) = &region.folder else {
        return Vec::new();
    };
    let dir = data_dir.join(folder);
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_csv(p))
        .collect();
    files.sort();
    files
}

fn is_csv(path: &Path) -> bool {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    name.ends_with(".csv") || name.ends_with(".csv.gz")
}

#[derive(Debug)]
pub struct LoadedSource {
    pub table: IncidentTable,
    /// Files that contributed rows.
    pub files: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

/// Concatenates every readable file in order.
///
/// Unreadable files and files without the timestamp columns are skipped
/// with a warning. A layout error is returned only when no file produced a
/// row. The table is empty when no file produced a row.
pub fn load(paths: &[PathBuf]) -> Result<LoadedSource, SourceError> {
    let mut rows = Vec::new();
    let mut files = Vec::new();
    let mut warnings = Vec::new();
    let mut layout_error = None;
    for path in paths {
        match read_incidents(path) {
            Ok(batch) if batch.is_empty() => {
                warnings.push(format!("{} has no rows; skipped", path.display()));
            }
            Ok(batch) => {
                info!(file = %path.display(), rows = batch.len(), "incident_source_loaded");
                rows.extend(batch);
                files.push(path.clone());
            }
            Err(SourceError::Read { path, source }) => {
                warn!(file = %path.display(), error = %source, "incident_source_unreadable");
                warnings.push(format!("{} could not be read ({}); skipped", path.display(), source));
            }
            Err(err @ SourceError::MissingColumns { .. }) => {
                warn!(file = %path.display(), error = %err, "incident_source_wrong_layout");
                warnings.push(format!("{err}; skipped"));
                if layout_error.is_none() {
                    layout_error = Some(err);
                }
            }
            Err(err) => return Err(err),
        }
    }
    if rows.is_empty() {
        if let Some(err) = layout_error {
            return Err(err);
        }
    }
    Ok(LoadedSource {
        table: IncidentTable::new(rows),
        files,
        warnings,
    })
}
