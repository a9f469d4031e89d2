// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::config::options::{ExportOptions, PageKind};
use crate::csv::write_dataset;
use crate::dataset::DataSet;
use crate::error::Result;

/// Write one page's table to `<dir>/<stem>.<ext>` per `ExportOptions`.
/// Returns the final path written to.
pub fn export_dataset(export: &ExportOptions, kind: PageKind, ds: &DataSet) -> Result<PathBuf> {
    let path = export.out_path(kind);
    write_dataset_file(&path, ds, export)?;
    Ok(path)
}

/// Ensure parent dir exists; create/truncate file; stream the table into it.
pub fn write_dataset_file(path: &Path, ds: &DataSet, export: &ExportOptions) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_dataset(&mut out, ds, export.include_headers, export.format.delim())?;
    out.flush()?;
    debug!(path = %path.display(), rows = ds.len(), "export written");
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "path exists but is not a directory: {}",
            dir.display()
        ))
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

/// Output directory as typed by the user, separators normalized for this OS.
pub fn normalize_dir_path(p: &str) -> PathBuf {
    PathBuf::from(normalize_separators(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_follow_platform() {
        let sep = std::path::MAIN_SEPARATOR;
        assert_eq!(normalize_separators("out/data\\x"), format!("out{sep}data{sep}x"));
    }
}
