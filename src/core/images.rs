//! Bay image lookup by program name.
//!
//! Images come from zip archives (extracted into temporary directories that
//! live as long as the [`ImageArchives`] value) and from a local folder.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::ZipArchive;

pub const DEFAULT_EXTENSIONS: [&str; 3] = ["jpg", "png", "jpeg"];

#[derive(Debug, Clone)]
pub struct ResolvedImage {
    pub filename: String,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// A file matches when its lower-cased name starts with the lower-cased
/// program and its extension is one of `extensions`.
pub fn matches_program(file_name: &str, program: &str, extensions: &[String]) -> bool {
    let name = file_name.to_lowercase();
    if !name.starts_with(&program.to_lowercase()) {
        return false;
    }

    match Path::new(&name).extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy();
            extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
        }
        None => false,
    }
}

/// First image for `program` across `dirs`, in order.
///
/// Within a directory files are tried in listing order. Directories that do
/// not exist are skipped.
pub fn resolve_image<P: AsRef<Path>>(
    program: &str,
    dirs: &[P],
    extensions: &[String],
) -> AppResult<Option<ResolvedImage>> {
    for dir in dirs {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            continue;
        }

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let filename = entry.file_name().to_string_lossy().into_owned();
            if matches_program(&filename, program, extensions) {
                let path = entry.path();
                let bytes = fs::read(&path)?;
                return Ok(Some(ResolvedImage {
                    filename,
                    path,
                    bytes,
                }));
            }
        }
    }

    Ok(None)
}

/// Zip archives extracted to temporary directories, in upload order.
/// Dropping the value removes the directories.
#[derive(Debug, Default)]
pub struct ImageArchives {
    dirs: Vec<TempDir>,
}

impl ImageArchives {
    pub fn extract<P: AsRef<Path>>(archives: &[P]) -> AppResult<Self> {
        let mut out = ImageArchives::default();

        for archive in archives {
            // on error both `dir` and the already extracted ones are dropped
            let dir = TempDir::new()?;
            extract_zip(archive.as_ref(), dir.path())?;
            out.dirs.push(dir);
        }

        Ok(out)
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Extraction roots, in upload order.
    pub fn roots(&self) -> Vec<PathBuf> {
        self.dirs.iter().map(|d| d.path().to_path_buf()).collect()
    }

    /// Directories to search: each archive root followed by its nested
    /// folders, then `fallback`.
    pub fn search_dirs(&self, fallback: Option<&Path>) -> AppResult<Vec<PathBuf>> {
        let mut out = Vec::new();
        for root in self.roots() {
            collect_dirs(&root, &mut out)?;
        }
        if let Some(f) = fallback {
            out.push(f.to_path_buf());
        }
        Ok(out)
    }
}

fn collect_dirs(dir: &Path, out: &mut Vec<PathBuf>) -> AppResult<()> {
    out.push(dir.to_path_buf());

    let mut children: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    children.sort();

    for child in children {
        collect_dirs(&child, out)?;
    }
    Ok(())
}

fn extract_zip(archive: &Path, target: &Path) -> AppResult<()> {
    let file = fs::File::open(archive)?;
    let mut zip = ZipArchive::new(file)
        .map_err(|e| AppError::Archive(format!("{}: {e}", archive.display())))?;

    for i in 0..zip.len() {
        let mut entry = zip
            .by_index(i)
            .map_err(|e| AppError::Archive(format!("{}: {e}", archive.display())))?;

        // entries escaping the target directory are skipped
        let Some(relative) = entry.enclosed_name() else {
            continue;
        };
        let dest = target.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&dest)?;
            continue;
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = fs::File::create(&dest)?;
        io::copy(&mut entry, &mut out)?;
    }

    Ok(())
}
