//! Per-session state: the parsed upload, the current selection and the
//! extracted image archives.

use crate::core::aggregate::aggregate;
use crate::core::chart::{ChartKind, build_chart};
use crate::core::images::{ImageArchives, ResolvedImage, resolve_image};
use crate::errors::{AppError, AppResult};
use crate::ingest::{self, Upload};
use crate::models::{AggregateResult, ChartSeries, FilterSelection};
use crate::ui::messages::info;
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Identity of an upload: file name plus a hash of its content.
#[derive(Debug, Clone, PartialEq, Eq)]
struct UploadKey {
    filename: String,
    len: usize,
    digest: u64,
}

impl UploadKey {
    fn of(bytes: &[u8], filename: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        bytes.hash(&mut hasher);
        Self {
            filename: filename.to_string(),
            len: bytes.len(),
            digest: hasher.finish(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    current: Option<(UploadKey, Upload)>,
    selection: Option<FilterSelection>,
    archives: ImageArchives,
    parses: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_file(&mut self, path: &Path) -> AppResult<&Upload> {
        let bytes = fs::read(path)?;
        self.load_bytes(&bytes, &ingest::file_name(path))
    }

    /// Parse `bytes` unless the same upload is already loaded.
    /// A different upload replaces the current one and clears the selection.
    pub fn load_bytes(&mut self, bytes: &[u8], filename: &str) -> AppResult<&Upload> {
        let key = UploadKey::of(bytes, filename);

        let cached = matches!(&self.current, Some((k, _)) if *k == key);
        if cached {
            info(format!("Using cached data for {filename}"));
        } else {
            let upload = ingest::parse(bytes, filename)?;
            self.parses += 1;
            self.current = Some((key, upload));
            self.selection = None;
        }

        self.upload()
            .ok_or_else(|| AppError::Format(filename.to_string()))
    }

    pub fn upload(&self) -> Option<&Upload> {
        self.current.as_ref().map(|(_, u)| u)
    }

    /// How many times a file was actually parsed.
    pub fn parse_count(&self) -> usize {
        self.parses
    }

    fn require_upload(&self) -> AppResult<&Upload> {
        self.upload()
            .ok_or_else(|| AppError::InvalidSelection("no file has been loaded".to_string()))
    }

    /// Resolve and store the selection. `None` picks the defaults.
    pub fn select(
        &mut self,
        vendor: Option<&str>,
        program: Option<&str>,
    ) -> AppResult<FilterSelection> {
        let upload = self.require_upload()?;
        let selection = FilterSelection::resolve(&upload.events, vendor, program)?;
        self.selection = Some(selection.clone());
        Ok(selection)
    }

    pub fn selection(&self) -> Option<&FilterSelection> {
        self.selection.as_ref()
    }

    fn current_selection(&mut self) -> AppResult<FilterSelection> {
        match &self.selection {
            Some(s) => Ok(s.clone()),
            None => self.select(None, None),
        }
    }

    pub fn summary(&mut self) -> AppResult<AggregateResult> {
        let selection = self.current_selection()?;
        let upload = self.require_upload()?;
        Ok(aggregate(&upload.events, &upload.reset_log, &selection))
    }

    pub fn chart(&mut self, kind: ChartKind) -> AppResult<ChartSeries> {
        let selection = self.current_selection()?;
        let upload = self.require_upload()?;
        Ok(build_chart(kind, &upload.events, &upload.reset_log, &selection))
    }

    /// Replace the image archives. The previous extraction is removed.
    pub fn attach_archives<P: AsRef<Path>>(&mut self, archives: &[P]) -> AppResult<()> {
        self.archives = ImageArchives::extract(archives)?;
        if !self.archives.is_empty() {
            info(format!("Extracted {} image archive(s)", self.archives.len()));
        }
        Ok(())
    }

    pub fn archive_roots(&self) -> Vec<PathBuf> {
        self.archives.roots()
    }

    /// Image for the selected program: archives first, then `images_dir`.
    pub fn image(
        &mut self,
        images_dir: Option<&Path>,
        extensions: &[String],
    ) -> AppResult<Option<ResolvedImage>> {
        let selection = self.current_selection()?;
        let dirs = self.archives.search_dirs(images_dir)?;
        resolve_image(&selection.program, dirs.as_slice(), extensions)
    }
}
