// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::specs::competition;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub import: ImportOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Results,
    Missing,
}

impl PageKind {
    pub fn store_stem(&self) -> &'static str {
        match self {
            PageKind::Results => "results",
            PageKind::Missing => "missing",
        }
    }
}

/// Where one import run reads its page from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageSource {
    Url(String),
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportOptions {
    pub source: PageSource,
    pub club: String,
    pub roster_path: Option<PathBuf>,
    /// Relay host[:port] for https targets; None = direct http only.
    pub relay: Option<String>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            source: PageSource::Url(competition::result_url(DEFAULT_RESULT_ID)),
            club: s!(DEFAULT_CLUB_NAME),
            roster_path: None,
            relay: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Effective output file. A user-typed extension wins; otherwise the
    /// format supplies it.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        if Path::new(stem.as_ref()).extension().is_some() {
            path.push(stem.as_ref());
        } else {
            path.push(join!(stem, ".", self.format.ext()));
        }
        path
    }

    /// Parse pasted text into dir + file name. An explicit extension in the
    /// text is kept; a bare stem follows the selected format.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(name) = p.file_name() {
            self.out_path.file_stem = name.to_os_string();
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.out_path.dir
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }

    /// Default export directory per page.
    pub fn default_dir_for(kind: PageKind) -> PathBuf {
        let sub = match kind {
            PageKind::Results => DEFAULT_RESULTS_SUBDIR,
            PageKind::Missing => DEFAULT_MISSING_SUBDIR,
        };
        PathBuf::from(DEFAULT_OUT_DIR).join(sub)
    }

    /// Move only the DIR to the page default, keeping the file name.
    pub fn set_default_dir_for_page(&mut self, kind: PageKind) {
        self.out_path.dir = Self::default_dir_for(kind);
    }

    pub fn join_dir_and_filename<P: AsRef<Path>, F: AsRef<Path>>(dir: P, file: F) -> PathBuf {
        dir.as_ref().join(file.as_ref())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // may carry an explicit extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: ExportOptions::default_dir_for(PageKind::Results),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
