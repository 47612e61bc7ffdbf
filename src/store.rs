// src/store.rs
//
// Local cache of the last import, one CSV per page under .store/.
// Lets the operator re-open, review and export without re-fetching.

use std::{fs, io, path::PathBuf};

use crate::config::consts::{STORE_DIR, STORE_SEP};
use crate::config::options::PageKind;
use crate::csv::{parse_rows, write_row};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }
}

fn dataset_path(kind: &PageKind) -> PathBuf {
    PathBuf::from(STORE_DIR).join(join!(kind.store_stem(), ".csv"))
}

/// Persist a dataset. Header row first; both page datasets always carry
/// headers, so the load side can rely on it.
pub fn save_dataset(kind: &PageKind, ds: &DataSet) -> io::Result<PathBuf> {
    let path = dataset_path(kind);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = fs::File::create(&path)?;
    let mut out = io::BufWriter::new(file);
    if let Some(h) = &ds.headers {
        write_row(&mut out, h, STORE_SEP)?;
    }
    for r in &ds.rows {
        write_row(&mut out, r, STORE_SEP)?;
    }
    Ok(path)
}

pub fn load_dataset(kind: &PageKind) -> Result<DataSet, Box<dyn std::error::Error>> {
    let path = dataset_path(kind);
    let text = fs::read_to_string(&path)?;
    let mut rows = parse_rows(&text, STORE_SEP);
    let headers = if rows.is_empty() { None } else { Some(rows.remove(0)) };
    Ok(DataSet { headers, rows })
}
