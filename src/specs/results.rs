// src/specs/results.rs
//! Scraping *spec* for a competition results page.
//!
//! Purpose:
//! - Parse the **remote HTML** of a mycompet result page and extract every
//!   ranked row belonging to one club.
//! - A table counts only if the *last* row of its `<thead>` carries both a
//!   `Rang` and an `Identité` column; everything else on the page (nav
//!   tables, layout tables) is skipped without comment.
//! - Identity cells embed the club name inline ("DUPONT Jean ALJ ESCALADE"),
//!   so the club string doubles as the row filter.
//!
//! Responsibilities:
//! - HTML slicing via `core::html` helpers. Pure text → data; no IO.
//! - Return deduplicated rows, document order, first occurrence wins.
//!
//! Non-Responsibilities (by design):
//! - **No networking** (`runner` owns the fetch) and **no persistence.**
//! - No validation of rank values: `DNF`, `NC`, `-` pass through verbatim.

use std::collections::HashSet;

use crate::core::html::{decode_cell, inner_after_open_tag, next_tag_block_ci, slice_between_ci};
use crate::core::sanitize::{contains_ci, normalize_ws, remove_ci};
use crate::store::DataSet;

pub const RESULT_HEADERS: [&str; 4] = ["Rang", "Prénom", "Nom", "Nb compétiteurs"];

/// One competitor's result. `nb_competitor` is the body row count of the
/// table the row came from, i.e. the field size behind "3rd of 12".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub rang: String,
    pub nom: String,
    pub prenom: String,
    pub nb_competitor: usize,
}

impl ResultRow {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.rang.clone(),
            self.prenom.clone(),
            self.nom.clone(),
            self.nb_competitor.to_string(),
        ]
    }
}

/// Extract the club's results from a full results-page document.
///
/// Never fails: malformed tables and rows degrade to fewer results, an
/// empty or non-HTML document to none at all.
pub fn extract_results(doc: &str, club: &str) -> Vec<ResultRow> {
    let mut out: Vec<ResultRow> = Vec::new();

    // Walk each <table …>…</table> block (a page can carry one table per
    // category, all sharing the club's competitors).
    let mut pos = 0usize;
    while let Some((tb_s, tb_e)) = next_tag_block_ci(doc, "<table", "</table>", pos) {
        let table = &doc[tb_s..tb_e];
        pos = tb_e;
        scan_table(table, club, &mut out);
    }

    dedup(out)
}

/// Append the qualifying rows of one table block.
fn scan_table(table: &str, club: &str, out: &mut Vec<ResultRow>) {
    let Some(thead) = slice_between_ci(table, "<thead", "</thead>") else {
        return;
    };

    // Only the LAST header row carries the leaf column labels; earlier rows
    // are grouped/spanning headers on these pages.
    let mut last_header: Option<&str> = None;
    let mut tr_pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(thead, "<tr", "</tr>", tr_pos) {
        last_header = Some(&thead[tr_s..tr_e]);
        tr_pos = tr_e;
    }
    let Some(header_row) = last_header else {
        return;
    };

    let Some((rang_ix, ident_ix)) = locate_columns(header_row) else {
        return;
    };

    let Some(tbody) = slice_between_ci(table, "<tbody", "</tbody>") else {
        return;
    };

    // Two passes over <tbody>: the total row count is attached to every
    // produced row, so it has to be known before any row is emitted.
    let mut rows: Vec<&str> = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(tbody, "<tr", "</tr>", pos) {
        rows.push(&tbody[tr_s..tr_e]);
        pos = tr_e;
    }
    let nb_competitor = rows.len();

    for tr in rows {
        let mut cells: Vec<String> = Vec::new();
        let mut td_pos = 0usize;
        while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
            cells.push(decode_cell(&inner_after_open_tag(&tr[td_s..td_e])));
            td_pos = td_e;
        }
        if cells.len() <= rang_ix.max(ident_ix) {
            continue; // short row, cannot cover both columns
        }

        let identity = &cells[ident_ix];
        if identity.is_empty() || !contains_ci(identity, club) {
            continue;
        }

        let cleaned = normalize_ws(&remove_ci(identity, club));
        let (nom, prenom) = split_identity(&cleaned);
        out.push(ResultRow {
            rang: cells[rang_ix].clone(),
            nom,
            prenom,
            nb_competitor,
        });
    }
}

/// Find the rank and identity column positions in one header row.
/// Labels are compared after full cell decoding, case-insensitively; if a
/// label repeats, the last occurrence wins.
fn locate_columns(header_row: &str) -> Option<(usize, usize)> {
    let mut rang_ix: Option<usize> = None;
    let mut ident_ix: Option<usize> = None;

    let mut ix = 0usize;
    let mut pos = 0usize;
    while let Some((th_s, th_e)) = next_tag_block_ci(header_row, "<th", "</th>", pos) {
        let label = decode_cell(&inner_after_open_tag(&header_row[th_s..th_e])).to_lowercase();
        if label == "rang" {
            rang_ix = Some(ix);
        }
        if label == "identité" || label == "identite" {
            ident_ix = Some(ix);
        }
        ix += 1;
        pos = th_e;
    }

    match (rang_ix, ident_ix) {
        (Some(r), Some(i)) => Some((r, i)),
        _ => None,
    }
}

/// Split a cleaned identity into (surname, given name).
///
/// Site convention: family names render in full caps, given names in mixed
/// case. A token is surname iff it equals its own uppercase and differs
/// from its own lowercase. Single-letter initials ("J.") therefore land in
/// the surname. Known quirk, kept for output compatibility.
pub fn split_identity(identity: &str) -> (String, String) {
    let mut nom: Vec<&str> = Vec::new();
    let mut prenom: Vec<&str> = Vec::new();

    for word in identity.split_whitespace() {
        if word.to_uppercase() == word && word.to_lowercase() != word {
            nom.push(word);
        } else {
            prenom.push(word);
        }
    }

    (nom.join(" "), prenom.join(" "))
}

/// Keep the first occurrence of each exact (nom, prenom) pair, document
/// order. Idempotent: running it over its own output is a no-op.
fn dedup(rows: Vec<ResultRow>) -> Vec<ResultRow> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut unique = Vec::with_capacity(rows.len());
    for r in rows {
        if seen.insert((r.nom.clone(), r.prenom.clone())) {
            unique.push(r);
        }
    }
    unique
}

/// Shape results into the store/table representation.
pub fn to_dataset(rows: &[ResultRow]) -> DataSet {
    DataSet {
        headers: Some(RESULT_HEADERS.iter().map(|h| s!(*h)).collect()),
        rows: rows.iter().map(ResultRow::to_row).collect(),
    }
}
