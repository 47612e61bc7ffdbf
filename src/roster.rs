// src/roster.rs
//
// The roster of expected competitors, and its reconciliation against
// imported results. Loaded from a CSV export of the participant list:
//   id,first_name,last_name,category,sexe

use std::{error::Error, fs, path::Path};

use crate::core::sanitize::normalize_name_key;
use crate::csv;
use crate::specs::results::ResultRow;
use crate::store::DataSet;

pub const MISSING_HEADERS: [&str; 4] = ["Prénom", "Nom", "Catégorie", "Sexe"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub category: String,
    pub sexe: String,
}

/// Load a roster CSV. A first row starting with `id` is treated as a
/// header and dropped; rows too short to carry both names are skipped.
pub fn load(path: &Path) -> Result<Vec<Member>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_file(&text))
}

pub fn parse_file(text: &str) -> Vec<Member> {
    let mut rows = csv::parse_rows(text, ',');
    if rows
        .first()
        .and_then(|r| r.first())
        .map(|c| c.eq_ignore_ascii_case("id"))
        .unwrap_or(false)
    {
        rows.remove(0);
    }

    let mut out = Vec::with_capacity(rows.len());
    for mut r in rows {
        if r.len() < 3 {
            continue;
        }
        // pad the optional tail columns
        while r.len() < 5 {
            r.push(s!());
        }
        let mut it = r.into_iter();
        out.push(Member {
            id: it.next().unwrap_or_default(),
            first_name: it.next().unwrap_or_default(),
            last_name: it.next().unwrap_or_default(),
            category: it.next().unwrap_or_default(),
            sexe: it.next().unwrap_or_default(),
        });
    }
    out
}

/// Roster members with no matching result row, in roster order.
///
/// Matching is order-sensitive (given name against `prenom`, surname
/// against `nom`, never crossed) and insensitive to case and accents.
/// A member with no usable name at all is always reported missing.
pub fn missing_competitors(roster: &[Member], results: &[ResultRow]) -> Vec<Member> {
    let keys: Vec<(String, String)> = results
        .iter()
        .map(|r| (normalize_name_key(&r.prenom), normalize_name_key(&r.nom)))
        .collect();

    roster
        .iter()
        .filter(|m| {
            if m.first_name.is_empty() && m.last_name.is_empty() {
                return true;
            }
            let first = normalize_name_key(&m.first_name);
            let last = normalize_name_key(&m.last_name);
            !keys.iter().any(|(rf, rl)| *rf == first && *rl == last)
        })
        .cloned()
        .collect()
}

/// "jean" + "DUPONT" → "Jean DUPONT" (full) or "Jean D." (short).
/// Either name may be empty; the other is returned as-is.
pub fn format_name(first_name: &str, last_name: &str, force_full: bool) -> String {
    if first_name.is_empty() {
        return s!(last_name);
    }
    if last_name.is_empty() {
        return s!(first_name);
    }

    let mut chars = first_name.chars();
    let mut first: String = chars.next().map(|c| c.to_uppercase().collect()).unwrap_or_default();
    first.push_str(&chars.as_str().to_lowercase());

    if force_full {
        return format!("{} {}", first, last_name.to_uppercase());
    }
    let initial: String = last_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();
    format!("{} {}.", first, initial)
}

/// Shape the missing list into the store/table representation.
pub fn missing_dataset(missing: &[Member]) -> DataSet {
    DataSet {
        headers: Some(MISSING_HEADERS.iter().map(|h| s!(*h)).collect()),
        rows: missing
            .iter()
            .map(|m| {
                vec![
                    m.first_name.clone(),
                    m.last_name.clone(),
                    m.category.clone(),
                    m.sexe.clone(),
                ]
            })
            .collect(),
    }
}
