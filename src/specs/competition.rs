// src/specs/competition.rs
//
// Competition page metadata: the title block and the canonical result URL.
// Best-effort like the rest of the scraping; a page without a recognizable
// title yields None and the import carries on.

use crate::config::consts::RESULT_URL_PREFIX;
use crate::core::html::{decode_cell, to_lower};

/// Canonical results-page URL for an FFME competition id.
pub fn result_url(ffme_id: u32) -> String {
    format!("{}{}", RESULT_URL_PREFIX, ffme_id)
}

/// Recover the FFME id from a results-page URL, if it follows the
/// `…/resultat_<id>` convention.
pub fn parse_result_id(url: &str) -> Option<u32> {
    let lc = to_lower(url);
    let idx = lc.rfind("resultat_")?;
    let digits: String = url[idx + "resultat_".len()..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Competition title from the page's `<div class="title">…</div>` block.
/// Every `<div` opener is considered: the title div usually sits inside
/// wrapper divs whose own close tags would otherwise hide it from a plain
/// block scan.
pub fn extract_title(doc: &str) -> Option<String> {
    let lc = to_lower(doc);
    let mut from = 0usize;

    while let Some(rel) = lc[from..].find("<div") {
        let start = from + rel;
        let Some(open_rel) = doc[start..].find('>') else {
            return None;
        };
        let open_end = start + open_rel + 1;
        from = start + 1;

        let opener = &lc[start..open_end];
        if !(opener.contains(r#"class="title""#)
            || opener.contains(r#"class='title'"#))
        {
            continue;
        }

        let Some(close_rel) = lc[open_end..].find("</div>") else {
            continue;
        };
        let title = decode_cell(&doc[open_end..open_end + close_rel]);
        if !title.is_empty() {
            return Some(title);
        }
    }
    None
}
