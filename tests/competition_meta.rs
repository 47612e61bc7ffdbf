// tests/competition_meta.rs
//
// Competition page metadata and the text helpers behind name matching.

use ffme_import::core::sanitize::{contains_ci, normalize_name_key, remove_ci};
use ffme_import::specs::competition::{extract_title, parse_result_id, result_url};

#[test]
fn result_url_roundtrips_with_id_parsing() {
    let url = result_url(13156);
    assert_eq!(url, "https://mycompet.ffme.fr/resultat/resultat_13156");
    assert_eq!(parse_result_id(&url), Some(13156));
    assert_eq!(parse_result_id("https://example.org/nope"), None);
}

#[test]
fn title_found_inside_wrapper_divs() {
    let doc = "<html><body>\
        <div class=\"page\"><div class=\"header\">menu</div>\
        <div class=\"title\">Open de Bloc de Lyon</div>\
        </div></body></html>";
    assert_eq!(extract_title(doc).as_deref(), Some("Open de Bloc de Lyon"));
}

#[test]
fn title_absent_yields_none() {
    assert_eq!(extract_title("<div class=\"subtitle\">x</div>"), None);
    assert_eq!(extract_title(""), None);
}

#[test]
fn title_text_is_decoded_and_trimmed() {
    let doc = "<div class='title'>  Coupe&nbsp;R&#39;gionale <small>2025</small> </div>";
    assert_eq!(extract_title(doc).as_deref(), Some("Coupe R'gionale 2025"));
}

/* ---------------- matching helpers ---------------- */

#[test]
fn name_keys_drop_case_and_accents() {
    assert_eq!(normalize_name_key("Éléa"), "elea");
    assert_eq!(normalize_name_key("  DUPONT "), "dupont");
    // already-decomposed input: combining marks are dropped too
    assert_eq!(normalize_name_key("E\u{0301}le\u{0301}a"), "elea");
}

#[test]
fn ci_contains_and_removal_are_accent_aware() {
    assert!(contains_ci("DUPONT Jean Jonage Club", "JONAGE CLUB"));
    assert!(!contains_ci("DUPONT Jean", "JONAGE CLUB"));
    assert!(contains_ci("MONTÉE D'ESSAI", "montée"));

    assert_eq!(remove_ci("DUPONT Jean JONAGE CLUB", "jonage club"), "DUPONT Jean ");
    // every occurrence goes, not just the first
    assert_eq!(remove_ci("ab AB ab", "ab"), "  ");
    // empty needle removes nothing
    assert_eq!(remove_ci("abc", ""), "abc");
}
