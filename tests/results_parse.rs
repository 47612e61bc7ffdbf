// tests/results_parse.rs
//
// Parser tests against hand-built result pages. Markup shapes mirror the
// mycompet pages: thead with grouped header rows, identity cells carrying
// the club name inline, one table per category.

use ffme_import::specs::results::{extract_results, split_identity};

const CLUB: &str = "JONAGE CLUB";

fn table(headers: &[&str], rows: &[&[&str]]) -> String {
    let mut h = String::from("<table class=\"results\"><thead><tr>");
    for c in headers {
        h.push_str(&format!("<th>{}</th>", c));
    }
    h.push_str("</tr></thead><tbody>");
    for r in rows {
        h.push_str("<tr>");
        for c in *r {
            h.push_str(&format!("<td>{}</td>", c));
        }
        h.push_str("</tr>");
    }
    h.push_str("</tbody></table>");
    h
}

fn page(tables: &[String]) -> String {
    format!(
        "<html><body><div class=\"wrap\">{}</div></body></html>",
        tables.join("\n")
    )
}

#[test]
fn one_table_filters_to_club_rows() {
    // Scenario A
    let doc = page(&[table(
        &["Rang", "Identité"],
        &[
            &["1", "DUPONT Jean JONAGE CLUB"],
            &["2", "MARTIN Eve OTHER CLUB"],
        ],
    )]);

    let rows = extract_results(&doc, CLUB);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].rang, "1");
    assert_eq!(rows[0].nom, "DUPONT");
    assert_eq!(rows[0].prenom, "Jean");
    assert_eq!(rows[0].nb_competitor, 2);
}

#[test]
fn duplicate_rows_collapse_to_one() {
    // Scenario B
    let doc = page(&[table(
        &["Rang", "Identité"],
        &[
            &["1", "DUPONT Jean JONAGE CLUB"],
            &["1", "DUPONT Jean JONAGE CLUB"],
        ],
    )]);

    let rows = extract_results(&doc, CLUB);
    assert_eq!(rows.len(), 1);
    // nb_competitor still counts both body rows
    assert_eq!(rows[0].nb_competitor, 2);
}

#[test]
fn missing_tbody_contributes_nothing() {
    // Scenario E
    let doc = "<table><thead><tr><th>Rang</th><th>Identité</th></tr></thead></table>";
    assert!(extract_results(doc, CLUB).is_empty());
}

#[test]
fn missing_thead_contributes_nothing() {
    let doc = "<table><tbody><tr><td>1</td><td>DUPONT Jean JONAGE CLUB</td></tr></tbody></table>";
    assert!(extract_results(doc, CLUB).is_empty());
}

#[test]
fn only_last_header_row_is_inspected() {
    // A grouped header row names the columns, the leaf row doesn't:
    // the table must contribute nothing.
    let doc = "<table><thead>\
        <tr><th>Rang</th><th>Identité</th></tr>\
        <tr><th>Bloc 1</th><th>Bloc 2</th></tr>\
        </thead><tbody>\
        <tr><td>1</td><td>DUPONT Jean JONAGE CLUB</td></tr>\
        </tbody></table>";
    assert!(extract_results(doc, CLUB).is_empty());
}

#[test]
fn grouped_headers_with_leaf_labels_in_last_row() {
    let doc = "<table><thead>\
        <tr><th colspan=\"2\">Qualification</th></tr>\
        <tr><th>Rang</th><th>Identité</th></tr>\
        </thead><tbody>\
        <tr><td>4</td><td>DUPONT Jean JONAGE CLUB</td></tr>\
        </tbody></table>";
    let rows = extract_results(doc, CLUB);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].rang, "4");
}

#[test]
fn header_labels_decode_before_matching() {
    // Tags inside th cells, uppercase label, plain-ascii identite spelling.
    let doc = "<table><thead><tr>\
        <th><span>RANG</span></th><th>IDENTITE</th>\
        </tr></thead><tbody>\
        <tr><td>1</td><td>DUPONT Jean JONAGE CLUB</td></tr>\
        </tbody></table>";
    assert_eq!(extract_results(doc, CLUB).len(), 1);
}

#[test]
fn club_filter_is_case_insensitive_and_strict() {
    let doc = page(&[table(
        &["Rang", "Identité"],
        &[
            &["1", "DUPONT Jean Jonage Club"],
            &["2", "MARTIN Eve SOME OTHER TEAM"],
        ],
    )]);
    let rows = extract_results(&doc, CLUB);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].nom, "DUPONT");
}

#[test]
fn club_name_is_removed_wherever_it_appears() {
    let doc = page(&[table(
        &["Rang", "Identité"],
        &[&["1", "DUPONT JONAGE CLUB Jean"]],
    )]);
    let rows = extract_results(&doc, CLUB);
    assert_eq!(rows[0].nom, "DUPONT");
    assert_eq!(rows[0].prenom, "Jean");
}

#[test]
fn rank_text_is_kept_verbatim() {
    let doc = page(&[table(
        &["Rang", "Identité"],
        &[&["DNF", "DUPONT Jean JONAGE CLUB"]],
    )]);
    assert_eq!(extract_results(&doc, CLUB)[0].rang, "DNF");
}

#[test]
fn cells_decode_entities_and_tags() {
    let doc = page(&[table(
        &["Rang", "Identité"],
        &[&["1", "<b>D&#39;ARTAGNAN</b>&nbsp;Jean&nbsp;JONAGE&nbsp;CLUB"]],
    )]);
    let rows = extract_results(&doc, CLUB);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].nom, "D'ARTAGNAN");
    assert_eq!(rows[0].prenom, "Jean");
}

#[test]
fn short_rows_are_skipped() {
    let doc = page(&[table(
        &["Rang", "Pts", "Identité"],
        &[
            &["1", "100", "DUPONT Jean JONAGE CLUB"],
            &["2"], // ends before the identity column
        ],
    )]);
    let rows = extract_results(&doc, CLUB);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].nb_competitor, 2);
}

#[test]
fn column_positions_follow_the_header() {
    // Identity before rank; extra columns around them.
    let doc = page(&[table(
        &["Place", "Identité", "Points", "Rang"],
        &[&["x", "DUPONT Jean JONAGE CLUB", "55", "3"]],
    )]);
    let rows = extract_results(&doc, CLUB);
    assert_eq!(rows[0].rang, "3");
    assert_eq!(rows[0].nom, "DUPONT");
}

#[test]
fn each_table_counts_its_own_competitors() {
    let doc = page(&[
        table(
            &["Rang", "Identité"],
            &[
                &["1", "DUPONT Jean JONAGE CLUB"],
                &["2", "A B"],
                &["3", "C D"],
            ],
        ),
        table(
            &["Rang", "Identité"],
            &[&["1", "MARTIN Eve JONAGE CLUB"]],
        ),
    ]);

    let rows = extract_results(&doc, CLUB);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].nb_competitor, 3);
    assert_eq!(rows[1].nb_competitor, 1);
    // document order preserved
    assert_eq!(rows[0].nom, "DUPONT");
    assert_eq!(rows[1].nom, "MARTIN");
}

#[test]
fn first_occurrence_wins_across_tables() {
    let doc = page(&[
        table(
            &["Rang", "Identité"],
            &[&["5", "DUPONT Jean JONAGE CLUB"], &["6", "X Y"]],
        ),
        table(
            &["Rang", "Identité"],
            &[&["1", "DUPONT Jean JONAGE CLUB"]],
        ),
    ]);
    let rows = extract_results(&doc, CLUB);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].rang, "5");
    assert_eq!(rows[0].nb_competitor, 2);
}

#[test]
fn extraction_is_deterministic() {
    let doc = page(&[table(
        &["Rang", "Identité"],
        &[
            &["1", "DUPONT Jean JONAGE CLUB"],
            &["2", "MARTIN Eve JONAGE CLUB"],
            &["2", "MARTIN Eve JONAGE CLUB"],
        ],
    )]);
    let once = extract_results(&doc, CLUB);
    let twice = extract_results(&doc, CLUB);
    assert_eq!(once, twice);
    assert_eq!(once.len(), 2);
}

#[test]
fn garbage_input_yields_nothing() {
    assert!(extract_results("", CLUB).is_empty());
    assert!(extract_results("not html at all", CLUB).is_empty());
    assert!(extract_results("<table><thead><tr>", CLUB).is_empty());
}

/* ---------------- identity splitting ---------------- */

#[test]
fn split_caps_surname_from_mixed_given_name() {
    assert_eq!(
        split_identity("DUPONT Martin"),
        (s("DUPONT"), s("Martin"))
    );
    assert_eq!(
        split_identity("MARTIN DUPONT Jean Pierre"),
        (s("MARTIN DUPONT"), s("Jean Pierre"))
    );
}

#[test]
fn split_keeps_accented_caps_in_surname() {
    assert_eq!(split_identity("MÜLLER Anna"), (s("MÜLLER"), s("Anna")));
}

#[test]
fn split_sends_caseless_tokens_to_given_name() {
    // digits and punctuation have no case: uppercase == lowercase
    assert_eq!(split_identity("DUPONT Jean 2"), (s("DUPONT"), s("Jean 2")));
    assert_eq!(split_identity("123"), (s(""), s("123")));
}

#[test]
fn split_of_empty_text_is_empty() {
    assert_eq!(split_identity(""), (s(""), s("")));
    assert_eq!(split_identity("   "), (s(""), s("")));
}

fn s(v: &str) -> String { v.to_string() }
