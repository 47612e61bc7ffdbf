// benches/parse.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ffme_import::specs::results::{extract_results, split_identity};

const CLUB: &str = "AMICALE LAIQUE DE JONAGE";

/// Build a results page shaped like the real thing: several category
/// tables, a grouped header row, club name inline in every tenth identity.
fn synthetic_page(tables: usize, rows_per_table: usize) -> String {
    let mut doc = String::from("<html><body><div class=\"title\">Bench Open</div>");
    for t in 0..tables {
        doc.push_str("<table class=\"results\"><thead>");
        doc.push_str("<tr><th colspan=\"4\">Qualification</th></tr>");
        doc.push_str("<tr><th>Rang</th><th>Identit\u{e9}</th><th>Pts</th><th>Cat</th></tr>");
        doc.push_str("</thead><tbody>");
        for r in 0..rows_per_table {
            let club = if r % 10 == 0 { CLUB } else { "AUTRE CLUB DU COIN" };
            doc.push_str(&format!(
                "<tr><td>{}</td><td><b>NOM{}</b>&nbsp;Pr\u{e9}nom{} {}</td><td>{}</td><td>U{}</td></tr>",
                r + 1, r, r, club, 100 - r, t
            ));
        }
        doc.push_str("</tbody></table>");
    }
    doc.push_str("</body></html>");
    doc
}

fn bench_extract(c: &mut Criterion) {
    let doc = synthetic_page(8, 120);

    c.bench_function("extract_results_8x120", |b| {
        b.iter(|| {
            let rows = extract_results(black_box(&doc), black_box(CLUB));
            black_box(rows.len())
        })
    });

    let small = synthetic_page(1, 30);
    c.bench_function("extract_results_1x30", |b| {
        b.iter(|| {
            let rows = extract_results(black_box(&small), black_box(CLUB));
            black_box(rows.len())
        })
    });
}

fn bench_split(c: &mut Criterion) {
    c.bench_function("split_identity", |b| {
        b.iter(|| {
            let (n, p) = split_identity(black_box("MARTIN DUPONT Jean Pierre"));
            black_box((n.len(), p.len()))
        })
    });
}

criterion_group!(benches, bench_extract, bench_split);
criterion_main!(benches);
