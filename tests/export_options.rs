// tests/export_options.rs
//
// Tests for ExportOptions path/extension logic and single-file export.
//
use std::fs;
use std::path::{Path, PathBuf};

use ffme_import::config::options::{ExportFormat, ExportOptions, PageKind};
use ffme_import::file;

fn norm(p: &Path) -> PathBuf { p.components().collect() }

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ffme_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn default_path_ext_follows_format() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Csv;
    let p_csv = opts.out_path();
    assert!(p_csv.to_string_lossy().ends_with(".csv"));

    // Switch format; the default stem has no extension of its own,
    // so the extension should reflect the new format.
    opts.format = ExportFormat::Tsv;
    let p_tsv = opts.out_path();
    assert!(p_tsv.to_string_lossy().ends_with(".tsv"));
}

#[test]
fn user_extension_survives_format_changes() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Csv;
    opts.set_path("out/results/custom.data");

    opts.format = ExportFormat::Tsv;
    assert!(opts.out_path().to_string_lossy().ends_with("custom.data"));
}

#[test]
fn filename_preserved_on_dir_migration() {
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Csv;

    // Simulate the text box value before tab switch
    let prev_dir = ExportOptions::default_dir_for(PageKind::Results);
    let text_before: String = prev_dir.join("hello.csv").to_string_lossy().into_owned();

    // --- What tabs.rs does on tab switch ---
    let text_path = Path::new(&text_before);
    let dir_in_text = text_path.parent().unwrap_or(&prev_dir);

    let new_default = ExportOptions::default_dir_for(PageKind::Missing);
    let text_after = if norm(dir_in_text) == norm(&prev_dir) {
        export.set_default_dir_for_page(PageKind::Missing);
        let file_name = text_path.file_name().unwrap_or_default();
        ExportOptions::join_dir_and_filename(&new_default, file_name)
            .to_string_lossy().into_owned()
    } else {
        text_before.clone()
    };
    // --- end UI logic ---

    let expected = norm(&new_default.join("hello.csv"));
    assert_eq!(norm(Path::new(&text_after)), expected,
        "DIR should migrate and filename be preserved");
}

#[test]
fn single_file_export_writes_csv() {
    let dir = tmp_dir("csv");
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Csv;
    opts.include_headers = true;
    opts.set_path(dir.join("r.csv").to_str().unwrap());

    let headers = Some(vec!["Rang".to_string(), "Prénom".to_string(), "Nom".to_string()]);
    let rows = vec![
        vec!["1".to_string(), "Jean".to_string(), "DUPONT".to_string()],
        vec!["2".to_string(), "Eve, la".to_string(), "MARTIN".to_string()],
    ];

    let path = file::write_export_single(&opts, &headers, &rows).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Rang,Prénom,Nom\n"));
    assert!(content.contains("1,Jean,DUPONT\n"));
    // comma inside a field gets quoted
    assert!(content.contains("\"Eve, la\""));
}

#[test]
fn single_file_export_honors_headers_toggle_and_tsv() {
    let dir = tmp_dir("tsv");
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.include_headers = false;
    opts.set_path(dir.join("r").to_str().unwrap());

    let headers = Some(vec!["A".to_string(), "B".to_string()]);
    let rows = vec![vec!["1".to_string(), "2".to_string()]];

    let path = file::write_export_single(&opts, &headers, &rows).unwrap();
    assert!(path.to_string_lossy().ends_with("r.tsv"));
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "1\t2\n");
}

#[test]
fn export_creates_missing_directories() {
    let dir = tmp_dir("mkdir");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("deep/down/file.csv").to_str().unwrap());

    let rows = vec![vec!["x".to_string()]];
    let path = file::write_export_single(&opts, &None, &rows).unwrap();
    assert!(path.exists());
}
