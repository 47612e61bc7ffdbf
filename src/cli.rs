// src/cli.rs
use std::{env, path::PathBuf};

use crate::{
    config::options::{AppOptions, ExportFormat, PageSource},
    csv, file,
    roster::format_name,
    runner,
    specs::{competition, results},
    roster,
};

/// One full CLI run: import, print results (or write the export file),
/// report missing competitors on stderr.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut options = AppOptions::default();
    let to_file = parse_cli(&mut options)?;

    let outcome = runner::import(&options.import, None)?;

    if let Some(title) = &outcome.title {
        eprintln!("Competition: {}", title);
    }
    if outcome.results.is_empty() {
        eprintln!("No results matched club \"{}\"", options.import.club);
    }

    let ds = results::to_dataset(&outcome.results);
    if to_file {
        let path = file::write_export_single(&options.export, &ds.headers, &ds.rows)?;
        eprintln!("Wrote {} result(s) to {}", ds.rows.len(), path.display());
    } else {
        let headers = if options.export.include_headers { ds.headers } else { None };
        print!("{}", csv::rows_to_string(&ds.rows, &headers, options.export.delim()));
    }

    if !outcome.missing.is_empty() {
        eprintln!("Competitors without a result ({}):", outcome.missing.len());
        for m in &outcome.missing {
            let cat = if m.category.is_empty() { "?" } else { &m.category };
            eprintln!("  {} ({})", format_name(&m.first_name, &m.last_name, true), cat);
        }
    }

    Ok(())
}

/// Returns true when `-o/--out` was given (write a file instead of stdout).
fn parse_cli(options: &mut AppOptions) -> Result<bool, Box<dyn std::error::Error>> {
    let mut to_file = false;
    let mut args = env::args().skip(1);

    while let Some(a) = args.next() {
        match a.as_str() {
            "--id" => {
                let id: u32 = args.next().ok_or("Missing FFME id")?.parse()?;
                options.import.source = PageSource::Url(competition::result_url(id));
            }
            "--url" => {
                let url = args.next().ok_or("Missing URL")?;
                options.import.source = PageSource::Url(url);
            }
            "--file" => {
                let p = args.next().ok_or("Missing page file")?;
                options.import.source = PageSource::File(PathBuf::from(p));
            }
            "--club" => {
                options.import.club = args.next().ok_or("Missing club name")?;
            }
            "--roster" => {
                let p = args.next().ok_or("Missing roster file")?;
                options.import.roster_path = Some(PathBuf::from(p));
            }
            "--relay" => {
                options.import.relay = Some(args.next().ok_or("Missing relay host")?);
            }
            "-o" | "--out" => {
                let p = args.next().ok_or("Missing output file")?;
                options.export.set_path(&p);
                to_file = true;
            }
            "--format" => {
                options.export.format = match args.next().as_deref() {
                    Some("csv") => ExportFormat::Csv,
                    Some("tsv") => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {:?}", other).into()),
                };
            }
            "--headers" => options.export.include_headers = true,
            "--no-headers" => options.export.include_headers = false,
            "--check-roster" => {
                // offline sanity check: load and echo the roster, no fetch
                let p = args.next().ok_or("Missing roster file")?;
                let members = roster::load(&PathBuf::from(p))?;
                for m in &members {
                    println!("{},{}", m.first_name, m.last_name);
                }
                std::process::exit(0);
            }
            "-h" | "--help" => {
                eprintln!("{}", USAGE);
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {} (see --help)", a).into()),
        }
    }
    Ok(to_file)
}

const USAGE: &str = "\
Usage: cli [SOURCE] [OPTIONS]

Source (one of):
  --id <n>          FFME competition id (builds the result URL)
  --url <url>       Full results-page URL
  --file <path>     Saved results page (HTML) on disk

Options:
  --club <name>     Club filter (default: configured club)
  --roster <csv>    Participant roster: id,first_name,last_name,category,sexe
  --relay <host>    Relay host[:port] for https targets
  -o, --out <path>  Write export file instead of stdout
  --format csv|tsv  Export format (default csv)
  --headers         Include the header row (default)
  --no-headers      Omit the header row
  --check-roster <csv>  Parse a roster file and exit";
