// src/runner.rs
//
// One import run, shared by CLI and GUI: resolve the page text, extract
// the competition title and the club's results, reconcile the roster.
// Pure orchestration; every stage below it is side-effect free.

use std::{error::Error, fs};

use crate::{
    config::options::{ImportOptions, PageSource},
    core::net,
    progress::Progress,
    roster::{self, Member},
    specs::{competition, results::{self, ResultRow}},
};

/// Everything one run produced. `roster_count` lets frontends tell
/// "no roster supplied" apart from "roster fully matched".
pub struct ImportOutcome {
    pub title: Option<String>,
    pub results: Vec<ResultRow>,
    pub missing: Vec<Member>,
    pub roster_count: usize,
}

pub fn import(
    opts: &ImportOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ImportOutcome, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(2);
        p.log("Fetching results page…");
    }

    let doc = match &opts.source {
        PageSource::Url(url) => net::fetch_page(url, opts.relay.as_deref())?,
        PageSource::File(path) => fs::read_to_string(path)?,
    };
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("page");
    }

    let title = competition::extract_title(&doc);
    let parsed = results::extract_results(&doc, &opts.club);
    logf!(
        "Import: club=\"{}\" title={:?} results={}",
        opts.club,
        title,
        parsed.len()
    );

    let members = match &opts.roster_path {
        Some(path) => roster::load(path)?,
        None => Vec::new(),
    };
    let missing = roster::missing_competitors(&members, &parsed);
    if !members.is_empty() {
        logf!("Import: roster={} missing={}", members.len(), missing.len());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.step_done("parse");
        p.finish();
    }

    Ok(ImportOutcome {
        title,
        results: parsed,
        missing,
        roster_count: members.len(),
    })
}
