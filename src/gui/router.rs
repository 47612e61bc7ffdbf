// src/gui/router.rs
use crate::config::options::PageKind::{self, *};

use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::results::PAGE,
    &pages::missing::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: &PageKind) -> &'static dyn Page {
    match kind {
        Results => &pages::results::PAGE,
        Missing => &pages::missing::PAGE,
    }
}
