// src/gui/router.rs
use crate::config::state::NavMode::{self, *};
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::student::PAGE,
    &pages::bulk::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn index_for(mode: NavMode) -> usize {
    match mode {
        IndividualStudent => 0,
        BulkDownload => 1,
    }
}
