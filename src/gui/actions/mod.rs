// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Button handlers live here; components only lay out widgets.

pub mod bulk;    // src/gui/actions/bulk.rs
mod export;      // src/gui/actions/export.rs
mod load;        // src/gui/actions/load.rs
mod lookup;      // src/gui/actions/lookup.rs

pub use export::{export_badges_json, export_enriched, export_template};
pub use load::load_file;
pub use lookup::{fetch_badges, fetch_stats, select_student};

use crate::{gui::app::App, store::StudentRecord};

/// The student the roll query currently resolves to, if any.
#[inline]
pub(super) fn current_student(app: &App) -> Option<StudentRecord> {
    app.table
        .as_ref()
        .and_then(|t| t.find_roll(&app.roll_query))
        .cloned()
}
