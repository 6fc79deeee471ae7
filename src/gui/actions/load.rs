// src/gui/actions/load.rs
use std::path::Path;

use crate::{gui::app::{App, StudentView}, report, store};

pub fn load_file(app: &mut App) {
    let text = app.path_text.trim().to_string();
    if text.is_empty() {
        app.status("Enter the path of a CSV or XLSX file");
        return;
    }
    let path = Path::new(&text);

    match store::load_students(path) {
        Ok(table) => {
            let stats = report::upload_stats(&table);
            logf!(
                "Load: OK {} students={} mapped={}",
                path.display(),
                stats.total_students,
                table.suggestions.len()
            );
            if let Some(dir) = path.parent() {
                app.state.gui.last_browse_dir = dir.to_string_lossy().into_owned();
            }
            app.status(format!("Successfully loaded {} students", stats.total_students));
            app.table = Some(table);
            app.student = StudentView::default();
            app.bulk.finished = None;
            app.bulk.written.clear();
        }
        Err(e) => {
            loge!("Load: Error {}: {}", path.display(), e);
            app.status(format!("Error: {e}"));
            app.table = None;
        }
    }
}
