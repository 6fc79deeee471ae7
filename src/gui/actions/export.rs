// src/gui/actions/export.rs
use crate::{file, gui::app::App, specs::badges::Badge};

pub fn export_enriched(app: &mut App) {
    app.sync_out_dir();
    let Some(table) = app.bulk.finished.as_ref() else {
        app.status("Nothing to export");
        return;
    };

    let stamp = file::file_stamp();
    match file::write_enriched(&app.state.options.export, table, &stamp) {
        Ok(paths) => {
            logf!("Export: OK count={}", paths.len());
            let names: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
            app.status(format!("Data processing completed! Saved: {}", names.join(", ")));
            app.bulk.written = paths;
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}

pub fn export_badges_json(app: &mut App, badges: &[Badge]) {
    app.sync_out_dir();
    let user = app.student.badge_user.clone();
    match file::write_badges_json(&app.state.options.export, &user, badges, &file::file_stamp()) {
        Ok(path) => {
            logf!("Export: badges → {}", path.display());
            app.status(format!("Saved {}", path.display()));
        }
        Err(e) => {
            loge!("Export: badges error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}

pub fn export_template(app: &mut App) {
    app.sync_out_dir();
    match file::write_template(&app.state.options.export) {
        Ok(path) => app.status(format!("Sample template saved to {}", path.display())),
        Err(e) => {
            loge!("Export: template error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}
