// src/gui/actions/bulk.rs
//
// The bulk pass runs on one worker thread. It owns its copy of the table
// and options; the UI only sees the status line, the progress fraction and
// the finished result slot.

use std::{sync::Arc, thread};

use crate::{enrich, gui::app::App, gui::progress::GuiProgress};

pub fn start(app: &mut App) {
    if app.bulk.running {
        return;
    }
    let Some(table) = app.table.clone() else {
        app.status("Upload a file first");
        return;
    };

    let fetch = Arc::clone(&app.fetch);
    let opts = app.state.options.lookup.clone();
    let status = Arc::clone(&app.status);
    let fraction = Arc::clone(&app.bulk.fraction);
    let slot = Arc::clone(&app.bulk.result);

    app.bulk.running = true;
    app.bulk.finished = None;
    app.bulk.written.clear();
    logf!("Bulk: Begin students={}", table.len());

    app.bulk.worker = Some(thread::spawn(move || {
        let mut prog = GuiProgress::new(status, fraction);
        let enriched = enrich::enrich_all(&table, &*fetch, &opts, Some(&mut prog));
        if let Ok(mut s) = slot.lock() {
            *s = Some(enriched);
        }
    }));
}

/// Move a finished result from the worker slot into the app. Called every frame.
pub fn poll(app: &mut App) {
    if !app.bulk.running {
        return;
    }
    // the worker fills the slot before it exits, so read the flag first
    let exited = app.bulk.worker.as_ref().is_some_and(|h| h.is_finished());
    let done = app.bulk.result.lock().ok().and_then(|mut s| s.take());
    if let Some(table) = done {
        logf!("Bulk: Done rows={}", table.records.len());
        app.bulk.running = false;
        app.bulk.finished = Some(table);
        app.bulk.worker = None;
        super::export_enriched(app);
        return;
    }

    if exited {
        if let Some(handle) = app.bulk.worker.take() {
            if handle.join().is_err() {
                loge!("Bulk: worker panicked");
            }
        }
        app.bulk.running = false;
        app.status("Error: bulk pass stopped before finishing");
    }
}
