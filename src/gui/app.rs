// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
    thread::JoinHandle,
    time::Duration,
};

use eframe::egui;

use crate::{
    config::{consts::MANUAL_BADGE_LIMIT, state::AppState},
    core::net::{Fetch, HttpClient},
    enrich::EnrichedTable,
    specs::{
        badges::Badge,
        leetcode::{StatsOutcome, Submission},
    },
    store::StudentTable,
};

use super::{pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let fetch: Arc<dyn Fetch> = Arc::new(HttpClient::new()?);
    eframe::run_native(
        "Student Performance Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default(), fetch)))),
    )?;
    Ok(())
}

/// Results shown for the currently selected student. Cleared whenever the
/// roll query resolves to a different student.
#[derive(Default)]
pub struct StudentView {
    pub roll: String,
    pub stats: Option<StatsOutcome>,
    pub timeline: Option<Result<Vec<Submission>, String>>,
    /// `Some(None)` = fetched, nothing recognised.
    pub badges: Option<Option<Vec<Badge>>>,
    pub badge_user: String,
    pub manual: Vec<(String, u32)>,
    pub manual_saved: Option<Vec<Badge>>,
}

impl StudentView {
    pub fn for_roll(roll: &str) -> Self {
        Self { roll: s!(roll), ..Self::default() }
    }

    pub fn set_manual_count(&mut self, n: usize) {
        self.manual.resize(n.min(MANUAL_BADGE_LIMIT), (s!(), 0));
    }
}

/// Background bulk pass. The worker fills `result`; the UI thread polls it.
#[derive(Default)]
pub struct BulkJob {
    pub running: bool,
    pub fraction: Arc<Mutex<f32>>,
    pub result: Arc<Mutex<Option<EnrichedTable>>>,
    pub finished: Option<EnrichedTable>,
    pub written: Vec<PathBuf>,
    pub worker: Option<JoinHandle<()>>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub fetch: Arc<dyn Fetch>,

    // upload bar
    pub path_text: String,
    pub table: Option<Arc<StudentTable>>,

    // output dir text field UX (we map this <-> ExportOptions)
    pub out_dir_text: String,
    pub out_dir_dirty: bool,

    pub roll_query: String,
    pub student: StudentView,
    pub bulk: BulkJob,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState, fetch: Arc<dyn Fetch>) -> Self {
        let out_dir_text = state.options.export.out_dir().to_string_lossy().into_owned();
        logf!("Init: default page={}", router::all_pages()[state.gui.current_page_index].label());
        Self {
            state,
            fetch,
            path_text: s!(),
            table: None,
            out_dir_text,
            out_dir_dirty: false,
            roll_query: s!(),
            student: StudentView::default(),
            bulk: BulkJob::default(),
            status: Arc::new(Mutex::new(s!("Upload a CSV or XLSX file to begin"))),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Apply a dirty output-dir text field to the export options.
    pub fn sync_out_dir(&mut self) {
        if self.out_dir_dirty {
            self.state.options.export.set_out_dir(&self.out_dir_text);
            self.out_dir_text = self.state.options.export.out_dir().to_string_lossy().into_owned();
            self.out_dir_dirty = false;
            logf!("UI: Output dir → {}", self.out_dir_text);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::actions::bulk::poll(self);
        if self.bulk.running {
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        egui::SidePanel::left("nav")
            .resizable(false)
            .show(ctx, |ui| {
                super::components::nav::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::upload_bar::draw(ui, self);

            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .show(ui, |ui| {
                    let page = self.current_page();
                    page.draw(ui, self);
                });
        });
    }
}
