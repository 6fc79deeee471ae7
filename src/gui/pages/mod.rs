// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::state::NavMode;
use super::app::App;

pub mod bulk;
pub mod student;

pub trait Page: Send + Sync + 'static {
    fn label(&self) -> &'static str;
    fn mode(&self) -> NavMode;

    /// Whether the page needs a loaded student table to do anything.
    fn needs_table(&self) -> bool {
        true
    }

    /// Draw the page body below the upload bar.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Called when the page becomes active.
    fn on_enter(&self, app: &mut App) {
        if self.needs_table() && app.table.is_none() {
            app.status("Upload a CSV or XLSX file to begin");
        }
    }
}
