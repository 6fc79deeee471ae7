// src/gui/components/nav.rs
//
// Left sidebar: page selection. Switching pages calls the page's `on_enter`.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Navigation");
    ui.separator();

    let cur = app.current_index();
    for (idx, page) in router::all_pages().iter().enumerate() {
        let selected = idx == cur;
        if ui.selectable_label(selected, page.label()).clicked() && !selected {
            logf!("UI: Page switch {:?} → {:?}", router::all_pages()[cur].mode(), page.mode());
            app.set_current_index(idx);
            page.on_enter(app);
        }
    }

    ui.add_space(12.0);
    ui.separator();
    ui.small("Lookups contact LeetCode and HackerRank over the network.");
}
