// src/gui/pages/bulk.rs
use eframe::egui;

use crate::{
    config::{
        consts::PREVIEW_ROWS,
        options::{BadgeSource, ExportFormat},
        state::NavMode,
    },
    gui::{actions, app::App, components::{data_table, metric}},
    report,
};

use super::Page;

pub struct BulkPage;
pub static PAGE: BulkPage = BulkPage;

impl Page for BulkPage {
    fn label(&self) -> &'static str { "Bulk Data Download" }
    fn mode(&self) -> NavMode { NavMode::BulkDownload }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Bulk Data Processing");

        let Some(table) = app.table.clone() else {
            ui.label("Upload a CSV or XLSX file to begin.");
            return;
        };
        ui.label(format!(
            "Fetches LeetCode stats and HackerRank badges for all {} students.",
            table.len()
        ));

        controls(ui, app);

        ui.horizontal(|ui| {
            let start = ui.add_enabled(
                !app.bulk.running,
                egui::Button::new("Generate complete data"),
            );
            if start.clicked() {
                actions::bulk::start(app);
            }
            if app.bulk.finished.is_some()
                && !app.bulk.running
                && ui.button("Save files again").clicked()
            {
                actions::export_enriched(app);
            }
        });

        if app.bulk.running {
            let f = app.bulk.fraction.lock().map(|v| *v).unwrap_or(0.0);
            ui.add(egui::ProgressBar::new(f).show_percentage().animate(true));
        }

        let Some(done) = app.bulk.finished.as_ref() else { return };

        ui.separator();
        let sum = report::bulk_summary(&done.records);
        metric::metric_row(
            ui,
            &[
                ("Total Students", sum.total.to_string()),
                ("LeetCode Success", sum.leetcode_success.to_string()),
                ("HackerRank Success", sum.badges_success.to_string()),
                ("Average CGPA", metric::fmt_opt(sum.average_cgpa, 2)),
            ],
        );
        metric::metric_row(
            ui,
            &[
                ("With Backlogs", sum.with_backlogs.to_string()),
                ("Avg Badges", format!("{:.1}", sum.average_badges)),
                ("Avg Stars", format!("{:.1}", sum.average_stars)),
                ("Max Badges", sum.max_badges.to_string()),
            ],
        );

        let rows = done.rows();
        data_table::draw(ui, "bulk_preview_table", &done.headers, &rows, PREVIEW_ROWS);

        for p in &app.bulk.written {
            ui.monospace(p.display().to_string());
        }
    }
}

fn controls(ui: &mut egui::Ui, app: &mut App) {
    let running = app.bulk.running;
    ui.add_enabled_ui(!running, |ui| {
        ui.horizontal(|ui| {
            ui.label("Badges from:");
            let src = &mut app.state.options.lookup.badge_source;
            let before = *src;
            ui.selectable_value(src, BadgeSource::Svg, BadgeSource::Svg.label());
            ui.selectable_value(src, BadgeSource::Rest, BadgeSource::Rest.label());
            if *src != before {
                logf!("UI: Badge source → {:?}", src);
            }

            ui.separator();
            ui.label("Save as:");
            let formats = &mut app.state.options.export.formats;
            for fmt in [ExportFormat::Xlsx, ExportFormat::Csv] {
                let mut on = formats.contains(&fmt);
                if ui.checkbox(&mut on, fmt.ext().to_uppercase()).changed() {
                    if on {
                        formats.push(fmt);
                    } else {
                        formats.retain(|f| *f != fmt);
                    }
                }
            }
        });

        let mut pause_ms = app.state.options.lookup.row_pause.as_millis() as u64;
        ui.horizontal(|ui| {
            ui.label("Pause between students:");
            if ui
                .add(egui::DragValue::new(&mut pause_ms).range(0..=10_000).suffix(" ms"))
                .changed()
            {
                app.state.options.lookup.row_pause = std::time::Duration::from_millis(pause_ms);
            }
        });
    });
}
