// src/gui/components/upload_bar.rs
//
// Top of every page: the input file path, the column requirements panel,
// the output directory and, once a file is loaded, its summary and preview.

use eframe::egui::{self, RichText};

use crate::{
    columns::REQUIRED_COLUMNS,
    config::consts::PREVIEW_ROWS,
    gui::{actions, app::App},
    report,
};

use super::{data_table, metric};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Student data file:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.path_text)
                .hint_text("path/to/students.csv or .xlsx")
                .desired_width(360.0)
                .font(egui::TextStyle::Monospace),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Load").clicked() || enter {
            actions::load_file(app);
        }
        ui.toggle_value(&mut app.state.gui.show_requirements, "Column requirements");
    });

    ui.horizontal(|ui| {
        ui.label("Output folder:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_dir_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_dir_dirty = true;
            logd!("UI: out_dir_text changed (dirty=true) → {}", app.out_dir_text);
        }
        if ui.button("Save sample template").clicked() {
            actions::export_template(app);
        }
    });

    if app.state.gui.show_requirements {
        requirements(ui);
    }

    let Some(table) = app.table.clone() else { return };

    if !table.suggestions.is_empty() {
        ui.collapsing("Column mapping", |ui| {
            for s in &table.suggestions {
                ui.label(s);
            }
        });
    }

    let stats = report::upload_stats(&table);
    metric::metric_row(
        ui,
        &[
            ("Total Students", stats.total_students.to_string()),
            ("Average CGPA", metric::fmt_opt(stats.average_cgpa, 2)),
            ("With Backlogs", stats.with_backlogs.to_string()),
            ("LeetCode Profiles", stats.leetcode_profiles.to_string()),
        ],
    );

    egui::CollapsingHeader::new("Data preview")
        .id_salt("upload_preview")
        .show(ui, |ui| {
            let rows: Vec<Vec<String>> = table
                .students
                .iter()
                .take(PREVIEW_ROWS)
                .map(|s| s.row.clone())
                .collect();
            data_table::draw(ui, "upload_preview_table", &table.headers, &rows, PREVIEW_ROWS);
        });
}

fn requirements(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.label(RichText::new("Required columns").strong());
        egui::Grid::new("required_columns")
            .striped(true)
            .num_columns(4)
            .show(ui, |ui| {
                for h in ["Column", "Type", "Examples", "Notes"] {
                    ui.label(RichText::new(h).strong());
                }
                ui.end_row();
                for spec in &REQUIRED_COLUMNS {
                    ui.monospace(spec.name);
                    ui.label(spec.data_type);
                    ui.label(spec.example);
                    ui.label(spec.note);
                    ui.end_row();
                }
            });
        ui.small("Headers are matched case-insensitively; close names are mapped automatically.");
    });
}
