// src/gui/components/data_table.rs
//
// Read-only preview grid. Shows the first `limit` rows; cells are clipped
// and never wrap.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

pub fn draw(
    ui: &mut egui::Ui,
    id_salt: &str,
    headers: &[String],
    rows: &[Vec<String>],
    limit: usize,
) {
    if headers.is_empty() {
        ui.label("No columns");
        return;
    }

    // Reserve space for the scroll bar instead of overlaying content.
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let shown = rows.len().min(limit);
    let numeric_cols: Vec<bool> = (0..headers.len())
        .map(|ci| {
            let mut any = false;
            let all = rows[..shown].iter().all(|r| match r.get(ci).map(|c| c.trim()) {
                Some("") | None => true,
                Some(c) => {
                    any = true;
                    c.parse::<f64>().is_ok()
                }
            });
            any && all
        })
        .collect();

    egui::ScrollArea::horizontal()
        .id_salt((id_salt, "hscroll"))
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .id_salt(id_salt)
                .striped(true)
                .vscroll(false);
            for _ in headers {
                table = table.column(Column::initial(110.0).resizable(true).clip(true).at_least(30.0));
            }

            table
                .header(22.0, |mut header| {
                    for h in headers {
                        header.col(|ui| {
                            ui.label(RichText::new(h).strong());
                        });
                    }
                })
                .body(|mut body| {
                    for r in &rows[..shown] {
                        body.row(20.0, |mut row| {
                            for (ci, _) in headers.iter().enumerate() {
                                let cell = r.get(ci).map(String::as_str).unwrap_or("");
                                row.col(|ui| {
                                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                    if numeric_cols[ci] {
                                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                            ui.label(cell);
                                        });
                                    } else {
                                        ui.label(cell);
                                    }
                                });
                            }
                        });
                    }
                });
        });

    if rows.len() > shown {
        ui.small(format!("Showing first {shown} of {} rows", rows.len()));
    }
}
