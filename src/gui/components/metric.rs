// src/gui/components/metric.rs
use eframe::egui::{self, RichText};

/// A labelled figure: small caption above, large value below.
pub fn metric(ui: &mut egui::Ui, label: &str, value: impl Into<String>) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.small(label);
            ui.label(RichText::new(value.into()).size(20.0).strong());
        });
    });
}

/// One row of metrics laid out side by side.
pub fn metric_row(ui: &mut egui::Ui, items: &[(&str, String)]) {
    ui.horizontal_wrapped(|ui| {
        for (label, value) in items {
            metric(ui, label, value.clone());
        }
    });
}

#[inline]
pub fn fmt_opt(v: Option<f64>, digits: usize) -> String {
    v.map(|x| format!("{x:.digits$}")).unwrap_or_else(|| s!("N/A"))
}
