// src/gui/pages/student.rs
use eframe::egui::{self, RichText};

use crate::{
    config::{
        consts::{MANUAL_BADGE_LIMIT, MAX_STARS},
        state::{NavMode, StudentTab},
    },
    gui::{actions, app::App, components::metric},
    report,
    specs::{
        badges::{self, Badge},
        leetcode::{SolvedStats, StatsOutcome},
    },
    store::StudentRecord,
};

use super::Page;

pub struct StudentPage;
pub static PAGE: StudentPage = StudentPage;

impl Page for StudentPage {
    fn label(&self) -> &'static str { "Individual Student Report" }
    fn mode(&self) -> NavMode { NavMode::IndividualStudent }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Individual Student Analysis");

        if app.table.is_none() {
            ui.label("Upload a CSV or XLSX file to begin.");
            return;
        }

        ui.horizontal(|ui| {
            ui.label("Roll number:");
            if ui
                .add(egui::TextEdit::singleline(&mut app.roll_query).desired_width(180.0))
                .changed()
            {
                actions::select_student(app);
            }
        });

        if app.roll_query.trim().is_empty() {
            return;
        }
        let Some(student) = actions::current_student(app) else {
            ui.colored_label(
                ui.visuals().warn_fg_color,
                format!("Student with roll number {} not found.", app.roll_query.trim()),
            );
            return;
        };

        metric::metric_row(
            ui,
            &[
                ("Roll Number", student.roll.clone()),
                ("CGPA", metric::fmt_opt(student.cgpa, 2)),
                ("Total Backlogs", student.backlogs.map(|b| b.to_string()).unwrap_or_else(|| s!("N/A"))),
            ],
        );
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let tab = &mut app.state.gui.student_tab;
            ui.selectable_value(tab, StudentTab::LeetCode, "LeetCode");
            ui.selectable_value(tab, StudentTab::HackerRank, "HackerRank");
            ui.selectable_value(tab, StudentTab::Summary, "Summary");
        });
        ui.separator();

        match app.state.gui.student_tab {
            StudentTab::LeetCode => leetcode_tab(ui, app, &student),
            StudentTab::HackerRank => hackerrank_tab(ui, app, &student),
            StudentTab::Summary => summary_tab(ui, &student),
        }
    }
}

/* ---------------- LeetCode ---------------- */

fn leetcode_tab(ui: &mut egui::Ui, app: &mut App, student: &StudentRecord) {
    let Some(url) = student.leetcode_url.clone() else {
        ui.label("No LeetCode profile link for this student.");
        return;
    };
    ui.horizontal(|ui| {
        ui.hyperlink_to("LeetCode profile", &url);
        if ui.button("Fetch LeetCode stats").clicked() {
            actions::fetch_stats(app);
        }
    });

    match &app.student.stats {
        None => {}
        Some(StatsOutcome::Fetched(stats)) => stats_metrics(ui, stats),
        Some(StatsOutcome::Failed(code)) => {
            ui.label(format!("Stats service answered HTTP {code}."));
        }
        Some(StatsOutcome::Error(e)) => {
            ui.colored_label(ui.visuals().error_fg_color, format!("Failed to fetch LeetCode stats: {e}"));
        }
    }

    let Some(timeline) = &app.student.timeline else { return };
    ui.add_space(8.0);
    ui.label(RichText::new("Recent submissions").strong());
    match timeline {
        Err(e) => {
            ui.label(format!("Timeline unavailable: {e}"));
        }
        Ok(subs) if subs.is_empty() => {
            ui.label("No recent submissions (the profile may be private).");
        }
        Ok(subs) => {
            egui::Grid::new("timeline_grid").striped(true).num_columns(4).show(ui, |ui| {
                for h in ["Problem", "Status", "Language", "Date"] {
                    ui.label(RichText::new(h).strong());
                }
                ui.end_row();
                for sub in subs {
                    ui.label(&sub.title);
                    ui.label(&sub.status);
                    ui.label(&sub.lang);
                    ui.monospace(&sub.date);
                    ui.end_row();
                }
            });
        }
    }
}

fn stats_metrics(ui: &mut egui::Ui, stats: &SolvedStats) {
    metric::metric_row(
        ui,
        &[
            ("Total Solved", stats.total_solved.to_string()),
            ("Easy", stats.easy_solved.to_string()),
            ("Medium", stats.medium_solved.to_string()),
            ("Hard", stats.hard_solved.to_string()),
            ("Acceptance", stats.acceptance_rate.map(|a| format!("{a:.1}%")).unwrap_or_else(|| s!("N/A"))),
            ("Ranking", stats.ranking.map(|r| r.to_string()).unwrap_or_else(|| s!("N/A"))),
        ],
    );
}

/* ---------------- HackerRank ---------------- */

fn hackerrank_tab(ui: &mut egui::Ui, app: &mut App, student: &StudentRecord) {
    let Some(url) = student.hackerrank_url.clone() else {
        ui.label("No HackerRank profile link for this student.");
        return;
    };
    ui.horizontal(|ui| {
        ui.hyperlink_to("HackerRank profile", &url);
        if ui.button("Extract badges").clicked() {
            actions::fetch_badges(app);
        }
        ui.small(format!("source: {}", app.state.options.lookup.badge_source.label()));
    });

    let found: Option<Vec<Badge>> = match &app.student.badges {
        None => return,
        Some(found) => found.clone(),
    };
    let shown = match found {
        Some(list) => Some(list),
        None => {
            ui.label("Could not extract badges automatically. Enter them manually:");
            manual_entry(ui, app);
            app.student.manual_saved.clone()
        }
    };

    if let Some(list) = shown {
        badge_report(ui, app, &list);
    }
}

fn manual_entry(ui: &mut egui::Ui, app: &mut App) {
    let view = &mut app.student;
    let mut n = view.manual.len();
    ui.horizontal(|ui| {
        ui.label("Number of badges:");
        ui.add(egui::DragValue::new(&mut n).range(0..=MANUAL_BADGE_LIMIT));
    });
    if n != view.manual.len() {
        view.set_manual_count(n);
    }

    egui::Grid::new("manual_badges").num_columns(2).show(ui, |ui| {
        for (i, (name, stars)) in view.manual.iter_mut().enumerate() {
            ui.add(egui::TextEdit::singleline(name).hint_text(format!("Badge {} name", i + 1)));
            ui.add(egui::DragValue::new(stars).range(0..=MAX_STARS).suffix(" ★"));
            ui.end_row();
        }
    });

    if ui.button("Save manual badges").clicked() {
        let saved = badges::manual_badges(&view.manual);
        logf!("UI: Manual badges saved count={}", saved.len());
        view.manual_saved = Some(saved);
    }
}

fn badge_report(ui: &mut egui::Ui, app: &mut App, list: &[Badge]) {
    if list.is_empty() {
        ui.label("No badges.");
        return;
    }
    let summary = badges::summarize(list);

    egui::Grid::new("badge_grid").striped(true).num_columns(2).show(ui, |ui| {
        ui.label(RichText::new("Badge").strong());
        ui.label(RichText::new("Stars").strong());
        ui.end_row();
        for b in list {
            ui.label(&b.name);
            ui.label(stars_text(b.stars));
            ui.end_row();
        }
    });

    metric::metric_row(
        ui,
        &[
            ("Total Badges", summary.total_badges.to_string()),
            ("Total Stars", summary.total_stars.to_string()),
            ("Average Stars", format!("{:.1}", summary.average_stars)),
        ],
    );

    for (stars, names) in &summary.by_stars {
        ui.label(format!("{} ({}): {}", stars_text(*stars), names.len(), names.join(", ")));
    }
    if summary.any_estimated {
        ui.small("Some star counts were estimated from the badge layout.");
    }

    if ui.button("Save badges as JSON").clicked() {
        actions::export_badges_json(app, list);
    }
}

fn stars_text(stars: u32) -> String {
    if stars == 0 { s!("-") } else { "★".repeat(stars.min(MAX_STARS) as usize) }
}

/* ---------------- Summary ---------------- */

fn summary_tab(ui: &mut egui::Ui, student: &StudentRecord) {
    let perf = report::performance_summary(student);
    let yes_no = |b: bool| if b { "Yes" } else { "No" };

    egui::Grid::new("performance_grid").num_columns(2).show(ui, |ui| {
        ui.label("Academic standing");
        ui.label(RichText::new(perf.band.label()).strong());
        ui.end_row();
        ui.label("Backlogs");
        ui.label(&perf.backlog_text);
        ui.end_row();
        ui.label("LeetCode profile");
        ui.label(yes_no(perf.has_leetcode));
        ui.end_row();
        ui.label("HackerRank profile");
        ui.label(yes_no(perf.has_hackerrank));
        ui.end_row();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_text_is_bounded() {
        assert_eq!(stars_text(0), "-");
        assert_eq!(stars_text(3), "★★★");
        assert_eq!(stars_text(u32::MAX).chars().count(), MAX_STARS as usize);
    }
}
