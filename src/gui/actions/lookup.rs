// src/gui/actions/lookup.rs
//
// Single-student lookups. These run on the UI thread like any other button
// action; each is bounded by its timeout.

use crate::{
    enrich,
    gui::app::{App, StudentView},
    specs::{badges, leetcode},
};

use super::current_student;

/// Reset per-student results when the roll query lands on someone new.
pub fn select_student(app: &mut App) {
    let roll = current_student(app).map(|s| s.roll).unwrap_or_default();
    if roll != app.student.roll {
        logd!("UI: Student → {roll:?}");
        app.student = StudentView::for_roll(&roll);
    }
}

pub fn fetch_stats(app: &mut App) {
    let Some(student) = current_student(app) else { return };
    let Some(url) = student.leetcode_url.as_deref().filter(|u| leetcode::is_profile_url(u)) else {
        app.status("No valid LeetCode URL found for this student.");
        return;
    };

    let opts = &app.state.options.lookup;
    logf!("Lookup: LeetCode stats for {}", student.roll);
    let outcome = leetcode::fetch_stats(&*app.fetch, &opts.endpoints, url, opts.stats_timeout);
    let timeline = leetcode::fetch_recent_submissions(&*app.fetch, &opts.endpoints, url, opts.graphql_timeout)
        .map_err(|e| e.to_string());

    let msg = match &outcome {
        leetcode::StatsOutcome::Fetched(_) => s!("LeetCode stats fetched"),
        leetcode::StatsOutcome::Failed(code) => format!("LeetCode stats unavailable (HTTP {code})"),
        leetcode::StatsOutcome::Error(e) => format!("Failed to fetch LeetCode stats: {e}"),
    };
    app.status(msg);
    app.student.stats = Some(outcome);
    app.student.timeline = Some(timeline);
}

pub fn fetch_badges(app: &mut App) {
    let Some(student) = current_student(app) else { return };
    let Some(username) = student.hackerrank_url.as_deref().and_then(enrich::hackerrank_username) else {
        app.status("No valid HackerRank URL found for this student.");
        return;
    };

    logf!("Lookup: badges for {} ({username})", student.roll);
    let found = badges::fetch_badges(&*app.fetch, &app.state.options.lookup, &username);
    match &found {
        Some(list) => app.status(format!("Successfully extracted {} badges!", list.len())),
        None => app.status("Could not extract badge information. Manual entry is available."),
    }
    app.student.badges = Some(found);
    app.student.badge_user = username;
    app.student.manual.clear();
    app.student.manual_saved = None;
}
