// src/enrich.rs
//
// Bulk pass: one tracker lookup and one badge lookup per student, in table
// order, with a flat pause between rows. Every per-row failure becomes a
// status string; the pass itself never fails.

use std::fmt;
use std::thread;

use chrono::Local;

use crate::config::consts::{FETCH_STAMP_FMT, HACKERRANK_HOST};
use crate::config::options::LookupOptions;
use crate::core::net::Fetch;
use crate::core::sanitize::last_path_segment;
use crate::progress::Progress;
use crate::specs::badges::{self, Badge};
use crate::specs::leetcode::{self, SolvedStats, StatsOutcome};
use crate::store::{StudentRecord, StudentTable};

pub const DERIVED_HEADERS: [&str; 10] = [
    "LeetCode_Total_Solved",
    "LeetCode_Easy_Solved",
    "LeetCode_Medium_Solved",
    "LeetCode_Hard_Solved",
    "LeetCode_Status",
    "HackerRank_Total_Badges",
    "HackerRank_Total_Stars",
    "HackerRank_Badge_Details",
    "HackerRank_Status",
    "Data_Fetch_Timestamp",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LookupStatus {
    Success,
    Failed,
    Error,
    NoUrl,
    NoBadgesFound,
}

impl LookupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupStatus::Success => "Success",
            LookupStatus::Failed => "Failed",
            LookupStatus::Error => "Error",
            LookupStatus::NoUrl => "No URL",
            LookupStatus::NoBadgesFound => "No Badges Found",
        }
    }
}

impl fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedRecord {
    pub student: StudentRecord,
    pub leetcode: Option<SolvedStats>,
    pub leetcode_status: LookupStatus,
    pub badges: Vec<Badge>,
    pub badge_status: LookupStatus,
    pub fetched_at: String,
}

impl EnrichedRecord {
    /// Cells for `DERIVED_HEADERS`. Counts stay blank when nothing was fetched.
    pub fn derived_cells(&self) -> Vec<String> {
        let (total, easy, medium, hard) = match &self.leetcode {
            Some(s) => (
                s.total_solved.to_string(),
                s.easy_solved.to_string(),
                s.medium_solved.to_string(),
                s.hard_solved.to_string(),
            ),
            None => (s!(), s!(), s!(), s!()),
        };
        let (n_badges, n_stars, details) = if self.badge_status == LookupStatus::Success {
            (
                self.badges.len().to_string(),
                self.total_stars().to_string(),
                badges::details_string(&self.badges),
            )
        } else {
            (s!(), s!(), s!())
        };
        vec![
            total,
            easy,
            medium,
            hard,
            s!(self.leetcode_status.as_str()),
            n_badges,
            n_stars,
            details,
            s!(self.badge_status.as_str()),
            self.fetched_at.clone(),
        ]
    }

    pub fn total_stars(&self) -> u32 {
        badges::total_stars(&self.badges)
    }

    /// Original cells followed by the derived ones.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = self.student.row.clone();
        row.extend(self.derived_cells());
        row
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedTable {
    pub headers: Vec<String>,
    pub records: Vec<EnrichedRecord>,
}

impl EnrichedTable {
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.records.iter().map(EnrichedRecord::to_row).collect()
    }
}

/// Tracker lookup for one profile URL, bulk timeout.
pub fn lookup_leetcode(
    fetch: &dyn Fetch,
    opts: &LookupOptions,
    url: Option<&str>,
) -> (Option<SolvedStats>, LookupStatus) {
    let Some(url) = url.filter(|u| leetcode::is_profile_url(u)) else {
        return (None, LookupStatus::NoUrl);
    };
    match leetcode::fetch_stats(fetch, &opts.endpoints, url, opts.bulk_stats_timeout) {
        StatsOutcome::Fetched(stats) => (Some(stats), LookupStatus::Success),
        StatsOutcome::Failed(_) => (None, LookupStatus::Failed),
        StatsOutcome::Error(_) => (None, LookupStatus::Error),
    }
}

/// Username of a badge-platform profile URL, if it is one.
pub fn hackerrank_username(url: &str) -> Option<String> {
    if !url.contains(HACKERRANK_HOST) {
        return None;
    }
    last_path_segment(url).map(|seg| s!(seg))
}

pub fn lookup_badges(
    fetch: &dyn Fetch,
    opts: &LookupOptions,
    url: Option<&str>,
) -> (Vec<Badge>, LookupStatus) {
    let Some(url) = url.filter(|u| !u.trim().is_empty() && u.contains(HACKERRANK_HOST)) else {
        return (Vec::new(), LookupStatus::NoUrl);
    };
    let Some(username) = hackerrank_username(url) else {
        return (Vec::new(), LookupStatus::Error);
    };
    match badges::fetch_badges(fetch, opts, &username) {
        Some(found) => (found, LookupStatus::Success),
        None => (Vec::new(), LookupStatus::NoBadgesFound),
    }
}

pub fn enriched_headers(original: &[String]) -> Vec<String> {
    let mut headers = original.to_vec();
    headers.extend(DERIVED_HEADERS.iter().map(|h| s!(*h)));
    headers
}

/// Enrich every student, in order. Sleeps `opts.row_pause` between rows.
pub fn enrich_all(
    table: &StudentTable,
    fetch: &dyn Fetch,
    opts: &LookupOptions,
    mut progress: Option<&mut dyn Progress>,
) -> EnrichedTable {
    let total = table.len();
    let fetched_at = Local::now().format(FETCH_STAMP_FMT).to_string();
    logf!("Enriching {total} students");

    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    let mut records = Vec::with_capacity(total);
    for (i, student) in table.students.iter().enumerate() {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Processing student {}/{}: {}", i + 1, total, student.roll));
        }

        let (stats, leetcode_status) = lookup_leetcode(fetch, opts, student.leetcode_url.as_deref());
        let (found, badge_status) = lookup_badges(fetch, opts, student.hackerrank_url.as_deref());
        logd!(
            "{}: leetcode={} badges={} ({})",
            student.roll,
            leetcode_status,
            badge_status,
            found.len()
        );

        records.push(EnrichedRecord {
            student: student.clone(),
            leetcode: stats,
            leetcode_status,
            badges: found,
            badge_status,
            fetched_at: fetched_at.clone(),
        });

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i);
        }
        if i + 1 < total && !opts.row_pause.is_zero() {
            thread::sleep(opts.row_pause);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log("Data processing completed!");
        p.finish();
    }

    EnrichedTable {
        headers: enriched_headers(&table.headers),
        records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings() {
        assert_eq!(LookupStatus::NoUrl.to_string(), "No URL");
        assert_eq!(LookupStatus::NoBadgesFound.as_str(), "No Badges Found");
    }

    #[test]
    fn badge_usernames() {
        assert_eq!(hackerrank_username("https://www.hackerrank.com/profile/alice/"), Some(s!("alice")));
        assert_eq!(hackerrank_username("https://hackerrank.com"), None);
        assert_eq!(hackerrank_username("https://github.com/alice"), None);
    }
}
