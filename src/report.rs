// src/report.rs
//
// Aggregates shown after an upload, after a bulk pass, and on the
// single-student summary tab.

use std::fmt;

use crate::enrich::{EnrichedRecord, LookupStatus};
use crate::specs::leetcode;
use crate::store::{StudentRecord, StudentTable};

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/* ---------- upload ---------- */

#[derive(Clone, Debug, PartialEq)]
pub struct UploadStats {
    pub total_students: usize,
    /// Over parseable CGPA cells only.
    pub average_cgpa: Option<f64>,
    pub with_backlogs: usize,
    pub leetcode_profiles: usize,
}

pub fn upload_stats(table: &StudentTable) -> UploadStats {
    let students = &table.students;
    UploadStats {
        total_students: students.len(),
        average_cgpa: mean(students.iter().filter_map(|s| s.cgpa)),
        with_backlogs: students.iter().filter(|s| s.has_backlogs()).count(),
        leetcode_profiles: students
            .iter()
            .filter(|s| s.leetcode_url.is_some())
            .count(),
    }
}

/* ---------- bulk ---------- */

#[derive(Clone, Debug, PartialEq)]
pub struct BulkSummary {
    pub total: usize,
    pub leetcode_success: usize,
    pub badges_success: usize,
    pub average_cgpa: Option<f64>,
    pub with_backlogs: usize,
    /// Students without badge data count as zero.
    pub average_badges: f64,
    pub average_stars: f64,
    pub max_badges: usize,
}

pub fn bulk_summary(records: &[EnrichedRecord]) -> BulkSummary {
    let total = records.len();
    let badge_counts = records.iter().map(|r| r.badges.len());
    let star_counts = records.iter().map(|r| f64::from(r.total_stars()));

    BulkSummary {
        total,
        leetcode_success: records
            .iter()
            .filter(|r| r.leetcode_status == LookupStatus::Success)
            .count(),
        badges_success: records
            .iter()
            .filter(|r| r.badge_status == LookupStatus::Success)
            .count(),
        average_cgpa: mean(records.iter().filter_map(|r| r.student.cgpa)),
        with_backlogs: records.iter().filter(|r| r.student.has_backlogs()).count(),
        average_badges: mean(badge_counts.clone().map(|n| n as f64)).unwrap_or(0.0),
        average_stars: mean(star_counts).unwrap_or(0.0),
        max_badges: badge_counts.max().unwrap_or(0),
    }
}

/* ---------- single student ---------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CgpaBand {
    Excellent,
    Good,
    Average,
    BelowAverage,
    Unknown,
}

impl CgpaBand {
    pub fn from_cgpa(cgpa: Option<f64>) -> Self {
        match cgpa {
            Some(c) if c >= 9.0 => CgpaBand::Excellent,
            Some(c) if c >= 8.0 => CgpaBand::Good,
            Some(c) if c >= 7.0 => CgpaBand::Average,
            Some(_) => CgpaBand::BelowAverage,
            None => CgpaBand::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CgpaBand::Excellent => "Excellent",
            CgpaBand::Good => "Good",
            CgpaBand::Average => "Average",
            CgpaBand::BelowAverage => "Below Average",
            CgpaBand::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CgpaBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn backlog_text(backlogs: Option<u32>) -> String {
    match backlogs {
        Some(0) => s!("No Backlogs"),
        Some(n) => format!("{n} Backlog(s)"),
        None => s!("Unknown"),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PerformanceSummary {
    pub band: CgpaBand,
    pub backlog_text: String,
    pub has_leetcode: bool,
    pub has_hackerrank: bool,
}

pub fn performance_summary(student: &StudentRecord) -> PerformanceSummary {
    PerformanceSummary {
        band: CgpaBand::from_cgpa(student.cgpa),
        backlog_text: backlog_text(student.backlogs),
        has_leetcode: student
            .leetcode_url
            .as_deref()
            .is_some_and(leetcode::is_profile_url),
        has_hackerrank: student.hackerrank_url.is_some(),
    }
}
