// src/specs/leetcode.rs
//
// Problem-tracker lookups: solved counts from the public stats API and the
// recent submission list from the GraphQL endpoint.

use std::time::Duration;

use chrono::DateTime;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::config::consts::{LEETCODE_HOST, TIMELINE_LIMIT};
use crate::config::options::Endpoints;
use crate::core::net::{Fetch, FetchError};
use crate::core::sanitize::path_segments;

const PLACEHOLDER_SEGMENTS: [&str; 3] = ["profile", "account", "login"];

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolvedStats {
    pub total_solved: u32,
    pub easy_solved: u32,
    pub medium_solved: u32,
    pub hard_solved: u32,
    pub acceptance_rate: Option<f64>,
    pub ranking: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StatsOutcome {
    Fetched(SolvedStats),
    /// Endpoint answered with a non-200 status.
    Failed(u16),
    /// Transport, decode or username problem.
    Error(String),
}

/// Lookups are only attempted for non-empty URLs on the tracker host.
pub fn is_profile_url(url: &str) -> bool {
    let url = url.trim();
    !url.is_empty() && url.contains(LEETCODE_HOST)
}

/// `https://leetcode.com/alice/` → `alice`;
/// `https://leetcode.com/u/alice/` → `alice`;
/// `https://leetcode.com/profile/` → `None`.
pub fn username_from_url(url: &str) -> Option<String> {
    let segments = path_segments(url);
    if let Some(last) = segments.last() {
        if !PLACEHOLDER_SEGMENTS.contains(&last.to_ascii_lowercase().as_str()) {
            return Some(s!(*last));
        }
    }
    // Placeholder tail: look for a `u/<name>` or `profile/<name>` pair instead.
    segments
        .windows(2)
        .find(|pair| matches!(pair[0], "u" | "profile") && !PLACEHOLDER_SEGMENTS.contains(&pair[1]))
        .map(|pair| s!(pair[1]))
}

pub fn fetch_stats(
    fetch: &dyn Fetch,
    endpoints: &Endpoints,
    profile_url: &str,
    timeout: Duration,
) -> StatsOutcome {
    let Some(username) = username_from_url(profile_url) else {
        return StatsOutcome::Error(s!("Could not extract username"));
    };

    let url = endpoints.stats_url(&username);
    let resp = match fetch.get(&url, timeout) {
        Ok(r) => r,
        Err(e) => {
            logd!("stats lookup for {username} failed: {e}");
            return StatsOutcome::Error(e.to_string());
        }
    };
    if !resp.is_success() {
        logd!("stats lookup for {username}: HTTP {}", resp.status);
        return StatsOutcome::Failed(resp.status);
    }

    match serde_json::from_str::<SolvedStats>(&resp.body) {
        Ok(stats) => StatsOutcome::Fetched(stats),
        Err(e) => StatsOutcome::Error(format!("bad stats payload: {e}")),
    }
}

/* ---------- recent activity timeline ---------- */

const RECENT_SUBMISSIONS_QUERY: &str = "query recentSubmissions($username: String!) {
  recentSubmissionList(username: $username) {
    title
    titleSlug
    timestamp
    statusDisplay
    lang
  }
}";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum RawStamp {
    Number(i64),
    Text(String),
}

impl RawStamp {
    fn seconds(&self) -> Option<i64> {
        match self {
            RawStamp::Number(n) => Some(*n),
            RawStamp::Text(t) => t.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSubmission {
    #[serde(default)]
    title: String,
    #[serde(default)]
    status_display: String,
    #[serde(default)]
    lang: String,
    timestamp: Option<RawStamp>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimelineData {
    #[serde(default)]
    recent_submission_list: Option<Vec<RawSubmission>>,
}

#[derive(Debug, Deserialize)]
struct TimelineEnvelope {
    data: Option<TimelineData>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub title: String,
    pub status: String,
    pub lang: String,
    /// `YYYY-MM-DD HH:MM`, UTC. Empty when the timestamp is unusable.
    pub date: String,
}

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("Could not extract username")]
    NoUsername,
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Could not fetch submission timeline (HTTP {0}). Profile might be private.")]
    Status(u16),
    #[error("unreadable timeline payload: {0}")]
    Decode(#[from] serde_json::Error),
}

fn format_stamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

/// Parse a GraphQL reply into at most `TIMELINE_LIMIT` submissions.
pub fn parse_timeline(body: &str) -> Result<Vec<Submission>, serde_json::Error> {
    let env: TimelineEnvelope = serde_json::from_str(body)?;
    let list = env
        .data
        .and_then(|d| d.recent_submission_list)
        .unwrap_or_default();
    Ok(list
        .into_iter()
        .take(TIMELINE_LIMIT)
        .map(|raw| Submission {
            date: raw
                .timestamp
                .as_ref()
                .and_then(RawStamp::seconds)
                .map(format_stamp)
                .unwrap_or_default(),
            title: raw.title,
            status: raw.status_display,
            lang: raw.lang,
        })
        .collect())
}

/// Empty `Ok` means the profile is private or has no recent activity.
pub fn fetch_recent_submissions(
    fetch: &dyn Fetch,
    endpoints: &Endpoints,
    profile_url: &str,
    timeout: Duration,
) -> Result<Vec<Submission>, TimelineError> {
    let username = username_from_url(profile_url).ok_or(TimelineError::NoUsername)?;
    let body = json!({
        "query": RECENT_SUBMISSIONS_QUERY,
        "variables": { "username": username },
    });
    let resp = fetch.post_json(&endpoints.leetcode_graphql, &body, timeout)?;
    if !resp.is_success() {
        return Err(TimelineError::Status(resp.status));
    }
    Ok(parse_timeline(&resp.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rules() {
        assert_eq!(username_from_url("https://leetcode.com/alice"), Some(s!("alice")));
        assert_eq!(username_from_url("https://leetcode.com/alice///"), Some(s!("alice")));
        assert_eq!(username_from_url("https://leetcode.com/u/bob/"), Some(s!("bob")));
        assert_eq!(username_from_url("https://leetcode.com/profile/"), None);
        assert_eq!(username_from_url("https://leetcode.com/"), None);
    }

    #[test]
    fn host_gate() {
        assert!(is_profile_url(" https://leetcode.com/x "));
        assert!(!is_profile_url(""));
        assert!(!is_profile_url("https://codeforces.com/profile/x"));
    }

    #[test]
    fn stats_defaults_missing_counts() {
        let s: SolvedStats = serde_json::from_str(r#"{"totalSolved": 12, "ranking": 99}"#).unwrap();
        assert_eq!(s.total_solved, 12);
        assert_eq!(s.hard_solved, 0);
        assert_eq!(s.ranking, Some(99));
        assert_eq!(s.acceptance_rate, None);
    }

    #[test]
    fn timeline_caps_and_formats() {
        let items: Vec<String> = (0..12)
            .map(|i| format!(r#"{{"title":"P{i}","statusDisplay":"Accepted","lang":"rust","timestamp":"1700000000"}}"#))
            .collect();
        let body = format!(r#"{{"data":{{"recentSubmissionList":[{}]}}}}"#, items.join(","));
        let subs = parse_timeline(&body).unwrap();
        assert_eq!(subs.len(), 10);
        assert_eq!(subs[0].date, "2023-11-14 22:13");
        assert_eq!(subs[9].title, "P9");

        let empty = parse_timeline(r#"{"data":{"recentSubmissionList":null}}"#).unwrap();
        assert!(empty.is_empty());
    }
}
