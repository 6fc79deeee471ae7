// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub lookup: LookupOptions,
    pub export: ExportOptions,
}

/// Where HackerRank badges are read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BadgeSource {
    /// Server-rendered badge image, parsed heuristically.
    #[default]
    Svg,
    /// JSON profile endpoint (`{"badges": [{name, stars: {total}}]}`).
    Rest,
}

impl BadgeSource {
    pub fn label(&self) -> &'static str {
        match self {
            BadgeSource::Svg => "SVG image",
            BadgeSource::Rest => "REST profile",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub leetcode_stats: String,
    pub leetcode_graphql: String,
    pub badge_svg: String,
    pub badge_rest: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            leetcode_stats: s!(LEETCODE_STATS_BASE),
            leetcode_graphql: s!(LEETCODE_GRAPHQL),
            badge_svg: s!(BADGE_SVG_BASE),
            badge_rest: s!(BADGE_REST_BASE),
        }
    }
}

impl Endpoints {
    pub fn stats_url(&self, username: &str) -> String {
        format!("{}/{}", self.leetcode_stats.trim_end_matches('/'), username)
    }

    pub fn badge_svg_url(&self, username: &str) -> String {
        format!("{}/{}", self.badge_svg.trim_end_matches('/'), username)
    }

    pub fn badge_rest_url(&self, username: &str) -> String {
        format!("{}/{}/badges", self.badge_rest.trim_end_matches('/'), username)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupOptions {
    pub endpoints: Endpoints,
    pub badge_source: BadgeSource,
    pub stats_timeout: Duration,      // single-student view
    pub bulk_stats_timeout: Duration, // bulk pass
    pub badge_timeout: Duration,
    pub graphql_timeout: Duration,
    pub row_pause: Duration,          // flat sleep between bulk rows
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            badge_source: BadgeSource::default(),
            stats_timeout: Duration::from_secs(STATS_TIMEOUT_SECS),
            bulk_stats_timeout: Duration::from_secs(BULK_STATS_TIMEOUT_SECS),
            badge_timeout: Duration::from_secs(BADGE_TIMEOUT_SECS),
            graphql_timeout: Duration::from_secs(GRAPHQL_TIMEOUT_SECS),
            row_pause: Duration::from_millis(ROW_PAUSE_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
    pub formats: Vec<ExportFormat>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            formats: vec![ExportFormat::Xlsx, ExportFormat::Csv],
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI/CLI text into the output directory. Empty text restores the default.
    pub fn set_out_dir(&mut self, text: &str) {
        let t = text.trim();
        self.out_dir = if t.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(t)
        };
    }

    /// `out/student_data_enhanced_20250101_120000.xlsx`
    pub fn enriched_path(&self, format: ExportFormat, stamp: &str) -> PathBuf {
        self.out_dir
            .join(format!("{ENRICHED_STEM}_{stamp}.{}", format.ext()))
    }

    /// `out/hackerrank_badges_<user>_20250101_120000.json`
    pub fn badges_json_path(&self, username: &str, stamp: &str) -> PathBuf {
        let user = crate::core::sanitize::sanitize_filename_part(username, "user");
        self.out_dir.join(format!("{BADGES_JSON_STEM}_{user}_{stamp}.json"))
    }

    pub fn template_path(&self) -> PathBuf {
        self.out_dir.join(TEMPLATE_FILE)
    }
}
