// src/config/consts.rs

// Net config
pub const LEETCODE_HOST: &str = "leetcode.com";
pub const HACKERRANK_HOST: &str = "hackerrank.com";
pub const LEETCODE_STATS_BASE: &str = "https://leetcode-stats-api.herokuapp.com";
pub const LEETCODE_GRAPHQL: &str = "https://leetcode.com/graphql";
pub const BADGE_SVG_BASE: &str = "https://hackerrank-badges.vercel.app";
pub const BADGE_REST_BASE: &str = "https://www.hackerrank.com/rest/hackers";
pub const USER_AGENT: &str = concat!("standing_scrape/", env!("CARGO_PKG_VERSION"));

// Timeouts (seconds)
pub const STATS_TIMEOUT_SECS: u64 = 10;
pub const BULK_STATS_TIMEOUT_SECS: u64 = 5;
pub const BADGE_TIMEOUT_SECS: u64 = 15;
pub const GRAPHQL_TIMEOUT_SECS: u64 = 10;

// Bulk pass
pub const ROW_PAUSE_MS: u64 = 200; // be polite

// Local
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_LOG_FILTER: &str = "standing_scrape=info";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const ENRICHED_STEM: &str = "student_data_enhanced";
pub const BADGES_JSON_STEM: &str = "hackerrank_badges";
pub const TEMPLATE_FILE: &str = "student_data_template.csv";
pub const XLSX_SHEET: &str = "Student_Data";
pub const XLSX_MAX_COLS: u16 = 16_384;
pub const FILE_STAMP_FMT: &str = "%Y%m%d_%H%M%S";
pub const FETCH_STAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

// Views
pub const PREVIEW_ROWS: usize = 10;
pub const TIMELINE_LIMIT: usize = 10;
pub const MANUAL_BADGE_LIMIT: usize = 20;
pub const MAX_STARS: u32 = 5;
