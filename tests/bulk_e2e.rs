// tests/bulk_e2e.rs
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use serde_json::Value;

use standing_scrape::config::options::{ExportFormat, ExportOptions, LookupOptions};
use standing_scrape::core::{Fetch, FetchError, HttpResponse};
use standing_scrape::enrich::{self, DERIVED_HEADERS, LookupStatus};
use standing_scrape::progress::Progress;
use standing_scrape::{file, report, store};

/// Canned responses by URL; unknown URLs fail like a refused connection.
struct StubFetch {
    routes: HashMap<String, (u16, String)>,
    calls: Mutex<Vec<String>>,
}

impl StubFetch {
    fn new(routes: &[(&str, u16, &str)]) -> Self {
        Self {
            routes: routes
                .iter()
                .map(|(u, s, b)| (u.to_string(), (*s, b.to_string())))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl Fetch for StubFetch {
    fn get(&self, url: &str, _timeout: Duration) -> Result<HttpResponse, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.routes.get(url) {
            Some((status, body)) => Ok(HttpResponse::new(*status, body.clone())),
            None => Err(FetchError::Connect(format!("no route to {url}"))),
        }
    }

    fn post_json(&self, url: &str, _body: &Value, timeout: Duration) -> Result<HttpResponse, FetchError> {
        self.get(url, timeout)
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<usize>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, index: usize) {
        self.done.push(index);
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

const STUDENTS: &str = "\
Roll Number,CGPA,Total Backlogs,Leet code links,Hackerrank profile link
R1,8.5,0,https://leetcode.com/asha/,https://www.hackerrank.com/profile/asha
R2,7.0,2,,https://hackerrank.com/ravi
R3,9.5,0,https://leetcode.com/meena,
R4,abc,1,https://leetcode.com/kiran,https://hackerrank.com/kiran/
";

const ASHA_SVG: &str = r#"<svg><g><text>java</text>
  <g class="star-section"><svg class="badge-star"/><svg class="badge-star"/><svg class="badge-star"/></g>
</g></svg>"#;

fn stub_options() -> LookupOptions {
    let mut opts = LookupOptions::default();
    opts.endpoints.leetcode_stats = "http://stub/stats".into();
    opts.endpoints.leetcode_graphql = "http://stub/graphql".into();
    opts.endpoints.badge_svg = "http://stub/svg/".into();
    opts.endpoints.badge_rest = "http://stub/rest".into();
    opts.row_pause = Duration::ZERO;
    opts
}

fn stub() -> StubFetch {
    StubFetch::new(&[
        (
            "http://stub/stats/asha",
            200,
            r#"{"status":"success","totalSolved":120,"easySolved":60,"mediumSolved":50,"hardSolved":10,"ranking":4242}"#,
        ),
        ("http://stub/svg/asha", 200, ASHA_SVG),
        ("http://stub/svg/ravi", 404, "not found"),
        ("http://stub/stats/meena", 500, "oops"),
        ("http://stub/svg/kiran", 200, "<svg><text>Hello there</text></svg>"),
    ])
}

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("standing_bulk_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn every_row_gets_a_status_and_the_pass_never_aborts() {
    let table = store::build_table(store::read_csv_str(STUDENTS).unwrap()).unwrap();
    let fetch = stub();
    let mut rec = Recorder::default();

    let out = enrich::enrich_all(&table, &fetch, &stub_options(), Some(&mut rec));

    assert_eq!(rec.total, 4);
    assert_eq!(rec.done, vec![0, 1, 2, 3]);
    assert!(rec.finished);

    let status: Vec<(LookupStatus, LookupStatus)> =
        out.records.iter().map(|r| (r.leetcode_status, r.badge_status)).collect();
    assert_eq!(
        status,
        vec![
            (LookupStatus::Success, LookupStatus::Success),
            (LookupStatus::NoUrl, LookupStatus::NoBadgesFound),
            (LookupStatus::Failed, LookupStatus::NoUrl),
            (LookupStatus::Error, LookupStatus::NoBadgesFound),
        ]
    );

    // rows stay in table order; lookups only for rows with URLs
    let calls = fetch.calls.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec![
            "http://stub/stats/asha",
            "http://stub/svg/asha",
            "http://stub/svg/ravi",
            "http://stub/stats/meena",
            "http://stub/stats/kiran",
            "http://stub/svg/kiran",
        ]
    );

    let stamp = &out.records[0].fetched_at;
    assert!(out.records.iter().all(|r| &r.fetched_at == stamp));
}

#[test]
fn derived_columns_follow_the_original_ones() {
    let table = store::build_table(store::read_csv_str(STUDENTS).unwrap()).unwrap();
    let out = enrich::enrich_all(&table, &stub(), &stub_options(), None);

    assert_eq!(out.headers.len(), 5 + DERIVED_HEADERS.len());
    assert_eq!(&out.headers[..5], &table.headers[..]);
    assert_eq!(out.headers[5], "LeetCode_Total_Solved");
    assert_eq!(out.headers[14], "Data_Fetch_Timestamp");

    let rows = out.rows();
    assert_eq!(
        &rows[0][5..14],
        &["120", "60", "50", "10", "Success", "1", "3", "Java(3★)", "Success"]
    );
    // nothing fetched: counts blank, status filled
    assert_eq!(&rows[1][5..14], &["", "", "", "", "No URL", "", "", "", "No Badges Found"]);
    assert_eq!(rows[0][..5], table.students[0].row[..]);
}

#[test]
fn summary_over_a_synthetic_pass() {
    let table = store::build_table(store::read_csv_str(STUDENTS).unwrap()).unwrap();
    let out = enrich::enrich_all(&table, &stub(), &stub_options(), None);
    let sum = report::bulk_summary(&out.records);

    assert_eq!(sum.total, 4);
    assert_eq!(sum.leetcode_success, 1);
    assert_eq!(sum.badges_success, 1);
    assert_eq!(sum.with_backlogs, 2);
    assert_eq!(sum.max_badges, 1);
    assert!((sum.average_badges - 0.25).abs() < 1e-9);
    assert!((sum.average_stars - 0.75).abs() < 1e-9);
    // "abc" is skipped, not counted as zero
    let avg = sum.average_cgpa.unwrap();
    assert!((avg - 25.0 / 3.0).abs() < 1e-9);
}

#[test]
fn rest_source_reads_the_profile_endpoint() {
    let table = store::build_table(store::read_csv_str(STUDENTS).unwrap()).unwrap();
    let mut opts = stub_options();
    opts.badge_source = standing_scrape::config::options::BadgeSource::Rest;

    let fetch = StubFetch::new(&[(
        "http://stub/rest/ravi/badges",
        200,
        r#"{"badges":[{"name":"problem solving","stars":{"total":4}},{"name":"Made Up","stars":{"total":5}}]}"#,
    )]);
    let out = enrich::enrich_all(&table, &fetch, &opts, None);

    let ravi = &out.records[1];
    assert_eq!(ravi.badge_status, LookupStatus::Success);
    assert_eq!(ravi.badges.len(), 1);
    assert_eq!(ravi.badges[0].name, "Problem Solving");
    assert_eq!(ravi.total_stars(), 4);
}

#[test]
fn enriched_files_are_written_and_reload() {
    let dir = tmp_dir("files");
    let table = store::build_table(store::read_csv_str(STUDENTS).unwrap()).unwrap();
    let out = enrich::enrich_all(&table, &stub(), &stub_options(), None);

    let mut export = ExportOptions::default();
    export.set_out_dir(dir.to_str().unwrap());
    let written = file::write_enriched(&export, &out, "20250101_120000").unwrap();

    assert_eq!(
        written,
        vec![
            dir.join("student_data_enhanced_20250101_120000.xlsx"),
            dir.join("student_data_enhanced_20250101_120000.csv"),
        ]
    );
    assert!(fs::read(&written[0]).unwrap().starts_with(b"PK"));

    let reloaded = store::load_students(&written[1]).unwrap();
    assert_eq!(reloaded.len(), 4);
    assert_eq!(reloaded.headers.len(), 15);
    assert_eq!(reloaded.students[0].row[12], "Java(3★)");

    export.formats = vec![ExportFormat::Csv];
    assert_eq!(file::write_enriched(&export, &out, "x").unwrap().len(), 1);
}

#[test]
fn only_allow_listed_labels_become_badges() {
    let csv = "\
Roll Number,CGPA,Total Backlogs,Leet code links,Hackerrank profile link
M1,8.0,0,,https://hackerrank.com/mixed
M2,6.5,1,,
";
    let table = store::build_table(store::read_csv_str(csv).unwrap()).unwrap();
    let svg = r#"<svg>
  <g><text>Java</text><g class="star-section"><svg class="badge-star"/><svg class="badge-star"/></g></g>
  <g><text>Java Basics</text><g class="star-section"><svg class="badge-star"/></g></g>
</svg>"#;
    let fetch = StubFetch::new(&[("http://stub/svg/mixed", 200, svg)]);
    let out = enrich::enrich_all(&table, &fetch, &stub_options(), None);

    let rows = out.rows();
    let col = |name: &str| out.headers.iter().position(|h| h == name).unwrap();
    assert_eq!(rows[0][col("HackerRank_Total_Badges")], "1");
    assert_eq!(rows[0][col("HackerRank_Total_Stars")], "2");
    assert_eq!(rows[0][col("HackerRank_Badge_Details")], "Java(2★)");
    assert_eq!(rows[0][col("HackerRank_Status")], "Success");
    assert_eq!(rows[1][col("HackerRank_Status")], "No URL");
}
