// tests/exports.rs
use std::fs;
use std::path::PathBuf;

use calamine::{open_workbook, Data, Reader, Xlsx};
use serde_json::Value;

use standing_scrape::config::options::ExportOptions;
use standing_scrape::file;
use standing_scrape::specs::badges::Badge;
use standing_scrape::store;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("standing_exports_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn template_loads_as_a_valid_student_file() {
    let dir = tmp_dir("template");
    let mut export = ExportOptions::default();
    export.set_out_dir(dir.to_str().unwrap());

    let path = file::write_template(&export).unwrap();
    assert_eq!(path, dir.join("student_data_template.csv"));

    let table = store::load_students(&path).unwrap();
    assert_eq!(table.len(), 3);
    assert!(table.suggestions.is_empty());
    assert_eq!(table.students[0].cgpa, Some(8.5));
    assert_eq!(table.students[1].backlogs, Some(1));
    assert_eq!(table.students[2].leetcode_url, None);
}

#[test]
fn badge_json_is_pretty_and_keeps_display_keys() {
    let badges = vec![Badge::new("Java", 3), Badge::new("Problem Solving", 5)];
    let text = file::badges_json(&badges).unwrap();
    assert!(text.contains('\n'));

    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed[0]["Badge Name"], "Java");
    assert_eq!(parsed[1]["Stars"], 5);
    assert!(parsed[0].get("estimated").is_none());

    let back: Vec<Badge> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, badges);
}

#[test]
fn badge_json_file_name_carries_user_and_stamp() {
    let dir = tmp_dir("json");
    let mut export = ExportOptions::default();
    export.set_out_dir(dir.to_str().unwrap());

    let path = file::write_badges_json(&export, "ravi k", &[Badge::new("Sql", 1)], "20250101_120000").unwrap();
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("hackerrank_badges_ravi"));
    assert!(name.ends_with("_20250101_120000.json"));
    assert!(!name.contains(' '));
    assert!(fs::read_to_string(&path).unwrap().contains("\"Sql\""));
}

#[test]
fn xlsx_sheet_keeps_numbers_numeric_and_ids_as_text() {
    let dir = tmp_dir("xlsx");
    let headers = strings(&["Roll Number", "CGPA", "Note"]);
    let rows = vec![
        strings(&["007", "8.25", "ok"]),
        strings(&["23A31A4402", "", "-"]),
    ];
    let bytes = file::to_xlsx_bytes(&headers, &rows).unwrap();
    assert!(bytes.starts_with(b"PK"));

    let path = dir.join("out.xlsx");
    fs::write(&path, &bytes).unwrap();
    let mut wb: Xlsx<_> = open_workbook(&path).unwrap();
    assert_eq!(wb.sheet_names(), vec!["Student_Data".to_string()]);

    let range = wb.worksheet_range("Student_Data").unwrap();
    assert_eq!(range.get_value((0, 0)), Some(&Data::String("Roll Number".into())));
    assert_eq!(range.get_value((1, 0)), Some(&Data::String("007".into())));
    assert_eq!(range.get_value((1, 1)), Some(&Data::Float(8.25)));
    assert_eq!(range.get_value((2, 1)), Some(&Data::Empty));
}

#[test]
fn csv_quotes_cells_that_need_it() {
    let headers = strings(&["Roll Number", "HackerRank_Badge_Details"]);
    let rows = vec![strings(&["R1", "Java(3★); C#(1★)"]), strings(&["R2", "a,b"])];
    let text = file::to_csv_string(&headers, &rows).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Roll Number,HackerRank_Badge_Details");
    assert_eq!(lines[1], "R1,Java(3★); C#(1★)");
    assert_eq!(lines[2], "R2,\"a,b\"");
}

#[test]
fn output_dir_must_not_be_a_file() {
    let dir = tmp_dir("notdir");
    let blocker = dir.join("blocked");
    fs::write(&blocker, "x").unwrap();

    let mut export = ExportOptions::default();
    export.set_out_dir(blocker.to_str().unwrap());
    assert!(matches!(
        file::write_template(&export),
        Err(file::ExportError::NotADirectory(_))
    ));
}
