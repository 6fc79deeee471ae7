// src/file.rs

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use thiserror::Error;

use crate::config::consts::{FILE_STAMP_FMT, XLSX_MAX_COLS, XLSX_SHEET};
use crate::config::options::{ExportFormat, ExportOptions};
use crate::columns::REQUIRED_COLUMNS;
use crate::enrich::EnrichedTable;
use crate::specs::badges::Badge;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("XLSX write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(String),
    #[error("Too many columns for a worksheet: {0}")]
    TooManyColumns(usize),
}

/// `20250101_120000`, local time.
pub fn file_stamp() -> String {
    Local::now().format(FILE_STAMP_FMT).to_string()
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.display().to_string()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), ExportError> {
    match path.parent() {
        Some(parent) => ensure_directory(parent),
        None => Ok(()),
    }
}

/* ---------- encoders ---------- */

pub fn to_csv_bytes(headers: &[String], rows: &[Vec<String>]) -> Result<Vec<u8>, ExportError> {
    let mut w = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    w.write_record(headers)?;
    for row in rows {
        w.write_record(row)?;
    }
    w.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

pub fn to_csv_string(headers: &[String], rows: &[Vec<String>]) -> Result<String, ExportError> {
    let bytes = to_csv_bytes(headers, rows)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Numbers go in as numbers; identifiers like `007` stay text.
fn numeric_cell(cell: &str) -> Option<f64> {
    let t = cell.trim();
    if t.is_empty() || t != cell {
        return None;
    }
    let digits = t.strip_prefix('-').unwrap_or(t);
    let mut chars = digits.chars();
    if let (Some('0'), Some(next)) = (chars.next(), chars.next()) {
        if next != '.' {
            return None;
        }
    }
    if !digits.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn xlsx_col(c: usize) -> Result<u16, ExportError> {
    u16::try_from(c)
        .ok()
        .filter(|&col| col < XLSX_MAX_COLS)
        .ok_or(ExportError::TooManyColumns(c + 1))
}

pub fn to_xlsx_bytes(headers: &[String], rows: &[Vec<String>]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(XLSX_SHEET)?;

    for (c, h) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, xlsx_col(c)?, h, &bold)?;
    }
    for (r, row) in rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (c, cell) in row.iter().enumerate() {
            let c = xlsx_col(c)?;
            match numeric_cell(cell) {
                Some(n) => sheet.write_number(r, c, n)?,
                None if cell.is_empty() => continue,
                None => sheet.write_string(r, c, cell)?,
            };
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Pretty-printed `[{"Badge Name": ..., "Stars": ...}]`.
pub fn badges_json(badges: &[Badge]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(badges)?)
}

/// Canonical headers plus three sample students.
pub fn template_csv() -> Result<String, ExportError> {
    let headers: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| s!(c.name)).collect();
    let rows = vec![
        row!["23A31A4401", "8.5", 0, "https://leetcode.com/john_doe/", "https://hackerrank.com/john_doe"],
        row!["23A31A4402", "7.8", 1, "https://leetcode.com/jane_smith/", "https://hackerrank.com/jane_smith"],
        row!["23A31A4403", "9.2", 0, "", "https://hackerrank.com/bob_wilson"],
    ];
    to_csv_string(&headers, &rows)
}

/* ---------- writers ---------- */

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    ensure_parent(path)?;
    fs::write(path, bytes)?;
    logf!("Wrote {}", path.display());
    Ok(())
}

/// Write the enriched table in every configured format. Returns the paths written.
pub fn write_enriched(
    export: &ExportOptions,
    table: &EnrichedTable,
    stamp: &str,
) -> Result<Vec<PathBuf>, ExportError> {
    let rows = table.rows();
    let mut written = Vec::with_capacity(export.formats.len());
    for &format in &export.formats {
        let path = export.enriched_path(format, stamp);
        let bytes = match format {
            ExportFormat::Xlsx => to_xlsx_bytes(&table.headers, &rows)?,
            ExportFormat::Csv => to_csv_bytes(&table.headers, &rows)?,
        };
        write_bytes(&path, &bytes)?;
        written.push(path);
    }
    Ok(written)
}

pub fn write_badges_json(
    export: &ExportOptions,
    username: &str,
    badges: &[Badge],
    stamp: &str,
) -> Result<PathBuf, ExportError> {
    let path = export.badges_json_path(username, stamp);
    write_bytes(&path, badges_json(badges)?.as_bytes())?;
    Ok(path)
}

pub fn write_template(export: &ExportOptions) -> Result<PathBuf, ExportError> {
    let path = export.template_path();
    write_bytes(&path, template_csv()?.as_bytes())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_wide_sheets_are_refused() {
        assert_eq!(xlsx_col(0).unwrap(), 0);
        assert_eq!(xlsx_col(16_383).unwrap(), 16_383);
        assert!(matches!(xlsx_col(16_384), Err(ExportError::TooManyColumns(16_385))));
        assert!(matches!(xlsx_col(70_000), Err(ExportError::TooManyColumns(_))));

        let headers: Vec<String> = (0..16_385).map(|i| format!("c{i}")).collect();
        assert!(matches!(to_xlsx_bytes(&headers, &[]), Err(ExportError::TooManyColumns(_))));
    }

    #[test]
    fn numeric_detection() {
        assert_eq!(numeric_cell("8.5"), Some(8.5));
        assert_eq!(numeric_cell("0"), Some(0.0));
        assert_eq!(numeric_cell("0.75"), Some(0.75));
        assert_eq!(numeric_cell("007"), None);
        assert_eq!(numeric_cell("23A31A4401"), None);
        assert_eq!(numeric_cell("inf"), None);
        assert_eq!(numeric_cell(" 3"), None);
        assert_eq!(numeric_cell(""), None);
    }

    #[test]
    fn template_has_three_students() {
        let text = template_csv().unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Roll Number,CGPA,Total Backlogs,Leet code links,Hackerrank profile link");
        assert!(lines[3].starts_with("23A31A4403,9.2,0,,"));
    }
}
