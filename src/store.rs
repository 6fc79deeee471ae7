// src/store.rs
//
// Uploaded student tables: CSV or XLSX in, validated `StudentTable` out.
// Parsing is memoized per (path, size, mtime) so re-selecting the same file
// in the GUI is free; a changed file is always re-read.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, OnceLock},
    time::SystemTime,
};

use calamine::{open_workbook, Data, Reader, Xlsx};
use thiserror::Error;

use crate::columns::{self, Validation};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("XLSX read error: {0}")]
    Xlsx(#[from] calamine::XlsxError),
    #[error("unsupported file type '{0}' (expected .csv or .xlsx)")]
    UnsupportedFormat(String),
    #[error("workbook has no sheets")]
    NoSheets,
    #[error("file has no header row")]
    NoHeaders,
    #[error(
        "missing required columns: {}. Available columns: {}",
        .missing.join(", "),
        .available.join(", ")
    )]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },
}

/// Raw table: trimmed headers, rows padded to header width.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StudentRecord {
    pub roll: String,
    /// `None` when the cell does not parse; never defaulted.
    pub cgpa: Option<f64>,
    pub backlogs: Option<u32>,
    pub leetcode_url: Option<String>,
    pub hackerrank_url: Option<String>,
    /// Original cells, header order.
    pub row: Vec<String>,
}

impl StudentRecord {
    pub fn has_backlogs(&self) -> bool {
        self.backlogs.is_some_and(|b| b > 0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StudentTable {
    pub headers: Vec<String>,
    pub students: Vec<StudentRecord>,
    /// Fuzzy header mappings, for display.
    pub suggestions: Vec<String>,
}

impl StudentTable {
    /// Trimmed, case-insensitive roll lookup.
    pub fn find_roll(&self, roll: &str) -> Option<&StudentRecord> {
        let want = roll.trim().to_uppercase();
        if want.is_empty() {
            return None;
        }
        self.students.iter().find(|s| s.roll.trim().to_uppercase() == want)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/* ---------- cell parsing ---------- */

fn parse_cgpa(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Accepts `2` and spreadsheet-style `2.0`; rejects negatives and fractions.
fn parse_backlogs(cell: &str) -> Option<u32> {
    let t = cell.trim();
    if let Ok(n) = t.parse::<u32>() {
        return Some(n);
    }
    let f = t.parse::<f64>().ok()?;
    (f >= 0.0 && f.fract() == 0.0 && f <= f64::from(u32::MAX)).then_some(f as u32)
}

fn optional_url(cell: &str) -> Option<String> {
    let t = cell.trim();
    match t.to_ascii_lowercase().as_str() {
        "" | "nan" | "none" | "null" => None,
        _ => Some(s!(t)),
    }
}

/// Validate headers and turn raw rows into student records.
pub fn build_table(data: DataSet) -> Result<StudentTable, LoadError> {
    let validation: Validation = columns::validate(&data.headers);
    if !validation.is_valid() {
        return Err(LoadError::MissingColumns {
            missing: validation.missing.iter().map(|m| s!(*m)).collect(),
            available: data.headers.clone(),
        });
    }

    let cell = |row: &[String], canonical: &str| -> String {
        validation
            .index_of(canonical)
            .and_then(|i| row.get(i))
            .cloned()
            .unwrap_or_default()
    };

    let students = data
        .rows
        .into_iter()
        .map(|row| StudentRecord {
            roll: s!(cell(&row, columns::ROLL_NUMBER).trim()),
            cgpa: parse_cgpa(&cell(&row, columns::CGPA)),
            backlogs: parse_backlogs(&cell(&row, columns::TOTAL_BACKLOGS)),
            leetcode_url: optional_url(&cell(&row, columns::LEETCODE_LINK)),
            hackerrank_url: optional_url(&cell(&row, columns::HACKERRANK_LINK)),
            row,
        })
        .collect();

    Ok(StudentTable {
        headers: data.headers,
        students,
        suggestions: validation.suggestions,
    })
}

/* ---------- readers ---------- */

fn normalize_rows(headers: &[String], rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    rows.into_iter()
        .filter(|r| r.iter().any(|c| !c.trim().is_empty()))
        .map(|mut r| {
            r.resize(headers.len().max(r.len()), s!());
            r
        })
        .collect()
}

pub fn read_csv_str(text: &str) -> Result<DataSet, LoadError> {
    read_csv(text.as_bytes())
}

fn read_csv<R: io::Read>(input: R) -> Result<DataSet, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(input);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| s!(h.trim_start_matches('\u{feff}').trim())).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::NoHeaders);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|c| s!(c)).collect());
    }
    let rows = normalize_rows(&headers, rows);
    Ok(DataSet { headers, rows })
}

fn data_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => s!(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn read_xlsx(path: &Path) -> Result<DataSet, LoadError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(LoadError::NoSheets)?;
    let range = workbook.worksheet_range(&sheet)?;

    let mut it = range.rows();
    let headers: Vec<String> = it
        .next()
        .ok_or(LoadError::NoHeaders)?
        .iter()
        .map(|c| s!(data_to_string(c).trim()))
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::NoHeaders);
    }

    let rows = it.map(|r| r.iter().map(data_to_string).collect()).collect();
    let rows = normalize_rows(&headers, rows);
    Ok(DataSet { headers, rows })
}

/// Read a CSV or XLSX file by extension.
pub fn read_table(path: &Path) -> Result<DataSet, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "csv" | "txt" => {
            let file = fs::File::open(path).map_err(|source| LoadError::Io {
                path: path.display().to_string(),
                source,
            })?;
            read_csv(io::BufReader::new(file))
        }
        "xlsx" | "xlsm" => read_xlsx(path),
        other => Err(LoadError::UnsupportedFormat(s!(other))),
    }
}

/* ---------- memoized load ---------- */

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct FileKey {
    path: PathBuf,
    size: u64,
    modified: Option<SystemTime>,
}

fn cache() -> &'static Mutex<HashMap<FileKey, Arc<StudentTable>>> {
    static CACHE: OnceLock<Mutex<HashMap<FileKey, Arc<StudentTable>>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Read + validate, reusing the previous parse while the file is unchanged.
pub fn load_students(path: &Path) -> Result<Arc<StudentTable>, LoadError> {
    let meta = fs::metadata(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let key = FileKey {
        path: path.to_path_buf(),
        size: meta.len(),
        modified: meta.modified().ok(),
    };

    if let Ok(map) = cache().lock() {
        if let Some(hit) = map.get(&key) {
            logd!("load_students: cache hit for {}", path.display());
            return Ok(Arc::clone(hit));
        }
    }

    let table = Arc::new(build_table(read_table(path)?)?);
    logf!("Loaded {} students from {}", table.len(), path.display());

    if let Ok(mut map) = cache().lock() {
        map.retain(|k, _| k.path != key.path);
        map.insert(key, Arc::clone(&table));
    }
    Ok(table)
}
