// src/columns.rs
//
// Required input columns and the header matcher. Exact (case-insensitive)
// names win; otherwise the first header containing one of the field's
// keywords is taken and reported as a suggestion.

/// One required column: canonical name, accepted keywords, and the help text
/// shown in the requirements panel.
#[derive(Clone, Copy, Debug)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub data_type: &'static str,
    pub example: &'static str,
    pub note: &'static str,
}

pub const ROLL_NUMBER: &str = "Roll Number";
pub const CGPA: &str = "CGPA";
pub const TOTAL_BACKLOGS: &str = "Total Backlogs";
pub const LEETCODE_LINK: &str = "Leet code links";
pub const HACKERRANK_LINK: &str = "Hackerrank profile link";

pub static REQUIRED_COLUMNS: [ColumnSpec; 5] = [
    ColumnSpec {
        name: ROLL_NUMBER,
        keywords: &["roll", "number", "rollno", "roll_no", "student_id", "id"],
        data_type: "Text/String",
        example: "23A31A4401, 22CS001, STU2023001",
        note: "Unique identifier for each student",
    },
    ColumnSpec {
        name: CGPA,
        keywords: &["cgpa", "gpa", "grade", "average"],
        data_type: "Number (Decimal)",
        example: "8.5, 7.2, 9.0",
        note: "Grade Point Average (0.0 to 10.0)",
    },
    ColumnSpec {
        name: TOTAL_BACKLOGS,
        keywords: &["backlog", "back", "fail", "pending"],
        data_type: "Number (Integer)",
        example: "0, 2, 1",
        note: "Number of failed/pending subjects",
    },
    ColumnSpec {
        name: LEETCODE_LINK,
        keywords: &["leet", "leetcode", "leet_code", "coding"],
        data_type: "Text/URL",
        example: "https://leetcode.com/username/",
        note: "Full LeetCode profile URL (can be empty)",
    },
    ColumnSpec {
        name: HACKERRANK_LINK,
        keywords: &["hacker", "hackerrank", "hacker_rank", "hr"],
        data_type: "Text/URL",
        example: "https://hackerrank.com/username",
        note: "Full HackerRank profile URL (can be empty)",
    },
];

/// How each required column was resolved against the uploaded headers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    /// (canonical name, header index) for every resolved field, table order.
    pub mapping: Vec<(&'static str, usize)>,
    /// "Mapped 'CGPA' to 'GPA Score'"
    pub suggestions: Vec<String>,
    pub missing: Vec<&'static str>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn index_of(&self, canonical: &str) -> Option<usize> {
        self.mapping
            .iter()
            .find(|(name, _)| *name == canonical)
            .map(|(_, i)| *i)
    }
}

pub fn validate<S: AsRef<str>>(headers: &[S]) -> Validation {
    let cleaned: Vec<&str> = headers.iter().map(|h| h.as_ref().trim()).collect();
    let lowered: Vec<String> = cleaned.iter().map(|h| h.to_lowercase()).collect();

    let mut out = Validation::default();
    for spec in &REQUIRED_COLUMNS {
        let want = spec.name.to_lowercase();
        if let Some(i) = lowered.iter().position(|h| *h == want) {
            out.mapping.push((spec.name, i));
            continue;
        }
        let fuzzy = lowered
            .iter()
            .position(|h| spec.keywords.iter().any(|kw| h.contains(kw)));
        match fuzzy {
            Some(i) => {
                out.mapping.push((spec.name, i));
                out.suggestions.push(format!("Mapped '{}' to '{}'", spec.name, cleaned[i]));
            }
            None => out.missing.push(spec.name),
        }
    }
    out
}
