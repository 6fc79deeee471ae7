// tests/columns.rs
use standing_scrape::columns::{self, CGPA, HACKERRANK_LINK, LEETCODE_LINK, ROLL_NUMBER, TOTAL_BACKLOGS};

#[test]
fn exact_match_beats_an_earlier_fuzzy_hit() {
    let v = columns::validate(&["GPA (old)", "CGPA", "Roll Number", "Total Backlogs", "Leet code links", "Hackerrank profile link"]);
    assert!(v.is_valid());
    assert_eq!(v.index_of(CGPA), Some(1));
    assert!(v.suggestions.is_empty());
}

#[test]
fn fuzzy_mapping_is_reported() {
    let v = columns::validate(&["Roll No", "Cumulative GPA", "Backlogs", "LeetCode Profile", "HackerRank URL"]);
    assert!(v.is_valid());
    assert_eq!(v.index_of(ROLL_NUMBER), Some(0));
    assert_eq!(v.index_of(LEETCODE_LINK), Some(3));
    assert_eq!(v.index_of(HACKERRANK_LINK), Some(4));
    assert_eq!(
        v.suggestions,
        vec![
            "Mapped 'Roll Number' to 'Roll No'",
            "Mapped 'CGPA' to 'Cumulative GPA'",
            "Mapped 'Total Backlogs' to 'Backlogs'",
            "Mapped 'Leet code links' to 'LeetCode Profile'",
            "Mapped 'Hackerrank profile link' to 'HackerRank URL'",
        ]
    );
}

#[test]
fn missing_cgpa_like_column_is_reported() {
    let v = columns::validate(&["Roll Number", "Total Backlogs", "Leet code links", "Hackerrank profile link"]);
    assert!(!v.is_valid());
    assert_eq!(v.missing, vec![CGPA]);
    assert_eq!(v.index_of(CGPA), None);
    assert_eq!(v.index_of(TOTAL_BACKLOGS), Some(1));
}

#[test]
fn requirements_table_lists_canonical_names_in_order() {
    let names: Vec<&str> = columns::REQUIRED_COLUMNS.iter().map(|c| c.name).collect();
    assert_eq!(names, vec![ROLL_NUMBER, CGPA, TOTAL_BACKLOGS, LEETCODE_LINK, HACKERRANK_LINK]);
}
