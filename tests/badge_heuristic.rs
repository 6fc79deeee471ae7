// tests/badge_heuristic.rs
use standing_scrape::core::{Document, Tree};
use standing_scrape::specs::badges::{self, Badge};

const FIXTURE: &str = include_str!("fixtures/badges.svg");

fn names_and_stars(found: &[Badge]) -> Vec<(&str, u32)> {
    found.iter().map(|b| (b.name.as_str(), b.stars)).collect()
}

/// `<text>` buried under `depth` plain groups, so walking up five levels
/// never reaches a star group.
fn deep_label(doc: &mut Document, parent: usize, depth: usize, x: &str, y: &str, label: &str) {
    let mut p = parent;
    for _ in 0..depth {
        p = doc.append_element(p, "g", &[("class", "wrap")]);
    }
    let t = doc.append_element(p, "text", &[("x", x), ("y", y)]);
    doc.append_text(t, label);
}

fn star_group(doc: &mut Document, parent: usize, transform: Option<&str>, icons: usize) {
    let g = match transform {
        Some(t) => doc.append_element(parent, "g", &[("class", "star-section"), ("transform", t)]),
        None => doc.append_element(parent, "g", &[("class", "star-section")]),
    };
    for _ in 0..icons {
        doc.append_element(g, "svg", &[("class", "badge-star")]);
    }
}

#[test]
fn fixture_pairs_each_label_with_its_own_stars() {
    let found = badges::extract_badges(FIXTURE).expect("badges in fixture");
    assert_eq!(
        names_and_stars(&found),
        vec![
            ("Problem Solving", 4),
            ("Java", 2),
            ("Python", 5),
            ("Sql", 1),
            ("C#", 3),
        ]
    );
    assert!(found.iter().all(|b| !b.estimated));
}

#[test]
fn nearest_translate_wins_when_structure_does_not_help() {
    let mut doc = Document::new();
    let svg = doc.append_element(doc.root(), "svg", &[]);
    deep_label(&mut doc, svg, 6, "10", "10", "Java");
    deep_label(&mut doc, svg, 6, "100", "100", "Python");
    star_group(&mut doc, svg, Some("translate(10, 12)"), 2);
    star_group(&mut doc, svg, Some("translate(100,100)"), 5);

    let found = badges::extract_from_tree(&doc).expect("two badges");
    assert_eq!(names_and_stars(&found), vec![("Java", 2), ("Python", 5)]);
    assert!(found.iter().all(|b| !b.estimated));
}

#[test]
fn structure_beats_position_and_even_share() {
    let mut doc = Document::new();
    let svg = doc.append_element(doc.root(), "svg", &[]);
    let badge = doc.append_element(svg, "g", &[("class", "hexagon-badge")]);
    let t = doc.append_element(badge, "text", &[("x", "100"), ("y", "100")]);
    doc.append_text(t, "Java");
    // own group sits far away; a closer one carries more stars
    star_group(&mut doc, badge, Some("translate(0,0)"), 1);
    star_group(&mut doc, svg, Some("translate(100,100)"), 5);

    let found = badges::extract_from_tree(&doc).expect("one badge");
    // position alone would say 5, even share 6
    assert_eq!(names_and_stars(&found), vec![("Java", 1)]);
    assert!(!found[0].estimated);
}

#[test]
fn position_ties_keep_the_first_group() {
    let mut doc = Document::new();
    let svg = doc.append_element(doc.root(), "svg", &[]);
    deep_label(&mut doc, svg, 6, "50", "50", "Ruby");
    star_group(&mut doc, svg, Some("translate(40,50)"), 1);
    star_group(&mut doc, svg, Some("translate(60,50)"), 4);

    let found = badges::extract_from_tree(&doc).expect("one badge");
    assert_eq!(names_and_stars(&found), vec![("Ruby", 1)]);
}

#[test]
fn even_share_is_used_last_and_flagged() {
    let svg = r#"<svg>
        <g><g><g><g><g><g><text>Java</text></g></g></g></g></g></g>
        <g><g><g><g><g><g><text>Python</text></g></g></g></g></g></g>
        <g><g><g><g><g><g><text>sql</text></g></g></g></g></g></g>
        <g class="star-section"><svg class="badge-star"/><svg class="badge-star"/><svg class="badge-star"/></g>
        <g class="star-section"><svg class="badge-star"/><svg class="badge-star"/><svg class="badge-star"/></g>
        <g class="star-section"><svg class="badge-star"/><svg class="badge-star"/><svg class="badge-star"/></g>
    </svg>"#;

    let found = badges::extract_badges(svg).expect("three badges");
    assert_eq!(names_and_stars(&found), vec![("Java", 3), ("Python", 3), ("Sql", 3)]);
    assert!(found.iter().all(|b| b.estimated));
    assert!(badges::summarize(&found).any_estimated);
}

#[test]
fn no_star_groups_means_zero_stars() {
    let found = badges::extract_badges("<svg><text>Python</text><text>Rust</text></svg>").expect("badges");
    assert_eq!(names_and_stars(&found), vec![("Python", 0), ("Rust", 0)]);
    assert!(found.iter().all(|b| !b.estimated));
}

#[test]
fn label_text_spans_child_nodes() {
    let svg = r#"<svg><g><text>Problem <tspan>solving</tspan></text>
        <g class="star-section"><svg class="badge-star"/><svg class="badge-star"/></g></g></svg>"#;
    let found = badges::extract_badges(svg).expect("one badge");
    assert_eq!(names_and_stars(&found), vec![("Problem Solving", 2)]);
}

#[test]
fn unknown_or_short_labels_yield_nothing() {
    // keyword hits, but not awarded titles
    assert_eq!(badges::extract_badges("<svg><text>Java Basics</text><text>Scala fan club</text></svg>"), None);
    // single characters never count
    assert_eq!(badges::extract_badges("<svg><text>c</text></svg>"), None);
    // unreadable or empty markup
    assert_eq!(badges::extract_badges(""), None);
    assert_eq!(badges::extract_badges("not markup at all"), None);
}

#[test]
fn duplicate_titles_keep_first_rating() {
    let svg = r#"<svg>
        <g><text>Java</text><g class="star-section"><svg class="badge-star"/></g></g>
        <g><text>JAVA</text><g class="star-section"><svg class="badge-star"/><svg class="badge-star"/></g></g>
    </svg>"#;
    let found = badges::extract_badges(svg).expect("one badge");
    assert_eq!(names_and_stars(&found), vec![("Java", 1)]);
}
