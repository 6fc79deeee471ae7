// tests/markup.rs
use standing_scrape::core::{Document, Tree};
use standing_scrape::core::xml::{self, MarkupError};

#[test]
fn prolog_comments_and_namespaces_are_skipped() {
    let src = r#"<?xml version="1.0"?>
<!-- generated -->
<svg:svg xmlns:svg="http://www.w3.org/2000/svg">
  <svg:g class="a b"><svg:text x="1">Hi</svg:text></svg:g>
</svg:svg>"#;
    let doc = xml::parse(src).unwrap();
    let texts = doc.elements_by_tag("text");
    assert_eq!(texts.len(), 1);
    assert_eq!(doc.text_content(texts[0]), "Hi");
    assert_eq!(doc.attr(texts[0], "x"), Some("1"));

    let g = doc.parent(texts[0]).unwrap();
    assert!(doc.is_element(g, "g"));
    assert!(doc.has_class(g, "b"));
    assert!(!doc.has_class(g, "a b"));
}

#[test]
fn self_closing_tags_do_not_swallow_siblings() {
    let doc = xml::parse(r#"<svg><g><path d="M0 0"/><rect/><text>after</text></g></svg>"#).unwrap();
    let g = doc.elements_by_tag("g")[0];
    let kids: Vec<&str> = doc.children(g).into_iter().filter_map(|n| doc.tag(n)).collect();
    assert_eq!(kids, vec!["path", "rect", "text"]);
}

#[test]
fn entities_decode_in_text_and_attributes() {
    let doc = xml::parse(r#"<svg><text title="a &amp; b">C&#35; &lt;3 &#x41;</text></svg>"#).unwrap();
    let t = doc.elements_by_tag("text")[0];
    assert_eq!(doc.attr(t, "title"), Some("a & b"));
    assert_eq!(doc.text_content(t), "C# <3 A");
}

#[test]
fn text_content_concatenates_in_document_order() {
    let doc = xml::parse("<text>one <tspan>two <tspan>three</tspan></tspan> four</text>").unwrap();
    let t = doc.elements_by_tag("text")[0];
    assert_eq!(doc.text_content(t), "one two three four");
}

#[test]
fn unquoted_and_bare_attributes() {
    let doc = xml::parse("<svg><g class=star-section hidden transform='translate(1,2)'></g></svg>").unwrap();
    let g = doc.elements_by_tag("g")[0];
    assert!(doc.has_class(g, "star-section"));
    assert_eq!(doc.attr(g, "hidden"), Some(""));
    assert_eq!(doc.attr(g, "transform"), Some("translate(1,2)"));
}

#[test]
fn bfs_prefers_shallow_matches() {
    let mut doc = Document::new();
    let root = doc.append_element(doc.root(), "svg", &[]);
    let deep_parent = doc.append_element(root, "g", &[]);
    let deep = doc.append_element(deep_parent, "g", &[("class", "hit")]);
    let shallow = doc.append_element(root, "g", &[("class", "hit")]);

    let found = doc.find_bfs(root, |n| doc.has_class(n, "hit"));
    assert_eq!(found, Some(shallow));
    assert_ne!(found, Some(deep));
    // strictly below the start node
    assert_eq!(doc.find_bfs(shallow, |n| doc.has_class(n, "hit")), None);

    // document order is depth-first
    assert_eq!(doc.descendants(root), vec![deep_parent, deep, shallow]);
}

#[test]
fn malformed_input_reports_what_was_left_open() {
    assert_eq!(xml::parse("   ").unwrap_err(), MarkupError::Empty);
    assert_eq!(xml::parse("just words").unwrap_err(), MarkupError::NoElements);
    assert!(matches!(
        xml::parse("<svg><!-- never closed").unwrap_err(),
        MarkupError::Unterminated { what: "comment", .. }
    ));
    assert!(matches!(
        xml::parse(r#"<svg><g class="x></svg>"#).unwrap_err(),
        MarkupError::Unterminated { what: "start tag", .. }
    ));
}

#[test]
fn mismatched_end_tags_recover() {
    let doc = xml::parse("<svg><g><text>a</g><text>b</text></svg>").unwrap();
    let texts = doc.elements_by_tag("text");
    assert_eq!(texts.len(), 2);
    // `</g>` closed both the open text and the group
    let svg = doc.elements_by_tag("svg")[0];
    assert_eq!(doc.parent(texts[1]), Some(svg));
}
