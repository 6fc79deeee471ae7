// src/specs/badges.rs
//
// HackerRank badges recovered from the third-party badge image.
//
// The image carries no explicit name → stars mapping. Labels are `<text>`
// nodes; stars are `<svg class="badge-star">` icons grouped under
// `<g class="star-section">`. Each recognised label is paired with a group
// by the first of `strategies()` that produces a count.

use std::collections::HashSet;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::consts::{MANUAL_BADGE_LIMIT, MAX_STARS};
use crate::config::options::{BadgeSource, LookupOptions};
use crate::core::markup::Tree;
use crate::core::net::Fetch;
use crate::core::sanitize::{normalize_ws, title_case};
use crate::core::xml;

use super::badge_profile;

/// Lowercase substrings that make a label a badge candidate.
pub static KEYWORDS: [&str; 20] = [
    "java", "python", "sql", "javascript", "cpp", "problem solving",
    "algorithms", "data structures", "30 days", "10 days", "ruby",
    "swift", "golang", "rust", "kotlin", "scala", "c", "shell",
    "functional programming", "object oriented programming",
];

/// Badge titles HackerRank actually awards.
pub static KNOWN_BADGES: [&str; 31] = [
    "Problem Solving", "Java", "Python", "C Language", "Cpp", "C#",
    "JavaScript", "Sql", "30 Days of Code", "10 Days of JavaScript",
    "10 Days of Statistics", "Algorithms", "Data Structures", "Regex",
    "Artificial Intelligence", "Databases", "Shell", "Linux Shell",
    "Functional Programming", "Mathematics", "Days of ML", "Rust",
    "Kotlin", "Swift", "Scala", "Ruby", "Go", "Statistics",
    "Interview Preparation Kit", "Object Oriented Programming", "Security",
];

const STAR_GROUP_CLASS: &str = "star-section";
const STAR_ICON_CLASS: &str = "badge-star";
const MAX_ANCESTOR_LEVELS: usize = 5;

static TRANSLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"translate\(([^,]+),\s*([^)]+)\)").expect("translate pattern")
});

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    #[serde(rename = "Badge Name")]
    pub name: String,
    #[serde(rename = "Stars")]
    pub stars: u32,
    /// Stars came from the uniform fallback, not from a matched group.
    #[serde(skip)]
    pub estimated: bool,
}

impl Badge {
    pub fn new(name: impl Into<String>, stars: u32) -> Self {
        Self { name: name.into(), stars, estimated: false }
    }
}

pub fn is_keyword_label(label: &str) -> bool {
    let lc = label.to_lowercase();
    KEYWORDS.iter().any(|kw| lc.contains(kw))
}

/// Title-cased `label` when that form is listed verbatim in `KNOWN_BADGES`.
pub fn known_badge_name(label: &str) -> Option<String> {
    let titled = title_case(label.trim());
    KNOWN_BADGES.contains(&titled.as_str()).then_some(titled)
}

/// Keep the first badge per case-insensitive name.
pub fn dedup(badges: Vec<Badge>) -> Vec<Badge> {
    let mut seen = HashSet::new();
    badges
        .into_iter()
        .filter(|b| seen.insert(b.name.to_lowercase()))
        .collect()
}

/* ---------- heuristic ---------- */

struct Scene<'t, T: Tree> {
    tree: &'t T,
    groups: Vec<T::Node>,
    total_icons: u32,
    keyword_labels: u32,
}

impl<T: Tree> Scene<'_, T> {
    fn is_group(&self, n: T::Node) -> bool {
        self.tree.is_element(n, "g") && self.tree.has_class(n, STAR_GROUP_CLASS)
    }

    fn icons_in(&self, group: T::Node) -> u32 {
        self.tree
            .descendants(group)
            .into_iter()
            .filter(|&n| is_star_icon(self.tree, n))
            .count() as u32
    }
}

fn is_star_icon<T: Tree>(tree: &T, n: T::Node) -> bool {
    tree.is_element(n, "svg") && tree.has_class(n, STAR_ICON_CLASS)
}

/// Walk up from the label; at each level look below the node, then below
/// its parent (the sibling set).
fn by_structure<T: Tree>(scene: &Scene<'_, T>, label: T::Node) -> Option<u32> {
    let tree = scene.tree;
    let mut current = Some(label);
    for _ in 0..MAX_ANCESTOR_LEVELS {
        let cur = current?;
        if let Some(g) = tree.find_bfs(cur, |n| scene.is_group(n)) {
            return Some(scene.icons_in(g));
        }
        let parent = tree.parent(cur);
        if let Some(p) = parent {
            if let Some(g) = tree.find_bfs(p, |n| scene.is_group(n)) {
                return Some(scene.icons_in(g));
            }
        }
        current = parent;
    }
    None
}

fn coord<T: Tree>(tree: &T, n: T::Node, name: &str) -> f64 {
    tree.attr(n, name)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn translate_of<T: Tree>(tree: &T, group: T::Node) -> Option<(f64, f64)> {
    let caps = TRANSLATE.captures(tree.attr(group, "transform")?)?;
    let dx = caps.get(1)?.as_str().trim().parse::<f64>().ok()?;
    let dy = caps.get(2)?.as_str().trim().parse::<f64>().ok()?;
    Some((dx, dy))
}

/// Nearest group by its `translate(dx, dy)` offset. Ties keep the first.
fn by_position<T: Tree>(scene: &Scene<'_, T>, label: T::Node) -> Option<u32> {
    let tree = scene.tree;
    let (x, y) = (coord(tree, label, "x"), coord(tree, label, "y"));
    let mut best: Option<T::Node> = None;
    let mut best_d = f64::INFINITY;
    for &g in &scene.groups {
        let Some((gx, gy)) = translate_of(tree, g) else { continue };
        let d = ((gx - x).powi(2) + (gy - y).powi(2)).sqrt();
        if d < best_d {
            best_d = d;
            best = Some(g);
        }
    }
    best.map(|g| scene.icons_in(g))
}

/// Approximation: every badge gets an equal share of all star icons.
fn by_even_share<T: Tree>(scene: &Scene<'_, T>, _label: T::Node) -> Option<u32> {
    if scene.groups.is_empty() || scene.keyword_labels == 0 {
        return None;
    }
    Some(scene.total_icons / scene.keyword_labels)
}

/// Ordered star-count strategies; the flag marks approximations.
fn strategies<T: Tree>() -> [(fn(&Scene<'_, T>, T::Node) -> Option<u32>, bool); 3] {
    [
        (by_structure::<T>, false),
        (by_position::<T>, false),
        (by_even_share::<T>, true),
    ]
}

/// Run the heuristic over any element tree. `None` when nothing matched.
pub fn extract_from_tree<T: Tree>(tree: &T) -> Option<Vec<Badge>> {
    let labels: Vec<(T::Node, String)> = tree
        .elements_by_tag("text")
        .into_iter()
        .map(|n| (n, normalize_ws(&tree.text_content(n))))
        .filter(|(_, text)| text.chars().count() > 1)
        .collect();

    let all = tree.descendants(tree.root());
    let groups: Vec<T::Node> = all
        .iter()
        .copied()
        .filter(|&n| tree.is_element(n, "g") && tree.has_class(n, STAR_GROUP_CLASS))
        .collect();
    let total_icons = all.iter().filter(|&&n| is_star_icon(tree, n)).count() as u32;
    let keyword_labels = labels.iter().filter(|(_, t)| is_keyword_label(t)).count() as u32;

    logd!(
        "badge image: {} labels, {} star groups, {} star icons",
        labels.len(),
        groups.len(),
        total_icons
    );

    let scene = Scene { tree, groups, total_icons, keyword_labels };
    let chain = strategies::<T>();

    let mut found = Vec::new();
    for (node, text) in &labels {
        if !is_keyword_label(text) {
            continue;
        }
        let Some(name) = known_badge_name(text) else { continue };

        let (stars, estimated) = chain
            .iter()
            .find_map(|(strategy, estimated)| strategy(&scene, *node).map(|s| (s, *estimated)))
            .unwrap_or((0, false));

        found.push(Badge { name, stars, estimated });
    }

    let badges = dedup(found);
    if badges.is_empty() { None } else { Some(badges) }
}

/// Parse badge-image markup and run the heuristic. Parse errors yield `None`.
pub fn extract_badges(svg: &str) -> Option<Vec<Badge>> {
    match xml::parse(svg) {
        Ok(doc) => extract_from_tree(&doc),
        Err(e) => {
            logd!("badge image unreadable: {e}");
            None
        }
    }
}

pub fn fetch_svg_badges(fetch: &dyn Fetch, url: &str, timeout: Duration) -> Option<Vec<Badge>> {
    let resp = match fetch.get(url, timeout) {
        Ok(r) => r,
        Err(e) => {
            logd!("badge image fetch failed: {e}");
            return None;
        }
    };
    if !resp.is_success() {
        logd!("badge image fetch: HTTP {}", resp.status);
        return None;
    }
    extract_badges(&resp.body)
}

/// Badges for `username` from whichever source the options select.
pub fn fetch_badges(fetch: &dyn Fetch, opts: &LookupOptions, username: &str) -> Option<Vec<Badge>> {
    match opts.badge_source {
        BadgeSource::Svg => {
            let url = opts.endpoints.badge_svg_url(username);
            fetch_svg_badges(fetch, &url, opts.badge_timeout)
        }
        BadgeSource::Rest => {
            let url = opts.endpoints.badge_rest_url(username);
            badge_profile::fetch_rest_badges(fetch, &url, opts.badge_timeout)
        }
    }
}

/// Badges typed in by hand. Blank names are dropped; stars are capped.
pub fn manual_badges(entries: &[(String, u32)]) -> Vec<Badge> {
    entries
        .iter()
        .take(MANUAL_BADGE_LIMIT)
        .filter(|(name, _)| !name.trim().is_empty())
        .map(|(name, stars)| Badge::new(name.trim(), (*stars).min(MAX_STARS)))
        .collect()
}

/* ---------- summaries ---------- */

/// `"Java(3★); Python(5★)"`
pub fn details_string(badges: &[Badge]) -> String {
    badges
        .iter()
        .map(|b| format!("{}({}★)", b.name, b.stars))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Star sum; saturates instead of wrapping.
pub fn total_stars(badges: &[Badge]) -> u32 {
    badges.iter().fold(0u32, |acc, b| acc.saturating_add(b.stars))
}

#[derive(Clone, Debug, PartialEq)]
pub struct BadgeSummary {
    pub total_badges: usize,
    pub total_stars: u32,
    pub average_stars: f64,
    /// (stars, badge names), highest rating first.
    pub by_stars: Vec<(u32, Vec<String>)>,
    pub any_estimated: bool,
}

pub fn summarize(badges: &[Badge]) -> BadgeSummary {
    let total_badges = badges.len();
    let total_stars = total_stars(badges);
    let average_stars = if total_badges == 0 {
        0.0
    } else {
        f64::from(total_stars) / total_badges as f64
    };

    let mut by_stars: Vec<(u32, Vec<String>)> = Vec::new();
    for b in badges {
        match by_stars.iter_mut().find(|(s, _)| *s == b.stars) {
            Some((_, names)) => names.push(b.name.clone()),
            None => by_stars.push((b.stars, vec![b.name.clone()])),
        }
    }
    by_stars.sort_by(|a, b| b.0.cmp(&a.0));

    BadgeSummary {
        total_badges,
        total_stars,
        average_stars,
        by_stars,
        any_estimated: badges.iter().any(|b| b.estimated),
    }
}
