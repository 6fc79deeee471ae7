// src/specs/badge_profile.rs
//
// JSON profile source for badges: `{"badges": [{"name", "stars": {"total"}}]}`.

use std::time::Duration;

use serde::Deserialize;

use crate::config::consts::MAX_STARS;
use crate::core::net::Fetch;

use super::badges::{dedup, known_badge_name, Badge};

#[derive(Debug, Default, Deserialize)]
struct Profile {
    #[serde(default)]
    badges: Vec<ProfileBadge>,
}

#[derive(Debug, Deserialize)]
struct ProfileBadge {
    #[serde(default, alias = "badge_name")]
    name: String,
    #[serde(default)]
    stars: Stars,
}

#[derive(Debug, Default, Deserialize)]
struct Stars {
    #[serde(default)]
    total: u32,
}

/// Allow-listed, deduplicated badges from a profile payload.
pub fn parse_profile(body: &str) -> Result<Vec<Badge>, serde_json::Error> {
    let profile: Profile = serde_json::from_str(body)?;
    let badges = profile
        .badges
        .into_iter()
        .filter_map(|b| {
            known_badge_name(&b.name).map(|name| Badge::new(name, b.stars.total.min(MAX_STARS)))
        })
        .collect();
    Ok(dedup(badges))
}

pub fn fetch_rest_badges(fetch: &dyn Fetch, url: &str, timeout: Duration) -> Option<Vec<Badge>> {
    let resp = match fetch.get(url, timeout) {
        Ok(r) => r,
        Err(e) => {
            logd!("badge profile fetch failed: {e}");
            return None;
        }
    };
    if !resp.is_success() {
        logd!("badge profile fetch: HTTP {}", resp.status);
        return None;
    }
    match parse_profile(&resp.body) {
        Ok(badges) if !badges.is_empty() => Some(badges),
        Ok(_) => None,
        Err(e) => {
            logd!("badge profile unreadable: {e}");
            None
        }
    }
}
