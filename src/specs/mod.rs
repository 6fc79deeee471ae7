// src/specs/mod.rs
//! # External profile readers
//!
//! One module per remote source. Each knows *where the data lives* in a
//! response and *how to extract it tolerantly*; none of them decides when to
//! fetch, how to pace requests, or how results are shown.
//!
//! ## What lives here
//! - `leetcode` – solved counts from the stats API and the recent submission
//!   list from GraphQL. Username derivation from profile URLs.
//! - `badges` – the badge-image heuristic. Labels (`<text>`) are matched to
//!   star groups (`<g class="star-section">`) by an ordered chain of
//!   strategies: structural proximity, then geometric nearest neighbour, then
//!   an even share of all stars (flagged as estimated).
//! - `badge_profile` – the JSON profile source, filtered through the same
//!   allow-list and dedup rule.
//!
//! ## What does **not** live here
//! - Pacing and per-row status bookkeeping (`enrich`).
//! - File parsing or export (`store`, `file`).
//! - GUI concerns.
//!
//! ## Conventions
//! - All HTTP goes through `core::net::Fetch`, so every reader runs offline
//!   against a stub in tests.
//! - Readers never panic and never propagate network failures upward as
//!   errors the caller must handle; they return an outcome value or `None`.
//! - Markup is walked through `core::markup::Tree`, never a concrete parser.
pub mod badge_profile;
pub mod badges;
pub mod leetcode;
