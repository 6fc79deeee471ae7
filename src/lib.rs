// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;

pub mod columns;
pub mod enrich;
pub mod file;
pub mod gui;
pub mod progress;
pub mod report;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;
