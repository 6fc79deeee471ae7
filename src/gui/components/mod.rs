// src/gui/components/mod.rs
//
// Reusable widgets. Components lay out controls and call into `actions`;
// they hold no state of their own.

pub mod data_table;
pub mod metric;
pub mod nav;
pub mod upload_bar;
