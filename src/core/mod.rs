// src/core/mod.rs

pub mod markup;
pub mod net;
pub mod sanitize;
pub mod xml;

pub use markup::{Document, Tree};
pub use net::{Fetch, FetchError, HttpClient, HttpResponse};
