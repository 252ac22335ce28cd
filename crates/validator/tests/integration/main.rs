//! Integration tests for fieldrules
//!
//! Each module drives the public API through `#[derive(Record)]` types.

mod derive;
mod properties;
mod report;
