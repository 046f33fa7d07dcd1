//! Command-line front end for the truckload planner.
//!
//! This crate provides:
//! - JSON request decoding with per-family count overrides
//! - Report rendering and summaries for the terminal

mod request;
mod summary;

pub use request::{parse_request, CountOverrides, PackRequest};
pub use summary::{pattern_table, render_report, summary_line};
