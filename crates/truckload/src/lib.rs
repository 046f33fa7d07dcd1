//! # Truckload
//!
//! Loading planner for a flat truck bed of 2.4 × 13.2.
//!
//! This crate plans where boxes go:
//! - **Standard boxes**: American (1.2 × 1.0) and European (1.2 × 0.8) boxes
//!   laid in rows across the truck, with optional second-layer stacking
//! - **Custom boxes**: arbitrary rectangles shelf-packed into the length the
//!   rows leave free
//!
//! ## Quick Start
//!
//! ```rust
//! use truckload::loader::TruckLoader;
//! use truckload::{CustomBoxType, LoadRequest, Solver};
//!
//! let request = LoadRequest::new()
//!     .with_american(4, 0)
//!     .with_european(0, 3)
//!     .with_custom(CustomBoxType::new("crate", "Crate", 1.0, 1.0).with_stackable(2));
//!
//! let report = TruckLoader::default_config().solve(&request)?;
//! assert_eq!(report.total_placed + report.not_placed, report.total_requested);
//! # Ok::<(), truckload::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `loader` (default): loading algorithms
//! - `serde`: Serialization support

/// Core types and abstractions.
pub use truckload_core as core;

/// Loading algorithms.
#[cfg(feature = "loader")]
pub use truckload_loader as loader;

// Re-export commonly used types at root level
pub use truckload_core::{
    Config, CustomBoxType, Error, LoadRequest, PackingReport, PlacedBox, Result, Solver,
};
