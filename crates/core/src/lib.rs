//! # Truckload Core
//!
//! Shared types for the truckload loading planner.
//!
//! This crate provides the domain model used by the loader and by callers:
//!
//! - **Geometry**: [`TruckBed`], [`BoxFamily`], [`BoxKind`] and the named
//!   footprint constants the standard row patterns are derived from
//! - **Placements**: [`PlacedBox`] and [`PlacementStats`]
//! - **Requests**: [`Inventory`], [`CustomBoxType`], [`LoadRequest`]
//! - **Reports**: [`PackingReport`], [`CustomCount`], [`UnplacedBox`]
//! - **Solver trait**: [`Solver`] with its [`Config`]
//!
//! ## Example
//!
//! ```rust
//! use truckload_core::{CustomBoxType, LoadRequest};
//!
//! let request = LoadRequest::new()
//!     .with_american(4, 2)
//!     .with_european(6, 0)
//!     .with_custom(CustomBoxType::new("drum", "Drum", 0.6, 0.6).with_stackable(3));
//!
//! assert!(request.validate().is_ok());
//! assert_eq!(request.total_requested(), 15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod inventory;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{
    BoxFamily, BoxKind, TruckBed, AMERICAN_DEPTH, AMERICAN_WIDTH, EUROPEAN_LONG, EUROPEAN_SHORT,
    TRUCK_LENGTH, TRUCK_WIDTH,
};
pub use inventory::{CustomBoxType, Inventory, LoadRequest};
pub use placement::{KindCounts, PlacedBox, PlacementStats};
pub use result::{utilization_percent, CustomCount, PackingReport, UnplacedBox, UnplacedReason};
pub use solver::{Config, Solver, DEFAULT_TOLERANCE};
