//! # Truckload Loader
//!
//! Loading algorithms for the truckload planner.
//!
//! Standard American and European boxes are laid in rows across the truck:
//!
//! - **Patterns**: the row layouts that tile the truck width ([`RowPattern`])
//! - **Search**: exhaustive search over row counts with a greedy top-up
//!   ([`find_best_row_config`])
//! - **Layout**: positions for every floor box of a configuration
//!   ([`generate_placements`])
//! - **Stacking**: second-layer assignment ([`assign_stacking`])
//!
//! Custom box types are shelf-packed into the remaining length
//! ([`ShelfPacker`]). [`TruckLoader`] ties the stages together and produces
//! a [`PackingReport`].
//!
//! ## Example
//!
//! ```rust
//! use truckload_loader::{LoadRequest, Solver, TruckLoader};
//!
//! let request = LoadRequest::new().with_american(0, 2);
//! let report = TruckLoader::default_config().solve(&request).unwrap();
//!
//! assert_eq!(report.floor_count, 2);
//! assert_eq!(report.utilization, 7.6);
//! ```

pub mod layout;
pub mod loader;
pub mod patterns;
pub mod search;
pub mod shelf;
pub mod stacking;

// Re-exports
pub use layout::generate_placements;
pub use loader::{oversized, TruckLoader};
pub use patterns::{greedy_fill, RowPattern, RowSlot};
pub use search::{find_best_row_config, RowConfig, Score};
pub use shelf::{ShelfOutcome, ShelfPacker};
pub use stacking::{assign_stacking, stacking_bonus, FloorSplit, StackingOutcome};
pub use truckload_core::{
    BoxFamily, BoxKind, Config, CustomBoxType, CustomCount, Error, Inventory, LoadRequest,
    PackingReport, PlacedBox, Result, Solver, TruckBed, UnplacedBox, UnplacedReason,
};
