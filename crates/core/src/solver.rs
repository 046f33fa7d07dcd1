//! Solver trait and configuration.

use crate::inventory::LoadRequest;
use crate::result::PackingReport;
use crate::Result;

/// Default slack for floating-point fit tests, in meters.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Common configuration for loaders.
///
/// The truck bed is not part of the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Slack used when testing whether a length or width fits.
    pub tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fit tolerance. Negative values are treated as zero.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }
}

/// Trait for truck loading solvers.
pub trait Solver {
    /// Computes a loading plan for the request.
    ///
    /// Fails only on malformed requests; boxes that do not fit are reported
    /// in the returned plan.
    fn solve(&self, request: &LoadRequest) -> Result<PackingReport>;
}
