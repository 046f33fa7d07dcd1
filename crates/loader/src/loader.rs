//! Truck loading orchestrator.

use truckload_core::solver::{Config, Solver};
use truckload_core::{
    utilization_percent, LoadRequest, PackingReport, PlacedBox, PlacementStats, Result, TruckBed,
    UnplacedBox, UnplacedReason,
};

use crate::layout::generate_placements;
use crate::search::find_best_row_config;
use crate::shelf::ShelfPacker;
use crate::stacking::assign_stacking;

/// Plans a load for the standard truck bed.
///
/// Standard boxes are laid in rows from the front of the truck; custom boxes
/// are shelf-packed into whatever length the rows leave free.
#[derive(Debug, Clone)]
pub struct TruckLoader {
    config: Config,
    bed: TruckBed,
}

impl TruckLoader {
    /// Creates a new loader with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            bed: TruckBed::standard(),
        }
    }

    /// Creates a loader with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the truck bed being loaded.
    pub fn bed(&self) -> &TruckBed {
        &self.bed
    }

    /// Places the standard families. Returns floor boxes, stacked boxes and
    /// the number of standard boxes left behind.
    fn load_standard(&self, request: &LoadRequest) -> (Vec<PlacedBox>, Vec<PlacedBox>, usize) {
        if request.standard_requested() == 0 {
            return (Vec::new(), Vec::new(), 0);
        }

        let config = find_best_row_config(
            request.american,
            request.european,
            &self.bed,
            self.config.tolerance,
        );
        let floor = generate_placements(&config, request.american, request.european);
        let stacking = assign_stacking(&floor, request.american, request.european);

        (floor, stacking.stacked, stacking.not_placed)
    }
}

impl Default for TruckLoader {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Solver for TruckLoader {
    fn solve(&self, request: &LoadRequest) -> Result<PackingReport> {
        request.validate()?;

        let total_requested = request.total_requested();
        if total_requested == 0 {
            return Ok(PackingReport::empty(&self.bed));
        }

        let (standard_floor, standard_stacked, standard_not_placed) = self.load_standard(request);

        let used_length = standard_floor
            .iter()
            .map(PlacedBox::end_y)
            .fold(0.0, f64::max);

        let packer = ShelfPacker::new(
            self.bed.width(),
            self.bed.length() - used_length,
            self.config.tolerance,
        );
        let mut custom = packer.pack(&request.custom);
        for b in custom.floor.iter_mut().chain(custom.stacked.iter_mut()) {
            b.shift_y(used_length);
        }

        let custom_not_placed = custom
            .counts
            .values()
            .map(|c| c.not_placed())
            .fold(0, usize::saturating_add);

        let mut placed = Vec::with_capacity(
            standard_floor.len() + custom.floor.len() + standard_stacked.len() + custom.stacked.len(),
        );
        placed.extend(standard_floor);
        placed.extend(custom.floor);
        placed.extend(standard_stacked);
        placed.extend(custom.stacked);

        let stats = PlacementStats::from_placements(&placed);
        for (kind, counts) in &stats.per_kind {
            log::debug!("{}: {} on floor, {} stacked", kind, counts.floor, counts.stacked);
        }

        // Requested totals saturate, so the shortfall is capped by them.
        let not_placed = standard_not_placed
            .saturating_add(custom_not_placed)
            .min(total_requested.saturating_sub(stats.total()));

        let report = PackingReport {
            floor_count: stats.floor_count,
            stacked_count: stats.stacked_count,
            total_placed: stats.total(),
            not_placed,
            total_requested,
            truck_width: self.bed.width(),
            truck_length: self.bed.length(),
            utilization: utilization_percent(stats.floor_area, &self.bed),
            custom_counts: custom.counts,
            unplaced: custom.unplaced,
            placed,
        };

        log::info!(
            "loaded {}/{} boxes ({} floor, {} stacked), {} used, {:.2} m of rows",
            report.total_placed,
            report.total_requested,
            report.floor_count,
            report.stacked_count,
            report.utilization_percent(),
            used_length
        );
        if report.not_placed > 0 {
            let too_large = report
                .unplaced
                .iter()
                .filter(|u| u.reason == UnplacedReason::TooLarge)
                .fold(0, |n: usize, u| n.saturating_add(u.count));
            log::warn!(
                "{} boxes could not be loaded ({} standard, {} custom, {} too large)",
                report.not_placed,
                standard_not_placed,
                custom_not_placed,
                too_large
            );
        }

        Ok(report)
    }
}

/// Returns the unplaced custom runs of `report` that do not fit the truck
/// at all.
pub fn oversized(report: &PackingReport) -> impl Iterator<Item = &UnplacedBox> {
    report
        .unplaced
        .iter()
        .filter(|u| u.reason == UnplacedReason::TooLarge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use truckload_core::{BoxFamily, BoxKind, CustomBoxType, Error};

    fn solve(request: &LoadRequest) -> PackingReport {
        TruckLoader::default_config().solve(request).unwrap()
    }

    #[test]
    fn test_loader_creation() {
        let loader = TruckLoader::default_config();
        assert_eq!(loader.config().tolerance, 1e-6);
        assert_eq!(loader.bed().width(), 2.4);

        let loader = TruckLoader::new(Config::new().with_tolerance(1e-4));
        assert_eq!(loader.config().tolerance, 1e-4);
    }

    #[test]
    fn test_empty_request() {
        let report = solve(&LoadRequest::new());
        assert!(report.placed.is_empty());
        assert_eq!(report.total_requested, 0);
        assert_eq!(report.utilization, 0.0);
        assert_eq!(report.truck_length, 13.2);
    }

    #[test]
    fn test_two_american_boxes() {
        let report = solve(&LoadRequest::new().with_american(0, 2));

        assert_eq!(report.floor_count, 2);
        assert_eq!(report.stacked_count, 0);
        assert_eq!(report.not_placed, 0);
        assert_eq!(report.utilization, 7.6);
        assert_eq!((report.placed[0].x, report.placed[0].y), (0.0, 0.0));
        assert_eq!((report.placed[1].x, report.placed[1].y), (1.2, 0.0));
        assert!(report
            .placed
            .iter()
            .all(|b| b.kind == BoxKind::Standard(BoxFamily::American)));
    }

    #[test]
    fn test_custom_only_starts_at_front() {
        let request =
            LoadRequest::new().with_custom(CustomBoxType::new("c1", "Crate", 1.0, 1.0).with_stackable(1));
        let report = solve(&request);

        assert_eq!(report.floor_count, 1);
        assert_eq!((report.placed[0].x, report.placed[0].y), (0.0, 0.0));
        assert_eq!(report.utilization, 3.2);
        assert_eq!(report.custom_counts["c1"].floor, 1);
    }

    #[test]
    fn test_custom_shifted_behind_rows() {
        let request = LoadRequest::new()
            .with_american(4, 0)
            .with_custom(
                CustomBoxType::new("a", "Alpha", 2.0, 0.5)
                    .with_stackable(3)
                    .with_non_stackable(1),
            )
            .with_custom(CustomBoxType::new("b", "Beta", 0.6, 1.5).with_stackable(2));
        let report = solve(&request);

        let alpha_ys: Vec<f64> = report
            .floor_boxes()
            .filter(|b| b.kind.as_str() == "a")
            .map(|b| b.y)
            .collect();
        assert_eq!(alpha_ys.len(), 4);
        for (y, expected) in alpha_ys.iter().zip([2.0, 2.5, 3.0, 3.5]) {
            assert_relative_eq!(*y, expected, epsilon = 1e-9);
        }

        let beta: Vec<&PlacedBox> = report.floor_boxes().filter(|b| b.kind.as_str() == "b").collect();
        assert_eq!(beta.len(), 2);
        assert_relative_eq!(beta[0].y, 4.0, epsilon = 1e-9);
        assert_relative_eq!(beta[1].x, 0.6, epsilon = 1e-9);

        assert_eq!(report.utilization, 33.5);
        assert_eq!(report.total_placed, 10);
    }

    #[test]
    fn test_placed_order_floor_before_stacked() {
        let request = LoadRequest::new()
            .with_american(30, 0)
            .with_custom(CustomBoxType::new("p", "Pallet", 2.4, 6.0).with_stackable(1));
        let report = solve(&request);

        let first_stacked = report
            .placed
            .iter()
            .position(|b| b.stacked)
            .unwrap();
        assert!(report.placed[..first_stacked].iter().all(|b| !b.stacked));
        assert!(report.placed[first_stacked..].iter().all(|b| b.stacked));
        assert_eq!(report.stacked_count, 4);
        assert_eq!(report.custom_counts["p"].not_placed(), 1);
        assert_eq!(report.not_placed, 1);
    }

    #[test]
    fn test_too_large_reported() {
        let request =
            LoadRequest::new().with_custom(CustomBoxType::new("w", "Wide", 2.5, 2.5).with_stackable(2));
        let report = solve(&request);

        assert_eq!(report.total_placed, 0);
        assert_eq!(report.not_placed, 2);
        assert_eq!(oversized(&report).map(|u| u.count).sum::<usize>(), 2);
        assert_eq!(oversized(&report).count(), 1);
        assert_eq!(report.utilization, 0.0);
    }

    #[test]
    fn test_utilization_tie_rounds_to_even() {
        // 0.396 square meters is exactly 1.25 percent of the bed.
        let request = LoadRequest::new()
            .with_custom(CustomBoxType::new("t", "Thin", 0.12, 3.3).with_stackable(1));
        let report = solve(&request);

        assert_eq!(report.floor_count, 1);
        assert_eq!(report.utilization, 1.2);
        assert_eq!(report.utilization_percent(), "1.2%");
    }

    #[test]
    fn test_huge_counts_saturate() {
        let huge = LoadRequest::new()
            .with_american(usize::MAX / 2, 1)
            .with_european(usize::MAX / 2, 1);
        let bounded = LoadRequest::new().with_american(1000, 1).with_european(1000, 1);

        let report = solve(&huge);
        assert_eq!(report.placed, solve(&bounded).placed);
        assert_eq!(report.total_requested, usize::MAX);
        assert_eq!(report.not_placed, usize::MAX - report.total_placed);
    }

    #[test]
    fn test_invalid_request_rejected() {
        let request =
            LoadRequest::new().with_custom(CustomBoxType::new("bad", "Bad", 0.0, 1.0).with_stackable(1));
        let err = TruckLoader::default_config().solve(&request).unwrap_err();
        assert!(matches!(err, Error::InvalidBox(_)));
    }
}
