//! Loading plan report.

use std::collections::BTreeMap;

use crate::geometry::TruckBed;
use crate::placement::PlacedBox;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-type accounting for a custom box type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CustomCount {
    /// Instances placed on the floor.
    pub floor: usize,
    /// Instances stacked on a floor instance.
    pub stacked: usize,
    /// Instances requested.
    pub requested: usize,
    /// Display name of the type.
    pub name: String,
    /// First side as given by the caller.
    pub width: f64,
    /// Second side as given by the caller.
    pub length: f64,
}

impl CustomCount {
    /// Returns the number of instances that could not be loaded.
    pub fn not_placed(&self) -> usize {
        self.requested
            .saturating_sub(self.floor.saturating_add(self.stacked))
    }
}

/// Why a custom box instance was left off the truck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnplacedReason {
    /// No orientation fits the truck width and the free length, even empty.
    TooLarge,
    /// The box would fit the free region, but the shelves left no room for it.
    NoSpace,
}

/// A run of identical custom box instances that were neither placed on the
/// floor nor stacked.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnplacedBox {
    /// Custom type id.
    pub type_id: String,
    /// Whether the instances were stackable.
    pub stackable: bool,
    /// Number of instances in the run.
    pub count: usize,
    /// Why they did not fit.
    pub reason: UnplacedReason,
}

/// Result of planning one load.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingReport {
    /// Floor boxes first, then stacked boxes.
    pub placed: Vec<PlacedBox>,

    /// Boxes on the floor.
    pub floor_count: usize,

    /// Boxes on top of a floor box.
    pub stacked_count: usize,

    /// `floor_count + stacked_count`.
    pub total_placed: usize,

    /// Requested boxes that could not be loaded.
    pub not_placed: usize,

    /// Boxes requested across standard and custom types.
    pub total_requested: usize,

    /// Truck bed width.
    pub truck_width: f64,

    /// Truck bed length.
    pub truck_length: f64,

    /// Floor coverage in percent, rounded to one decimal.
    pub utilization: f64,

    /// Accounting per custom type id.
    pub custom_counts: BTreeMap<String, CustomCount>,

    /// Custom instances left off the truck, with the reason.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub unplaced: Vec<UnplacedBox>,
}

impl PackingReport {
    /// Creates the report for a request with nothing to load.
    pub fn empty(bed: &TruckBed) -> Self {
        Self {
            placed: Vec::new(),
            floor_count: 0,
            stacked_count: 0,
            total_placed: 0,
            not_placed: 0,
            total_requested: 0,
            truck_width: bed.width(),
            truck_length: bed.length(),
            utilization: 0.0,
            custom_counts: BTreeMap::new(),
            unplaced: Vec::new(),
        }
    }

    /// Iterates over the boxes resting on the floor.
    pub fn floor_boxes(&self) -> impl Iterator<Item = &PlacedBox> {
        self.placed.iter().filter(|b| !b.stacked)
    }

    /// Iterates over the stacked boxes.
    pub fn stacked_boxes(&self) -> impl Iterator<Item = &PlacedBox> {
        self.placed.iter().filter(|b| b.stacked)
    }

    /// Returns the length consumed along the truck by floor boxes.
    pub fn used_length(&self) -> f64 {
        self.floor_boxes().map(PlacedBox::end_y).fold(0.0, f64::max)
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization)
    }
}

/// Floor coverage of `bed` in percent, rounded to one decimal place.
///
/// Rounding works on the exact decimal expansion of the percentage with ties
/// going to the even digit, so 1.25 becomes 1.2.
pub fn utilization_percent(floor_area: f64, bed: &TruckBed) -> f64 {
    let percent = floor_area / bed.area() * 100.0;
    format!("{:.1}", percent)
        .parse()
        .unwrap_or(percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoxFamily;

    #[test]
    fn test_empty_report() {
        let report = PackingReport::empty(&TruckBed::standard());
        assert!(report.placed.is_empty());
        assert_eq!(report.total_placed, 0);
        assert_eq!(report.truck_width, 2.4);
        assert_eq!(report.truck_length, 13.2);
        assert_eq!(report.utilization, 0.0);
        assert!(report.custom_counts.is_empty());
        assert_eq!(report.not_placed, 0);
        assert_eq!(report.used_length(), 0.0);
    }

    #[test]
    fn test_utilization_rounding() {
        let bed = TruckBed::standard();
        // Two American boxes cover 2.4 of 31.68 square meters.
        assert_eq!(utilization_percent(2.4, &bed), 7.6);
        assert_eq!(utilization_percent(bed.area(), &bed), 100.0);
        assert_eq!(utilization_percent(0.0, &bed), 0.0);
    }

    #[test]
    fn test_utilization_ties_to_even() {
        let bed = TruckBed::standard();
        // 0.396 of 31.68 is exactly 1.25 percent.
        assert_eq!(utilization_percent(0.12 * 3.3, &bed), 1.2);
        // 1.188 of 31.68 is 3.75 percent.
        assert_eq!(utilization_percent(1.188, &bed), 3.8);
    }

    #[test]
    fn test_floor_and_stacked_iterators() {
        let mut report = PackingReport::empty(&TruckBed::standard());
        let base = PlacedBox::floor(0.0, 0.0, 1.2, 1.0, BoxFamily::American.into(), true);
        report.placed = vec![base.clone(), PlacedBox::stacked_on(&base)];

        assert_eq!(report.floor_boxes().count(), 1);
        assert_eq!(report.stacked_boxes().count(), 1);
        assert_eq!(report.used_length(), 1.0);
        assert_eq!(report.utilization_percent(), "0.0%");
    }

    #[test]
    fn test_custom_count_shortfall() {
        let count = CustomCount {
            floor: 4,
            stacked: 1,
            requested: 8,
            name: "Big".into(),
            width: 3.0,
            length: 2.0,
        };
        assert_eq!(count.not_placed(), 3);
    }
}
