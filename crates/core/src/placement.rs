//! Placed boxes and placement statistics.

use std::collections::BTreeMap;

use crate::geometry::BoxKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box positioned on the truck bed, either on the floor or stacked.
///
/// A stacked box always has the same rectangle and kind as the stackable
/// floor box it rests on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedBox {
    /// Position across the truck width.
    pub x: f64,

    /// Position along the truck length.
    pub y: f64,

    /// Extent across the truck width.
    pub w: f64,

    /// Extent along the truck length.
    pub h: f64,

    /// Standard family or custom type id.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: BoxKind,

    /// Whether the box may carry, or be, a stacked box.
    pub stackable: bool,

    /// Whether the box sits on top of another box.
    pub stacked: bool,
}

impl PlacedBox {
    /// Creates a box resting on the floor.
    pub fn floor(x: f64, y: f64, w: f64, h: f64, kind: BoxKind, stackable: bool) -> Self {
        Self {
            x,
            y,
            w,
            h,
            kind,
            stackable,
            stacked: false,
        }
    }

    /// Creates the stacked box carried by `base`.
    pub fn stacked_on(base: &PlacedBox) -> Self {
        Self {
            stackable: true,
            stacked: true,
            ..base.clone()
        }
    }

    /// Returns the footprint area.
    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Returns the far edge along the truck length.
    pub fn end_y(&self) -> f64 {
        self.y + self.h
    }

    /// Returns true if `other` occupies exactly the same rectangle.
    pub fn same_footprint(&self, other: &PlacedBox) -> bool {
        self.x == other.x && self.y == other.y && self.w == other.w && self.h == other.h
    }

    /// Returns true if the interiors of the two rectangles intersect.
    ///
    /// Rectangles that only touch along an edge (within `tolerance`) do not
    /// overlap.
    pub fn overlaps(&self, other: &PlacedBox, tolerance: f64) -> bool {
        self.x + tolerance < other.x + other.w
            && other.x + tolerance < self.x + self.w
            && self.y + tolerance < other.y + other.h
            && other.y + tolerance < self.y + self.h
    }

    /// Moves the box along the truck length.
    pub fn shift_y(&mut self, offset: f64) {
        self.y += offset;
    }
}

/// Floor and stacked counts for one box kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindCounts {
    /// Boxes on the floor.
    pub floor: usize,
    /// Boxes on top of another box.
    pub stacked: usize,
}

/// Placement statistics for a set of placed boxes.
#[derive(Debug, Clone, Default)]
pub struct PlacementStats {
    /// Boxes on the floor.
    pub floor_count: usize,
    /// Boxes on top of another box.
    pub stacked_count: usize,
    /// Summed footprint of floor boxes. Stacked boxes add no floor area.
    pub floor_area: f64,
    /// Counts keyed by kind tag.
    pub per_kind: BTreeMap<String, KindCounts>,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements(placements: &[PlacedBox]) -> Self {
        let mut stats = Self::default();

        for p in placements {
            let entry = stats.per_kind.entry(p.kind.as_str().to_string()).or_default();
            if p.stacked {
                stats.stacked_count += 1;
                entry.stacked += 1;
            } else {
                stats.floor_count += 1;
                stats.floor_area += p.area();
                entry.floor += 1;
            }
        }

        stats
    }

    /// Returns the total number of boxes loaded.
    pub fn total(&self) -> usize {
        self.floor_count + self.stacked_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoxFamily;
    use approx::assert_relative_eq;

    fn american(x: f64, y: f64, stackable: bool) -> PlacedBox {
        PlacedBox::floor(x, y, 1.2, 1.0, BoxFamily::American.into(), stackable)
    }

    #[test]
    fn test_stacked_on_copies_geometry() {
        let base = american(1.2, 3.0, true);
        let top = PlacedBox::stacked_on(&base);

        assert!(top.stacked);
        assert!(top.stackable);
        assert!(top.same_footprint(&base));
        assert_eq!(top.kind, base.kind);
    }

    #[test]
    fn test_overlap_edges_do_not_count() {
        let a = american(0.0, 0.0, true);
        let right = american(1.2, 0.0, true);
        let behind = american(0.0, 1.0, true);
        let shifted = american(0.6, 0.5, true);

        assert!(!a.overlaps(&right, 1e-6));
        assert!(!a.overlaps(&behind, 1e-6));
        assert!(a.overlaps(&shifted, 1e-6));
        assert!(shifted.overlaps(&a, 1e-6));
    }

    #[test]
    fn test_shift_y() {
        let mut b = american(0.0, 0.5, false);
        b.shift_y(2.0);
        assert_relative_eq!(b.y, 2.5);
        assert_relative_eq!(b.end_y(), 3.5);
    }

    #[test]
    fn test_placement_stats() {
        let base = american(0.0, 0.0, true);
        let placements = vec![
            base.clone(),
            american(1.2, 0.0, false),
            PlacedBox::floor(0.0, 1.0, 1.0, 1.0, BoxKind::Custom("c".into()), true),
            PlacedBox::stacked_on(&base),
        ];

        let stats = PlacementStats::from_placements(&placements);
        assert_eq!(stats.floor_count, 3);
        assert_eq!(stats.stacked_count, 1);
        assert_eq!(stats.total(), 4);
        assert_relative_eq!(stats.floor_area, 3.4, epsilon = 1e-9);
        assert_eq!(
            stats.per_kind.get("american"),
            Some(&KindCounts {
                floor: 2,
                stacked: 1
            })
        );
        assert_eq!(stats.per_kind.get("c").map(|c| c.floor), Some(1));
    }
}
