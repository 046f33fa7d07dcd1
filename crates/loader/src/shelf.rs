//! Shelf packing for custom box types.
//!
//! Boxes are laid left to right on shelves: horizontal strips across the
//! truck whose depth is set by the box that opened them. This is a greedy
//! first-fit heuristic; the order of shelves and the order in which
//! orientations and shelves are tried determine the result.

use std::collections::BTreeMap;

use truckload_core::{
    BoxKind, CustomBoxType, CustomCount, PlacedBox, UnplacedBox, UnplacedReason,
};

use crate::stacking::stack_kind;

/// A strip of the region holding boxes left to right.
#[derive(Debug, Clone)]
struct Shelf {
    /// Start along the region length.
    y: f64,
    /// Depth of the strip, fixed by the box that opened it.
    height: f64,
    /// Width already taken, measured from `x = 0`.
    used_width: f64,
}

/// Identical box instances waiting to be packed.
#[derive(Debug, Clone, Copy)]
struct Run {
    type_idx: usize,
    stackable: bool,
    count: usize,
}

/// Result of packing custom boxes into a region.
#[derive(Debug, Clone, Default)]
pub struct ShelfOutcome {
    /// Floor boxes in placement order, in region coordinates.
    pub floor: Vec<PlacedBox>,
    /// Stacked boxes, grouped by type in input order.
    pub stacked: Vec<PlacedBox>,
    /// Accounting per type id.
    pub counts: BTreeMap<String, CustomCount>,
    /// Instances neither on the floor nor stacked, at most one record per
    /// type and stackability.
    pub unplaced: Vec<UnplacedBox>,
    /// Shelves opened.
    pub shelves: usize,
}

/// Packs custom boxes into a `width` × `length` region starting at the origin.
#[derive(Debug, Clone)]
pub struct ShelfPacker {
    width: f64,
    length: f64,
    tolerance: f64,
}

impl ShelfPacker {
    /// Creates a packer for the given region.
    pub fn new(width: f64, length: f64, tolerance: f64) -> Self {
        Self {
            width,
            length,
            tolerance,
        }
    }

    /// Returns the region width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the region length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Packs every instance of `types`, then stacks left-over stackable
    /// instances per type.
    ///
    /// Non-stackable instances of all types are packed before any stackable
    /// instance; within each group types keep their input order.
    pub fn pack(&self, types: &[CustomBoxType]) -> ShelfOutcome {
        let mut outcome = ShelfOutcome::default();

        for ct in types {
            outcome.counts.insert(
                ct.id.clone(),
                CustomCount {
                    floor: 0,
                    stacked: 0,
                    requested: ct.requested(),
                    name: ct.name.clone(),
                    width: ct.width,
                    length: ct.length,
                },
            );
        }

        let mut shelves: Vec<Shelf> = Vec::new();
        let mut cursor = 0.0;

        // A miss leaves the shelves untouched, so every later instance of the
        // same run misses too and the rest of the run is skipped.
        for run in Self::runs(types) {
            let ct = &types[run.type_idx];
            let mut placed = 0;
            while placed < run.count {
                match self.place(ct, run.stackable, &mut shelves, &mut cursor) {
                    Some(b) => {
                        outcome.floor.push(b);
                        placed += 1;
                    }
                    None => break,
                }
            }

            if let Some(count) = outcome.counts.get_mut(&ct.id) {
                count.floor += placed;
            }
            if placed < run.count {
                outcome.unplaced.push(UnplacedBox {
                    type_id: ct.id.clone(),
                    stackable: run.stackable,
                    count: run.count - placed,
                    reason: self.miss_reason(ct),
                });
            }
        }

        for ct in types {
            let stacked = stack_kind(&outcome.floor, &BoxKind::Custom(ct.id.clone()), ct.inventory());
            if stacked.is_empty() {
                continue;
            }

            if let Some(idx) = outcome
                .unplaced
                .iter()
                .position(|miss| miss.stackable && miss.type_id == ct.id)
            {
                let miss = &mut outcome.unplaced[idx];
                miss.count = miss.count.saturating_sub(stacked.len());
                if miss.count == 0 {
                    outcome.unplaced.remove(idx);
                }
            }

            if let Some(count) = outcome.counts.get_mut(&ct.id) {
                count.stacked = stacked.len();
            }
            outcome.stacked.extend(stacked);
        }

        outcome.shelves = shelves.len();
        log::debug!(
            "shelf packing: {} shelves, {} on floor, {} stacked, {} unplaced in {:.2} m",
            outcome.shelves,
            outcome.floor.len(),
            outcome.stacked.len(),
            outcome.unplaced.iter().fold(0usize, |n, u| n.saturating_add(u.count)),
            self.length
        );

        outcome
    }

    /// Groups instances into runs: all non-stackable first, then all
    /// stackable, types in input order within each group.
    fn runs(types: &[CustomBoxType]) -> impl Iterator<Item = Run> + '_ {
        let group = move |stackable: bool| {
            types.iter().enumerate().map(move |(type_idx, ct)| Run {
                type_idx,
                stackable,
                count: if stackable {
                    ct.stackable
                } else {
                    ct.non_stackable
                },
            })
        };
        group(false).chain(group(true)).filter(|run| run.count > 0)
    }

    /// Places one instance, or returns `None` if it fits nowhere.
    ///
    /// For each orientation in turn: the first existing shelf that is deep
    /// enough and has width left takes the box; otherwise a new shelf is
    /// opened at `cursor` if the region still has the length for it. Only
    /// if neither works is the next orientation tried.
    fn place(
        &self,
        ct: &CustomBoxType,
        stackable: bool,
        shelves: &mut Vec<Shelf>,
        cursor: &mut f64,
    ) -> Option<PlacedBox> {
        let tol = self.tolerance;

        for (w, h) in ct.orientations() {
            if w > self.width + tol || h > self.length + tol {
                continue;
            }

            for shelf in shelves.iter_mut() {
                if h > shelf.height + tol {
                    continue;
                }
                if shelf.used_width + w <= self.width + tol {
                    let x = shelf.used_width;
                    shelf.used_width += w;
                    return Some(PlacedBox::floor(
                        x,
                        shelf.y,
                        w,
                        h,
                        BoxKind::Custom(ct.id.clone()),
                        stackable,
                    ));
                }
            }

            if *cursor + h <= self.length + tol {
                let y = *cursor;
                shelves.push(Shelf {
                    y,
                    height: h,
                    used_width: w,
                });
                *cursor += h;
                return Some(PlacedBox::floor(
                    0.0,
                    y,
                    w,
                    h,
                    BoxKind::Custom(ct.id.clone()),
                    stackable,
                ));
            }
        }

        None
    }

    fn miss_reason(&self, ct: &CustomBoxType) -> UnplacedReason {
        let tol = self.tolerance;
        let fits_empty = ct
            .orientations()
            .iter()
            .any(|&(w, h)| w <= self.width + tol && h <= self.length + tol);

        if fits_empty {
            UnplacedReason::NoSpace
        } else {
            UnplacedReason::TooLarge
        }
    }
}
