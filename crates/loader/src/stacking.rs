//! Second-layer stacking rules.
//!
//! Rules shared by standard and custom boxes:
//!
//! - Non-stackable boxes take floor slots first; stackable boxes fill the rest.
//! - A stacked box must be stackable and rests on a stackable floor box of the
//!   same kind, with identical footprint.
//! - Each floor box carries at most one stacked box.

use truckload_core::{BoxFamily, BoxKind, Inventory, PlacedBox};

/// How a type's floor slots are shared out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorSplit {
    /// Non-stackable boxes on the floor.
    pub non_stackable: usize,
    /// Stackable boxes on the floor; these are the possible bases.
    pub stackable: usize,
    /// Stackable boxes that did not get a floor slot.
    pub stackable_left: usize,
}

impl FloorSplit {
    /// Splits `floor_slots` between the non-stackable and stackable boxes of
    /// `inventory`, non-stackable first.
    pub fn new(floor_slots: usize, inventory: Inventory) -> Self {
        let non_stackable = inventory.non_stackable.min(floor_slots);
        let stackable = (floor_slots - non_stackable).min(inventory.stackable);
        Self {
            non_stackable,
            stackable,
            stackable_left: inventory.stackable - stackable,
        }
    }

    /// Number of boxes that can ride on the stackable floor boxes.
    pub fn stackable_on_top(&self) -> usize {
        self.stackable_left.min(self.stackable)
    }
}

/// Extra boxes a floor allocation can carry on top.
///
/// `floor_slots` is the number of floor positions the type receives, already
/// capped at its inventory.
pub fn stacking_bonus(floor_slots: usize, inventory: Inventory) -> usize {
    FloorSplit::new(floor_slots, inventory).stackable_on_top()
}

/// Stacks the left-over stackable boxes of `kind` onto its floor boxes.
///
/// Bases are the stackable floor boxes of `kind`, earliest placed first.
pub fn stack_kind(floor: &[PlacedBox], kind: &BoxKind, inventory: Inventory) -> Vec<PlacedBox> {
    let floor_total = floor
        .iter()
        .filter(|b| !b.stacked && &b.kind == kind)
        .count();
    let to_stack = FloorSplit::new(floor_total, inventory).stackable_left;

    floor
        .iter()
        .filter(|b| !b.stacked && b.stackable && &b.kind == kind)
        .take(to_stack)
        .map(PlacedBox::stacked_on)
        .collect()
}

/// Stacked boxes and shortfall for the standard families.
#[derive(Debug, Clone, Default)]
pub struct StackingOutcome {
    /// New stacked boxes, American first, each family in base order.
    pub stacked: Vec<PlacedBox>,
    /// Standard boxes that are neither on the floor nor stacked.
    pub not_placed: usize,
}

/// Adds the second layer for both standard families.
pub fn assign_stacking(floor: &[PlacedBox], american: Inventory, european: Inventory) -> StackingOutcome {
    let mut outcome = StackingOutcome::default();

    for family in BoxFamily::ALL {
        let inventory = match family {
            BoxFamily::American => american,
            BoxFamily::European => european,
        };
        let kind = BoxKind::Standard(family);

        let on_floor = floor.iter().filter(|b| b.kind == kind).count();
        let stacked = stack_kind(floor, &kind, inventory);

        log::debug!(
            "{}: {} on floor, {} stacked of {} requested",
            family,
            on_floor,
            stacked.len(),
            inventory.total()
        );

        outcome.not_placed = outcome
            .not_placed
            .saturating_add(inventory.total().saturating_sub(on_floor + stacked.len()));
        outcome.stacked.extend(stacked);
    }

    outcome
}
