//! Turns a row configuration into positioned floor boxes.

use truckload_core::{BoxFamily, Inventory, PlacedBox};

use crate::search::RowConfig;

/// Floor assignment for one family, consumed in placement order.
///
/// The first `non_stackable` boxes handed out are non-stackable, the rest
/// stackable, so non-stackable boxes always get floor room first.
#[derive(Debug, Clone)]
struct FloorQueue {
    non_stackable: usize,
    len: usize,
    next: usize,
}

impl FloorQueue {
    fn new(capacity: usize, inventory: Inventory) -> Self {
        let len = capacity.min(inventory.total());
        Self {
            non_stackable: inventory.non_stackable.min(len),
            len,
            next: 0,
        }
    }

    /// Returns the stackability of the next box, or `None` once every box
    /// assigned to the floor has been handed out.
    fn pop(&mut self) -> Option<bool> {
        if self.next >= self.len {
            return None;
        }
        let stackable = self.next >= self.non_stackable;
        self.next += 1;
        Some(stackable)
    }
}

/// Lays out the floor boxes of `config`.
///
/// Rows are emitted in [`RowConfig::rows`] order starting at `y = 0`, boxes
/// left to right inside a row. A slot is left empty if its family has no
/// box assigned to it.
pub fn generate_placements(
    config: &RowConfig,
    american: Inventory,
    european: Inventory,
) -> Vec<PlacedBox> {
    let mut american_queue = FloorQueue::new(config.floor_slots(BoxFamily::American), american);
    let mut european_queue = FloorQueue::new(config.floor_slots(BoxFamily::European), european);

    let mut placed = Vec::with_capacity(american_queue.len + european_queue.len);
    let mut y = 0.0;

    for row in config.rows() {
        for slot in row.slots() {
            let queue = match slot.family {
                BoxFamily::American => &mut american_queue,
                BoxFamily::European => &mut european_queue,
            };
            if let Some(stackable) = queue.pop() {
                placed.push(PlacedBox::floor(
                    slot.x,
                    y,
                    slot.w,
                    slot.h,
                    slot.family.into(),
                    stackable,
                ));
            }
        }
        y += row.depth();
    }

    placed
}
