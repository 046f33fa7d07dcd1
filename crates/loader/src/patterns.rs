//! Row patterns for the standard box families.
//!
//! A row spans the truck width and has a fixed depth along the truck. The
//! four full patterns tile [`TRUCK_WIDTH`](truckload_core::TRUCK_WIDTH) with
//! no lateral waste; the three partial patterns are only used by the greedy
//! filler to mop up what the full search leaves over.

use std::fmt;

use truckload_core::{BoxFamily, AMERICAN_DEPTH, AMERICAN_WIDTH, EUROPEAN_LONG, EUROPEAN_SHORT};

/// One box position inside a row, relative to the row's start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSlot {
    /// Offset across the truck.
    pub x: f64,
    /// Extent across the truck.
    pub w: f64,
    /// Extent along the truck.
    pub h: f64,
    /// Family that fills this slot.
    pub family: BoxFamily,
}

const fn american(x: f64) -> RowSlot {
    RowSlot {
        x,
        w: AMERICAN_WIDTH,
        h: AMERICAN_DEPTH,
        family: BoxFamily::American,
    }
}

const fn european_wide(x: f64) -> RowSlot {
    RowSlot {
        x,
        w: EUROPEAN_LONG,
        h: EUROPEAN_SHORT,
        family: BoxFamily::European,
    }
}

const fn european_narrow(x: f64) -> RowSlot {
    RowSlot {
        x,
        w: EUROPEAN_SHORT,
        h: EUROPEAN_LONG,
        family: BoxFamily::European,
    }
}

const SLOTS_A: [RowSlot; 2] = [american(0.0), american(AMERICAN_WIDTH)];
const SLOTS_B: [RowSlot; 2] = [european_wide(0.0), european_wide(EUROPEAN_LONG)];
const SLOTS_C: [RowSlot; 3] = [
    european_narrow(0.0),
    european_narrow(EUROPEAN_SHORT),
    european_narrow(2.0 * EUROPEAN_SHORT),
];
const SLOTS_D: [RowSlot; 2] = [american(0.0), european_wide(AMERICAN_WIDTH)];
const SLOTS_PARTIAL_A: [RowSlot; 1] = [american(0.0)];
const SLOTS_PARTIAL_C: [RowSlot; 2] = [european_narrow(0.0), european_narrow(EUROPEAN_SHORT)];
const SLOTS_PARTIAL_B: [RowSlot; 1] = [european_wide(0.0)];

/// A row layout of standard boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowPattern {
    /// Two American boxes side by side.
    A,
    /// Two wide European boxes side by side.
    B,
    /// Three narrow European boxes side by side.
    C,
    /// One American box next to one wide European box.
    D,
    /// A single American box.
    PartialA,
    /// Two narrow European boxes.
    PartialC,
    /// A single wide European box.
    PartialB,
}

impl RowPattern {
    /// The zero-waste patterns, in search order.
    pub const FULL: [RowPattern; 4] = [RowPattern::A, RowPattern::B, RowPattern::C, RowPattern::D];

    /// Order in which the greedy filler tries patterns.
    pub const FILLER_PRIORITY: [RowPattern; 7] = [
        RowPattern::A,
        RowPattern::C,
        RowPattern::B,
        RowPattern::D,
        RowPattern::PartialA,
        RowPattern::PartialC,
        RowPattern::PartialB,
    ];

    /// Returns the extent of the row along the truck.
    pub fn depth(&self) -> f64 {
        match self {
            RowPattern::A | RowPattern::D | RowPattern::PartialA => AMERICAN_DEPTH,
            RowPattern::B | RowPattern::PartialB => EUROPEAN_SHORT,
            RowPattern::C | RowPattern::PartialC => EUROPEAN_LONG,
        }
    }

    /// Returns the number of American boxes in the row.
    pub fn american(&self) -> usize {
        self.count(BoxFamily::American)
    }

    /// Returns the number of European boxes in the row.
    pub fn european(&self) -> usize {
        self.count(BoxFamily::European)
    }

    /// Returns the number of boxes of `family` in the row.
    pub fn count(&self, family: BoxFamily) -> usize {
        self.slots().iter().filter(|s| s.family == family).count()
    }

    /// Returns the box positions, left to right.
    pub fn slots(&self) -> &'static [RowSlot] {
        match self {
            RowPattern::A => &SLOTS_A,
            RowPattern::B => &SLOTS_B,
            RowPattern::C => &SLOTS_C,
            RowPattern::D => &SLOTS_D,
            RowPattern::PartialA => &SLOTS_PARTIAL_A,
            RowPattern::PartialC => &SLOTS_PARTIAL_C,
            RowPattern::PartialB => &SLOTS_PARTIAL_B,
        }
    }

    /// Returns true for the zero-waste patterns.
    pub fn is_full(&self) -> bool {
        Self::FULL.contains(self)
    }

    /// Returns the short code used in logs and the CLI.
    pub fn code(&self) -> &'static str {
        match self {
            RowPattern::A => "A",
            RowPattern::B => "B",
            RowPattern::C => "C",
            RowPattern::D => "D",
            RowPattern::PartialA => "pA",
            RowPattern::PartialC => "pE2",
            RowPattern::PartialB => "pB",
        }
    }
}

impl fmt::Display for RowPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Number of rows of `depth` that fit in `length`.
pub(crate) fn rows_that_fit(length: f64, depth: f64, tolerance: f64) -> usize {
    // Truncation toward zero; negative lengths give zero rows.
    (length / depth + tolerance) as usize
}

/// Fills left-over length with rows, first fit in [`RowPattern::FILLER_PRIORITY`] order.
///
/// Each step rescans the priority list from the top and takes the first
/// pattern that fits the remaining length and is covered by the remaining
/// boxes. Stops when nothing fits or nothing is left.
pub fn greedy_fill(
    mut american_left: usize,
    mut european_left: usize,
    mut remaining_length: f64,
    tolerance: f64,
) -> Vec<RowPattern> {
    let mut rows = Vec::new();

    while remaining_length > tolerance && (american_left > 0 || european_left > 0) {
        let next = RowPattern::FILLER_PRIORITY.iter().copied().find(|p| {
            p.american() <= american_left
                && p.european() <= european_left
                && p.depth() <= remaining_length + tolerance
        });

        let Some(pattern) = next else {
            break;
        };

        rows.push(pattern);
        american_left -= pattern.american();
        european_left -= pattern.european();
        remaining_length -= pattern.depth();
    }

    rows
}
