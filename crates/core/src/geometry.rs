//! Truck bed and box family geometry.
//!
//! All lengths are in meters. `x` runs across the truck width and `y` runs
//! along the truck length, starting at the cab end of the bed.

use nalgebra::Vector2;
use std::fmt;

use crate::placement::PlacedBox;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Inner width of the truck bed.
pub const TRUCK_WIDTH: f64 = 2.4;

/// Inner length of the truck bed.
pub const TRUCK_LENGTH: f64 = 13.2;

/// Extent of an American box across the truck.
pub const AMERICAN_WIDTH: f64 = 1.2;

/// Extent of an American box along the truck.
pub const AMERICAN_DEPTH: f64 = 1.0;

/// Long side of a European box.
pub const EUROPEAN_LONG: f64 = 1.2;

/// Short side of a European box.
pub const EUROPEAN_SHORT: f64 = 0.8;

/// One of the two standard box families.
///
/// The row patterns in the loader are derived from these footprints: an
/// American box and a wide European box are both [`AMERICAN_WIDTH`] across,
/// which is exactly half of [`TRUCK_WIDTH`], and a narrow European box is a
/// third of it. Changing any of these constants invalidates the patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoxFamily {
    /// 1.2 × 1.0 box.
    American,
    /// 1.2 × 0.8 box, loaded wide (1.2 across) or narrow (0.8 across).
    European,
}

impl BoxFamily {
    /// Both families, in reporting order.
    pub const ALL: [BoxFamily; 2] = [BoxFamily::American, BoxFamily::European];

    /// Returns the lowercase tag used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            BoxFamily::American => "american",
            BoxFamily::European => "european",
        }
    }
}

impl fmt::Display for BoxFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type tag carried by every placed box.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoxKind {
    /// A standard family box.
    Standard(BoxFamily),
    /// A caller-defined box type, identified by its id.
    Custom(String),
}

impl BoxKind {
    /// Returns the tag as it appears in reports.
    pub fn as_str(&self) -> &str {
        match self {
            BoxKind::Standard(family) => family.as_str(),
            BoxKind::Custom(id) => id,
        }
    }

    /// Returns true for caller-defined box types.
    pub fn is_custom(&self) -> bool {
        matches!(self, BoxKind::Custom(_))
    }
}

impl From<BoxFamily> for BoxKind {
    fn from(family: BoxFamily) -> Self {
        BoxKind::Standard(family)
    }
}

impl fmt::Display for BoxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl Serialize for BoxKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for BoxKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "american" => BoxKind::Standard(BoxFamily::American),
            "european" => BoxKind::Standard(BoxFamily::European),
            _ => BoxKind::Custom(tag),
        })
    }
}

/// The rectangular floor of the truck.
///
/// The bed is a constant of the vehicle; requests cannot resize it.
#[derive(Debug, Clone, PartialEq)]
pub struct TruckBed {
    /// Dimensions (width, length).
    dimensions: Vector2<f64>,
}

impl TruckBed {
    /// The 2.4 × 13.2 bed every request is planned against.
    pub fn standard() -> Self {
        Self {
            dimensions: Vector2::new(TRUCK_WIDTH, TRUCK_LENGTH),
        }
    }

    /// Returns the width (across the truck).
    pub fn width(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the length (along the truck).
    pub fn length(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the floor area.
    pub fn area(&self) -> f64 {
        self.dimensions.x * self.dimensions.y
    }

    /// Returns true if the box lies inside the bed, allowing `tolerance` slack.
    pub fn contains(&self, placed: &PlacedBox, tolerance: f64) -> bool {
        placed.x >= -tolerance
            && placed.y >= -tolerance
            && placed.x + placed.w <= self.width() + tolerance
            && placed.y + placed.h <= self.length() + tolerance
    }
}

impl Default for TruckBed {
    fn default() -> Self {
        Self::standard()
    }
}
