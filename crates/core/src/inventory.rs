//! Box inventory and loading requests.

use std::collections::HashSet;

use crate::geometry::BoxFamily;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// Stackable and non-stackable counts of one box type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inventory {
    /// Boxes that may carry, or ride on, another box of the same type.
    pub stackable: usize,
    /// Boxes that must stay on the floor with nothing on top.
    pub non_stackable: usize,
}

impl Inventory {
    /// Creates an inventory from unsigned counts.
    pub fn new(stackable: usize, non_stackable: usize) -> Self {
        Self {
            stackable,
            non_stackable,
        }
    }

    /// Creates an inventory from signed counts, clamping negatives to zero.
    pub fn from_signed(stackable: i64, non_stackable: i64) -> Self {
        Self::new(clamp_count(stackable), clamp_count(non_stackable))
    }

    /// Returns the number of boxes of this type, saturating at `usize::MAX`.
    pub fn total(&self) -> usize {
        self.stackable.saturating_add(self.non_stackable)
    }

    /// Returns true if there is nothing to load.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

fn clamp_count(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

#[cfg(feature = "serde")]
fn deserialize_count<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<usize, D::Error> {
    i64::deserialize(deserializer).map(clamp_count)
}

/// A caller-defined box type.
///
/// Either side may end up across the truck; the shelf packer tries both.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CustomBoxType {
    /// Identifier used as the box type tag in reports.
    pub id: String,

    /// Display name.
    pub name: String,

    /// First side, in meters.
    pub width: f64,

    /// Second side, in meters.
    pub length: f64,

    /// Stackable instances requested.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "deserialize_count")
    )]
    pub stackable: usize,

    /// Non-stackable instances requested.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "deserialize_count")
    )]
    pub non_stackable: usize,
}

impl CustomBoxType {
    /// Creates a box type with no instances requested.
    pub fn new(id: impl Into<String>, name: impl Into<String>, width: f64, length: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            width,
            length,
            stackable: 0,
            non_stackable: 0,
        }
    }

    /// Sets the stackable count.
    pub fn with_stackable(mut self, n: usize) -> Self {
        self.stackable = n;
        self
    }

    /// Sets the non-stackable count.
    pub fn with_non_stackable(mut self, n: usize) -> Self {
        self.non_stackable = n;
        self
    }

    /// Returns the requested counts.
    pub fn inventory(&self) -> Inventory {
        Inventory::new(self.stackable, self.non_stackable)
    }

    /// Returns the number of instances requested.
    pub fn requested(&self) -> usize {
        self.inventory().total()
    }

    /// Returns the two axis-aligned orientations as (across, along) pairs,
    /// as given first.
    pub fn orientations(&self) -> [(f64, f64); 2] {
        [(self.width, self.length), (self.length, self.width)]
    }

    /// Checks that the type can be packed at all.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::InvalidBox("custom box id must not be empty".into()));
        }

        for (side, value) in [("width", self.width), ("length", self.length)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidBox(format!(
                    "{} of '{}' must be a positive number, got {}",
                    side, self.id, value
                )));
            }
        }

        Ok(())
    }
}

/// Everything one loading plan is computed from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadRequest {
    /// American boxes.
    pub american: Inventory,
    /// European boxes.
    pub european: Inventory,
    /// Custom box types, in the order they are packed.
    pub custom: Vec<CustomBoxType>,
}

impl LoadRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the American counts.
    pub fn with_american(mut self, stackable: usize, non_stackable: usize) -> Self {
        self.american = Inventory::new(stackable, non_stackable);
        self
    }

    /// Sets the European counts.
    pub fn with_european(mut self, stackable: usize, non_stackable: usize) -> Self {
        self.european = Inventory::new(stackable, non_stackable);
        self
    }

    /// Appends a custom box type.
    pub fn with_custom(mut self, custom: CustomBoxType) -> Self {
        self.custom.push(custom);
        self
    }

    /// Returns the inventory of a standard family.
    pub fn inventory(&self, family: BoxFamily) -> Inventory {
        match family {
            BoxFamily::American => self.american,
            BoxFamily::European => self.european,
        }
    }

    /// Returns the number of standard boxes requested.
    pub fn standard_requested(&self) -> usize {
        self.american.total().saturating_add(self.european.total())
    }

    /// Returns the number of custom boxes requested.
    pub fn custom_requested(&self) -> usize {
        self.custom
            .iter()
            .map(CustomBoxType::requested)
            .fold(0, usize::saturating_add)
    }

    /// Returns the number of boxes requested across all types.
    pub fn total_requested(&self) -> usize {
        self.standard_requested()
            .saturating_add(self.custom_requested())
    }

    /// Validates every custom type and rejects duplicate ids and ids that
    /// collide with a standard family tag.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for custom in &self.custom {
            custom.validate()?;
            if BoxFamily::ALL.iter().any(|f| f.as_str() == custom.id) {
                return Err(Error::InvalidRequest(format!(
                    "custom box id '{}' is reserved for the standard family",
                    custom.id
                )));
            }
            if !seen.insert(custom.id.as_str()) {
                return Err(Error::InvalidRequest(format!(
                    "duplicate custom box id '{}'",
                    custom.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_counts_clamp() {
        let inv = Inventory::from_signed(-3, 4);
        assert_eq!(inv, Inventory::new(0, 4));
        assert_eq!(inv.total(), 4);
        assert!(Inventory::from_signed(-1, -1).is_empty());
    }

    #[test]
    fn test_request_totals() {
        let request = LoadRequest::new()
            .with_american(2, 1)
            .with_european(0, 5)
            .with_custom(CustomBoxType::new("c", "Crate", 1.0, 0.5).with_stackable(2));

        assert_eq!(request.standard_requested(), 8);
        assert_eq!(request.custom_requested(), 2);
        assert_eq!(request.total_requested(), 10);
        assert_eq!(request.inventory(BoxFamily::European).non_stackable, 5);
    }

    #[test]
    fn test_totals_saturate() {
        let max = i64::MAX as usize;
        let request = LoadRequest::new()
            .with_american(max, max)
            .with_european(1, 1)
            .with_custom(CustomBoxType::new("c", "Crate", 1.0, 1.0).with_stackable(usize::MAX));

        assert_eq!(request.american.total(), usize::MAX - 1);
        assert_eq!(request.standard_requested(), usize::MAX);
        assert_eq!(request.custom_requested(), usize::MAX);
        assert_eq!(request.total_requested(), usize::MAX);
        assert_eq!(Inventory::from_signed(i64::MAX, i64::MAX).total(), usize::MAX - 1);
    }

    #[test]
    fn test_family_tags_reserved() {
        for id in ["american", "european"] {
            let request =
                LoadRequest::new().with_custom(CustomBoxType::new(id, "Clash", 1.0, 1.0));
            match request.validate() {
                Err(Error::InvalidRequest(msg)) => assert!(msg.contains(id)),
                other => panic!("expected reserved id error, got {:?}", other),
            }
        }
        let request = LoadRequest::new().with_custom(CustomBoxType::new("American", "Ok", 1.0, 1.0));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_orientations() {
        let c = CustomBoxType::new("c", "Crate", 2.0, 0.5);
        assert_eq!(c.orientations(), [(2.0, 0.5), (0.5, 2.0)]);
    }

    #[test]
    fn test_validation() {
        assert!(CustomBoxType::new("ok", "Ok", 1.0, 1.0).validate().is_ok());
        assert!(CustomBoxType::new("w", "W", 0.0, 1.0).validate().is_err());
        assert!(CustomBoxType::new("l", "L", 1.0, -2.0).validate().is_err());
        assert!(CustomBoxType::new("n", "N", f64::NAN, 1.0).validate().is_err());
        assert!(CustomBoxType::new("", "Empty", 1.0, 1.0).validate().is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let request = LoadRequest::new()
            .with_custom(CustomBoxType::new("a", "A", 1.0, 1.0))
            .with_custom(CustomBoxType::new("a", "A again", 2.0, 1.0));

        match request.validate() {
            Err(Error::InvalidRequest(msg)) => assert!(msg.contains("'a'")),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }
}
