//! JSON load requests.

use serde::Deserialize;
use truckload_core::{CustomBoxType, Error, Inventory, LoadRequest, Result};

/// A load request as read from JSON.
///
/// Every field is optional. Standard counts default to zero and negative
/// counts are treated as zero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PackRequest {
    /// Stackable American boxes.
    pub american_stackable: i64,
    /// Non-stackable American boxes.
    pub american_non_stackable: i64,
    /// Stackable European boxes.
    pub european_stackable: i64,
    /// Non-stackable European boxes.
    pub european_non_stackable: i64,
    /// Custom box types; `null` is accepted as none.
    pub custom_boxes: Option<Vec<CustomBoxType>>,
}

impl From<PackRequest> for LoadRequest {
    fn from(raw: PackRequest) -> Self {
        LoadRequest {
            american: Inventory::from_signed(raw.american_stackable, raw.american_non_stackable),
            european: Inventory::from_signed(raw.european_stackable, raw.european_non_stackable),
            custom: raw.custom_boxes.unwrap_or_default(),
        }
    }
}

/// Decodes a request from JSON.
pub fn parse_request(json: &str) -> Result<LoadRequest> {
    let raw: PackRequest =
        serde_json::from_str(json).map_err(|e| Error::InvalidRequest(e.to_string()))?;
    Ok(raw.into())
}

/// Per-family count overrides given on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountOverrides {
    pub american_stackable: Option<i64>,
    pub american_non_stackable: Option<i64>,
    pub european_stackable: Option<i64>,
    pub european_non_stackable: Option<i64>,
}

impl CountOverrides {
    /// Replaces the counts of `request` that were given explicitly.
    pub fn apply(&self, request: &mut LoadRequest) {
        let american = request.american;
        request.american = Inventory::from_signed(
            self.american_stackable.unwrap_or(american.stackable as i64),
            self.american_non_stackable.unwrap_or(american.non_stackable as i64),
        );

        let european = request.european;
        request.european = Inventory::from_signed(
            self.european_stackable.unwrap_or(european.stackable as i64),
            self.european_non_stackable.unwrap_or(european.non_stackable as i64),
        );
    }
}
