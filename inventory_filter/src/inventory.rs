use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::FilterError;

pub const RESULTS_KEY: &str = "results";

/// One inventoried machine: section name to section payload.
pub type DeviceRecord = Map<String, Value>;

/// A device record reduced by a filter policy.
pub type FilteredDeviceRecord = Map<String, Value>;

/// Inventory payload exactly as received, e.g. `{"totalCount": 2, "results": [...]}`.
///
/// The wrapped object keeps every key in source order, so serializing an
/// unfiltered inventory reproduces what the API sent.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct RawInventory(Map<String, Value>);

impl RawInventory {
    /// The device records, in the order the API returned them.
    pub fn results(&self) -> Result<Vec<&DeviceRecord>, FilterError> {
        let results = self
            .0
            .get(RESULTS_KEY)
            .and_then(Value::as_array)
            .ok_or(FilterError::MissingResults)?;

        results
            .iter()
            .enumerate()
            .map(|(record, value)| {
                value.as_object().ok_or_else(|| FilterError::NotAMapping {
                    record,
                    path: format!("{RESULTS_KEY}[{record}]"),
                })
            })
            .collect()
    }
}
