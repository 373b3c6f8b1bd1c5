//! Filter policies for Jamf computer inventory
//!
//! A policy projects each device record of a [`RawInventory`] onto a smaller,
//! stable shape. Policies never mutate their input, keep the order of the
//! `results` sequence and fail on the first record that lacks a required key.

mod error;
mod inventory;
mod loose;
mod policy;
mod strict;

pub mod sections;

pub use error::{FilterError, PolicyNotFound};
pub use inventory::{DeviceRecord, FilteredDeviceRecord, RawInventory, RESULTS_KEY};
pub use loose::{LooseFilter, LOOSE_SECTIONS};
pub use policy::{FilterPolicy, Policy};
pub use strict::{Selection, StrictFilter, STRICT_SECTIONS};

use serde_json::{Map, Value};

/// Copy `keys` out of `details`, in the order given.
///
/// Any absent key fails the whole selection; `prefix` is only used to report
/// the dotted path of the missing key.
pub(crate) fn items_of_interest(
    details: &Map<String, Value>,
    keys: &[&str],
    record: usize,
    prefix: Option<&str>,
) -> Result<Map<String, Value>, FilterError> {
    keys.iter()
        .map(|&key| match details.get(key) {
            Some(value) => Ok((key.to_string(), value.clone())),
            None => Err(FilterError::MissingKey {
                record,
                path: key_path(prefix, key),
            }),
        })
        .collect()
}

fn key_path(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(p) => format!("{p}.{key}"),
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details() -> Map<String, Value> {
        json!({"a": 1, "b": "two", "c": null})
            .as_object()
            .cloned()
            .unwrap()
    }

    #[test]
    fn selects_keys_in_requested_order() {
        let selected = items_of_interest(&details(), &["c", "a"], 0, None).unwrap();
        assert_eq!(selected.keys().collect::<Vec<_>>(), vec!["c", "a"]);
        assert_eq!(selected["a"], json!(1));
        assert!(selected["c"].is_null());
    }

    #[test]
    fn missing_key_reports_dotted_path() {
        let err = items_of_interest(&details(), &["a", "zz"], 4, Some("general")).unwrap_err();
        assert_eq!(
            err,
            FilterError::MissingKey {
                record: 4,
                path: "general.zz".to_string()
            }
        );
    }
}
