use serde_json::Value;

use crate::sections::{DISK_ENCRYPTION, GENERAL, HARDWARE, LOCAL_USER_ACCOUNTS, OPERATING_SYSTEM};
use crate::{
    items_of_interest, DeviceRecord, FilterError, FilterPolicy, FilteredDeviceRecord,
    RawInventory,
};

pub const LOOSE_SECTIONS: &[&str] = &[
    GENERAL,
    DISK_ENCRYPTION,
    LOCAL_USER_ACCOUNTS,
    HARDWARE,
    OPERATING_SYSTEM,
];

/// Keeps every target section whole, each as `{section: payload}`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LooseFilter;

impl LooseFilter {
    fn filter_record(
        &self,
        index: usize,
        record: &DeviceRecord,
    ) -> Result<FilteredDeviceRecord, FilterError> {
        LOOSE_SECTIONS
            .iter()
            .map(|&section| -> Result<(String, Value), FilterError> {
                let reduced = items_of_interest(record, &[section], index, None)?;
                Ok((section.to_string(), Value::Object(reduced)))
            })
            .collect()
    }
}

impl FilterPolicy for LooseFilter {
    fn filter(&self, inventory: &RawInventory) -> Result<Vec<FilteredDeviceRecord>, FilterError> {
        let records = inventory.results()?;
        log::debug!("Applying loose filter to {} device records", records.len());
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| self.filter_record(index, record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ignores_sections_outside_the_target_list() {
        let inv: RawInventory = serde_json::from_value(json!({"results": [{
            "general": {"name": "A"},
            "diskEncryption": {},
            "localUserAccounts": [],
            "hardware": {},
            "operatingSystem": {},
            "softwareUpdates": [{"name": "macOS 15"}],
            "udid": "1234"
        }]}))
        .unwrap();

        let out = LooseFilter.filter(&inv).unwrap();
        assert_eq!(
            out[0].keys().collect::<Vec<_>>(),
            vec![
                "general",
                "diskEncryption",
                "localUserAccounts",
                "hardware",
                "operatingSystem"
            ]
        );
    }

    #[test]
    fn second_record_missing_section_aborts_batch() {
        let complete = json!({
            "general": {},
            "diskEncryption": {},
            "localUserAccounts": [],
            "hardware": {},
            "operatingSystem": {}
        });
        let inv: RawInventory = serde_json::from_value(json!({"results": [
            complete,
            {"general": {}, "diskEncryption": {}, "localUserAccounts": [], "hardware": {}}
        ]}))
        .unwrap();

        assert_eq!(
            LooseFilter.filter(&inv).unwrap_err(),
            FilterError::MissingKey {
                record: 1,
                path: "operatingSystem".to_string()
            }
        );
    }
}
