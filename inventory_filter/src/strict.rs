use serde_json::Value;

use crate::sections::{DISK_ENCRYPTION, GENERAL, HARDWARE, LOCAL_USER_ACCOUNTS, OPERATING_SYSTEM};
use crate::{
    items_of_interest, DeviceRecord, FilterError, FilterPolicy, FilteredDeviceRecord,
    RawInventory,
};

/// What a strict policy keeps of one section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Only these fields from inside the section payload.
    Fields(&'static [&'static str]),
    /// The section as a one-key mapping `{section: payload}`.
    WholeSection,
}

pub const STRICT_SECTIONS: &[(&str, Selection)] = &[
    (
        GENERAL,
        Selection::Fields(&[
            "name",
            "jamfBinaryVersion",
            "platform",
            "mdmCapable",
            "lastContactTime",
        ]),
    ),
    (DISK_ENCRYPTION, Selection::WholeSection),
    (LOCAL_USER_ACCOUNTS, Selection::WholeSection),
    (HARDWARE, Selection::WholeSection),
    (OPERATING_SYSTEM, Selection::WholeSection),
];

/// Keeps a fixed set of `general` fields and the other sections whole.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrictFilter;

impl StrictFilter {
    fn filter_record(
        &self,
        index: usize,
        record: &DeviceRecord,
    ) -> Result<FilteredDeviceRecord, FilterError> {
        let mut filtered = FilteredDeviceRecord::new();
        for &(section, selection) in STRICT_SECTIONS {
            let reduced = match selection {
                Selection::Fields(fields) => {
                    let payload = record.get(section).ok_or_else(|| FilterError::MissingKey {
                        record: index,
                        path: section.to_string(),
                    })?;
                    let payload = payload.as_object().ok_or_else(|| FilterError::NotAMapping {
                        record: index,
                        path: section.to_string(),
                    })?;
                    items_of_interest(payload, fields, index, Some(section))?
                }
                // Read from the record root, so this yields `{section: payload}`
                Selection::WholeSection => items_of_interest(record, &[section], index, None)?,
            };
            filtered.insert(section.to_string(), Value::Object(reduced));
        }
        Ok(filtered)
    }
}

impl FilterPolicy for StrictFilter {
    fn filter(&self, inventory: &RawInventory) -> Result<Vec<FilteredDeviceRecord>, FilterError> {
        let records = inventory.results()?;
        log::debug!("Applying strict filter to {} device records", records.len());
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| self.filter_record(index, record))
            .collect()
    }
}
