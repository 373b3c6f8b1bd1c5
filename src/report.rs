//! Fetch, optionally filter, and serialize the computer inventory.

use inventory_filter::{FilterError, FilterPolicy, Policy, PolicyNotFound, RawInventory};
use thiserror::Error;

use crate::interfaces::{ApiError, InventorySource};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    PolicyNotFound(#[from] PolicyNotFound),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("filtering inventory failed: {0}")]
    Filter(#[from] FilterError),
    #[error("could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serialize `inventory`, reduced by the named policy if one is given.
///
/// Without a policy the whole payload is returned as received; with one the
/// result is a JSON array holding one reduced record per device.
pub fn report_details(
    inventory: &RawInventory,
    policy_identifier: Option<&str>,
) -> Result<String, ReportError> {
    let policy = Policy::resolve(policy_identifier)?;
    render(inventory, policy)
}

/// Fetch the inventory from `source` and report on it.
///
/// The policy is resolved before anything is fetched, so an unknown name
/// never costs a round trip to the API.
pub fn get_report(
    source: &impl InventorySource,
    policy_identifier: Option<&str>,
) -> Result<String, ReportError> {
    let policy = Policy::resolve(policy_identifier)?;
    let inventory = source.fetch_inventory()?;
    render(&inventory, policy)
}

fn render(inventory: &RawInventory, policy: Option<Policy>) -> Result<String, ReportError> {
    match policy {
        Some(policy) => {
            let details = policy.filter(inventory)?;
            log::info!(
                "Reporting {} device records with {} filter",
                details.len(),
                policy
            );
            serde_json::to_string(&details).map_err(Into::into)
        }
        None => {
            log::info!("Reporting unfiltered inventory");
            serde_json::to_string(inventory).map_err(Into::into)
        }
    }
}
