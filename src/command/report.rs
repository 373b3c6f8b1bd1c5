use anyhow::Result;

use crate::argsets::ReportArgs;
use crate::config::JamfConfig;
use crate::interfaces::JamfClient;
use crate::report::get_report;

pub fn report(args: ReportArgs) -> Result<()> {
    let config = JamfConfig::from_env()?;
    log::debug!("Using {:?}", config);

    let client = JamfClient::new(config);
    let output = get_report(&client, args.filter.as_deref())?;
    println!("{output}");
    Ok(())
}
