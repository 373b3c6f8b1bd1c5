use anyhow::{anyhow, Result};
use env_logger::Env;

use jamf_inventory::argsets::ReportArgs;
use jamf_inventory::command;
use jamf_inventory::constants::{defaults, envvars};
use jamf_inventory::helpers::load_dotenv;

const CMD_REPORT: &str = "report";
const CMD_POLICIES: &str = "policies";

const ARG_FILTER: [&str; 2] = ["-f", "--filter"];

fn report_args(args: &mut pico_args::Arguments) -> Result<ReportArgs> {
    // Accept both `report --filter strict` and `report strict`
    let filter = match args.opt_value_from_str(ARG_FILTER)? {
        Some(filter) => Some(filter),
        None => args.opt_free_from_str()?,
    };
    Ok(ReportArgs { filter })
}

fn main() -> Result<()> {
    let dotenv = load_dotenv();
    env_logger::Builder::from_env(
        Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL),
    )
    .init();
    match dotenv {
        Ok(Some(path)) => log::debug!("Loaded {}", path.display()),
        Ok(None) => {}
        Err(e) => log::warn!("Could not load .env: {e}"),
    }

    let mut args = pico_args::Arguments::from_env();
    let subcommand = args.subcommand()?;
    let report = match subcommand.as_deref() {
        None | Some(CMD_REPORT) => Some(report_args(&mut args)?),
        Some(CMD_POLICIES) => None,
        Some(other) => {
            return Err(anyhow!(
                "Subcommand must be one of '{CMD_REPORT}', '{CMD_POLICIES}'; got '{other}'"
            ))
        }
    };

    let unused = args.finish();
    if !unused.is_empty() {
        return Err(anyhow!("Unexpected arguments: {:?}", unused));
    }

    match report {
        Some(report_args) => command::report(report_args),
        None => command::policies(),
    }
}
