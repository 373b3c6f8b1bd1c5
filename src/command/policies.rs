use anyhow::Result;

use crate::filter::Policy;

pub fn policies() -> Result<()> {
    for policy in Policy::ALL {
        println!("{policy}");
    }
    Ok(())
}
