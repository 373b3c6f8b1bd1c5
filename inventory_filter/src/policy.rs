use std::fmt;
use std::str::FromStr;

use crate::{
    FilterError, FilteredDeviceRecord, LooseFilter, PolicyNotFound, RawInventory, StrictFilter,
};

pub trait FilterPolicy {
    /// Reduce every device record of `inventory`, keeping their order.
    fn filter(&self, inventory: &RawInventory) -> Result<Vec<FilteredDeviceRecord>, FilterError>;
}

const STRICT: &str = "strict";
const LOOSE: &str = "loose";

/// A named filter policy. "No filtering" is `Option::<Policy>::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    Strict,
    Loose,
}

impl Policy {
    pub const ALL: [Policy; 2] = [Policy::Strict, Policy::Loose];

    pub fn name(&self) -> &'static str {
        match self {
            Policy::Strict => STRICT,
            Policy::Loose => LOOSE,
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Policy::name).collect()
    }

    /// Absent or blank identifiers mean no filtering.
    pub fn resolve(identifier: Option<&str>) -> Result<Option<Policy>, PolicyNotFound> {
        match identifier.map(str::trim) {
            None | Some("") => Ok(None),
            Some(name) => name.parse().map(Some),
        }
    }
}

impl FromStr for Policy {
    type Err = PolicyNotFound;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PolicyNotFound {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FilterPolicy for Policy {
    fn filter(&self, inventory: &RawInventory) -> Result<Vec<FilteredDeviceRecord>, FilterError> {
        match self {
            Policy::Strict => StrictFilter.filter(inventory),
            Policy::Loose => LooseFilter.filter(inventory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names_case_insensitively() {
        assert_eq!("strict".parse::<Policy>().unwrap(), Policy::Strict);
        assert_eq!("LOOSE".parse::<Policy>().unwrap(), Policy::Loose);
    }

    #[test]
    fn unknown_name_is_policy_not_found() {
        let err = "fuzzy".parse::<Policy>().unwrap_err();
        assert_eq!(err.name, "fuzzy");
        assert_eq!(
            err.to_string(),
            "unknown filter policy 'fuzzy' (expected one of: strict, loose)"
        );
    }

    #[test]
    fn blank_identifier_resolves_to_none() {
        assert_eq!(Policy::resolve(None).unwrap(), None);
        assert_eq!(Policy::resolve(Some("")).unwrap(), None);
        assert_eq!(Policy::resolve(Some("  ")).unwrap(), None);
        assert_eq!(Policy::resolve(Some(" loose ")).unwrap(), Some(Policy::Loose));
    }

    #[test]
    fn names_round_trip_through_display() {
        for policy in Policy::ALL {
            assert_eq!(policy.to_string().parse::<Policy>().unwrap(), policy);
        }
    }
}
