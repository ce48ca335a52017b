//! Blood group enumeration and the group selection used by the donor filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sentinel selection that disables group filtering.
pub const ALL_GROUPS: &str = "All";

/// The eight ABO/Rh blood groups, in assignment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
}

impl BloodGroup {
    /// All groups in assignment order. Index `id % 8` picks a donor's group.
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodGroup {
    type Err = String;

    /// Exact, case-sensitive match against the enumeration labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BloodGroup::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| format!("Unknown blood group: {}", s))
    }
}

/// The group selection applied by the donor filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GroupFilter {
    #[default]
    All,
    Only(BloodGroup),
}

impl GroupFilter {
    /// Every selectable value, `All` first.
    pub fn options() -> Vec<GroupFilter> {
        std::iter::once(GroupFilter::All)
            .chain(BloodGroup::ALL.into_iter().map(GroupFilter::Only))
            .collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GroupFilter::All => ALL_GROUPS,
            GroupFilter::Only(group) => group.as_str(),
        }
    }
}

impl FromStr for GroupFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_GROUPS {
            Ok(GroupFilter::All)
        } else {
            s.parse().map(GroupFilter::Only)
        }
    }
}

impl TryFrom<String> for GroupFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GroupFilter> for String {
    fn from(value: GroupFilter) -> Self {
        value.as_str().to_string()
    }
}
