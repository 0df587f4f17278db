use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The five covered rating agencies. The set is closed: every agency carries
/// its own ordered scale (see `scale`), so string dispatch is never needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Agency {
    #[serde(rename = "CRISIL")]
    Crisil,
    #[serde(rename = "CARE")]
    Care,
    #[serde(rename = "India Ratings")]
    IndiaRatings,
    #[serde(rename = "ICRA")]
    Icra,
    Brickwork,
}

impl Agency {
    pub const ALL: [Agency; 5] =
        [Agency::Crisil, Agency::Care, Agency::IndiaRatings, Agency::Icra, Agency::Brickwork];

    pub fn as_str(self) -> &'static str {
        match self {
            Agency::Crisil => "CRISIL",
            Agency::Care => "CARE",
            Agency::IndiaRatings => "India Ratings",
            Agency::Icra => "ICRA",
            Agency::Brickwork => "Brickwork",
        }
    }
}

/// Direction of a rating action relative to the agency's scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChangeType {
    Upgrade,
    Downgrade,
    Stable,
}

impl ChangeType {
    pub const ALL: [ChangeType; 3] =
        [ChangeType::Upgrade, ChangeType::Downgrade, ChangeType::Stable];

    pub fn as_str(self) -> &'static str {
        match self {
            ChangeType::Upgrade => "Upgrade",
            ChangeType::Downgrade => "Downgrade",
            ChangeType::Stable => "Stable",
        }
    }
}

/// Qualitative directional signal attached to a rating action, independent of
/// the rating level itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outlook {
    Stable,
    Positive,
    Negative,
    Watch,
}

impl Outlook {
    pub const ALL: [Outlook; 4] =
        [Outlook::Stable, Outlook::Positive, Outlook::Negative, Outlook::Watch];

    pub fn as_str(self) -> &'static str {
        match self {
            Outlook::Stable => "Stable",
            Outlook::Positive => "Positive",
            Outlook::Negative => "Negative",
            Outlook::Watch => "Watch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sector {
    Banking,
    Steel,
    Cement,
    Power,
    Infrastructure,
    #[serde(rename = "NBFC")]
    Nbfc,
    #[serde(rename = "Oil & Gas")]
    OilAndGas,
    #[serde(rename = "Real Estate")]
    RealEstate,
}

impl Sector {
    pub const ALL: [Sector; 8] = [
        Sector::Banking,
        Sector::Steel,
        Sector::Cement,
        Sector::Power,
        Sector::Infrastructure,
        Sector::Nbfc,
        Sector::OilAndGas,
        Sector::RealEstate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Sector::Banking => "Banking",
            Sector::Steel => "Steel",
            Sector::Cement => "Cement",
            Sector::Power => "Power",
            Sector::Infrastructure => "Infrastructure",
            Sector::Nbfc => "NBFC",
            Sector::OilAndGas => "Oil & Gas",
            Sector::RealEstate => "Real Estate",
        }
    }
}

macro_rules! impl_display_fromstr {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| {
                        let known: Vec<&str> = $ty::ALL.iter().map(|v| v.as_str()).collect();
                        format!(
                            "unknown {}: {s:?} (expected one of {})",
                            stringify!($ty),
                            known.join(", ")
                        )
                    })
            }
        }
    };
}

impl_display_fromstr!(Agency);
impl_display_fromstr!(ChangeType);
impl_display_fromstr!(Outlook);
impl_display_fromstr!(Sector);
