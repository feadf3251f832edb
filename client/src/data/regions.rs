//! Provinces, their cities, and the gender options offered at signup.
//!
//! DESIGN
//! ======
//! Provinces and genders are closed enums so form state can only hold a
//! value that exists in the dataset. Serde names match the `<option>` values
//! rendered in the UI, which double as the request schema keys.

#[cfg(test)]
#[path = "regions_test.rs"]
mod regions_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A select value that does not name any known option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

/// Administrative region offered in the province select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Province {
    Sindh,
    Punjab,
    #[serde(rename = "Khyber Pakhtunkhwa")]
    KhyberPakhtunkhwa,
    Balochistan,
    #[serde(rename = "Gilgit-Baltistan")]
    GilgitBaltistan,
    #[serde(rename = "Azad Jammu & Kashmir")]
    AzadJammuKashmir,
    #[serde(rename = "Islamabad Capital Territory")]
    IslamabadCapitalTerritory,
}

impl Province {
    /// All provinces in display order.
    pub const ALL: [Self; 7] = [
        Self::Sindh,
        Self::Punjab,
        Self::KhyberPakhtunkhwa,
        Self::Balochistan,
        Self::GilgitBaltistan,
        Self::AzadJammuKashmir,
        Self::IslamabadCapitalTerritory,
    ];

    /// Display name, also used as the `<option>` value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sindh => "Sindh",
            Self::Punjab => "Punjab",
            Self::KhyberPakhtunkhwa => "Khyber Pakhtunkhwa",
            Self::Balochistan => "Balochistan",
            Self::GilgitBaltistan => "Gilgit-Baltistan",
            Self::AzadJammuKashmir => "Azad Jammu & Kashmir",
            Self::IslamabadCapitalTerritory => "Islamabad Capital Territory",
        }
    }

    /// Ordered city list for this province. Never empty.
    pub fn cities(self) -> &'static [&'static str] {
        match self {
            Self::Sindh => &[
                "Karachi",
                "Hyderabad",
                "Sukkur",
                "Larkana",
                "Mirpur Khas",
                "Thatta",
                "Badin",
                "Nawabshah",
            ],
            Self::Punjab => &[
                "Lahore",
                "Faisalabad",
                "Rawalpindi",
                "Multan",
                "Gujranwala",
                "Sargodha",
                "Bahawalpur",
                "Sialkot",
                "Okara",
                "Gujrat",
            ],
            Self::KhyberPakhtunkhwa => &[
                "Peshawar",
                "Swat",
                "Mardan",
                "Kohat",
                "Abbottabad",
                "Dera Ismail Khan",
                "Charsadda",
                "Nowshera",
            ],
            Self::Balochistan => &["Quetta", "Gwadar", "Turbat", "Khuzdar", "Zhob", "Loralai", "Chaman", "Sibi"],
            Self::GilgitBaltistan => &["Gilgit", "Skardu", "Hunza", "Nagar", "Ghanche", "Ghizer"],
            Self::AzadJammuKashmir => &["Muzaffarabad", "Mirpur", "Rawalakot", "Bagh", "Kotli", "Poonch"],
            Self::IslamabadCapitalTerritory => &["Islamabad"],
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Province {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| UnknownOption { kind: "province", value: s.to_owned() })
    }
}

/// Cities selectable for `province`; empty when nothing is selected.
pub fn available_cities(province: Option<Province>) -> &'static [&'static str] {
    match province {
        Some(province) => province.cities(),
        None => &[],
    }
}

/// Gender options offered at signup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Self; 4] = [Self::Male, Self::Female, Self::Other, Self::PreferNotToSay];

    /// Form value (`male`, `prefer-not-to-say`, ...).
    pub fn value(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::PreferNotToSay => "prefer-not-to-say",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
            Self::PreferNotToSay => "Prefer Not to Say",
        }
    }
}

impl FromStr for Gender {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.value() == s)
            .ok_or_else(|| UnknownOption { kind: "gender", value: s.to_owned() })
    }
}
