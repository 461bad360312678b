//! Core record types for sfcrime.
//!
//! This module defines the closed label sets (crime categories and police
//! districts) and the row type of the synthetic incident table.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Crime category of an incident.
///
/// Declaration order is the canonical ordering used for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Theft of a motor vehicle.
    #[serde(rename = "Vehicle Theft")]
    VehicleTheft,
    /// Robbery.
    Robbery,
    /// Burglary.
    Burglary,
    /// Assault.
    Assault,
    /// Vandalism.
    Vandalism,
}

impl Category {
    /// Every category, in canonical order.
    pub const ALL: [Self; 5] = [
        Self::VehicleTheft,
        Self::Robbery,
        Self::Burglary,
        Self::Assault,
        Self::Vandalism,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VehicleTheft => "Vehicle Theft",
            Self::Robbery => "Robbery",
            Self::Burglary => "Burglary",
            Self::Assault => "Assault",
            Self::Vandalism => "Vandalism",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|c| normalize_label(c.label()) == wanted)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// San Francisco police district.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum District {
    /// Bayview district.
    Bayview,
    /// Central district.
    Central,
    /// Ingleside district.
    Ingleside,
    /// Mission district.
    Mission,
    /// Northern district.
    Northern,
    /// Park district.
    Park,
    /// Richmond district.
    Richmond,
    /// Southern district.
    Southern,
    /// Taraval district.
    Taraval,
    /// Tenderloin district.
    Tenderloin,
}

impl District {
    /// Every district, in canonical order.
    pub const ALL: [Self; 10] = [
        Self::Bayview,
        Self::Central,
        Self::Ingleside,
        Self::Mission,
        Self::Northern,
        Self::Park,
        Self::Richmond,
        Self::Southern,
        Self::Taraval,
        Self::Tenderloin,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bayview => "Bayview",
            Self::Central => "Central",
            Self::Ingleside => "Ingleside",
            Self::Mission => "Mission",
            Self::Northern => "Northern",
            Self::Park => "Park",
            Self::Richmond => "Richmond",
            Self::Southern => "Southern",
            Self::Taraval => "Taraval",
            Self::Tenderloin => "Tenderloin",
        }
    }
}

impl std::fmt::Display for District {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for District {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|d| normalize_label(d.label()) == wanted)
            .ok_or_else(|| Error::UnknownDistrict(s.to_string()))
    }
}

/// Lowercase a label and fold `-`, `_` and runs of whitespace into single spaces.
fn normalize_label(s: &str) -> String {
    s.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One row of the synthetic incident table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IncidentRecord {
    /// Day the incidents were recorded.
    pub date: NaiveDate,
    /// Crime category.
    pub category: Category,
    /// Police district.
    pub district: District,
    /// Number of incidents, always at least 1.
    pub incidents: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(Category::VehicleTheft.to_string(), "Vehicle Theft");
        assert_eq!(Category::Vandalism.to_string(), "Vandalism");
    }

    #[test]
    fn test_category_canonical_order() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
        assert_eq!(Category::ALL[0], Category::VehicleTheft);
    }

    #[test]
    fn test_category_from_str_variants() {
        for input in ["Vehicle Theft", "vehicle theft", "vehicle-theft", "VEHICLE_THEFT"] {
            assert_eq!(input.parse::<Category>().unwrap(), Category::VehicleTheft);
        }
        assert_eq!("robbery".parse::<Category>().unwrap(), Category::Robbery);
    }

    #[test]
    fn test_category_from_str_unknown() {
        let err = "Arson".parse::<Category>().unwrap_err();
        assert!(matches!(err, Error::UnknownCategory(ref s) if s == "Arson"));
    }

    #[test]
    fn test_district_labels_round_trip_through_from_str() {
        for district in District::ALL {
            assert_eq!(district.label().parse::<District>().unwrap(), district);
        }
    }

    #[test]
    fn test_district_from_str_unknown() {
        assert!(matches!(
            "Marina".parse::<District>(),
            Err(Error::UnknownDistrict(_))
        ));
    }

    #[test]
    fn test_labels_serialize_as_display_form() {
        let json = serde_json::to_string(&Category::VehicleTheft).unwrap();
        assert_eq!(json, "\"Vehicle Theft\"");
        let json = serde_json::to_string(&District::Tenderloin).unwrap();
        assert_eq!(json, "\"Tenderloin\"");
    }

    #[test]
    fn test_record_serialization() {
        let record = IncidentRecord {
            date: NaiveDate::from_ymd_opt(2022, 3, 4).unwrap(),
            category: Category::Assault,
            district: District::Mission,
            incidents: 7,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"2022-03-04\""));
        assert!(json.contains("\"Assault\""));
        let back: IncidentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("  Vehicle   Theft "), "vehicle theft");
        assert_eq!(normalize_label("vehicle-theft"), "vehicle theft");
    }
}
