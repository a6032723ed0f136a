//! Region and disaster type models

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// Disaster categories covered by the platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DisasterType {
    Flood,
    Heatwave,
    Earthquake,
}

impl DisasterType {
    /// All supported disaster types, in the order they are reported
    pub const ALL: [DisasterType; 3] = [
        DisasterType::Flood,
        DisasterType::Heatwave,
        DisasterType::Earthquake,
    ];

    /// Lowercase wire name, matching the `disaster_type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            DisasterType::Flood => "flood",
            DisasterType::Heatwave => "heatwave",
            DisasterType::Earthquake => "earthquake",
        }
    }

    /// Uppercase label used in response payloads and alert text
    pub fn label(&self) -> &'static str {
        match self {
            DisasterType::Flood => "FLOOD",
            DisasterType::Heatwave => "HEATWAVE",
            DisasterType::Earthquake => "EARTHQUAKE",
        }
    }

    /// Primary contributing factors reported per disaster type
    pub fn primary_factors(&self) -> &'static [&'static str] {
        match self {
            DisasterType::Flood => &["Rainfall", "Humidity", "Temperature"],
            DisasterType::Heatwave => &["Temperature", "Humidity"],
            DisasterType::Earthquake => &["Seismic Activity"],
        }
    }
}

impl std::fmt::Display for DisasterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized disaster type name
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown disaster type: {0}")]
pub struct UnknownDisasterType(pub String);

impl FromStr for DisasterType {
    type Err = UnknownDisasterType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flood" => Ok(DisasterType::Flood),
            "heatwave" => Ok(DisasterType::Heatwave),
            "earthquake" => Ok(DisasterType::Earthquake),
            _ => Err(UnknownDisasterType(s.to_string())),
        }
    }
}

/// An Indian state or union territory with fixed coordinates and an optional
/// historical disaster record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub coordinates: GpsCoordinates,
    /// Count of recorded past events per disaster type. Regions without a
    /// curated record have an empty map, which scores as zero history.
    #[serde(default)]
    pub history: BTreeMap<DisasterType, u32>,
}

impl Region {
    pub fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            coordinates: GpsCoordinates::new(latitude, longitude),
            history: BTreeMap::new(),
        }
    }

    pub fn with_history(mut self, flood: u32, heatwave: u32, earthquake: u32) -> Self {
        self.history.insert(DisasterType::Flood, flood);
        self.history.insert(DisasterType::Heatwave, heatwave);
        self.history.insert(DisasterType::Earthquake, earthquake);
        self
    }

    /// Historical event count for a disaster type, zero when unrecorded
    pub fn event_count(&self, disaster: DisasterType) -> u32 {
        self.history.get(&disaster).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disaster_type_parsing() {
        assert_eq!("flood".parse::<DisasterType>().unwrap(), DisasterType::Flood);
        assert_eq!(
            "HEATWAVE".parse::<DisasterType>().unwrap(),
            DisasterType::Heatwave
        );
        assert_eq!(
            "Earthquake".parse::<DisasterType>().unwrap(),
            DisasterType::Earthquake
        );
        assert!("cyclone".parse::<DisasterType>().is_err());
    }

    #[test]
    fn test_event_count_defaults_to_zero() {
        let region = Region::new("Goa", 15.2993, 74.1240);
        assert_eq!(region.event_count(DisasterType::Flood), 0);

        let region = Region::new("Bihar", 25.5941, 85.1376).with_history(15, 5, 1);
        assert_eq!(region.event_count(DisasterType::Flood), 15);
        assert_eq!(region.event_count(DisasterType::Earthquake), 1);
    }
}
