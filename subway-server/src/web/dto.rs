//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, LineId, Station, StationId};

/// Request to register a station.
#[derive(Debug, Deserialize)]
pub struct StationRequest {
    pub name: String,
}

/// A station in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationResponse {
    pub id: StationId,
    pub name: String,
}

/// Request to create a line.
///
/// The three section fields go together: give all of them to start the
/// line with one section, or none of them to start it empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: Option<StationId>,
    pub down_station_id: Option<StationId>,
    pub distance: Option<u32>,
}

/// Request to rename a line.
#[derive(Debug, Deserialize)]
pub struct LineUpdateRequest {
    pub name: String,
    pub color: String,
}

/// Request to connect two stations on a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRequest {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

/// Query for taking a station off a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveStationQuery {
    pub station_id: StationId,
}

/// A line with its stations in travel order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineResponse {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResponse>,

    /// Sum of all section distances
    pub distance: u64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResponse {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id,
            name: station.name.as_str().to_string(),
        }
    }
}

impl LineResponse {
    /// Create from a domain Line.
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id(),
            name: line.name().as_str().to_string(),
            color: line.color().to_string(),
            stations: line.stations().map(StationResponse::from_station).collect(),
            distance: line.path().total_distance(),
        }
    }
}
