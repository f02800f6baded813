use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-session driver record as delivered by the `/drivers` endpoint.
///
/// `driver_number` is unique within a session. `country_code` may be null
/// on the wire; after normalization it is always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub driver_number: u32,
    pub full_name: String,
    pub broadcast_name: String,
    pub name_acronym: String,
    pub country_code: Option<String>,
    pub team_name: Option<String>,
    pub team_colour: Option<String>,
    pub session_key: u32,
    pub meeting_key: u32,
    pub headshot_url: Option<String>,
}

/// Team grouping derived from driver records. Built fresh on every
/// aggregation call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub team_name: String,
    pub team_colour: Option<String>,
    /// Members in the order they were first seen in the input.
    pub drivers: Vec<Driver>,
    /// Distinct member country codes, first-seen order.
    pub country_codes: Vec<String>,
}

/// A single timed lap from the `/laps` endpoint. Sector and overall
/// durations are null for laps the timing system did not record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lap {
    pub driver_number: u32,
    pub session_key: u32,
    pub lap_number: u32,
    pub lap_duration: Option<f64>,
    pub duration_sector_1: Option<f64>,
    pub duration_sector_2: Option<f64>,
    pub duration_sector_3: Option<f64>,
    pub i1_speed: Option<f64>,
    pub i2_speed: Option<f64>,
    pub st_speed: Option<f64>,
    #[serde(default)]
    pub is_pit_out_lap: bool,
}

/// A timed on-track activity (practice/qualifying/race).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_key: u32,
    pub meeting_key: u32,
    pub session_name: String,
    pub session_type: String,
    pub date_start: DateTime<Utc>,
    pub date_end: Option<DateTime<Utc>>,
    pub country_name: Option<String>,
    pub circuit_short_name: Option<String>,
}

/// A Grand Prix event grouping multiple sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub meeting_key: u32,
    pub meeting_name: String,
    pub meeting_official_name: Option<String>,
    pub country_name: Option<String>,
    pub circuit_short_name: Option<String>,
    pub date_start: DateTime<Utc>,
    pub year: u32,
}

/// A point-in-time classification entry from the `/position` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub driver_number: u32,
    pub session_key: u32,
    pub meeting_key: u32,
    pub position: u32,
    pub date: DateTime<Utc>,
}

/// Final classification entry from the `/session_result` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    pub driver_number: u32,
    pub session_key: u32,
    pub meeting_key: u32,
    pub position: Option<u32>,
    pub number_of_laps: Option<u32>,
    #[serde(default)]
    pub dnf: bool,
    #[serde(default)]
    pub dns: bool,
    #[serde(default)]
    pub dsq: bool,
}

/// Prev/next adjacency relative to ascending driver number.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Navigation {
    pub previous: Option<Driver>,
    pub next: Option<Driver>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    Name,
    Team,
    DriverNumber,
    Country,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Value object selecting the comparator for the query engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub option: SortOption,
    pub order: SortOrder,
}

impl SortConfig {
    pub fn new(option: SortOption, order: SortOrder) -> Self {
        Self { option, order }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            option: SortOption::DriverNumber,
            order: SortOrder::Ascending,
        }
    }
}
