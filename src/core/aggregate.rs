use crate::domain::model::{Driver, Team};
use std::collections::HashMap;

const UNKNOWN_TEAM: &str = "Unknown Team";

/// Fold driver records into team groupings.
///
/// Teams appear in the order they are first encountered; the first driver
/// seen for a team seeds its colour. Every driver lands in exactly one
/// team, so member counts sum to the input length. Country codes are
/// collected per team, deduplicated, in first-seen order.
pub fn aggregate_teams(drivers: &[Driver]) -> Vec<Team> {
    let mut teams: Vec<Team> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for driver in drivers {
        let key = driver
            .team_name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN_TEAM.to_string());

        let slot = *index.entry(key.clone()).or_insert_with(|| {
            teams.push(Team {
                team_name: key,
                team_colour: driver.team_colour.clone(),
                drivers: Vec::new(),
                country_codes: Vec::new(),
            });
            teams.len() - 1
        });

        let team = &mut teams[slot];
        if let Some(code) = driver.country_code.as_deref() {
            if !team.country_codes.iter().any(|c| c == code) {
                team.country_codes.push(code.to_string());
            }
        }
        team.drivers.push(driver.clone());
    }

    teams
}
