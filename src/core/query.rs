use crate::domain::model::{Driver, SortConfig, SortOption, SortOrder, Team};
use std::cmp::Ordering;

// Missing country codes sort after every real code.
const MISSING_COUNTRY: &str = "ZZZ";

/// Filtered, sorted view over a driver collection.
///
/// Filters are conjunctive: empty `query`/`team_filter`/`country_filter`
/// pass everything. Free text matches case-insensitively against full
/// name, broadcast name and team name. Sorting is stable, so equal keys
/// keep their input order in both directions.
pub fn filter_and_sort(
    drivers: &[Driver],
    query: &str,
    team_filter: &str,
    country_filter: &str,
    sort: SortConfig,
) -> Vec<Driver> {
    let needle = query.to_lowercase();

    let mut view: Vec<Driver> = drivers
        .iter()
        .filter(|d| matches_query(d, &needle))
        .filter(|d| team_filter.is_empty() || d.team_name.as_deref() == Some(team_filter))
        .filter(|d| country_filter.is_empty() || country_code_of(d) == country_filter)
        .cloned()
        .collect();

    view.sort_by(|a, b| apply_order(compare_drivers(a, b, sort.option), sort.order));
    view
}

/// Filtered, sorted view over a team collection. Free text matches the
/// team name or any member's full/broadcast name; the country filter
/// passes when the code appears in the team's country-code set; teams
/// with fewer than `min_members` drivers are dropped.
pub fn filter_and_sort_teams(
    teams: &[Team],
    query: &str,
    country_filter: &str,
    min_members: usize,
    sort: SortConfig,
) -> Vec<Team> {
    let needle = query.to_lowercase();

    let mut view: Vec<Team> = teams
        .iter()
        .filter(|t| team_matches_query(t, &needle))
        .filter(|t| country_filter.is_empty() || t.country_codes.iter().any(|c| c == country_filter))
        .filter(|t| t.drivers.len() >= min_members)
        .cloned()
        .collect();

    view.sort_by(|a, b| apply_order(compare_teams(a, b, sort.option), sort.order));
    view
}

fn matches_query(driver: &Driver, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    driver.full_name.to_lowercase().contains(needle)
        || driver.broadcast_name.to_lowercase().contains(needle)
        || driver
            .team_name
            .as_deref()
            .map(|t| t.to_lowercase().contains(needle))
            .unwrap_or(false)
}

fn team_matches_query(team: &Team, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    team.team_name.to_lowercase().contains(needle)
        || team.drivers.iter().any(|d| {
            d.full_name.to_lowercase().contains(needle)
                || d.broadcast_name.to_lowercase().contains(needle)
        })
}

fn country_code_of(driver: &Driver) -> &str {
    driver
        .country_code
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(crate::core::normalize::INTERNATIONAL)
}

fn sort_country_of(driver: &Driver) -> &str {
    driver
        .country_code
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(MISSING_COUNTRY)
}

fn compare_drivers(a: &Driver, b: &Driver, option: SortOption) -> Ordering {
    match option {
        SortOption::Name => fold(&a.full_name).cmp(&fold(&b.full_name)),
        SortOption::Team => {
            fold(a.team_name.as_deref().unwrap_or(""))
                .cmp(&fold(b.team_name.as_deref().unwrap_or("")))
        }
        SortOption::DriverNumber => a.driver_number.cmp(&b.driver_number),
        SortOption::Country => sort_country_of(a).cmp(sort_country_of(b)),
    }
}

fn compare_teams(a: &Team, b: &Team, option: SortOption) -> Ordering {
    match option {
        SortOption::Name | SortOption::Team => fold(&a.team_name).cmp(&fold(&b.team_name)),
        SortOption::DriverNumber => min_driver_number(a).cmp(&min_driver_number(b)),
        SortOption::Country => first_country(a).cmp(first_country(b)),
    }
}

fn min_driver_number(team: &Team) -> u32 {
    team.drivers
        .iter()
        .map(|d| d.driver_number)
        .min()
        .unwrap_or(u32::MAX)
}

fn first_country(team: &Team) -> &str {
    team.country_codes
        .first()
        .map(String::as_str)
        .unwrap_or(MISSING_COUNTRY)
}

fn fold(s: &str) -> String {
    s.to_lowercase()
}

// Reversing keeps Equal as Equal, so stability is preserved descending.
fn apply_order(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::aggregate_teams;

    fn driver(number: u32, name: &str, team: Option<&str>, country: Option<&str>) -> Driver {
        Driver {
            driver_number: number,
            full_name: name.to_string(),
            broadcast_name: name.to_uppercase(),
            name_acronym: name[..3.min(name.len())].to_uppercase(),
            country_code: country.map(str::to_string),
            team_name: team.map(str::to_string),
            team_colour: None,
            session_key: 9158,
            meeting_key: 1219,
            headshot_url: None,
        }
    }

    fn grid() -> Vec<Driver> {
        vec![
            driver(44, "Lewis Hamilton", Some("Mercedes"), Some("GBR")),
            driver(1, "Max Verstappen", Some("Red Bull Racing"), Some("NED")),
            driver(63, "George Russell", Some("Mercedes"), Some("GBR")),
            driver(16, "Charles Leclerc", Some("Ferrari"), Some("MON")),
            driver(55, "Carlos Sainz", Some("Ferrari"), Some("ESP")),
        ]
    }

    fn by(option: SortOption, order: SortOrder) -> SortConfig {
        SortConfig::new(option, order)
    }

    #[test]
    fn test_no_filters_number_ascending_keeps_everything() {
        let drivers = grid();
        let view = filter_and_sort(
            &drivers,
            "",
            "",
            "",
            by(SortOption::DriverNumber, SortOrder::Ascending),
        );

        let numbers: Vec<u32> = view.iter().map(|d| d.driver_number).collect();
        assert_eq!(numbers, vec![1, 16, 44, 55, 63]);
    }

    #[test]
    fn test_free_text_matches_name_case_insensitively() {
        let drivers = grid();
        let view = filter_and_sort(&drivers, "hamil", "", "", SortConfig::default());
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].driver_number, 44);
    }

    #[test]
    fn test_free_text_matches_team_name() {
        let drivers = grid();
        let view = filter_and_sort(&drivers, "ferrari", "", "", SortConfig::default());
        let numbers: Vec<u32> = view.iter().map(|d| d.driver_number).collect();
        assert_eq!(numbers, vec![16, 55]);
    }

    #[test]
    fn test_team_filter_is_exact() {
        let drivers = grid();
        let view = filter_and_sort(&drivers, "", "Mercedes", "", SortConfig::default());
        assert_eq!(view.len(), 2);

        let none = filter_and_sort(&drivers, "", "Mercede", "", SortConfig::default());
        assert!(none.is_empty());
    }

    #[test]
    fn test_country_filter_with_int_standing_in_for_null() {
        let mut drivers = grid();
        drivers.push(driver(99, "No Country", Some("Ferrari"), None));

        let view = filter_and_sort(&drivers, "", "", "INT", SortConfig::default());
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].driver_number, 99);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let drivers = grid();
        // "carl" matches Carlos Sainz; the team filter removes him.
        let view = filter_and_sort(&drivers, "carl", "Mercedes", "", SortConfig::default());
        assert!(view.is_empty());
    }

    #[test]
    fn test_sort_by_name_descending() {
        let drivers = grid();
        let view = filter_and_sort(
            &drivers,
            "",
            "",
            "",
            by(SortOption::Name, SortOrder::Descending),
        );
        assert_eq!(view[0].full_name, "Max Verstappen");
        assert_eq!(view.last().unwrap().full_name, "Carlos Sainz");
    }

    #[test]
    fn test_team_sort_is_stable_for_equal_keys() {
        let drivers = grid();
        let view = filter_and_sort(
            &drivers,
            "",
            "",
            "",
            by(SortOption::Team, SortOrder::Ascending),
        );

        // Both Mercedes drivers keep their input order: 44 before 63.
        let mercedes: Vec<u32> = view
            .iter()
            .filter(|d| d.team_name.as_deref() == Some("Mercedes"))
            .map(|d| d.driver_number)
            .collect();
        assert_eq!(mercedes, vec![44, 63]);

        let ferrari: Vec<u32> = view
            .iter()
            .filter(|d| d.team_name.as_deref() == Some("Ferrari"))
            .map(|d| d.driver_number)
            .collect();
        assert_eq!(ferrari, vec![16, 55]);
    }

    #[test]
    fn test_missing_country_sorts_last() {
        let drivers = vec![
            driver(99, "No Country", None, None),
            driver(1, "Max Verstappen", None, Some("NED")),
        ];
        let view = filter_and_sort(
            &drivers,
            "",
            "",
            "",
            by(SortOption::Country, SortOrder::Ascending),
        );
        assert_eq!(view[0].driver_number, 1);
        assert_eq!(view[1].driver_number, 99);
    }

    #[test]
    fn test_team_view_free_text_matches_member_name() {
        let teams = aggregate_teams(&grid());
        let view = filter_and_sort_teams(&teams, "leclerc", "", 0, SortConfig::default());
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].team_name, "Ferrari");
    }

    #[test]
    fn test_team_view_country_filter_uses_code_set() {
        let teams = aggregate_teams(&grid());
        let view = filter_and_sort_teams(&teams, "", "ESP", 0, SortConfig::default());
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].team_name, "Ferrari");
    }

    #[test]
    fn test_team_view_min_member_threshold() {
        let mut drivers = grid();
        drivers.push(driver(23, "Alexander Albon", Some("Williams"), Some("THA")));

        let teams = aggregate_teams(&drivers);
        let view = filter_and_sort_teams(
            &teams,
            "",
            "",
            2,
            by(SortOption::Name, SortOrder::Ascending),
        );

        let names: Vec<&str> = view.iter().map(|t| t.team_name.as_str()).collect();
        assert_eq!(names, vec!["Ferrari", "Mercedes", "Red Bull Racing"]);
    }
}
