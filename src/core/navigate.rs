use crate::domain::model::{Driver, Navigation};

/// Exact lookup by driver number. Absence is `None`, not an error.
pub fn find_by_number(drivers: &[Driver], driver_number: u32) -> Option<&Driver> {
    drivers.iter().find(|d| d.driver_number == driver_number)
}

/// Prev/next adjacency for a driver, relative to ascending driver number.
///
/// The minimum element has no `previous`, the maximum no `next`. An
/// absent target yields an empty result rather than pointing at the
/// first element.
pub fn navigate(drivers: &[Driver], driver_number: u32) -> Navigation {
    let mut ordered: Vec<&Driver> = drivers.iter().collect();
    ordered.sort_by_key(|d| d.driver_number);

    let Some(index) = ordered.iter().position(|d| d.driver_number == driver_number) else {
        return Navigation::default();
    };

    Navigation {
        previous: index.checked_sub(1).map(|i| ordered[i].clone()),
        next: ordered.get(index + 1).map(|d| (*d).clone()),
    }
}
