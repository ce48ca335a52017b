//! Blood group and city filtering over a donor collection.

use crate::models::{Donor, GroupFilter};

fn matches_group(donor: &Donor, selected: GroupFilter) -> bool {
    match selected {
        GroupFilter::All => true,
        GroupFilter::Only(group) => donor.blood_group == group,
    }
}

/// `needle` must already be trimmed and lower-cased.
fn matches_city(donor: &Donor, needle: &str) -> bool {
    needle.is_empty() || donor.city.to_lowercase().contains(needle)
}

/// Donors passing both the group and the city predicate, in input order.
///
/// The city search is trimmed and compared case-insensitively as a substring
/// of the donor's city. An empty or all-whitespace search matches every city.
pub fn filter_donors(donors: &[Donor], selected: GroupFilter, city_search: &str) -> Vec<Donor> {
    let needle = city_search.trim().to_lowercase();

    donors
        .iter()
        .filter(|donor| matches_group(donor, selected) && matches_city(donor, &needle))
        .cloned()
        .collect()
}

/// Number of available donors in an already filtered collection.
pub fn available_count(filtered: &[Donor]) -> usize {
    filtered.iter().filter(|donor| donor.availability).count()
}
