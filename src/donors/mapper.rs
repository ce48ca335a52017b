//! Deterministic mapping from upstream users to donors.

use crate::models::{BloodGroup, Donor, User};

/// Blood group assigned to a donor id.
pub fn blood_group_for(id: u64) -> BloodGroup {
    BloodGroup::ALL[(id % BloodGroup::ALL.len() as u64) as usize]
}

/// Every id not divisible by three is available.
pub fn availability_for(id: u64) -> bool {
    id % 3 != 0
}

/// Derive a donor from a user record.
pub fn map_user_to_donor(user: &User) -> Donor {
    Donor {
        id: user.id,
        name: user.name.clone(),
        city: user.address.city.clone(),
        blood_group: blood_group_for(user.id),
        availability: availability_for(user.id),
    }
}

/// Map a collection one-to-one, preserving order.
pub fn map_users(users: &[User]) -> Vec<Donor> {
    users.iter().map(map_user_to_donor).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Address;

    fn user(id: u64, name: &str, city: &str) -> User {
        User {
            id,
            name: name.to_string(),
            address: Address {
                city: city.to_string(),
            },
        }
    }

    #[test]
    fn test_known_ids() {
        let cases = [
            (0, BloodGroup::APositive, false),
            (3, BloodGroup::BNegative, false),
            (9, BloodGroup::ANegative, false),
            (10, BloodGroup::BPositive, true),
            (15, BloodGroup::AbNegative, false),
            (16, BloodGroup::APositive, true),
        ];

        for (id, group, available) in cases {
            let donor = map_user_to_donor(&user(id, "Someone", "Somewhere"));
            assert_eq!(donor.blood_group, group, "id {}", id);
            assert_eq!(donor.availability, available, "id {}", id);
        }
    }

    #[test]
    fn test_formula_holds_over_range() {
        for id in 0..200u64 {
            let donor = map_user_to_donor(&user(id, "n", "c"));
            assert_eq!(donor.blood_group, BloodGroup::ALL[(id % 8) as usize]);
            assert_eq!(donor.availability, id % 3 != 0);
        }
    }

    #[test]
    fn test_large_id() {
        let donor = map_user_to_donor(&user(u64::MAX, "n", "c"));
        assert_eq!(donor.blood_group, BloodGroup::AbNegative);
        assert!(!donor.availability);
    }

    #[test]
    fn test_copies_name_and_city_verbatim() {
        let donor = map_user_to_donor(&user(1, "Leanne Graham", "  GwenBorough "));
        assert_eq!(donor.id, 1);
        assert_eq!(donor.name, "Leanne Graham");
        assert_eq!(donor.city, "  GwenBorough ");
    }

    #[test]
    fn test_deterministic() {
        let u = user(42, "Clementine Bauch", "McKenziehaven");
        assert_eq!(map_user_to_donor(&u), map_user_to_donor(&u));
    }

    #[test]
    fn test_map_users_preserves_order_and_count() {
        let users = vec![
            user(5, "E", "x"),
            user(1, "A", "y"),
            user(3, "C", "z"),
        ];
        let donors = map_users(&users);

        assert_eq!(donors.len(), 3);
        let ids: Vec<u64> = donors.iter().map(|d| d.id).collect();
        assert_eq!(ids, [5, 1, 3]);
    }

    #[test]
    fn test_map_users_empty() {
        assert!(map_users(&[]).is_empty());
    }
}
