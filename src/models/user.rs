//! User record as served by the upstream placeholder directory.

use serde::{Deserialize, Serialize};

/// A user from the upstream directory. Fields beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub address: Address,
}

/// Postal address of a user; only the city is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_ignores_extra_fields() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "city": "Gwenborough",
                "zipcode": "92998-3874"
            }
        }))
        .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.address.city, "Gwenborough");
    }

    #[test]
    fn test_user_rejects_missing_city() {
        let result = serde_json::from_value::<User>(json!({
            "id": 2,
            "name": "Ervin Howell",
            "address": {}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_user_rejects_negative_id() {
        let result = serde_json::from_value::<User>(json!({
            "id": -4,
            "name": "Nobody",
            "address": { "city": "Nowhere" }
        }));
        assert!(result.is_err());
    }
}
