use serde::{Deserialize, Serialize};

use super::type_enum::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub state_code: String,
    pub postal_code: String,
    pub country: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user() {
        let json = r#"{
            "id": 1,
            "firstName": "Emily",
            "lastName": "Johnson",
            "username": "emilys",
            "email": "emily.johnson@x.dummyjson.com",
            "phone": "+81 965-431-3024",
            "image": "https://dummyjson.com/icon/emilys/128",
            "address": {
                "address": "626 Main Street",
                "city": "Phoenix",
                "state": "Mississippi",
                "stateCode": "MS",
                "postalCode": "29112",
                "coordinates": { "lat": -77.16213, "lng": -92.084824 },
                "country": "United States"
            },
            "role": "admin"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.full_name(), "Emily Johnson");
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.address.state_code, "MS");
        assert_eq!(user.address.coordinates.lng, -92.084824);
    }

    #[test]
    fn test_parse_sparse_user() {
        let user: User = serde_json::from_str(r#"{"id": 7, "firstName": "Ana"}"#).unwrap();
        assert_eq!(user.full_name(), "Ana");
        assert_eq!(user.role, Role::User);
        assert!(user.username.is_none());
    }
}
