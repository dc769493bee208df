use serde::{Deserialize, Serialize};

use super::{recipe::Recipe, user::User};

/// Items of one remote page together with the remote paging counters.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipesResponse {
    pub recipes: Vec<Recipe>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

impl From<RecipesResponse> for Listing<Recipe> {
    fn from(r: RecipesResponse) -> Self {
        Listing {
            items: r.recipes,
            total: r.total,
            skip: r.skip,
            limit: r.limit,
        }
    }
}

impl From<UsersResponse> for Listing<User> {
    fn from(r: UsersResponse) -> Self {
        Listing {
            items: r.users,
            total: r.total,
            skip: r.skip,
            limit: r.limit,
        }
    }
}

impl<T> Listing<T> {
    pub fn is_complete(&self) -> bool {
        self.skip + self.items.len() as u64 >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_envelope() {
        let rsp: UsersResponse = serde_json::from_str(
            r#"{"users":[{"id":1,"firstName":"Emily"}],"total":208,"skip":30,"limit":1}"#,
        )
        .unwrap();
        let listing: Listing<User> = rsp.into();
        assert_eq!(listing.items[0].first_name, "Emily");
        assert!(!listing.is_complete());

        let rsp: UsersResponse = serde_json::from_str(r#"{"users":[]}"#).unwrap();
        assert!(Listing::from(rsp).is_complete());
    }
}
