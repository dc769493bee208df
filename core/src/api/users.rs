use super::types::*;
use crate::model::{User, UsersResponse};

pub struct ListUsers {
    pub limit: u64,
    pub skip: u64,
}

impl Api for ListUsers {
    type Body = ();
    type Output = UsersResponse;
    const OPERATION: Operation = Operation::Get;

    fn path(&self) -> String {
        "/users".into()
    }

    fn query(&self) -> Params {
        vec![("limit", self.limit.to_string()), ("skip", self.skip.to_string())]
    }
}

pub struct GetUser {
    pub id: i64,
}

impl Api for GetUser {
    type Body = ();
    type Output = User;
    const OPERATION: Operation = Operation::Get;

    fn path(&self) -> String {
        format!("/users/{}", self.id)
    }
}

pub struct FilterUsers<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl Api for FilterUsers<'_> {
    type Body = ();
    type Output = UsersResponse;
    const OPERATION: Operation = Operation::Get;

    fn path(&self) -> String {
        "/users/filter".into()
    }

    fn query(&self) -> Params {
        vec![("key", self.key.to_string()), ("value", self.value.to_string())]
    }
}
