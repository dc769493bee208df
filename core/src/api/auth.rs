use super::types::*;
use crate::model::auth::{LoginRequest, LoginResponse};
use crate::model::User;

pub struct Login<'a> {
    pub request: LoginRequest<'a>,
}

impl<'a> Api for Login<'a> {
    type Body = LoginRequest<'a>;
    type Output = LoginResponse;
    const OPERATION: Operation = Operation::Post;

    fn path(&self) -> String {
        "/auth/login".into()
    }

    fn body(&self) -> Option<&LoginRequest<'a>> {
        Some(&self.request)
    }
}

/// Profile of the token holder; needs a session.
pub struct Me;

impl Api for Me {
    type Body = ();
    type Output = User;
    const OPERATION: Operation = Operation::Get;

    fn path(&self) -> String {
        "/auth/me".into()
    }
}
