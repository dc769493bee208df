use serde::de::DeserializeOwned;
use serde::Serialize;

pub type Params = Vec<(&'static str, String)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    Post,
    Put,
    Delete,
}

/// One endpoint of the remote service.
pub trait Api {
    type Body: Serialize + Sync;
    type Output: DeserializeOwned;

    const OPERATION: Operation;

    fn path(&self) -> String;

    fn query(&self) -> Params {
        Params::new()
    }

    fn body(&self) -> Option<&Self::Body> {
        None
    }
}
