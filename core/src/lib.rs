pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod model;
pub mod pagination;
pub mod session;

pub use error::{ClientError, Result};
pub use pagination::{page_window, PageMarker};
