//! API request and response types

pub mod error;
pub mod query;

pub use error::{ApiError, ApiErrorResponse};
pub use query::Query;
