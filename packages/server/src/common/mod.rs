// Common types and utilities shared across the application

pub mod error;
pub mod pagination;
pub mod response;

pub use error::ApiError;
pub use pagination::{parse_int_prefix, PageMeta, PageRequest, SliceBounds};
pub use response::{ApiSuccess, ErrorBody, ErrorEnvelope};
