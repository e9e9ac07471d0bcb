//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from specific business logic.
//! Shared between the JSON API and static file serving.

pub mod cache;
pub mod mime;
pub mod query;
pub mod response;

// Re-export commonly used types
pub use query::{percent_decode, query_param};
pub use response::{
    build_304_response, build_404_response, build_405_response, build_413_response,
    build_options_response, build_redirect_response,
};
