//! HTTP implementations of the SignDetect service traits.
//!
//! Every type here talks JSON to the detection backend over reqwest, with
//! the ambient session credential held in the client's cookie store. All
//! failures are normalized into `SignDetectError` at this boundary.

mod http;

pub mod auth_api;
pub mod detection_api;

pub use auth_api::HttpAuthApi;
pub use detection_api::HttpDetectionApi;
pub use http::ApiClient;
