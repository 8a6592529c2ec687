//! # Native Bridge Implementations
//!
//! Concrete bridge adapters for native (server/desktop) hosts. Currently
//! this is the reqwest-backed [`HttpClient`](bridge_traits::http::HttpClient)
//! used by the production feed connectors.

pub mod http;

pub use http::ReqwestHttpClient;
