//! apkdrop
//!
//! Makes a locally built Android package downloadable: either from a small
//! local HTTP server, or by uploading it to the first anonymous file host
//! that accepts it.

pub mod artifact;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_support;
