//! Request handler module
//!
//! Routes requests to the package download or the information page.

pub mod download;
pub mod page;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
