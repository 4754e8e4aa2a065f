//! HTTP protocol layer module
//!
//! Response bodies, content types and response builders, kept apart from routing.

pub mod body;
pub mod mime;
pub mod response;

// Re-export commonly used items
pub use body::ResponseBody;
pub use response::{
    build_404_response, build_405_response, build_500_response, build_download_response,
    build_html_response, build_options_response,
};
