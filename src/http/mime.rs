//! Content types used by the download server

/// MIME type for Android application packages
pub const APK_CONTENT_TYPE: &str = "application/vnd.android.package-archive";

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// `Content-Disposition` value that makes browsers save the file as `file_name`
pub fn attachment_disposition(file_name: &str) -> String {
    let escaped = file_name.replace('\\', "\\\\").replace('"', "\\\"");
    format!("attachment; filename=\"{escaped}\"")
}
