//! Information page served for every path other than the download

use crate::artifact::format_size;
use crate::config::AppState;
use crate::http::{self, ResponseBody};
use hyper::Response;

/// Serve the information page
pub async fn serve_info_page(state: &AppState, is_head: bool) -> Response<ResponseBody> {
    let size = if state.artifact.exists().await {
        state.artifact.size().await.ok()
    } else {
        None
    };
    let html = render_info_page(
        state.artifact.file_name(),
        &state.download_path(),
        size,
        &state.config.upload.manual_hosts,
    );
    http::build_html_response(html, is_head)
}

/// Render the page; `size` is `None` when the artifact is not built yet
#[allow(clippy::too_many_lines)]
pub fn render_info_page(
    file_name: &str,
    download_path: &str,
    size: Option<u64>,
    manual_hosts: &[String],
) -> String {
    let file_name = escape_html(file_name);
    let download_path = escape_html(download_path);
    let (size_text, status_text) = match size {
        Some(bytes) => (format_size(bytes), "Ready for download"),
        None => ("-".to_string(), "Not built yet"),
    };
    let hosts: String = manual_hosts
        .iter()
        .map(|h| {
            let h = escape_html(h);
            format!("                    <li><a href=\"{h}\" target=\"_blank\">{h}</a></li>\n")
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>APK Download Server</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; background: #f5f5f5; }}
        .container {{ background: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); max-width: 600px; margin: 0 auto; }}
        .download-btn {{ background: #4CAF50; color: white; padding: 15px 30px; text-decoration: none; border-radius: 5px; display: inline-block; margin: 10px 0; font-size: 16px; }}
        .info {{ background: #e8f5e8; padding: 15px; border-radius: 5px; margin: 20px 0; }}
        .warning {{ background: #fff3cd; padding: 15px; border-radius: 5px; margin: 20px 0; border-left: 4px solid #ffc107; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>APK Download</h1>
        <div class="info">
            <strong>File:</strong> {file_name}<br>
            <strong>Size:</strong> {size_text}<br>
            <strong>Status:</strong> {status_text}
        </div>

        <a href="{download_path}" class="download-btn">Download APK</a>

        <div class="warning">
            <strong>Important:</strong> This is a temporary local server.
            For external access, please use the manual upload instructions below.
        </div>

        <h3>Manual Upload Instructions:</h3>
        <ol>
            <li><strong>Download the APK from this server first</strong></li>
            <li>Go to one of these file hosting websites:
                <ul>
{hosts}                </ul>
            </li>
            <li>Upload the downloaded APK file</li>
            <li>Share the public download link</li>
        </ol>
    </div>
</body>
</html>"#
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
