//! Access log format module
//!
//! Supports:
//! - `combined` (Apache/Nginx combined format)
//! - `common` (Common Log Format - CLF)
//! - `json` (one JSON object per line)

use chrono::Local;
use serde::Serialize;

const CLF_TIME: &str = "%d/%b/%Y:%H:%M:%S %z";

/// One served request
#[derive(Debug, Clone, Serialize)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    #[serde(serialize_with = "serialize_time")]
    pub time: chrono::DateTime<Local>,
    pub method: String,
    pub path: String,
    pub http_version: String,
    pub status: u16,
    /// Declared body size; streamed downloads report their `Content-Length`
    pub body_bytes: u64,
    pub user_agent: Option<String>,
    /// Time to build the response head, in microseconds
    pub request_time_us: u64,
}

fn serialize_time<S>(time: &chrono::DateTime<Local>, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_str(&time.to_rfc3339())
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            user_agent: None,
            request_time_us: 0,
        }
    }

    /// Format the log entry; unknown formats fall back to `combined`
    pub fn format(&self, format: &str) -> String {
        match format {
            "common" => self.format_common(),
            "json" => self.format_json(),
            _ => self.format_combined(),
        }
    }

    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent "-" "$http_user_agent"`
    fn format_combined(&self) -> String {
        format!(
            "{} \"-\" \"{}\"",
            self.format_common(),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }

    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/{}\" {} {}",
            self.remote_addr,
            self.time.format(CLF_TIME),
            self.method,
            self.path,
            self.http_version,
            self.status,
            self.body_bytes,
        )
    }

    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.format_common())
    }
}
