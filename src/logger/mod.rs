//! Logger module
//!
//! Provides logging utilities for both subcommands:
//! - Server lifecycle and access logging
//! - Upload progress reporting
//! - Error and warning logging with level filtering
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::{Config, LoggingConfig};
use std::fmt::Display;
use std::net::SocketAddr;

/// Severity threshold, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Parse a configured level name; unknown names mean `Info`
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "debug" | "trace" => Self::Debug,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    writer::init(
        Level::parse(&config.level),
        config.access_log_file.as_deref(),
        config.error_log_file.as_deref(),
    )
}

fn enabled(level: Level) -> bool {
    writer::get().map_or(Level::Info, writer::LogWriter::level) <= level
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(
    addr: &SocketAddr,
    config: &Config,
    download_path: &str,
    size: Option<u64>,
) {
    write_info("======================================");
    write_info("APK server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("APK download: http://{addr}{download_path}"));
    write_info(&format!("Server info:  http://{addr}/"));
    write_info(&format!("File: {}", config.artifact.path));
    match size {
        Some(bytes) => write_info(&format!("Size: {}", crate::artifact::format_size(bytes))),
        None => log_warning("Artifact not found yet; downloads return 404 until it is built"),
    }
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("This is a local server; for external access download the APK");
    write_info("and upload it to a file hosting service (apkdrop upload).");
    write_info("Press Ctrl+C to stop the server");
    write_info("======================================\n");
}

pub fn log_server_stopped() {
    write_info("[INFO] Server stopped");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    log_debug(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    log_error(&format!("Failed to serve connection: {err:?}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

pub fn log_debug(message: &str) {
    if enabled(Level::Debug) {
        write_info(&format!("[DEBUG] {message}"));
    }
}

pub fn log_info(message: &str) {
    if enabled(Level::Info) {
        write_info(&format!("[INFO] {message}"));
    }
}

pub fn log_warning(message: &str) {
    if enabled(Level::Warn) {
        write_error(&format!("[WARN] {message}"));
    }
}

pub fn log_error(message: &str) {
    if enabled(Level::Error) {
        write_error(&format!("[ERROR] {message}"));
    }
}

pub fn log_upload_attempt(backend: &str) {
    write_info(&format!("\n[UPLOAD] Trying {backend}..."));
}

pub fn log_upload_success(backend: &str, url: &str) {
    write_info(&format!("[UPLOAD] {backend}: upload successful"));
    write_info(&format!("[UPLOAD] Download URL: {url}"));
}

pub fn log_upload_failed(backend: &str, reason: &impl Display) {
    write_error(&format!("[UPLOAD] {backend} failed: {reason}"));
}

/// Operator-facing text block, written line by line regardless of level
pub fn log_block(text: &str) {
    for line in text.lines() {
        write_info(line);
    }
}
