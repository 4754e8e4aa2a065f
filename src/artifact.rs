//! The package file being distributed
//!
//! Both the download server and the uploaders only ever read it.

use std::io;
use std::path::{Path, PathBuf};

use futures::Stream;
use hyper::body::Bytes;
use tokio::fs::{self, File};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Used when the configured path has no usable file name component
const FALLBACK_FILE_NAME: &str = "app-release.apk";

/// A single file on disk, identified by its path and file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    path: PathBuf,
    file_name: String,
}

impl Artifact {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .unwrap_or(FALLBACK_FILE_NAME)
            .to_string();
        Self { path, file_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Whether the artifact currently exists as a regular file
    pub async fn exists(&self) -> bool {
        fs::metadata(&self.path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }

    /// Current size in bytes
    pub async fn size(&self) -> io::Result<u64> {
        Ok(fs::metadata(&self.path).await?.len())
    }

    /// Read the whole file, for multipart uploads
    pub async fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path).await
    }

    /// Open the artifact and return its size together with the handle
    pub async fn open(&self) -> io::Result<(File, u64)> {
        let file = File::open(&self.path).await?;
        let metadata = file.metadata().await?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a regular file", self.path.display()),
            ));
        }
        Ok((file, metadata.len()))
    }
}

/// Stream a reader in chunks of at most `chunk_size` bytes.
///
/// The reader is owned by the stream and dropped once it is exhausted or the
/// stream is dropped.
pub fn read_chunks<R>(reader: R, chunk_size: usize) -> impl Stream<Item = io::Result<Bytes>> + Send
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let chunk_size = chunk_size.max(1);
    futures::stream::try_unfold(reader, move |mut reader| async move {
        let mut buf = vec![0u8; chunk_size];
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            return Ok(None);
        }
        buf.truncate(n);
        Ok(Some((Bytes::from(buf), reader)))
    })
}

/// Human readable size, e.g. `3.74 MB`
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f >= MB {
        format!("{:.2} MB", bytes_f / MB)
    } else if bytes_f >= KB {
        format!("{:.2} KB", bytes_f / KB)
    } else {
        format!("{bytes} bytes")
    }
}
