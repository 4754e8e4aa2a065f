//! Response body types
//!
//! Small in-memory bodies and chunked file streams share one boxed type.

use std::convert::Infallible;
use std::io;

use futures::TryStreamExt;
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Empty, Full, StreamBody};
use hyper::body::{Bytes, Frame};
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::artifact::read_chunks;

/// Body type returned by every handler
pub type ResponseBody = UnsyncBoxBody<Bytes, io::Error>;

/// In-memory body
pub fn full(data: impl Into<Bytes>) -> ResponseBody {
    Full::new(data.into())
        .map_err(|never: Infallible| match never {})
        .boxed_unsync()
}

pub fn empty() -> ResponseBody {
    Empty::<Bytes>::new()
        .map_err(|never: Infallible| match never {})
        .boxed_unsync()
}

/// Body that reads the first `len` bytes of `file` in `chunk_size` pieces as
/// the client consumes it
pub fn file_stream(file: File, len: u64, chunk_size: usize) -> ResponseBody {
    let frames = read_chunks(file.take(len), chunk_size).map_ok(Frame::data);
    StreamBody::new(frames).boxed_unsync()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_file_stream_stops_at_declared_length() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"declared-part|grown-part").unwrap();
        let handle = File::open(file.path()).await.unwrap();

        let body = file_stream(handle, 13, 4).collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"declared-part");
    }
}
