//! Shared helpers for unit tests

use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use crate::config::Config;

/// Default configuration pointing at `artifact_path`
pub fn test_config(artifact_path: impl AsRef<Path>) -> Config {
    let mut cfg = Config::load_from("does-not-exist/apkdrop-test").unwrap();
    cfg.artifact.path = artifact_path.as_ref().to_string_lossy().into_owned();
    cfg
}

#[derive(Default)]
struct Recorded {
    body: Vec<u8>,
    path: String,
}

/// Local HTTP server answering every request with a fixed status and body
pub struct MockServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    recorded: Arc<Mutex<Recorded>>,
}

impl MockServer {
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Vec<u8> {
        self.recorded.lock().unwrap().body.clone()
    }

    pub fn last_path(&self) -> String {
        self.recorded.lock().unwrap().path.clone()
    }
}

pub async fn spawn_mock(status: u16, body: &'static str) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let recorded = Arc::new(Mutex::new(Recorded::default()));

    let server_hits = Arc::clone(&hits);
    let server_recorded = Arc::clone(&recorded);
    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let hits = Arc::clone(&server_hits);
            let recorded = Arc::clone(&server_recorded);
            tokio::spawn(async move {
                let service = service_fn(move |req: Request<Incoming>| {
                    let hits = Arc::clone(&hits);
                    let recorded = Arc::clone(&recorded);
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        let path = req.uri().path().to_string();
                        let data = req
                            .into_body()
                            .collect()
                            .await
                            .map(|c| c.to_bytes())
                            .unwrap_or_default();
                        {
                            let mut rec = recorded.lock().unwrap();
                            rec.body = data.to_vec();
                            rec.path = path;
                        }
                        Ok::<_, Infallible>(
                            Response::builder()
                                .status(status)
                                .body(Full::new(Bytes::from_static(body.as_bytes())))
                                .unwrap(),
                        )
                    }
                });
                let _ = http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), service)
                    .await;
            });
        }
    });

    MockServer {
        addr,
        hits,
        recorded,
    }
}

/// URL of a local port with nothing listening on it
pub async fn unbound_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

/// Local server that accepts connections and never answers
pub async fn spawn_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    format!("http://{addr}/")
}
