//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;

use bank_mock_api::config::BankConfig;
use bank_mock_api::http::HttpServer;
use bank_mock_api::lifecycle::Shutdown;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use tempfile::TempDir;
use tokio::net::TcpListener;

pub const CUSTOMER: &str = "CUST001";

/// The five identifying headers, all populated.
pub const GATE_HEADERS: [(&str, &str); 5] = [
    ("channelCode", "WEB"),
    ("username", "lucy"),
    ("lang", "en"),
    ("countryCode", "NL"),
    ("sessionId", "3f1c9a52-0000-4000-8000-000000000001"),
];

/// A server on an ephemeral port with its own password file.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    pub shutdown: Shutdown,
    pub dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn password_file(&self) -> PathBuf {
        self.dir.path().join("current_password.txt")
    }

    /// Request carrying every gate header.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .headers(gate_headers())
    }

    /// Request carrying only the headers given.
    pub fn request_with(&self, method: Method, path: &str, headers: HeaderMap) -> RequestBuilder {
        self.client.request(method, self.url(path)).headers(headers)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

pub fn header_map(pairs: &[(&str, &str)]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        headers.insert(
            HeaderName::from_bytes(name.as_bytes()).unwrap(),
            HeaderValue::from_str(value).unwrap(),
        );
    }
    headers
}

pub fn gate_headers() -> HeaderMap {
    header_map(&GATE_HEADERS)
}

/// Gate headers minus the named ones.
pub fn gate_headers_without(skip: &[&str]) -> HeaderMap {
    let kept: Vec<(&str, &str)> = GATE_HEADERS
        .iter()
        .filter(|(name, _)| !skip.contains(name))
        .copied()
        .collect();
    header_map(&kept)
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Start a server after letting the caller adjust the default config.
pub async fn spawn_app_with(configure: impl FnOnce(&mut BankConfig)) -> TestApp {
    let dir = tempfile::tempdir().unwrap();

    let mut config = BankConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.store.password_file = dir
        .path()
        .join("current_password.txt")
        .to_string_lossy()
        .into_owned();
    configure(&mut config);

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    TestApp {
        addr,
        client,
        shutdown,
        dir,
    }
}

/// Status and JSON body of a response.
pub async fn json(res: reqwest::Response) -> (u16, Value) {
    let status = res.status().as_u16();
    let body = res.json::<Value>().await.unwrap();
    (status, body)
}

/// Assert the error envelope shape and return its code.
pub fn error_code(body: &Value) -> String {
    assert_eq!(body["success"], false);
    assert!(body["timestamp"].is_string());
    assert_eq!(body["error"]["message"], body["error"]["description"]);
    body["error"]["code"].as_str().unwrap().to_string()
}
