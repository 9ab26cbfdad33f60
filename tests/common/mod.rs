//! Shared utilities for integration testing.

use std::io::Write;
use std::net::SocketAddr;

use mock_service::config::ServiceConfig;
use mock_service::lifecycle::{self, Shutdown};
use tempfile::NamedTempFile;

/// A running mock service bound to an ephemeral port.
pub struct TestService {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub client: reqwest::Client,
    // Kept alive so the rules file outlives the service.
    _rules: NamedTempFile,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestService {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Write `rules` to a temp file and start the service on it.
pub async fn start_service(rules: &str) -> TestService {
    start_service_with(rules, |_| {}).await
}

/// Like [`start_service`], with a hook to adjust settings first.
pub async fn start_service_with<F>(rules: &str, configure: F) -> TestService
where
    F: FnOnce(&mut ServiceConfig),
{
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(rules.as_bytes()).unwrap();

    let mut config = ServiceConfig::default();
    config.rules.path = file.path().to_path_buf();
    config.listener.bind_address = "127.0.0.1:0".into();
    configure(&mut config);

    let service = lifecycle::start(config).await.expect("service should start");
    let addr = service.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = service.run(server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();

    TestService {
        addr,
        shutdown,
        client,
        _rules: file,
    }
}
