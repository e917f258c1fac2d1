//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use passcard::api::ProfileClient;
use passcard::config::ApiConfig;
use passcard::ui::app::{App, UiCommand};
use passcard::ui::events::AppEvent;
use passcard::ui::worker::run_worker;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Client pointed at `base_url` with short timeouts.
pub fn client_for(base_url: &str) -> ProfileClient {
    let config = ApiConfig {
        base_url: Some(base_url.to_string()),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    ProfileClient::new(&config).expect("Failed to build client")
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Write a small file into `dir` and return its path.
pub fn temp_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("Failed to write temp file");
    path
}

/// An `App` wired to a live API worker, the way the runtime wires it.
pub struct Harness {
    pub app: App,
    pub events: Receiver<AppEvent>,
}

impl Harness {
    /// Must be called from within a multi-threaded tokio runtime.
    pub fn start(base_url: &str) -> Self {
        let (event_tx, events) = mpsc::channel();
        let (command_tx, command_rx) = tokio::sync::mpsc::channel::<UiCommand>(32);
        tokio::spawn(run_worker(
            Arc::new(client_for(base_url)),
            command_rx,
            event_tx,
        ));

        let mut app = App::new();
        app.set_command_sender(command_tx);
        Self { app, events }
    }

    /// Waits for the next API completion and feeds it to the app.
    pub async fn pump(&mut self) {
        let event = self.next_event(Duration::from_secs(5)).await;
        match event {
            Some(AppEvent::ProfileFetched { generation, result }) => {
                self.app.on_profile_fetched(generation, result)
            }
            Some(AppEvent::ProfileSaved { generation, result }) => {
                self.app.on_profile_saved(generation, result)
            }
            Some(other) => panic!("unexpected event: {:?}", other),
            None => panic!("timed out waiting for API completion"),
        }
    }

    pub async fn next_event(&self, timeout: Duration) -> Option<AppEvent> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(event) = self.events.try_recv() {
                return Some(event);
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        None
    }
}
