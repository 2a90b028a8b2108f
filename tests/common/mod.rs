//! Test helper module for location-directory integration tests.

#![allow(dead_code)]

use location_directory::config::{AuthSettings, ServerSettings, Settings};
use location_directory::startup::Application;
use secrecy::Secret;

pub const TEST_TOKEN: &str = "test-token-4f6e1b0a";

/// Test application with a running HTTP server on a random port.
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application on 127.0.0.1 with a random port and a known
    /// bearer token.
    pub async fn spawn() -> Self {
        let config = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            auth: AuthSettings {
                token: Secret::new(TEST_TOKEN.to_string()),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(app.run_until_stopped());

        Self {
            address,
            client: reqwest::Client::new(),
        }
    }

    /// POST to `path` with the valid test token and an optional JSON body.
    pub async fn post_authed(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> reqwest::Response {
        let mut request = self
            .client
            .post(format!("{}{}", self.address, path))
            .bearer_auth(TEST_TOKEN);

        if let Some(body) = body {
            request = request.json(&body);
        }

        request.send().await.expect("Failed to execute request")
    }
}
