//! Mock HTTP server setup for integration tests

use mockito::{Mock, Server, ServerGuard};

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create a mock answering GET `path` with the given status, content type and body
    pub async fn mock_get(&mut self, path: &str, status: usize, content_type: &str, body: &str) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(status)
            .with_header("content-type", content_type)
            .with_body(body)
            .create_async()
            .await
    }

    /// Create a mock for a JSON response
    pub async fn mock_json_response(&mut self, path: &str, status: usize, body: &str) -> Mock {
        self.mock_get(path, status, "application/json", body).await
    }
}
