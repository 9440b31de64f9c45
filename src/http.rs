// src/http.rs
// Shared HTTP client for outbound calls

/// Idle connections kept per host
pub const POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Create the shared HTTP client.
///
/// Built once per generator or session backend and reused for every
/// request it sends. No request or connect timeout is set, so calls run
/// until the transport completes or fails.
pub fn create_shared_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, routing::get};
    use std::time::Duration;

    #[test]
    fn test_create_shared_client() {
        let client = create_shared_client();
        drop(client);
    }

    #[tokio::test]
    async fn test_slow_response_is_awaited() {
        let app = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(300)).await;
                "done"
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let response = create_shared_client()
            .get(format!("http://{addr}/slow"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.text().await.unwrap(), "done");
    }
}
