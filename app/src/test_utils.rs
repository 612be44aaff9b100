use crate::api::ApiConfig;

/// Config pointing at a test server, defaults otherwise.
pub fn config_for(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    }
}

/// Serve an axum router on an ephemeral port and return its base URL.
///
/// The listener is bound before the task is spawned, so connections made
/// right away queue in the accept backlog instead of racing startup.
pub async fn serve(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("read bound address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server failed");
    });
    format!("http://{addr}")
}

/// Start the in-memory mock backend on an ephemeral port and return a
/// config pointing at it. Each call gets a fresh, empty store.
pub async fn start_mock_backend() -> ApiConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("read bound address");
    tokio::spawn(async move {
        mock_server::run(listener).await.expect("mock backend failed");
    });
    config_for(&format!("http://{addr}"))
}

/// Base URL of a port that was bound once and then released, so connecting
/// to it is refused.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("read bound address");
    drop(listener);
    format!("http://{addr}")
}
