//! HTTP Server
//!
//! Axum HTTP 服务器启动、中间件装配与限时优雅关闭

use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::middleware::access_log_middleware;
use super::routes::create_routes;
use super::state::AppState;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 收到关闭信号后等待在途请求的最长时间
    pub shutdown_timeout: Duration,
    /// 请求体大小上限（字节）
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8082,
            shutdown_timeout: Duration::from_secs(5),
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = timeout;
        self
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 构建 Router
    pub fn build_router(&self) -> Router {
        let layers = ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(access_log_middleware))
            .layer(DefaultBodyLimit::max(self.config.max_body_bytes));

        create_routes()
            .layer(layers)
            .with_state(self.state.clone())
    }

    /// 启动服务器（带限时优雅关闭）
    ///
    /// 收到 `shutdown_signal` 后停止接受新连接，并最多等待
    /// `shutdown_timeout` 让在途请求完成；超时后强制结束服务任务。
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr).await?;
        info!("Starting HTTP server on {} (with graceful shutdown)", addr);

        self.serve_with_shutdown(listener, shutdown_signal).await
    }

    /// 在已绑定的 listener 上提供服务，关闭语义同 [`HttpServer::run_with_shutdown`]
    pub async fn serve_with_shutdown<F>(
        self,
        listener: TcpListener,
        shutdown_signal: F,
    ) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();

        let (drain_tx, drain_rx) = oneshot::channel::<()>();
        let serve = axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = drain_rx.await;
            })
            .into_future();
        let mut server = tokio::spawn(serve);

        tokio::select! {
            joined = &mut server => return flatten_join(joined),
            _ = shutdown_signal => {}
        }

        info!(
            timeout_secs = self.config.shutdown_timeout.as_secs(),
            "Stopping server, draining in-flight requests"
        );
        let _ = drain_tx.send(());

        match tokio::time::timeout(self.config.shutdown_timeout, &mut server).await {
            Ok(joined) => flatten_join(joined),
            Err(_) => {
                warn!("Drain deadline exceeded, aborting remaining connections");
                server.abort();
                Ok(())
            }
        }
    }
}

fn flatten_join(
    joined: Result<Result<(), std::io::Error>, tokio::task::JoinError>,
) -> Result<(), std::io::Error> {
    match joined {
        Ok(result) => result,
        Err(e) => Err(std::io::Error::new(std::io::ErrorKind::Other, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::memory::InMemoryStudentStorage;
    use crate::application::{StorageError, StudentStoragePort};
    use crate::domain::Student;
    use async_trait::async_trait;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use std::time::Instant;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpStream;
    use tower::util::ServiceExt;

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::new("0.0.0.0", 9000);
        assert_eq!(config.addr(), "0.0.0.0:9000");
        assert_eq!(config.shutdown_timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_oversized_body_is_reported_as_json() {
        let state = AppState::new("test", Arc::new(InMemoryStudentStorage::new()));
        let server = HttpServer::new(ServerConfig::default().with_max_body_bytes(16), state);
        let router = server.build_router();

        let payload = r#"{"name": "A very long name", "email": "a@x.com", "age": 20}"#;
        let request = Request::builder()
            .method("POST")
            .uri("/api/students")
            .body(Body::from(payload))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "error");
        assert!(body["error"].as_str().unwrap().starts_with("invalid body: "));
    }

    #[tokio::test]
    async fn test_shutdown_signal_stops_server() {
        let state = AppState::new("test", Arc::new(InMemoryStudentStorage::new()));
        let config = ServerConfig::new("127.0.0.1", 0).with_shutdown_timeout(Duration::from_secs(1));
        let server = HttpServer::new(config, state);

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            server.run_with_shutdown(async {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }),
        )
        .await;

        assert!(matches!(result, Ok(Ok(()))));
    }

    /// 所有调用都永远挂起的存储
    struct StalledStorage;

    #[async_trait]
    impl StudentStoragePort for StalledStorage {
        async fn create_student(&self, _: &str, _: &str, _: i64) -> Result<i64, StorageError> {
            std::future::pending().await
        }

        async fn get_student_by_id(&self, _: i64) -> Result<Student, StorageError> {
            std::future::pending().await
        }

        async fn update_by_id(&self, _: i64, _: &str, _: &str, _: i64) -> Result<i64, StorageError> {
            std::future::pending().await
        }

        async fn delete_by_id(&self, _: i64) -> Result<i64, StorageError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_stuck_request_is_abandoned_after_drain_deadline() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let state = AppState::new("test", Arc::new(StalledStorage));
        let shutdown_timeout = Duration::from_millis(200);
        let server = HttpServer::new(
            ServerConfig::new("127.0.0.1", addr.port()).with_shutdown_timeout(shutdown_timeout),
            state,
        );

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let running = tokio::spawn(server.serve_with_shutdown(listener, async move {
            let _ = stop_rx.await;
        }));

        // 发出一个永远不会完成的请求，并保持连接打开
        let mut client = TcpStream::connect(addr).await.unwrap();
        client
            .write_all(b"GET /api/students/1 HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        let started = Instant::now();
        stop_tx.send(()).unwrap();

        let result = tokio::time::timeout(Duration::from_secs(5), running)
            .await
            .expect("server did not stop after drain deadline")
            .unwrap();

        assert!(result.is_ok());
        assert!(started.elapsed() >= shutdown_timeout);
        drop(client);
    }
}
