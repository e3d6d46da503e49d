//! Students API - 学生资源 CRUD 服务
//!
//! 启动流程：加载配置 → 初始化日志 → 构建存储 → 启动 HTTP 服务（带限时优雅关闭）

use std::sync::Arc;

use students_api::application::StudentStoragePort;
use students_api::config::{load_config, print_config, AppConfig, StorageBackend};
use students_api::infrastructure::http::{AppState, HttpServer, ServerConfig};
use students_api::infrastructure::persistence::sqlite::{
    create_pool, ensure_schema, DatabaseConfig,
};
use students_api::infrastructure::persistence::{
    DeadlineStudentStorage, InMemoryStudentStorage, SqliteStudentStorage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!(env = %config.env, version = env!("CARGO_PKG_VERSION"), "Students API");
    print_config(&config);

    let storage = build_storage(&config).await?;
    tracing::info!(
        env = %config.env,
        backend = config.database.backend.as_str(),
        "Storage initialized"
    );

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_shutdown_timeout(config.server.shutdown_timeout())
        .with_max_body_bytes(config.server.max_body_bytes);
    let state = AppState::new(config.env.clone(), storage);

    let server = HttpServer::new(server_config, state);

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server stopped gracefully");

    Ok(())
}

/// 初始化日志，`RUST_LOG` 优先于配置文件中的级别
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},students_api={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// 按配置构建存储后端，并套上单次调用超时
async fn build_storage(config: &AppConfig) -> anyhow::Result<Arc<dyn StudentStoragePort>> {
    let backend: Arc<dyn StudentStoragePort> = match config.database.backend {
        StorageBackend::Sqlite => {
            if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let db_config = DatabaseConfig {
                database_url: config.database.database_url(),
                max_connections: config.database.max_connections,
            };
            let pool = create_pool(&db_config).await?;
            ensure_schema(&pool).await?;

            Arc::new(SqliteStudentStorage::new(pool))
        }
        StorageBackend::Memory => Arc::new(InMemoryStudentStorage::new()),
    };

    Ok(Arc::new(DeadlineStudentStorage::new(
        backend,
        config.server.request_timeout(),
    )))
}

/// 等待 Ctrl-C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Received shutdown signal");
}
