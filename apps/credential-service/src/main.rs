//! # Credential Service サーバー
//!
//! ユーザー名とパスワードの組をプロセス内メモリに保持し、
//! HTTP で登録・参照・更新・削除を提供する。
//!
//! ストアは永続化されず、再起動で空に戻る。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `CREDSTORE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `CREDSTORE_PORT` | No | ポート番号（デフォルト: `80`） |
//! | `LOG_FORMAT` | No | `json` / `pretty` |
//! | `RUST_LOG` | No | ログレベル |
//!
//! ## 起動方法
//!
//! ```bash
//! CREDSTORE_PORT=13003 cargo run -p credstore-service
//! ```

use std::sync::Arc;

use credstore_infra::repository::{CredentialRepository, InMemoryCredentialRepository};
use credstore_service::{app_builder::build_app, config::CredentialServiceConfig};
use credstore_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("credential-service");
    init_tracing(&tracing_config);
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();

    let config = CredentialServiceConfig::from_env()?;

    tracing::info!(
        "Credential Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let repository: Arc<dyn CredentialRepository> = Arc::new(InMemoryCredentialRepository::new());
    let app = build_app(repository);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        "Credential Service サーバーが起動しました: {}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Ctrl+C を待つ
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("シグナルの待機に失敗しました: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("シャットダウンします");
}
