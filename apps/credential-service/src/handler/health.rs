//! # ヘルスチェックハンドラ

use std::{collections::BTreeMap, sync::Arc};

use axum::{Json, extract::State, http::StatusCode};
use credstore_infra::repository::CredentialRepository;
use credstore_shared::{CheckStatus, HealthResponse, ReadinessResponse};

/// Readiness Check 用の共有状態
pub struct ReadinessState {
    pub repository: Arc<dyn CredentialRepository>,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// GET /health/ready
///
/// 認証情報ストアが応答するかを確認する。失敗時は 503。
pub async fn readiness_check(
    State(state): State<Arc<ReadinessState>>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let store = match state.repository.count().await {
        Ok(_) => CheckStatus::Ok,
        Err(e) => {
            tracing::warn!(error = %e, "認証情報ストアの確認に失敗しました");
            CheckStatus::Error
        }
    };

    let response = ReadinessResponse::from_checks(BTreeMap::from([(
        "credential_store".to_string(),
        store,
    )]));
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response))
}
