//! # アプリケーション構築
//!
//! DI（ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use credstore_infra::repository::CredentialRepository;
use credstore_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        CredentialState,
        ReadinessState,
        delete_user,
        get_cookie,
        get_index,
        get_json,
        get_password,
        get_query,
        health_check,
        readiness_check,
        signup,
        update_password,
    },
    usecase::CredentialUseCaseImpl,
};

/// リクエストボディの上限（超えると 413）
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// 注入されたストアを使うルーターを構築する
///
/// 各ルートは 1 つのメソッドにのみ応答し、それ以外は 405 になる。
///
/// ## レイヤー配置
///
/// ```text
/// SetRequestId → TraceLayer → PropagateRequestId → handler
/// ```
pub fn build_app(repository: Arc<dyn CredentialRepository>) -> Router {
    let readiness_state = Arc::new(ReadinessState {
        repository: repository.clone(),
    });
    let credential_state = Arc::new(CredentialState {
        usecase: Arc::new(CredentialUseCaseImpl::new(repository)),
    });

    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .route("/api/getCookie", get(get_cookie))
        .route("/api/getQuery", get(get_query))
        .route("/api/getJSON", get(get_json))
        .route("/api/signup", post(signup))
        .route("/api/getIndex", get(get_index))
        .route("/api/getPW", get(get_password))
        .route("/api/updatePW", put(update_password))
        .route("/api/deleteUser", delete(delete_user))
        .with_state(credential_state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
