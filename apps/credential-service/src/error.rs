//! # Credential Service エラー定義
//!
//! ハンドラ内で発生するエラーと、HTTP ステータスへの変換を定義する。
//!
//! | エラー | ステータス |
//! |--------|-----------|
//! | `MalformedInput` / `MissingUsername` / `MissingPassword` / `UserNotFound` | 400 |
//! | `Conflict` | 409 |
//! | `Infra` | 500 |
//!
//! エラー時のレスポンスボディは常に空で、ステータスコードのみで失敗を伝える。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use credstore_infra::InfraError;
use thiserror::Error;

/// Credential Service で発生するエラー
#[derive(Debug, Error)]
pub enum CredentialError {
    /// ボディが JSON オブジェクトとして解釈できない（空ボディ・型不一致を含む）
    #[error("JSON を解釈できません: {0}")]
    MalformedInput(String),

    #[error("ユーザー名がありません")]
    MissingUsername,

    #[error("パスワードがありません")]
    MissingPassword,

    #[error("ユーザーが見つかりません")]
    UserNotFound,

    /// 同じユーザー名が既に登録されている
    #[error("ユーザー名が既に使われています")]
    Conflict,

    #[error("インフラエラー: {0}")]
    Infra(#[from] InfraError),
}

impl CredentialError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CredentialError::MalformedInput(_)
            | CredentialError::MissingUsername
            | CredentialError::MissingPassword
            | CredentialError::UserNotFound => StatusCode::BAD_REQUEST,
            CredentialError::Conflict => StatusCode::CONFLICT,
            CredentialError::Infra(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CredentialError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = ?self, "内部エラー");
        } else {
            tracing::debug!(status = status.as_u16(), "リクエストを拒否しました: {}", self);
        }
        status.into_response()
    }
}
