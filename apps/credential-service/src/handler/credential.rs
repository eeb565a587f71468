//! # 認証情報ハンドラ
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 成功時 |
//! |---------|------|--------|
//! | GET | `/api/getJSON` | 200 `"username\npassword"` |
//! | POST | `/api/signup` | 201 空ボディ |
//! | GET | `/api/getIndex` | 200 位置（10 進数） |
//! | GET | `/api/getPW` | 200 パスワード |
//! | PUT | `/api/updatePW` | 200 空ボディ |
//! | DELETE | `/api/deleteUser` | 200 空ボディ |
//!
//! ボディは `Content-Type` に関係なく生バイト列として受け取り、
//! [`CredentialsRequest`] でデコードする。

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode};

use crate::{error::CredentialError, request::CredentialsRequest, usecase::CredentialUseCase};

/// 認証情報ハンドラの共有状態
pub struct CredentialState {
    pub usecase: Arc<dyn CredentialUseCase>,
}

/// GET /api/getJSON
///
/// デコードした認証情報を改行区切りで返す。ストアには触れない。
pub async fn get_json(body: Bytes) -> Result<String, CredentialError> {
    let credential = CredentialsRequest::from_body(&body)?.into_credential()?;
    let (username, password) = credential.into_parts();
    Ok(format!("{}\n{}", username.as_str(), password.as_str()))
}

/// POST /api/signup
pub async fn signup(
    State(state): State<Arc<CredentialState>>,
    body: Bytes,
) -> Result<StatusCode, CredentialError> {
    let credential = CredentialsRequest::from_body(&body)?.into_credential()?;
    state.usecase.sign_up(credential).await?;
    Ok(StatusCode::CREATED)
}

/// GET /api/getIndex
pub async fn get_index(
    State(state): State<Arc<CredentialState>>,
    body: Bytes,
) -> Result<String, CredentialError> {
    let username = CredentialsRequest::from_body(&body)?.into_username()?;
    let index = state.usecase.find_index(&username).await?;
    Ok(index.to_string())
}

/// GET /api/getPW
pub async fn get_password(
    State(state): State<Arc<CredentialState>>,
    body: Bytes,
) -> Result<String, CredentialError> {
    let username = CredentialsRequest::from_body(&body)?.into_username()?;
    let password = state.usecase.find_password(&username).await?;
    Ok(password.into_string())
}

/// PUT /api/updatePW
///
/// ボディの `password` が新しいパスワード。
pub async fn update_password(
    State(state): State<Arc<CredentialState>>,
    body: Bytes,
) -> Result<StatusCode, CredentialError> {
    let credential = CredentialsRequest::from_body(&body)?.into_credential()?;
    state.usecase.update_password(credential).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/deleteUser
pub async fn delete_user(
    State(state): State<Arc<CredentialState>>,
    body: Bytes,
) -> Result<StatusCode, CredentialError> {
    let username = CredentialsRequest::from_body(&body)?.into_username()?;
    state.usecase.delete_user(&username).await?;
    Ok(StatusCode::OK)
}
