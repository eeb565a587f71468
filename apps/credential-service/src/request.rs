//! # リクエストボディのデコードと検証
//!
//! `{"username": ..., "password": ...}` 形式のボディを認証情報に変換する。
//!
//! - `Content-Type` は見ない（GET リクエストのボディも受け付ける）
//! - 先頭の JSON 値のみを読み、後続のデータは無視する
//! - 未知のフィールドは無視し、`null` は未指定として扱う
//!
//! 参照系エンドポイント（位置取得・パスワード取得・削除）はユーザー名だけを
//! 必要とするため、パスワード欠落を許容する [`CredentialsRequest::into_username`] を使う。

use std::fmt;

use credstore_domain::credential::{Credential, Password, Username};
use serde::Deserialize;

use crate::error::CredentialError;

/// デコード済みで未検証の認証情報リクエスト
#[derive(Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl CredentialsRequest {
    /// 生のボディをデコードする
    ///
    /// 空ボディ、JSON オブジェクト以外、フィールドの型不一致は `MalformedInput`。
    /// 未知のフィールドは値を解釈せずに読み飛ばす。
    pub fn from_body(body: &[u8]) -> Result<Self, CredentialError> {
        // 配列は serde の derive だと位置指定で読めてしまうため先頭の文字で弾く
        match body.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'{') => {}
            Some(_) => {
                return Err(CredentialError::MalformedInput(
                    "JSON オブジェクトではありません".to_string(),
                ));
            }
            None => {
                return Err(CredentialError::MalformedInput(
                    "リクエストボディが空です".to_string(),
                ));
            }
        }

        match serde_json::Deserializer::from_slice(body)
            .into_iter::<Self>()
            .next()
        {
            Some(Ok(request)) => Ok(request),
            Some(Err(e)) => Err(CredentialError::MalformedInput(e.to_string())),
            None => Err(CredentialError::MalformedInput(
                "リクエストボディが空です".to_string(),
            )),
        }
    }

    /// ユーザー名とパスワードの両方を必須として検証する
    ///
    /// パスワード、ユーザー名の順に検査する。
    pub fn into_credential(self) -> Result<Credential, CredentialError> {
        let password = self
            .password
            .and_then(|p| Password::new(p).ok())
            .ok_or(CredentialError::MissingPassword)?;
        let username = self
            .username
            .and_then(|u| Username::new(u).ok())
            .ok_or(CredentialError::MissingUsername)?;
        Ok(Credential::new(username, password))
    }

    /// ユーザー名のみを必須として検証する（パスワードは無視）
    pub fn into_username(self) -> Result<Username, CredentialError> {
        self.username
            .and_then(|u| Username::new(u).ok())
            .ok_or(CredentialError::MissingUsername)
    }
}
