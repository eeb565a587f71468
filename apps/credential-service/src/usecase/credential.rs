//! # 認証情報ユースケース
//!
//! リポジトリの結果を `UserNotFound` / `Conflict` に対応付ける。
//! 失敗した操作はストアを変更しない。

use std::sync::Arc;

use credstore_domain::credential::{Credential, Password, Username};
use credstore_infra::repository::CredentialRepository;

use crate::error::CredentialError;

/// 認証情報ユースケースの実装
pub struct CredentialUseCaseImpl {
    credential_repository: Arc<dyn CredentialRepository>,
}

impl CredentialUseCaseImpl {
    pub fn new(credential_repository: Arc<dyn CredentialRepository>) -> Self {
        Self {
            credential_repository,
        }
    }

    /// 認証情報を末尾に登録する
    pub async fn sign_up(&self, credential: Credential) -> Result<usize, CredentialError> {
        match self.credential_repository.insert(&credential).await {
            Ok(position) => {
                tracing::info!(
                    username = %credential.username(),
                    position,
                    "ユーザーを登録しました"
                );
                Ok(position)
            }
            Err(e) if e.is_conflict() => Err(CredentialError::Conflict),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_index(&self, username: &Username) -> Result<usize, CredentialError> {
        self.credential_repository
            .find_position(username)
            .await?
            .ok_or(CredentialError::UserNotFound)
    }

    pub async fn find_password(&self, username: &Username) -> Result<Password, CredentialError> {
        let credential = self
            .credential_repository
            .find_by_username(username)
            .await?
            .ok_or(CredentialError::UserNotFound)?;
        let (_, password) = credential.into_parts();
        Ok(password)
    }

    /// パスワードのみを更新する
    pub async fn update_password(&self, credential: Credential) -> Result<(), CredentialError> {
        let updated = self
            .credential_repository
            .update_password(credential.username(), credential.password())
            .await?;
        if !updated {
            return Err(CredentialError::UserNotFound);
        }
        tracing::info!(username = %credential.username(), "パスワードを更新しました");
        Ok(())
    }

    pub async fn delete_user(&self, username: &Username) -> Result<(), CredentialError> {
        let deleted = self
            .credential_repository
            .delete_by_username(username)
            .await?;
        if !deleted {
            return Err(CredentialError::UserNotFound);
        }
        tracing::info!(username = %username, "ユーザーを削除しました");
        Ok(())
    }
}
