//! # ユースケース層
//!
//! Credential Service のビジネスロジックを実装する。
//!
//! - **トレイトベースの設計**: ハンドラはトレイト経由で呼び出し、テストではスタブに差し替える
//! - **依存性注入**: リポジトリは外部から注入する

pub mod credential;

use async_trait::async_trait;
pub use credential::CredentialUseCaseImpl;
use credstore_domain::credential::{Credential, Password, Username};

use crate::error::CredentialError;

/// 認証情報ユースケーストレイト
#[async_trait]
pub trait CredentialUseCase: Send + Sync {
    /// 認証情報を登録する
    ///
    /// ## 戻り値
    ///
    /// - `Ok(position)`: 登録された位置（0 始まり）
    /// - `Err(CredentialError::Conflict)`: 同じユーザー名が登録済み
    async fn sign_up(&self, credential: Credential) -> Result<usize, CredentialError>;

    /// ユーザー名に一致する認証情報の位置を返す
    async fn find_index(&self, username: &Username) -> Result<usize, CredentialError>;

    /// ユーザー名に一致する認証情報のパスワードを返す
    async fn find_password(&self, username: &Username) -> Result<Password, CredentialError>;

    /// 既存ユーザーのパスワードを `credential` のパスワードで置き換える
    async fn update_password(&self, credential: Credential) -> Result<(), CredentialError>;

    /// ユーザーを削除する
    async fn delete_user(&self, username: &Username) -> Result<(), CredentialError>;
}

#[async_trait]
impl CredentialUseCase for CredentialUseCaseImpl {
    async fn sign_up(&self, credential: Credential) -> Result<usize, CredentialError> {
        self.sign_up(credential).await
    }

    async fn find_index(&self, username: &Username) -> Result<usize, CredentialError> {
        self.find_index(username).await
    }

    async fn find_password(&self, username: &Username) -> Result<Password, CredentialError> {
        self.find_password(username).await
    }

    async fn update_password(&self, credential: Credential) -> Result<(), CredentialError> {
        self.update_password(credential).await
    }

    async fn delete_user(&self, username: &Username) -> Result<(), CredentialError> {
        self.delete_user(username).await
    }
}
