//! # CredentialRepository
//!
//! 認証情報の保持を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **挿入順の保持**: 認証情報は登録順の列として保持し、位置（0 始まり）を公開する
//! - **安定削除**: 削除時も残りの要素の相対順序を変えない
//! - **単一ロック**: すべての読み書きを 1 つの `RwLock` で保護し、
//!   重複チェックと追加を不可分に行う
//!
//! 検索はユーザー名の線形走査で行う。

use std::sync::Arc;

use async_trait::async_trait;
use credstore_domain::credential::{Credential, Password, Username};
use tokio::sync::RwLock;

use crate::error::InfraError;

/// 認証情報リポジトリトレイト
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// 認証情報を末尾に追加する
    ///
    /// # 戻り値
    ///
    /// - `Ok(position)`: 追加された位置
    /// - `Err(_)`: 同じユーザー名が既に存在する（`InfraErrorKind::Conflict`）
    async fn insert(&self, credential: &Credential) -> Result<usize, InfraError>;

    /// ユーザー名に一致する認証情報の位置を返す
    async fn find_position(&self, username: &Username) -> Result<Option<usize>, InfraError>;

    /// ユーザー名に一致する認証情報を返す
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Credential>, InfraError>;

    /// パスワードのみをその場で更新する
    ///
    /// # 戻り値
    ///
    /// - `Ok(true)`: 更新した
    /// - `Ok(false)`: 該当なし（ストアは変更しない）
    async fn update_password(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<bool, InfraError>;

    /// ユーザー名に一致する認証情報を 1 件削除する
    ///
    /// # 戻り値
    ///
    /// - `Ok(true)`: 削除した
    /// - `Ok(false)`: 該当なし（ストアは変更しない）
    async fn delete_by_username(&self, username: &Username) -> Result<bool, InfraError>;

    /// 全認証情報を登録順で返す
    async fn find_all(&self) -> Result<Vec<Credential>, InfraError>;

    /// 保持している認証情報の件数
    async fn count(&self) -> Result<usize, InfraError>;
}

/// インメモリ実装
///
/// `Clone` したインスタンスは同じストアを共有する。
/// プロセス再起動で内容は失われる。
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialRepository {
    credentials: Arc<RwLock<Vec<Credential>>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn position_of(credentials: &[Credential], username: &Username) -> Option<usize> {
    credentials.iter().position(|c| c.username() == username)
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(username = %credential.username()))]
    async fn insert(&self, credential: &Credential) -> Result<usize, InfraError> {
        let mut credentials = self.credentials.write().await;
        if position_of(&credentials, credential.username()).is_some() {
            return Err(InfraError::conflict(
                "Credential",
                credential.username().as_str(),
            ));
        }
        credentials.push(credential.clone());
        Ok(credentials.len() - 1)
    }

    async fn find_position(&self, username: &Username) -> Result<Option<usize>, InfraError> {
        let credentials = self.credentials.read().await;
        Ok(position_of(&credentials, username))
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Credential>, InfraError> {
        let credentials = self.credentials.read().await;
        Ok(position_of(&credentials, username).map(|i| credentials[i].clone()))
    }

    async fn update_password(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<bool, InfraError> {
        let mut credentials = self.credentials.write().await;
        let Some(credential) = credentials.iter_mut().find(|c| c.username() == username) else {
            return Ok(false);
        };
        credential.change_password(password.clone());
        Ok(true)
    }

    async fn delete_by_username(&self, username: &Username) -> Result<bool, InfraError> {
        let mut credentials = self.credentials.write().await;
        let Some(index) = position_of(&credentials, username) else {
            return Ok(false);
        };
        // Vec::remove は後続要素を詰めるので順序が保たれる
        credentials.remove(index);
        Ok(true)
    }

    async fn find_all(&self) -> Result<Vec<Credential>, InfraError> {
        Ok(self.credentials.read().await.clone())
    }

    async fn count(&self) -> Result<usize, InfraError> {
        Ok(self.credentials.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn credential(username: &str, password: &str) -> Credential {
        Credential::new(
            Username::new(username).unwrap(),
            Password::new(password).unwrap(),
        )
    }

    fn username(value: &str) -> Username {
        Username::new(value).unwrap()
    }

    async fn usernames(sut: &InMemoryCredentialRepository) -> Vec<String> {
        sut.find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.username().as_str().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_insertは登録順の位置を返す() {
        let sut = InMemoryCredentialRepository::new();

        for i in 0..50 {
            let position = sut
                .insert(&credential(&i.to_string(), &i.to_string()))
                .await
                .unwrap();
            assert_eq!(position, i);
        }

        let expected: Vec<String> = (0..50).map(|i| i.to_string()).collect();
        assert_eq!(usernames(&sut).await, expected);
    }

    #[tokio::test]
    async fn test_同じユーザー名のinsertはconflictで件数は変わらない() {
        let sut = InMemoryCredentialRepository::new();
        sut.insert(&credential("a", "p1")).await.unwrap();

        let result = sut.insert(&credential("a", "p2")).await;

        let err = result.unwrap_err();
        assert_eq!(err.as_conflict(), Some(("Credential", "a")));
        assert_eq!(sut.count().await.unwrap(), 1);
        let stored = sut.find_by_username(&username("a")).await.unwrap().unwrap();
        assert_eq!(stored.password().as_str(), "p1");
    }

    #[tokio::test]
    async fn test_find_positionは完全一致のみ() {
        let sut = InMemoryCredentialRepository::new();
        sut.insert(&credential("alice", "p")).await.unwrap();

        assert_eq!(sut.find_position(&username("alice")).await.unwrap(), Some(0));
        assert_eq!(sut.find_position(&username("Alice")).await.unwrap(), None);
        assert_eq!(sut.find_position(&username("alice ")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_passwordは該当レコードのパスワードのみ変更する() {
        let sut = InMemoryCredentialRepository::new();
        sut.insert(&credential("a", "pa")).await.unwrap();
        sut.insert(&credential("b", "pb")).await.unwrap();

        let updated = sut
            .update_password(&username("b"), &Password::new("new").unwrap())
            .await
            .unwrap();

        assert!(updated);
        let all = sut.find_all().await.unwrap();
        assert_eq!(all, vec![credential("a", "pa"), credential("b", "new")]);
    }

    #[tokio::test]
    async fn test_存在しないユーザーのupdate_passwordはfalse() {
        let sut = InMemoryCredentialRepository::new();
        sut.insert(&credential("student1", "dab")).await.unwrap();

        let updated = sut
            .update_password(&username("student001"), &Password::new("dabdab").unwrap())
            .await
            .unwrap();

        assert!(!updated);
        assert_eq!(sut.find_all().await.unwrap(), vec![credential("student1", "dab")]);
    }

    #[tokio::test]
    async fn test_削除後も残りの順序が保たれる() {
        let sut = InMemoryCredentialRepository::new();
        for name in ["a", "b", "c", "d"] {
            sut.insert(&credential(name, "p")).await.unwrap();
        }

        let deleted = sut.delete_by_username(&username("b")).await.unwrap();

        assert!(deleted);
        assert_eq!(usernames(&sut).await, vec!["a", "c", "d"]);
        assert_eq!(sut.find_position(&username("d")).await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_存在しないユーザーの削除はfalseでストアは変わらない() {
        let sut = InMemoryCredentialRepository::new();
        sut.insert(&credential("student1", "dab")).await.unwrap();

        let deleted = sut
            .delete_by_username(&username("student0001"))
            .await
            .unwrap();

        assert!(!deleted);
        assert_eq!(sut.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_全件削除後の登録は位置0になる() {
        let sut = InMemoryCredentialRepository::new();
        sut.insert(&credential("a", "p")).await.unwrap();
        sut.insert(&credential("b", "p")).await.unwrap();
        sut.delete_by_username(&username("a")).await.unwrap();
        sut.delete_by_username(&username("b")).await.unwrap();

        let position = sut.insert(&credential("c", "p")).await.unwrap();

        assert_eq!(position, 0);
    }

    #[tokio::test]
    async fn test_cloneしたインスタンスはストアを共有する() {
        let sut = InMemoryCredentialRepository::new();
        let other = sut.clone();

        other.insert(&credential("a", "p")).await.unwrap();

        assert_eq!(sut.count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_同時登録でも同じユーザー名は1件だけ() {
        let sut = InMemoryCredentialRepository::new();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = sut.clone();
                tokio::spawn(async move { repo.insert(&credential("same", &i.to_string())).await })
            })
            .collect();

        let mut succeeded = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                succeeded += 1;
            }
        }

        assert_eq!(succeeded, 1);
        assert_eq!(sut.count().await.unwrap(), 1);
    }
}
