//! # 認証情報
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 用途 |
//! |---|------------|------|
//! | [`Username`] | ユーザー名 | 認証情報を一意に識別するキー |
//! | [`Password`] | パスワード | 平文のまま保持される不透明な文字列 |
//! | [`Credential`] | 認証情報 | ユーザー名とパスワードの組 |
//!
//! ユーザー名の比較は完全一致（大文字小文字を区別）で行う。
//! 前後の空白も値の一部として扱い、trim しない。

use std::fmt;

use crate::DomainError;

/// ユーザー名
///
/// 空文字列は許可しない。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("ユーザー名は必須です".to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// パスワード
///
/// ハッシュ化せずに保持する。空文字列は許可しない。
///
/// # セキュリティ
///
/// Debug 出力ではパスワードの値をマスクする。`Display` は実装しない。
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}

impl Password {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("パスワードは必須です".to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// 認証情報
///
/// 作成後に変更できるのはパスワードのみ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    username: Username,
    password: Password,
}

impl Credential {
    pub fn new(username: Username, password: Password) -> Self {
        Self { username, password }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    /// パスワードを置き換える
    pub fn change_password(&mut self, password: Password) {
        self.password = password;
    }

    pub fn into_parts(self) -> (Username, Password) {
        (self.username, self.password)
    }
}
