//! # Credential Service 設定
//!
//! 環境変数から Credential Service サーバーの設定を読み込む。

use std::{env, num::ParseIntError};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 80;

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CREDSTORE_PORT は有効なポート番号である必要があります: {value:?}")]
    InvalidPort {
        value:  String,
        #[source]
        source: ParseIntError,
    },
}

/// Credential Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialServiceConfig {
    /// バインドアドレス（ホスト名も可）
    pub host: String,
    pub port: u16,
}

impl CredentialServiceConfig {
    /// 環境変数から設定を読み込む
    ///
    /// | 変数名 | デフォルト |
    /// |--------|-----------|
    /// | `CREDSTORE_HOST` | `0.0.0.0` |
    /// | `CREDSTORE_PORT` | `80` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("CREDSTORE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("CREDSTORE_PORT") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }
}
