//! # ドメイン層エラー定義

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 必須フィールドが空の場合など、入力値が値オブジェクトの制約に違反している。
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
