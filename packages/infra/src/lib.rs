//! # Credstore インフラ層
//!
//! 認証情報ストアの具体的な実装を提供する。
//!
//! ## 依存関係
//!
//! ```text
//! service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトとインメモリ実装
//!
//! ## 使用例
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use credstore_infra::repository::{CredentialRepository, InMemoryCredentialRepository};
//!
//! let repository: Arc<dyn CredentialRepository> = Arc::new(InMemoryCredentialRepository::new());
//! ```

pub mod error;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
