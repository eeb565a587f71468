//! # リポジトリ
//!
//! - **トレイト経由の注入**: ユースケースは `Arc<dyn CredentialRepository>` のみに依存する
//! - **テスタビリティ**: インスタンスごとに独立したストアを持つため、テストはリセット不要

pub mod credential_repository;

pub use credential_repository::{CredentialRepository, InMemoryCredentialRepository};
