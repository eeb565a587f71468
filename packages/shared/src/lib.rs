//! # Credstore 共有ユーティリティ
//!
//! ワークスペース内のすべてのクレートから利用される共通ユーティリティ。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - HTTP / トレーシング関連の依存は `observability` feature の内側に閉じる

pub mod health;
pub mod observability;

pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
