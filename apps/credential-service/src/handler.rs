//! # HTTP リクエストハンドラ
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、ストア操作は usecase 層に委譲する
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `echo`: Cookie / クエリパラメータのエコー
//! - `credential`: 認証情報の CRUD

pub mod credential;
pub mod echo;
pub mod health;

pub use credential::{
    CredentialState,
    delete_user,
    get_index,
    get_json,
    get_password,
    signup,
    update_password,
};
pub use echo::{get_cookie, get_query};
pub use health::{ReadinessState, health_check, readiness_check};
