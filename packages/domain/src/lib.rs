//! # Credstore ドメイン層
//!
//! 認証情報（ユーザー名とパスワードの組）を表す値オブジェクトを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（ストア実装）にも HTTP にも依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use credstore_domain::credential::{Credential, Password, Username};
//!
//! let credential = Credential::new(
//!     Username::new("OskiBear").unwrap(),
//!     Password::new("HoshJug").unwrap(),
//! );
//! assert_eq!(credential.username().as_str(), "OskiBear");
//! ```

pub mod credential;
pub mod error;

pub use error::DomainError;
