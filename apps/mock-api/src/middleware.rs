//! # ミドルウェア
//!
//! ルーターに適用する横断的関心事を定義する。

pub mod auth;

pub use auth::{BearerToken, require_bearer};
