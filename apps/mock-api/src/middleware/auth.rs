//! # 認証ゲートミドルウェア
//!
//! `Authorization: Bearer <token>` ヘッダーの存在だけを検査するプレースホルダー実装。
//! トークンの署名・有効期限・クレームは一切検証しない（実認証基盤が入るまでのスタブ）。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn;
//!
//! Router::new()
//!     .route("/io/generate", post(generate_strategy))
//!     .layer(from_fn(require_bearer))
//! ```

use axum::{
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

/// Authorization ヘッダーから除去するプレフィックス
const BEARER_PREFIX: &str = "Bearer ";

/// ゲートを通過したリクエストに付与されるベアラートークン
///
/// `Bearer ` プレフィックスを除去した生のトークン文字列を保持する。
/// ダウンストリームのハンドラはリクエスト extensions から取得できる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// トークン文字列への参照を返す
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 認証ゲートミドルウェア
///
/// `Authorization` ヘッダーを検査し、欠落または空トークンの場合は
/// 401 Unauthorized を返してダウンストリームのハンドラを呼び出さない。
/// トークンが存在する場合は `Bearer ` プレフィックスを除去し、
/// [`BearerToken`] としてリクエスト extensions に格納して転送する。
///
/// トークン値は資格情報のためログに出力せず、バイト長のみ DEBUG で記録する。
pub async fn require_bearer(mut request: Request<Body>, next: Next) -> Response {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    // プレフィックスなしの値はそのままトークンとして扱う
    let token = header_value
        .strip_prefix(BEARER_PREFIX)
        .unwrap_or(header_value);

    if token.is_empty() {
        return ApiError::Unauthorized.into_response();
    }

    tracing::debug!(token_bytes = token.len(), "ベアラートークンを受理");

    let token = token.to_string();

    request
        .extensions_mut()
        .insert(BearerToken(token));

    next.run(request).await
}
