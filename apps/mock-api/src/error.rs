//! # Mock API エラー定義
//!
//! Mock API で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! エラー本文はプレーンテキスト。JSON エンベロープは成功レスポンスのみが使用する。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Mock API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authorization ヘッダーの欠落または空トークン
    #[error("missing or empty bearer token")]
    Unauthorized,

    /// 許可されていない HTTP メソッド
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        };

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorizedが401に変換される() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_method_not_allowedが405に変換される() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
