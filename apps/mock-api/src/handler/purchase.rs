//! # ワークシート購入ハンドラ（モック）
//!
//! ## エンドポイント
//!
//! - `POST /buy/worksheet` - ワークシート購入（固定レスポンス）
//!
//! 決済連携が入るまで、リクエストボディを読まずに常に同一の
//! 成功エンベロープを返す。

use axum::Json;
use strategist_shared::ResponseEnvelope;

/// モックの transaction_id
const MOCK_TRANSACTION_ID: &str = "txn_mock_0001";

/// モックのダウンロード URL
const MOCK_DOWNLOAD_URL: &str =
    "https://downloads.strategist.example.com/worksheets/growth-worksheet-v1.pdf";

/// POST /buy/worksheet
///
/// リクエストボディの内容にかかわらず、固定のモック取引識別子と
/// ダウンロード URL を含む成功エンベロープを返す。
pub async fn purchase_worksheet() -> Json<ResponseEnvelope> {
    Json(
        ResponseEnvelope::success("Worksheet purchased successfully")
            .with_entry("transaction_id", MOCK_TRANSACTION_ID)
            .with_entry("download_url", MOCK_DOWNLOAD_URL),
    )
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header},
        middleware::from_fn,
        routing::post,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::middleware::require_bearer;

    fn create_test_app() -> Router {
        Router::new()
            .route("/buy/worksheet", post(purchase_worksheet))
            .layer(from_fn(require_bearer))
    }

    #[tokio::test]
    async fn test_purchase_worksheet_固定エンベロープを返す() {
        // Given
        let sut = create_test_app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/buy/worksheet")
            .header(header::AUTHORIZATION, "Bearer mock-token")
            .body(Body::empty())
            .unwrap();

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "Worksheet purchased successfully");
        assert_eq!(json["data"]["transaction_id"], MOCK_TRANSACTION_ID);
        assert_eq!(json["data"]["download_url"], MOCK_DOWNLOAD_URL);
    }

    #[tokio::test]
    async fn test_purchase_worksheet_content_typeがapplication_jsonである() {
        // Given
        let sut = create_test_app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/buy/worksheet")
            .header(header::AUTHORIZATION, "Bearer mock-token")
            .body(Body::empty())
            .unwrap();

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap(),
            "application/json"
        );
    }
}
