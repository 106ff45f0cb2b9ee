//! # アプリケーション構築
//!
//! ルーター定義とレイヤー構成を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use strategist_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    error::ApiError,
    handler::{generate_strategy, health_check, purchase_worksheet},
    middleware::require_bearer,
};

/// メソッド不一致時のフォールバックハンドラ
///
/// 各ルートの [`MethodRouter`](axum::routing::MethodRouter) に
/// `fallback` として設定する。
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// ルーターを構築する
///
/// モックエンドポイントは認証ゲート配下に配置する。ゲートはハンドラの
/// メソッド判定より先に実行されるため、未認証リクエストはメソッドに
/// かかわらず 401 となり、認証済みのメソッド不一致のみ 405 となる。
pub fn build_app() -> Router {
    Router::new()
        .route("/health", get(health_check))
        // モックエンドポイント（認証ゲート配下）
        .merge(
            Router::new()
                .route(
                    "/io/generate",
                    post(generate_strategy).fallback(method_not_allowed),
                )
                .route(
                    "/buy/worksheet",
                    post(purchase_worksheet).fallback(method_not_allowed),
                )
                .layer(from_fn(require_bearer)),
        )
        // Request ID レイヤー（レイヤー順序が重要: 下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
        // 3. CanonicalLogLineLayer: リクエスト完了時に1行サマリログを出力（スパン内）
        // 4. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
