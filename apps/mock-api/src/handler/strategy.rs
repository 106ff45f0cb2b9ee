//! # ストラテジー生成ハンドラ（モック）
//!
//! ## エンドポイント
//!
//! - `POST /io/generate` - ストラテジー生成（固定レスポンス）
//!
//! 実際の生成パイプラインが完成するまで、リクエストボディを読まずに
//! 常に同一の成功エンベロープを返す。

use axum::Json;
use strategist_shared::ResponseEnvelope;

/// モックの strategy_id
const MOCK_STRATEGY_ID: &str = "strat_mock_0001";

/// モックの要約文
const MOCK_STRATEGY_SUMMARY: &str =
    "Focus paid spend on the two highest-converting channels and rebalance weekly.";

/// POST /io/generate
///
/// リクエストボディの内容にかかわらず、固定のモック識別子を含む
/// 成功エンベロープを返す。
pub async fn generate_strategy() -> Json<ResponseEnvelope> {
    Json(
        ResponseEnvelope::success("Strategy generated successfully")
            .with_entry("strategy_id", MOCK_STRATEGY_ID)
            .with_entry("summary", MOCK_STRATEGY_SUMMARY),
    )
}
