//! # Strategist Mock API サーバー
//!
//! フロントエンド開発・E2E テスト用のモック API サーバー。
//!
//! ## 役割
//!
//! 実バックエンド（ストラテジー生成・決済）が完成するまでの間、
//! API のワイヤ形式を固定レスポンスで提供する:
//!
//! - **ストラテジー生成**: `POST /io/generate`（固定の strategy_id / summary）
//! - **ワークシート購入**: `POST /buy/worksheet`（固定の transaction_id / download_url）
//! - **認証ゲート**: `Authorization: Bearer <token>` の存在のみ検査（検証なしのスタブ）
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐
//! │   Frontend   │────▶│   Mock API   │
//! │   / E2E      │     │  port: 8080  │
//! └──────────────┘     └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `MOCK_API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `LOG_FORMAT` | No | ログ出力形式（`json` / `pretty`、デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベルフィルタ |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p strategist-mock-api
//!
//! # 本番相当（JSON ログ）
//! PORT=8080 LOG_FORMAT=json cargo run -p strategist-mock-api --release
//! ```

use std::net::SocketAddr;

use anyhow::Context as _;
use strategist_mock_api::{app_builder::build_app, config::ApiConfig};
use strategist_shared::observability::{self, TracingConfig};
use tokio::net::TcpListener;

/// Mock API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("mock-api");
    observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "mock-api").entered();

    // 設定読み込み
    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Mock API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // ルーター構築
    let app = build_app();

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Mock API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
