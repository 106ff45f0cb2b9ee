//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - モックサービスのため、ハンドラはリクエスト内容を読まず固定レスポンスを返す
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `strategy`: ストラテジー生成（モック）
//! - `purchase`: ワークシート購入（モック）

pub mod health;
pub mod purchase;
pub mod strategy;

pub use health::health_check;
pub use purchase::purchase_worksheet;
pub use strategy::generate_strategy;
