//! # Strategist 共有ユーティリティ
//!
//! このクレートは、Strategist Mock API
//! プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - アプリケーションクレート（apps/*）から依存される
//! - ビジネスロジックを含まない純粋なワイヤ型とログ基盤のみを配置
//! - tower / tracing 依存は `observability` feature の有効時のみ

pub mod envelope;
pub mod health;

#[cfg(feature = "observability")]
pub mod canonical_log;
#[cfg(feature = "observability")]
pub mod observability;

pub use envelope::{ResponseEnvelope, ResponseStatus};
pub use health::HealthResponse;
