//! # Mock API 設定
//!
//! 環境変数から Mock API サーバーの設定を読み込む。

use std::env;

use anyhow::Context as _;

/// デフォルトのリッスンポート
const DEFAULT_PORT: u16 = 8080;

/// Mock API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    ///
    /// `MOCK_API_HOST`（デフォルト: `0.0.0.0`）と `PORT`（デフォルト: `8080`）を読む。
    /// `PORT` が数値としてパースできない場合はエラーを返す。
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("MOCK_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT は有効なポート番号である必要があります: {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }
}
