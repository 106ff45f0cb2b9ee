//! # Strategist Mock API ライブラリ
//!
//! フロントエンド開発・E2E テスト用のモック API サーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーター定義とレイヤー構成
//! - `config`: 環境変数からの設定読み込み
//! - `error`: サービスエラーと HTTP レスポンス変換
//! - `handler`: HTTP ハンドラ（固定レスポンス）
//! - `middleware`: 認証ゲートミドルウェア

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
