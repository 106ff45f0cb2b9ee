//! # レスポンスエンベロープ
//!
//! Mock API の統一レスポンス形式
//! `{ "status": ..., "message": ..., "data": ... }` を提供する。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// レスポンスの成否ステータス
///
/// モックハンドラは常に [`Success`](ResponseStatus::Success) を返すが、
/// ワイヤ形式としては `error` も定義されている。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// 成功
    Success,
    /// 失敗
    Error,
}

/// Mock API の統一レスポンス型
///
/// すべてのモックエンドポイントはこの形式でレスポンスを返す。
/// `data` は文字列キー・文字列値のマップで、空の場合は JSON に出力されない。
/// キー順を決定的にするため `BTreeMap` を使用する。
///
/// ## 使用例
///
/// ```
/// use strategist_shared::{ResponseEnvelope, ResponseStatus};
///
/// let response = ResponseEnvelope::success("Strategy generated")
///     .with_entry("strategy_id", "strat_mock_0001");
/// assert_eq!(response.status, ResponseStatus::Success);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub status:  ResponseStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data:    Option<BTreeMap<String, String>>,
}

impl ResponseEnvelope {
    /// 成功エンベロープを作成する（`data` なし）
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status:  ResponseStatus::Success,
            message: message.into(),
            data:    None,
        }
    }

    /// 失敗エンベロープを作成する（`data` なし）
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status:  ResponseStatus::Error,
            message: message.into(),
            data:    None,
        }
    }

    /// `data` にキー・値を追加する
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}
