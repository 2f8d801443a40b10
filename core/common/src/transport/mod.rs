//! HTTP トランスポート Outbound ポート
//!
//! 固定されたバックエンドエンドポイントへのリクエスト発行を trait で隔離する。
//! 1 回のみ試行し、リトライやタイムアウトの上乗せはしない（UX は呼び出し側の責務）。

mod http;

pub use http::HttpTransport;

use crate::error::Error;
use serde_json::Value;
use std::path::Path;

/// HTTP メソッド（このクライアントが使う範囲のみ）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// バックエンドへリクエストを発行する Outbound ポート
///
/// 成功時はパース済み JSON ボディを返す。非 2xx は [`Error::Backend`]、
/// 接続失敗は [`Error::Transport`]、パース不能な成功ボディは
/// [`Error::MalformedResponse`] に分類する。
pub trait Transport: Send + Sync {
    /// JSON リクエストを送り、JSON ボディを返す
    fn send(&self, method: Method, endpoint: &str, payload: Option<&Value>)
        -> Result<Value, Error>;

    /// multipart/form-data でファイルを送る（フィールド名 "file"）
    fn upload(&self, endpoint: &str, file_path: &Path) -> Result<Value, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_method_display() {
        assert_eq!(format!("{} /api/chat", Method::Post), "POST /api/chat");
    }
}
