//! エラーハンドリング
//!
//! すべての失敗はユーザー向けメッセージに変換できる。リトライはしない。

/// ragchat のエラー型（ドメイン層）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 接続・送信そのものの失敗（ネットワーク到達不能など）
    #[error("Request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },
    /// 非 2xx ステータス。ボディはパース可能と仮定しない
    #[error("{message} (HTTP {status})")]
    Backend { status: u16, message: String },
    /// 2xx だがボディが想定外の形
    #[error("Malformed response from {endpoint}: {message}")]
    MalformedResponse { endpoint: String, message: String },
    /// ローカルのシリアライズ失敗
    #[error("JSON error: {0}")]
    Json(String),
    /// ローカル I/O（アップロードファイル読み込み等）
    #[error("I/O error: {0}")]
    Io(String),
    /// 引数不正
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn transport(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }

    pub fn malformed(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    pub fn io_msg(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
