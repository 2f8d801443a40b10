//! 通知バナー Outbound ポート

/// 一時的な成功・エラーバナー 1 件分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// 通知を受け取る Sink（Outbound ポート）。表示とタイムアウトはアダプタの責務
pub trait Notifier: Send {
    fn notify(&mut self, notice: Notice);
}
