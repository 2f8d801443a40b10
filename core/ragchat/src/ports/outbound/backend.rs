//! バックエンド Outbound ポート
//!
//! チャット送信とコーパス管理を trait で隔離する。標準実装は
//! `common::api::ApiClient`（adapter 層で impl）。

use common::chat::{ChatReply, ChatRequest};
use common::corpus::{DocumentEntry, Settings, SettingsUpdate};
use common::error::Error;
use std::path::Path;

/// チャットエンドポイントへの送信（1 回のみ試行）
pub trait ChatBackend: Send + Sync {
    fn chat(&self, request: &ChatRequest) -> Result<ChatReply, Error>;
}

/// ドキュメントコーパスと設定のエンドポイント群
pub trait CorpusBackend: Send + Sync {
    fn list_documents(&self) -> Result<Vec<DocumentEntry>, Error>;
    fn delete_document(&self, document_id: &str) -> Result<(), Error>;
    fn upload_document(&self, path: &Path) -> Result<DocumentEntry, Error>;
    fn import_drive(&self, folder_id: Option<&str>) -> Result<Vec<DocumentEntry>, Error>;
    fn fetch_settings(&self) -> Result<Settings, Error>;
    fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings, Error>;
}
