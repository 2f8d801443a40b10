//! ApiClient をバックエンドポートに接続するアダプタ
//!
//! ChatBackend / CorpusBackend はともに型付き API クライアントへ委譲するだけ。

use crate::ports::outbound::{ChatBackend, CorpusBackend};
use common::api::ApiClient;
use common::chat::{ChatReply, ChatRequest};
use common::corpus::{DocumentEntry, Settings, SettingsUpdate};
use common::error::Error;
use common::transport::Transport;
use std::path::Path;

impl<T: Transport> ChatBackend for ApiClient<T> {
    fn chat(&self, request: &ChatRequest) -> Result<ChatReply, Error> {
        ApiClient::chat(self, request)
    }
}

impl<T: Transport> CorpusBackend for ApiClient<T> {
    fn list_documents(&self) -> Result<Vec<DocumentEntry>, Error> {
        ApiClient::list_documents(self)
    }

    fn delete_document(&self, document_id: &str) -> Result<(), Error> {
        ApiClient::delete_document(self, document_id)
    }

    fn upload_document(&self, path: &Path) -> Result<DocumentEntry, Error> {
        ApiClient::upload_document(self, path)
    }

    fn import_drive(&self, folder_id: Option<&str>) -> Result<Vec<DocumentEntry>, Error> {
        ApiClient::import_drive(self, folder_id)
    }

    fn fetch_settings(&self) -> Result<Settings, Error> {
        ApiClient::fetch_settings(self)
    }

    fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings, Error> {
        ApiClient::update_settings(self, update)
    }
}
