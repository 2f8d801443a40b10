//! バックエンド API クライアント
//!
//! 固定されたエンドポイント群（`/api/chat`, `/api/settings`, `/api/documents*`）の
//! 型付きバインディング。Transport の上で JSON の組み立て・パースのみを行う。

use crate::chat::{ChatReply, ChatRequest, ChunkMetadata, SourceRef, SourceShape};
use crate::corpus::{DocumentEntry, Settings, SettingsUpdate};
use crate::error::Error;
use crate::transport::{Method, Transport};
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::Path;

const CHAT_ENDPOINT: &str = "/api/chat";
const SETTINGS_ENDPOINT: &str = "/api/settings";
const DOCUMENTS_ENDPOINT: &str = "/api/documents";
const UPLOAD_ENDPOINT: &str = "/api/documents/upload";
const DRIVE_ENDPOINT: &str = "/api/documents/drive";

/// バリアント A の出典要素
#[derive(Debug, Deserialize)]
struct RankedWire {
    document_name: String,
    relevance: f64,
}

/// バリアント B の出典要素（content / score 等の余剰フィールドは無視）
#[derive(Debug, Deserialize)]
struct ChunkedWire {
    metadata: ChunkMetadata,
}

/// バックエンド API クライアント
pub struct ApiClient<T: Transport> {
    transport: T,
    shape: SourceShape,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, shape: SourceShape) -> Self {
        Self { transport, shape }
    }

    /// `POST /api/chat` — クエリと履歴を送り、回答と出典を受け取る
    pub fn chat(&self, request: &ChatRequest) -> Result<ChatReply, Error> {
        let payload =
            serde_json::to_value(request).map_err(|e| Error::json(e.to_string()))?;
        let body = self
            .transport
            .send(Method::Post, CHAT_ENDPOINT, Some(&payload))?;
        parse_chat_reply(&body, self.shape)
    }

    /// `GET /api/settings`
    pub fn fetch_settings(&self) -> Result<Settings, Error> {
        let body = self.transport.send(Method::Get, SETTINGS_ENDPOINT, None)?;
        serde_json::from_value(body)
            .map_err(|e| Error::malformed(SETTINGS_ENDPOINT, e.to_string()))
    }

    /// `POST /api/settings` — 指定したフィールドのみ更新し、更新後の設定を返す
    pub fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings, Error> {
        let payload = serde_json::to_value(update).map_err(|e| Error::json(e.to_string()))?;
        let body = self
            .transport
            .send(Method::Post, SETTINGS_ENDPOINT, Some(&payload))?;
        serde_json::from_value(body)
            .map_err(|e| Error::malformed(SETTINGS_ENDPOINT, e.to_string()))
    }

    /// `GET /api/documents`
    pub fn list_documents(&self) -> Result<Vec<DocumentEntry>, Error> {
        let body = self.transport.send(Method::Get, DOCUMENTS_ENDPOINT, None)?;
        serde_json::from_value(body)
            .map_err(|e| Error::malformed(DOCUMENTS_ENDPOINT, e.to_string()))
    }

    /// `DELETE /api/documents/{id}` — レスポンスボディの中身は見ない
    pub fn delete_document(&self, document_id: &str) -> Result<(), Error> {
        let endpoint = format!("{}/{}", DOCUMENTS_ENDPOINT, document_id);
        self.transport.send(Method::Delete, &endpoint, None)?;
        Ok(())
    }

    /// `POST /api/documents/upload` — multipart でファイルを送る
    pub fn upload_document(&self, path: &Path) -> Result<DocumentEntry, Error> {
        let body = self.transport.upload(UPLOAD_ENDPOINT, path)?;
        serde_json::from_value(body).map_err(|e| Error::malformed(UPLOAD_ENDPOINT, e.to_string()))
    }

    /// `POST /api/documents/drive` — Google Drive フォルダから取り込み
    pub fn import_drive(&self, folder_id: Option<&str>) -> Result<Vec<DocumentEntry>, Error> {
        let payload = json!({ "folder_id": folder_id });
        let body = self
            .transport
            .send(Method::Post, DRIVE_ENDPOINT, Some(&payload))?;
        serde_json::from_value(body).map_err(|e| Error::malformed(DRIVE_ENDPOINT, e.to_string()))
    }
}

/// チャットレスポンスをパースする
///
/// `answer` 欠落は MalformedResponse。出典フィールドは設定された形状の名前のみ
/// 参照し、欠落・null は空リスト、形状不一致は MalformedResponse とする。
fn parse_chat_reply(body: &Value, shape: SourceShape) -> Result<ChatReply, Error> {
    let answer = body
        .get("answer")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::malformed(CHAT_ENDPOINT, "missing field 'answer'"))?
        .to_string();

    let sources = match body.get(shape.field_name()) {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => parse_sources(value, shape)?,
    };

    Ok(ChatReply { answer, sources })
}

fn parse_sources(value: &Value, shape: SourceShape) -> Result<Vec<SourceRef>, Error> {
    match shape {
        SourceShape::Ranked => {
            let wires: Vec<RankedWire> = serde_json::from_value(value.clone())
                .map_err(|e| Error::malformed(CHAT_ENDPOINT, e.to_string()))?;
            Ok(wires
                .into_iter()
                .map(|w| SourceRef::Ranked {
                    document_name: w.document_name,
                    relevance: w.relevance,
                })
                .collect())
        }
        SourceShape::Chunked => {
            let wires: Vec<ChunkedWire> = serde_json::from_value(value.clone())
                .map_err(|e| Error::malformed(CHAT_ENDPOINT, e.to_string()))?;
            Ok(wires
                .into_iter()
                .map(|w| SourceRef::Chunked { metadata: w.metadata })
                .collect())
        }
    }
}
