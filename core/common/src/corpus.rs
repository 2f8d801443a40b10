//! ドキュメントコーパスと設定のワイヤ型
//!
//! `/api/documents*` と `/api/settings` のレスポンス・リクエストに対応する。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// コーパス内の 1 ドキュメント（`GET /api/documents` の要素）
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentEntry {
    pub document_id: String,
    pub document_name: String,
    #[serde(default)]
    pub source: Option<String>,
    pub chunk_count: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// 現在の設定（`GET /api/settings` / `POST /api/settings` のレスポンス）
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub llm_model: Option<String>,
}

/// 設定更新（`POST /api/settings` のリクエスト、未指定フィールドは送らない）
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_entry_deserialize() {
        let v = json!({
            "document_id": "abc123",
            "document_name": "doc1.pdf",
            "source": "uploaded",
            "chunk_count": 12,
            "created_at": "2026-03-01T09:30:00Z"
        });
        let entry: DocumentEntry = serde_json::from_value(v).unwrap();
        assert_eq!(entry.document_id, "abc123");
        assert_eq!(entry.document_name, "doc1.pdf");
        assert_eq!(entry.chunk_count, 12);
        assert!(entry.created_at.is_some());
    }

    #[test]
    fn test_document_entry_without_optional_fields() {
        let v = json!({
            "document_id": "abc123",
            "document_name": "doc1.pdf",
            "chunk_count": 0
        });
        let entry: DocumentEntry = serde_json::from_value(v).unwrap();
        assert_eq!(entry.source, None);
        assert_eq!(entry.created_at, None);
    }

    #[test]
    fn test_settings_update_skips_unset_fields() {
        let update = SettingsUpdate {
            system_prompt: Some("Be brief.".to_string()),
            llm_model: None,
        };
        let v = serde_json::to_value(&update).unwrap();
        assert_eq!(v["system_prompt"], "Be brief.");
        assert!(v.get("llm_model").is_none());
    }

    #[test]
    fn test_settings_deserialize_empty_object() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
