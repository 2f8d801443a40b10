//! チャットのワイヤ型
//!
//! `POST /api/chat` のリクエスト・レスポンスに対応する型と、
//! バックエンドのバリアントごとに異なる出典（ソース）形状の定義。

use serde::{Deserialize, Serialize};

/// メッセージの役割（user / assistant）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// 会話の 1 メッセージ。作成後は不変で、並び順が文脈を定義する
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// `POST /api/chat` のリクエストボディ
///
/// `history` は送信時点までに完了した交換のみを含む（送信中のクエリは含めない）。
/// `skip_retrieval` は UI トグル `use_retrieval` の反転値。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub query: String,
    pub history: Vec<Turn>,
    pub use_llm: bool,
    pub skip_retrieval: bool,
}

/// `POST /api/chat` のレスポンス（パース済み）
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub answer: String,
    pub sources: Vec<SourceRef>,
}

/// 回答の根拠となったドキュメントへの参照
///
/// バックエンドのバリアントにより 2 つの互換性のない形が存在する。
/// どちらが有効かは設定（[`SourceShape`]）で決める。推測はしない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceRef {
    /// バリアント A: `sources: [{document_name, relevance}]`
    Ranked { document_name: String, relevance: f64 },
    /// バリアント B: `source_documents: [{metadata: {document_name, chunk_id}}]`
    Chunked { metadata: ChunkMetadata },
}

impl SourceRef {
    /// 参照先のドキュメント名
    pub fn document_name(&self) -> &str {
        match self {
            Self::Ranked { document_name, .. } => document_name,
            Self::Chunked { metadata } => &metadata.document_name,
        }
    }
}

/// バリアント B の出典メタデータ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    pub document_name: String,
    pub chunk_id: i64,
}

/// レスポンスの出典フィールドの形状（デプロイバリアントごとの設定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceShape {
    /// `sources` フィールド、`{document_name, relevance}` の配列
    #[default]
    Ranked,
    /// `source_documents` フィールド、`{metadata: {...}}` の配列
    Chunked,
}

impl SourceShape {
    /// 文字列から形状を解析（設定・環境変数用）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ranked" | "sources" => Some(Self::Ranked),
            "chunked" | "source_documents" => Some(Self::Chunked),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ranked => "ranked",
            Self::Chunked => "chunked",
        }
    }

    /// レスポンスで出典を運ぶフィールド名
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Ranked => "sources",
            Self::Chunked => "source_documents",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_turn_roles_serialize_lowercase() {
        let turn = Turn::user("Hello");
        let v = serde_json::to_value(&turn).unwrap();
        assert_eq!(v, json!({"role": "user", "content": "Hello"}));
        let turn = Turn::assistant("Hi");
        let v = serde_json::to_value(&turn).unwrap();
        assert_eq!(v["role"], "assistant");
    }

    #[test]
    fn test_turn_roundtrip() {
        let turn = Turn::assistant("X is Y");
        let json = serde_json::to_string(&turn).unwrap();
        let back: Turn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, turn);
    }

    #[test]
    fn test_chat_request_payload_shape() {
        let request = ChatRequest {
            query: "What is X?".to_string(),
            history: vec![Turn::user("A"), Turn::assistant("B")],
            use_llm: true,
            skip_retrieval: false,
        };
        let v = serde_json::to_value(&request).unwrap();
        assert_eq!(v["query"], "What is X?");
        assert_eq!(v["use_llm"], true);
        assert_eq!(v["skip_retrieval"], false);
        let history = v["history"].as_array().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0]["role"], "user");
        assert_eq!(history[1]["role"], "assistant");
    }

    #[test]
    fn test_source_ref_document_name() {
        let ranked = SourceRef::Ranked {
            document_name: "doc1.pdf".to_string(),
            relevance: 0.9,
        };
        assert_eq!(ranked.document_name(), "doc1.pdf");
        let chunked = SourceRef::Chunked {
            metadata: ChunkMetadata {
                document_name: "doc2.txt".to_string(),
                chunk_id: 3,
            },
        };
        assert_eq!(chunked.document_name(), "doc2.txt");
    }

    #[test]
    fn test_source_shape_from_str() {
        assert_eq!(SourceShape::from_str("ranked"), Some(SourceShape::Ranked));
        assert_eq!(SourceShape::from_str("sources"), Some(SourceShape::Ranked));
        assert_eq!(SourceShape::from_str("chunked"), Some(SourceShape::Chunked));
        assert_eq!(
            SourceShape::from_str("SOURCE_DOCUMENTS"),
            Some(SourceShape::Chunked)
        );
        assert_eq!(SourceShape::from_str("unknown"), None);
    }

    #[test]
    fn test_source_shape_as_str_roundtrips() {
        for shape in [SourceShape::Ranked, SourceShape::Chunked] {
            assert_eq!(SourceShape::from_str(shape.as_str()), Some(shape));
        }
    }

    #[test]
    fn test_source_shape_field_name() {
        assert_eq!(SourceShape::Ranked.field_name(), "sources");
        assert_eq!(SourceShape::Chunked.field_name(), "source_documents");
    }
}
