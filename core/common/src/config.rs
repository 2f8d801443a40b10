//! バックエンド接続設定
//!
//! ベース URL と出典形状。CLI フラグ > 環境変数 > デフォルトの順で解決する。

use crate::chat::SourceShape;

/// デフォルトのバックエンド URL（ローカル開発サーバ）
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// ベース URL の環境変数名
pub const ENV_BASE_URL: &str = "RAGCHAT_URL";

/// 出典形状の環境変数名（ranked | chunked）
pub const ENV_SOURCE_SHAPE: &str = "RAGCHAT_SOURCE_SHAPE";

/// バックエンド接続設定
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    /// 末尾スラッシュなしのベース URL
    pub base_url: String,
    /// チャットレスポンスの出典フィールドの形状
    pub source_shape: SourceShape,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>, source_shape: SourceShape) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            source_shape,
        }
    }

    /// 環境変数から解決する。`overrides` が Some のフィールドはそちらを優先する。
    pub fn resolve(url_override: Option<String>, shape_override: Option<SourceShape>) -> Self {
        let base_url = url_override
            .or_else(|| std::env::var(ENV_BASE_URL).ok().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let source_shape = shape_override
            .or_else(|| {
                std::env::var(ENV_SOURCE_SHAPE)
                    .ok()
                    .as_deref()
                    .and_then(SourceShape::from_str)
            })
            .unwrap_or_default();
        Self::new(base_url, source_shape)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, SourceShape::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.source_shape, SourceShape::Ranked);
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = BackendConfig::new("http://example.com/", SourceShape::Chunked);
        assert_eq!(config.base_url, "http://example.com");
    }

    #[test]
    fn test_resolve_prefers_overrides() {
        let config = BackendConfig::resolve(
            Some("http://other:9000".to_string()),
            Some(SourceShape::Chunked),
        );
        assert_eq!(config.base_url, "http://other:9000");
        assert_eq!(config.source_shape, SourceShape::Chunked);
    }
}
