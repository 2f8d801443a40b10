//! ragchat 共通ライブラリ
//!
//! CLI とアダプタで共有する機能を提供します。

/// エラーハンドリング
pub mod error;

/// チャットのワイヤ型（Turn / ChatRequest / ChatReply / SourceRef）
pub mod chat;

/// ドキュメントコーパスと設定のワイヤ型
pub mod corpus;

/// バックエンド接続設定
pub mod config;

/// 構造化ログ（JSONL）
pub mod log;

/// HTTP トランスポート（ポートとアダプタ）
pub mod transport;

/// バックエンド API クライアント（エンドポイントの型付きバインディング）
pub mod api;
