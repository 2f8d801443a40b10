//! 環境変数による設定取得（adapter 層）
//!
//! usecase は環境変数に直接依存せず、adapter 経由で取得する。

use std::env;
use std::path::PathBuf;

/// JSONL ログの出力先を環境変数 RAGCHAT_LOG から取得（未設定ならログ無効）
pub fn log_path_from_env() -> Option<PathBuf> {
    env::var("RAGCHAT_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
