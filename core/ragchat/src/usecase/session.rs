//! チャットセッションのユースケース（送信〜反映のライフサイクル）
//!
//! 1 回の submit で行うこと:
//!   1. 入力を trim。空なら何もしない
//!   2. Sink へユーザーメッセージとプレースホルダを通知（I/O の前）
//!   3. 追記前のヒストリーのスナップショットと現在のトグルからリクエストを構築
//!   4. バックエンド呼び出し（ここが唯一のブロッキング点）
//!   5. 経路にかかわらずプレースホルダを 1 回だけ除去
//!   6. 成功: assistant 表示 → ヒストリーへ user / assistant を順に追記
//!      失敗: Notifier へエラー 1 件。ヒストリーは変更しない
//!
//! `submit(&mut self)` の排他借用により、送信中の二重 submit は型レベルで
//! 起こせない（Idle → Pending → Idle の状態機械を借用検査で強制する）。

use crate::domain::{History, ToggleState};
use crate::ports::outbound::{ChatBackend, Notice, Notifier, PresentationSink};
use common::chat::{ChatRequest, Turn};
use common::log::{Log, LogRecord};
use std::sync::Arc;

/// 1 つのチャットスレッドを統括するセッションコントローラ
pub struct ChatSession {
    backend: Arc<dyn ChatBackend>,
    toggles: Arc<ToggleState>,
    history: History,
    sink: Box<dyn PresentationSink>,
    notifier: Box<dyn Notifier>,
    log: Arc<dyn Log>,
}

impl ChatSession {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        toggles: Arc<ToggleState>,
        sink: Box<dyn PresentationSink>,
        notifier: Box<dyn Notifier>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            backend,
            toggles,
            history: History::new(),
            sink,
            notifier,
            log,
        }
    }

    /// クエリを送信する。結果は Sink / Notifier の副作用として観測される。
    /// この関数自体は失敗を外へ伝播しない。
    pub fn submit(&mut self, raw_query: &str) {
        let query = raw_query.trim();
        if query.is_empty() {
            return;
        }

        self.sink.append_user(query);
        self.sink.append_pending();

        let flags = self.toggles.flags();
        let request = ChatRequest {
            query: query.to_string(),
            // 送信中のターンは含めない。完了済みの交換のみが文脈になる
            history: self.history.snapshot(),
            use_llm: flags.use_llm,
            skip_retrieval: flags.skip_retrieval,
        };
        let _ = self.log.log(
            &LogRecord::info("chat request started")
                .with_layer("usecase")
                .with_kind("lifecycle")
                .with_field("history_len", serde_json::json!(request.history.len()))
                .with_field("use_llm", serde_json::json!(flags.use_llm))
                .with_field("skip_retrieval", serde_json::json!(flags.skip_retrieval)),
        );

        let result = self.backend.chat(&request);

        // 成功・失敗のどちらでも、後続の処理より先に 1 回だけ除去する
        self.sink.remove_pending();

        match result {
            Ok(reply) => {
                self.sink.append_assistant(&reply.answer, &reply.sources);
                let _ = self.log.log(
                    &LogRecord::info("chat request completed")
                        .with_layer("usecase")
                        .with_kind("lifecycle")
                        .with_field("sources", serde_json::json!(reply.sources.len())),
                );
                self.history.push_user(query);
                self.history.push_assistant(reply.answer);
            }
            Err(e) => {
                let _ = self.log.log(
                    &LogRecord::error(format!("chat request failed: {}", e))
                        .with_layer("usecase")
                        .with_kind("error"),
                );
                self.notifier.notify(Notice::error(format!("Error: {}", e)));
            }
        }
    }

    /// セッションリセット。ヒストリーを全消去する唯一の経路
    pub fn reset(&mut self) {
        self.history.clear();
        let _ = self.log.log(
            &LogRecord::info("session reset")
                .with_layer("usecase")
                .with_kind("lifecycle"),
        );
    }

    pub fn history(&self) -> &[Turn] {
        self.history.turns()
    }
}
