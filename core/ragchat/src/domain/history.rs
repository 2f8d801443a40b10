//! セッションヒストリー（会話履歴）のドメイン型
//!
//! 完了した user/assistant の交換のみを保持する追記専用ログ。
//! 並べ替え・途中変更はなく、全消去はセッションリセットのみ。

use common::chat::Turn;

/// セッションヒストリー（会話のメッセージ列）
#[derive(Debug, Clone, Default)]
pub struct History {
    turns: Vec<Turn>,
}

impl History {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// 唯一の追記操作。呼び出し順がそのまま保存順になる
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Turn::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Turn::assistant(content));
    }

    /// その時点のコピーを返す（以後の追記の影響を受けない）
    pub fn snapshot(&self) -> Vec<Turn> {
        self.turns.clone()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// セッションリセット時のみ使う全消去
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
