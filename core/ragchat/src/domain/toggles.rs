//! UI トグル（use_llm / use_retrieval）の共有状態
//!
//! コントローラからは読み取り専用。派生ルール（LLM を切ると retrieval が
//! 強制 ON かつロック）はこの型自身が持ち、UI 側の set 呼び出しに適用する。
//! LLM を使わないモードでは retrieval が唯一の回答源のため必須になる。

use std::sync::atomic::{AtomicBool, Ordering};

/// リクエストに載せるフラグ（送信時に導出し、保存はしない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestFlags {
    pub use_llm: bool,
    /// `!use_retrieval`。ワイヤ上の名前に合わせて反転済み
    pub skip_retrieval: bool,
}

/// チェックボックス 2 つ分の共有状態
#[derive(Debug)]
pub struct ToggleState {
    use_llm: AtomicBool,
    use_retrieval: AtomicBool,
}

impl ToggleState {
    /// 初期状態は両方 ON
    pub fn new() -> Self {
        Self {
            use_llm: AtomicBool::new(true),
            use_retrieval: AtomicBool::new(true),
        }
    }

    pub fn use_llm(&self) -> bool {
        self.use_llm.load(Ordering::Relaxed)
    }

    pub fn use_retrieval(&self) -> bool {
        self.use_retrieval.load(Ordering::Relaxed)
    }

    /// LLM トグルの変更。OFF にすると retrieval を強制 ON にする
    pub fn set_use_llm(&self, on: bool) {
        self.use_llm.store(on, Ordering::Relaxed);
        if !on {
            self.use_retrieval.store(true, Ordering::Relaxed);
        }
    }

    /// retrieval トグルの変更。ロック中（use_llm が OFF）は無視して false を返す
    pub fn set_use_retrieval(&self, on: bool) -> bool {
        if self.retrieval_locked() {
            return false;
        }
        self.use_retrieval.store(on, Ordering::Relaxed);
        true
    }

    /// retrieval トグルが操作不能か（use_llm OFF の間は true）
    pub fn retrieval_locked(&self) -> bool {
        !self.use_llm()
    }

    /// 送信用フラグを導出する
    pub fn flags(&self) -> RequestFlags {
        RequestFlags {
            use_llm: self.use_llm(),
            skip_retrieval: !self.use_retrieval(),
        }
    }
}

impl Default for ToggleState {
    fn default() -> Self {
        Self::new()
    }
}
