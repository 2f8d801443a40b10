//! 画面描画 Outbound ポート
//!
//! コントローラはメッセージの追加・プレースホルダの出し入れをイベントとして
//! 通知するだけで、実際の描画（DOM・コンソール）はアダプタの責務。

use common::chat::SourceRef;

/// メッセージ表示を受け取る Sink（Outbound ポート）
pub trait PresentationSink: Send {
    /// ユーザーメッセージを末尾に追加
    fn append_user(&mut self, content: &str);

    /// 「考え中」プレースホルダを表示する。送信 1 回につき 1 回だけ呼ばれる
    fn append_pending(&mut self);

    /// プレースホルダを取り除く。成功・失敗どちらの経路でも 1 回だけ呼ばれる
    fn remove_pending(&mut self);

    /// アシスタントの回答と出典を末尾に追加
    fn append_assistant(&mut self, content: &str, sources: &[SourceRef]);
}
