//! コンソール描画アダプタ（PresentationSink / Notifier の標準実装）

use crate::ports::outbound::{Notice, Notifier, PresentationSink};
use common::chat::SourceRef;
use std::io::{self, Write};

const PENDING_TEXT: &str = "Thinking...";

/// メッセージをそのまま書き出す Sink
///
/// プレースホルダは改行せずに表示し、除去時に行を上書きで消す。
pub struct ConsoleSink<W: Write + Send> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn format_source(source: &SourceRef) -> String {
        match source {
            SourceRef::Ranked {
                document_name,
                relevance,
            } => format!("{} (Relevance: {:.2})", document_name, relevance),
            SourceRef::Chunked { metadata } => {
                format!("{} (chunk {})", metadata.document_name, metadata.chunk_id)
            }
        }
    }
}

impl<W: Write + Send> PresentationSink for ConsoleSink<W> {
    fn append_user(&mut self, content: &str) {
        let _ = writeln!(self.out, "You: {}", content);
    }

    fn append_pending(&mut self) {
        let _ = write!(self.out, "{}", PENDING_TEXT);
        let _ = self.out.flush();
    }

    fn remove_pending(&mut self) {
        // 同じ行を空白で上書きして消す
        let _ = write!(self.out, "\r{}\r", " ".repeat(PENDING_TEXT.len()));
        let _ = self.out.flush();
    }

    fn append_assistant(&mut self, content: &str, sources: &[SourceRef]) {
        let _ = writeln!(self.out, "Assistant: {}", content);
        if !sources.is_empty() {
            let _ = writeln!(self.out, "Sources:");
            for source in sources {
                let _ = writeln!(self.out, "  - {}", Self::format_source(source));
            }
        }
    }
}

/// 通知を 1 行ずつ書き出す Notifier（バナーの代わり）
pub struct ConsoleNotifier<W: Write + Send> {
    out: W,
}

impl ConsoleNotifier<io::Stderr> {
    pub fn stderr() -> Self {
        Self { out: io::stderr() }
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, notice: Notice) {
        let prefix = if notice.is_error { "[err]" } else { "[ok]" };
        let _ = writeln!(self.out, "{} {}", prefix, notice.message);
    }
}
