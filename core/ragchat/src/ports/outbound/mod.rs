//! Outbound ポート（usecase から外界への trait）

pub mod backend;
pub mod notifier;
pub mod presentation;

pub use backend::{ChatBackend, CorpusBackend};
pub use notifier::{Notice, Notifier};
pub use presentation::PresentationSink;
