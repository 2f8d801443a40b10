//! ユースケース（アダプター経由で I/O を行う）

pub mod corpus;
pub mod session;

pub use corpus::CorpusUseCase;
pub use session::ChatSession;
