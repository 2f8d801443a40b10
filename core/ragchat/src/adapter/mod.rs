//! アダプタ（ポートの標準実装）

mod api_backend;
mod console;
mod env;

pub use console::{ConsoleNotifier, ConsoleSink};
pub use env::log_path_from_env;
