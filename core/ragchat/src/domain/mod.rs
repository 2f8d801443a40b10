//! ragchat 固有のドメイン型（型と不変条件）

pub mod history;
pub mod toggles;

pub use history::History;
pub use toggles::{RequestFlags, ToggleState};
