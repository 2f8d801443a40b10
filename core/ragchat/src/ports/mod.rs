//! ポート定義（usecase が依存する trait 群）

pub mod outbound;
