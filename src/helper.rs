//! 補助的な型

/// エラー型をまとめて扱うための型。
///
/// 複数種類のエラーを`?`で伝播させるために利用。
pub type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;
