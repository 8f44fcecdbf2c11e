//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 列の欠落や空の価格セグメントは仕様上エラーではなく空値として
/// 扱うため、Errになるのはフィード自体が壊れている場合のみ。
#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV error: {0}")]
    Csv(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
