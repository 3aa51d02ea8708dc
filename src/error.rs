// src/error.rs
//
// 分数エンジンのエラー型定義
// 失敗はすべて検出した時点で即座に返す（部分的な結果は返さない）

use std::fmt;

pub type Result<T> = std::result::Result<T, FractionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FractionError {
    /// 分母がゼロになる演算
    DivisionByZero,
    /// 解釈できない入力（文字列の文法不一致、NaN など）
    InvalidParameter,
    /// 分子・分母の二引数指定で整数でない値が渡された
    NonIntegerParameter,
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionError::DivisionByZero => write!(f, "Division by Zero"),
            FractionError::InvalidParameter => write!(f, "Invalid argument"),
            FractionError::NonIntegerParameter => write!(f, "Parameters must be integer"),
        }
    }
}

impl std::error::Error for FractionError {}

impl From<FractionError> for String {
    fn from(e: FractionError) -> Self {
        e.to_string()
    }
}
