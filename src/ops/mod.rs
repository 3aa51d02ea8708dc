// src/ops/mod.rs
//
// 分数の演算
//
// 二項演算は右辺を IntoFraction で受け取り、分子・分母を組み合わせた後に必ず正規化する。
// 元の値は変更せず、常に新しい Fraction を返す。

pub mod arithmetic;
pub mod comparison;
pub mod power;
pub mod rounding;
