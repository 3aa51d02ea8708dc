// src/format/mod.rs
//
// 分数の文字列表現
//
// decimal   : 循環節を括弧で囲む小数表記（Display もこれを使う）
// fraction  : "a/b"、帯分数、LaTeX
// continued : 連分数展開と近似分数

pub mod continued;
pub mod decimal;
pub mod fraction;
