// src/types/mod.rs
//
// 有理数の内部表現
//
// | 入力         | 内部表現 (sign, numerator, denominator) |
// |--------------|------------------------------------------|
// | 42           | (+, 42, 1)                               |
// | "-6/8"       | (-, 3, 4)                                |
// | "0.1'6'"     | (+, 1, 6)                                |
// | 0.1          | (+, 1, 10)                               |
// | "-0"         | (+, 0, 1)                                |

pub mod fraction;
pub mod json;

pub use self::fraction::{Fraction, Sign};
