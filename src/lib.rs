//! 任意精度の有理数演算エンジン
//!
//! 分子・分母を多倍長整数で保持し、常に既約分数に正規化する。
//! 整数・浮動小数点数・文字列（循環小数や帯分数を含む）・JSON などから生成でき、
//! 演算結果は循環節を括弧で表す小数表記、分数表記、LaTeX、連分数で出力できる。
//!
//! ```
//! use fraction_core::Fraction;
//!
//! let a = Fraction::new("1/3").unwrap();
//! let sum = a.add("1/6").unwrap();
//! assert_eq!(sum, Fraction::new((1, 2)).unwrap());
//! assert_eq!(Fraction::new((1, 3)).unwrap().to_string(), "0.(3)");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod ops;
pub mod parser;
pub mod tokenizer;
pub mod types;
pub mod wasm_api;

pub use config::DecimalFormat;
pub use error::{FractionError, Result};
pub use format::continued::ContinuedFraction;
pub use parser::{Integral, IntoFraction};
pub use types::{Fraction, Sign};
