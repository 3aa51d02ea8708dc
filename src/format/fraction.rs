// src/format/fraction.rs
//
// 分数表記と LaTeX 表記

use num_bigint::BigUint;
use num_traits::Zero;

use crate::types::fraction::Fraction;

impl Fraction {
    /// "a/b" 形式の文字列
    ///
    /// exclude_whole が真で絶対値が 1 以上なら整数部を分けて "4 1/3" のように表示する。
    /// 整数は分母を付けずに表示する。
    pub fn to_fraction_string(&self, exclude_whole: bool) -> String {
        let mut out = self.sign_prefix();
        if self.is_integer() {
            out.push_str(&self.numerator().to_string());
            return out;
        }

        let (whole, n) = self.split_whole(exclude_whole);
        if let Some(whole) = whole {
            out.push_str(&format!("{} ", whole));
        }
        out.push_str(&format!("{}/{}", n, self.denominator()));
        out
    }

    /// LaTeX 形式の文字列
    ///
    /// 例: 4/3 → "\frac{4}{3}"、exclude_whole なら "1\frac{1}{3}"
    pub fn to_latex_string(&self, exclude_whole: bool) -> String {
        let mut out = self.sign_prefix();
        if self.is_integer() {
            out.push_str(&self.numerator().to_string());
            return out;
        }

        let (whole, n) = self.split_whole(exclude_whole);
        if let Some(whole) = whole {
            out.push_str(&whole.to_string());
        }
        out.push_str(&format!("\\frac{{{}}}{{{}}}", n, self.denominator()));
        out
    }

    fn sign_prefix(&self) -> String {
        if self.is_negative() {
            "-".to_string()
        } else {
            String::new()
        }
    }

    /// 整数部を分ける場合は (整数部, 残りの分子)、分けない場合は (None, 分子)
    fn split_whole(&self, exclude_whole: bool) -> (Option<BigUint>, BigUint) {
        let n = self.numerator();
        let d = self.denominator();
        let whole = n / d;
        if exclude_whole && !whole.is_zero() {
            (Some(whole), n % d)
        } else {
            (None, n.clone())
        }
    }
}
