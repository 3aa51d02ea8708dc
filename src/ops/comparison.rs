// src/ops/comparison.rs
//
// 比較演算
// 分母を払って整数同士で比較する（浮動小数点は使わない）

use num_bigint::BigInt;
use num_traits::Zero;
use std::cmp::Ordering;

use crate::error::Result;
use crate::parser::IntoFraction;
use crate::types::fraction::Fraction;

impl Fraction {
    /// s1·n1·d2 - s2·n2·d1 の符号で比較する
    ///
    /// `Ordering as i8` で -1 / 0 / 1 が得られる。
    pub fn compare<T: IntoFraction>(&self, rhs: T) -> Result<Ordering> {
        let rhs = rhs.into_fraction()?;
        Ok(self.cmp(&rhs))
    }

    /// 値が等しいか
    ///
    /// 例: 19.6 と [98, 5] は等しい
    pub fn equals<T: IntoFraction>(&self, rhs: T) -> Result<bool> {
        Ok(self.compare(rhs)? == Ordering::Equal)
    }

    /// rhs で割り切れるか
    ///
    /// 分母を払った剰余 (n1·d2) mod (n2·d1) がゼロなら真。rhs がゼロなら偽。
    pub fn divisible<T: IntoFraction>(&self, rhs: T) -> Result<bool> {
        let rhs = rhs.into_fraction()?;
        let divisor = rhs.numerator() * self.denominator();
        if divisor.is_zero() {
            return Ok(false);
        }
        Ok(((self.numerator() * rhs.denominator()) % divisor).is_zero())
    }

    fn cross_difference(&self, other: &Fraction) -> BigInt {
        self.sign().apply(self.numerator() * other.denominator())
            - other.sign().apply(other.numerator() * self.denominator())
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // 整数同士の場合は乗算をスキップ
        if self.is_integer() && other.is_integer() {
            return self.signed_numerator().cmp(&other.signed_numerator());
        }
        self.cross_difference(other).cmp(&BigInt::zero())
    }
}
