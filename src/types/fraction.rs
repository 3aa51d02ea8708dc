// src/types/fraction.rs
//
// 正規化済みの有理数型
//
// 符号・分子・分母を別々に保持する。分子は常に非負、分母は常に正で、
// gcd(分子, 分母) == 1 を保つ。値は生成後に変更されない。

use lazy_static::lazy_static;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, ToPrimitive, Zero};
use std::ops::Mul;

use crate::error::{FractionError, Result};

lazy_static! {
    pub(crate) static ref TWO: BigUint = BigUint::from(2u32);
    pub(crate) static ref FIVE: BigUint = BigUint::from(5u32);
    pub(crate) static ref TEN: BigUint = BigUint::from(10u32);
}

/// 分数の符号
///
/// ゼロは常に `Plus` として保持する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    #[default]
    Plus,
    Minus,
}

impl Sign {
    pub fn is_negative(self) -> bool {
        self == Sign::Minus
    }

    /// +1 または -1
    pub fn signum(self) -> i32 {
        match self {
            Sign::Plus => 1,
            Sign::Minus => -1,
        }
    }

    pub fn flip(self) -> Sign {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }

    pub(crate) fn of(n: &BigInt) -> Sign {
        if n.sign() == num_bigint::Sign::Minus {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }

    pub(crate) fn apply(self, magnitude: BigUint) -> BigInt {
        match self {
            Sign::Plus => BigInt::from_biguint(num_bigint::Sign::Plus, magnitude),
            Sign::Minus => BigInt::from_biguint(num_bigint::Sign::Minus, magnitude),
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, other: Sign) -> Sign {
        if self == other {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    sign: Sign,
    numerator: BigUint,
    denominator: BigUint,
}

impl Fraction {
    /// 0/1
    pub fn zero() -> Self {
        Fraction {
            sign: Sign::Plus,
            numerator: BigUint::zero(),
            denominator: BigUint::one(),
        }
    }

    /// 1/1
    pub fn one() -> Self {
        Fraction {
            sign: Sign::Plus,
            numerator: BigUint::one(),
            denominator: BigUint::one(),
        }
    }

    /// 符号・分子・分母から正規化された分数を生成する
    ///
    /// 分母がゼロなら gcd を計算する前に `DivisionByZero` を返す。
    pub fn normalize(sign: Sign, numerator: BigUint, denominator: BigUint) -> Result<Self> {
        if denominator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Ok(Self::reduced(sign, numerator, denominator))
    }

    /// 符号付きの分子と分母から正規化された分数を生成する
    ///
    /// 負の分子・負の分母はそれぞれ符号として取り込む。
    pub fn from_signed(numerator: BigInt, denominator: BigInt) -> Result<Self> {
        let sign = Sign::of(&numerator) * Sign::of(&denominator);
        Self::normalize(sign, numerator.magnitude().clone(), denominator.magnitude().clone())
    }

    /// 分母が非ゼロであることが分かっている場合の約分
    pub(crate) fn reduced(sign: Sign, numerator: BigUint, denominator: BigUint) -> Self {
        debug_assert!(!denominator.is_zero());
        let common = gcd(&numerator, &denominator);
        let numerator = numerator / &common;
        let denominator = denominator / &common;
        let sign = if numerator.is_zero() { Sign::Plus } else { sign };
        Fraction {
            sign,
            numerator,
            denominator,
        }
    }

    pub(crate) fn reduced_signed(numerator: BigInt, denominator: BigUint) -> Self {
        let sign = Sign::of(&numerator);
        let (_, magnitude) = numerator.into_parts();
        Self::reduced(sign, magnitude, denominator)
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn numerator(&self) -> &BigUint {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigUint {
        &self.denominator
    }

    /// 符号を含めた分子
    pub fn signed_numerator(&self) -> BigInt {
        self.sign.apply(self.numerator.clone())
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// 整数かどうかを判定
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// 最も近い浮動小数点数（sign * numerator / denominator を浮動小数点で計算）
    ///
    /// 分子・分母が f64 の範囲を超えると無限大や NaN になる。
    pub fn to_number(&self) -> f64 {
        let n = self.numerator.to_f64().unwrap_or(f64::INFINITY);
        let d = self.denominator.to_f64().unwrap_or(f64::INFINITY);
        f64::from(self.sign.signum()) * n / d
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::zero()
    }
}

/// ユークリッドの互除法
///
/// どちらかがゼロなら、もう一方をそのまま返す。
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    if a.is_zero() {
        return b.clone();
    }
    if b.is_zero() {
        return a.clone();
    }
    let mut a = a.clone();
    let mut b = b.clone();
    loop {
        a %= &b;
        if a.is_zero() {
            return b;
        }
        b %= &a;
        if b.is_zero() {
            return a;
        }
    }
}

impl ToPrimitive for Fraction {
    fn to_i64(&self) -> Option<i64> {
        // Truncated toward zero
        (self.sign.apply(&self.numerator / &self.denominator)).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            None
        } else {
            (&self.numerator / &self.denominator).to_u64()
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.to_number())
    }
}
