// src/ops/arithmetic.rs
//
// 四則演算・剰余・分数の gcd/lcm・符号操作

use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{FractionError, Result};
use crate::parser::IntoFraction;
use crate::types::fraction::{gcd, Fraction, Sign};

impl Fraction {
    /// 加算: (s1·n1·d2 + s2·n2·d1) / (d1·d2)
    ///
    /// ```
    /// use fraction_core::Fraction;
    ///
    /// let f = Fraction::new((2, 3)).unwrap().add("14.9").unwrap();
    /// assert_eq!(f.to_fraction_string(false), "467/30");
    /// ```
    pub fn add<T: IntoFraction>(&self, rhs: T) -> Result<Fraction> {
        let rhs = rhs.into_fraction()?;
        Ok(self.sum(&rhs, rhs.sign()))
    }

    /// 減算: (s1·n1·d2 - s2·n2·d1) / (d1·d2)
    pub fn sub<T: IntoFraction>(&self, rhs: T) -> Result<Fraction> {
        let rhs = rhs.into_fraction()?;
        Ok(self.sum(&rhs, rhs.sign().flip()))
    }

    /// 乗算: (s1·s2·n1·n2) / (d1·d2)
    pub fn mul<T: IntoFraction>(&self, rhs: T) -> Result<Fraction> {
        let rhs = rhs.into_fraction()?;
        Ok(self.product(&rhs))
    }

    /// 除算: (s1·s2·n1·d2) / (d1·n2)
    ///
    /// 右辺がゼロなら `DivisionByZero`
    pub fn div<T: IntoFraction>(&self, rhs: T) -> Result<Fraction> {
        let rhs = rhs.into_fraction()?;
        Fraction::normalize(
            self.sign() * rhs.sign(),
            self.numerator() * rhs.denominator(),
            self.denominator() * rhs.numerator(),
        )
    }

    /// 剰余（引数あり）: (s1·((d2·n1) mod (n2·d1))) / (d2·d1)
    ///
    /// 余りの符号は左辺に従う（ゼロ方向への切り捨て除算の余り）。
    /// 例: 13/3 mod 7/8 = 5/6
    pub fn modulo<T: IntoFraction>(&self, rhs: T) -> Result<Fraction> {
        let rhs = rhs.into_fraction()?;
        let divisor = rhs.numerator() * self.denominator();
        if divisor.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        let remainder = (rhs.denominator() * self.numerator()) % divisor;
        Fraction::normalize(self.sign(), remainder, rhs.denominator() * self.denominator())
    }

    /// 剰余（引数なし）: (s1·n1) mod d1 を整数として返す
    ///
    /// 分子を分母で割った余り。例: 7/2 → 1、-7/2 → -1
    pub fn remainder(&self) -> Fraction {
        Fraction::reduced(
            self.sign(),
            self.numerator() % self.denominator(),
            BigUint::one(),
        )
    }

    /// 分数の最大公約数: gcd(n1, n2) / lcm(d1, d2)
    ///
    /// 例: gcd(5/8, 3/7) = 1/56
    pub fn gcd<T: IntoFraction>(&self, rhs: T) -> Result<Fraction> {
        let rhs = rhs.into_fraction()?;
        Ok(Fraction::reduced(
            Sign::Plus,
            gcd(rhs.numerator(), self.numerator()) * gcd(rhs.denominator(), self.denominator()),
            rhs.denominator() * self.denominator(),
        ))
    }

    /// 分数の最小公倍数: lcm(n1, n2) / gcd(d1, d2)
    ///
    /// 両方の分子がゼロなら 0。例: lcm(5/8, 3/7) = 15
    pub fn lcm<T: IntoFraction>(&self, rhs: T) -> Result<Fraction> {
        let rhs = rhs.into_fraction()?;
        if rhs.is_zero() && self.is_zero() {
            return Ok(Fraction::zero());
        }
        Ok(Fraction::reduced(
            Sign::Plus,
            rhs.numerator() * self.numerator(),
            gcd(rhs.numerator(), self.numerator()) * gcd(rhs.denominator(), self.denominator()),
        ))
    }

    /// 逆数（符号は保持）。ゼロなら `DivisionByZero`
    pub fn inverse(&self) -> Result<Fraction> {
        Fraction::normalize(self.sign(), self.denominator().clone(), self.numerator().clone())
    }

    /// 符号反転
    pub fn neg(&self) -> Fraction {
        Fraction::reduced(
            self.sign().flip(),
            self.numerator().clone(),
            self.denominator().clone(),
        )
    }

    /// 絶対値
    pub fn abs(&self) -> Fraction {
        Fraction::reduced(Sign::Plus, self.numerator().clone(), self.denominator().clone())
    }

    /// self + (rhs の大きさに rhs_sign を付けた値)
    fn sum(&self, rhs: &Fraction, rhs_sign: Sign) -> Fraction {
        let lhs = self.sign().apply(self.numerator() * rhs.denominator());
        let rhs_term = rhs_sign.apply(rhs.numerator() * self.denominator());
        Fraction::reduced_signed(lhs + rhs_term, self.denominator() * rhs.denominator())
    }

    fn product(&self, rhs: &Fraction) -> Fraction {
        Fraction::reduced(
            self.sign() * rhs.sign(),
            self.numerator() * rhs.numerator(),
            self.denominator() * rhs.denominator(),
        )
    }
}

// 演算子は失敗しない演算のみ提供する（除算は Fraction::div を使う）

impl Add<&Fraction> for &Fraction {
    type Output = Fraction;

    fn add(self, other: &Fraction) -> Fraction {
        self.sum(other, other.sign())
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, other: Fraction) -> Fraction {
        &self + &other
    }
}

impl Sub<&Fraction> for &Fraction {
    type Output = Fraction;

    fn sub(self, other: &Fraction) -> Fraction {
        self.sum(other, other.sign().flip())
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, other: Fraction) -> Fraction {
        &self - &other
    }
}

impl Mul<&Fraction> for &Fraction {
    type Output = Fraction;

    fn mul(self, other: &Fraction) -> Fraction {
        self.product(other)
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, other: Fraction) -> Fraction {
        &self * &other
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction::neg(self)
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction::neg(&self)
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Fraction::zero()
    }

    fn is_zero(&self) -> bool {
        Fraction::is_zero(self)
    }
}

impl One for Fraction {
    fn one() -> Self {
        Fraction::one()
    }
}
