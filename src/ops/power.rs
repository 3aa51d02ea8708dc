// src/ops/power.rs
//
// 冪乗
//
// 整数指数はそのまま分子・分母を冪乗する。
// 有理数指数は分子・分母を素因数分解し、各指数に p/q を掛けて整数になる場合のみ
// 厳密な結果を返す（√2 のような無理数や負の底の分数乗は None）。

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Pow, Zero};
use std::collections::BTreeMap;
use tracing::trace;

use crate::error::Result;
use crate::parser::IntoFraction;
use crate::types::fraction::{Fraction, Sign, TWO};

impl Fraction {
    /// 冪乗
    ///
    /// 厳密な有理数の結果が存在しない場合は `Ok(None)` を返す。
    /// 例: (-1/2)^-3 = -8、8^(1/3) = 2、2^(1/2) = None
    pub fn pow<T: IntoFraction>(&self, exponent: T) -> Result<Option<Fraction>> {
        let exponent = exponent.into_fraction()?;

        if exponent.is_integer() {
            return self.pow_integer(&exponent).map(Some);
        }

        // 負の底の分数乗は複素数になる
        if self.is_negative() {
            trace!(base = %self, exponent = %exponent, "negative base with fractional exponent");
            return Ok(None);
        }

        let p = exponent.numerator();
        let q = exponent.denominator();

        let numerator = if self.numerator().is_zero() {
            Some(BigUint::zero())
        } else {
            root_of_factors(factorize(self.numerator()), p, q)
        };
        let denominator = root_of_factors(factorize(self.denominator()), p, q);

        let (numerator, denominator) = match (numerator, denominator) {
            (Some(n), Some(d)) => (n, d),
            _ => {
                trace!(base = %self, exponent = %exponent, "no exact rational power");
                return Ok(None);
            }
        };

        let result = if exponent.is_negative() {
            Fraction::normalize(Sign::Plus, denominator, numerator)?
        } else {
            Fraction::normalize(Sign::Plus, numerator, denominator)?
        };
        Ok(Some(result))
    }

    fn pow_integer(&self, exponent: &Fraction) -> Result<Fraction> {
        let k = exponent.numerator();
        let sign = if self.is_negative() && k.is_odd() {
            Sign::Minus
        } else {
            Sign::Plus
        };
        let numerator: BigUint = Pow::pow(self.numerator(), k);
        let denominator: BigUint = Pow::pow(self.denominator(), k);

        if exponent.is_negative() {
            Fraction::normalize(sign, denominator, numerator)
        } else {
            Fraction::normalize(sign, numerator, denominator)
        }
    }
}

/// 各素因数の指数に p/q を掛けて積を再構成する。指数が整数にならなければ None
fn root_of_factors(factors: BTreeMap<BigUint, BigUint>, p: &BigUint, q: &BigUint) -> Option<BigUint> {
    let mut result = BigUint::one();
    for (prime, count) in factors {
        let (e, rem) = (count * p).div_rem(q);
        if !rem.is_zero() {
            return None;
        }
        result *= Pow::pow(prime, &e);
    }
    Some(result)
}

/// 試し割りによる素因数分解（素因数 → 指数）
///
/// 0 と 1 は空の表になる。
pub(crate) fn factorize(value: &BigUint) -> BTreeMap<BigUint, BigUint> {
    let mut factors = BTreeMap::new();
    let mut n = value.clone();
    let mut i = TWO.clone();

    while &i * &i <= n {
        while (&n % &i).is_zero() {
            n /= &i;
            *factors.entry(i.clone()).or_insert_with(BigUint::zero) += 1u32;
        }
        i += 1u32;
    }
    if n > BigUint::one() {
        *factors.entry(n).or_insert_with(BigUint::zero) += 1u32;
    }
    factors
}
