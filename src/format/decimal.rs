// src/format/decimal.rs
//
// 小数表記
//
// 分母から 2 と 5 を取り除いて 1 になれば有限小数。
// そうでなければ 10 の位数（循環節の長さ）と循環の開始位置を求め、
// 循環部分を括弧で囲む。例: 1/3 = 0.(3)、1/6 = 0.1(6)、1/7 = 0.(142857)

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use std::fmt;
use tracing::debug;

use crate::config::DecimalFormat;
use crate::types::fraction::{Fraction, FIVE, TEN, TWO};

impl Fraction {
    /// 小数表記（循環しない場合は最大 max_places 桁で打ち切る）
    ///
    /// ```
    /// use fraction_core::Fraction;
    ///
    /// assert_eq!(Fraction::new((1, 7)).unwrap().to_decimal_string(15), "0.(142857)");
    /// assert_eq!(Fraction::new("-0.5").unwrap().to_decimal_string(15), "-0.5");
    /// ```
    pub fn to_decimal_string(&self, max_places: usize) -> String {
        self.to_decimal_string_with(&DecimalFormat::with_max_places(max_places))
    }

    /// 探索上限も指定できる小数表記
    pub fn to_decimal_string_with(&self, format: &DecimalFormat) -> String {
        let d = self.denominator();
        let cycle = cycle_len(d, format.max_cycle_len);

        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(&(self.numerator() / d).to_string());

        let mut digits = Digits {
            remainder: self.numerator() % d,
            denominator: d,
        };
        if digits.remainder.is_zero() {
            return out;
        }

        let mut fractional = String::new();
        match cycle {
            Some(len) => {
                let offset = cycle_start(d, len, format.max_cycle_start);
                digits.write(&mut fractional, offset);
                fractional.push('(');
                digits.write(&mut fractional, len);
                fractional.push(')');
            }
            None => {
                for _ in 0..format.max_places {
                    if digits.remainder.is_zero() {
                        break;
                    }
                    fractional.push(digits.next_digit());
                }
            }
        }

        if !fractional.is_empty() {
            out.push('.');
            out.push_str(&fractional);
        }
        out
    }
}

/// 筆算で小数の桁を 1 桁ずつ取り出す
struct Digits<'a> {
    remainder: BigUint,
    denominator: &'a BigUint,
}

impl Digits<'_> {
    fn next_digit(&mut self) -> char {
        self.remainder *= &*TEN;
        let digit = &self.remainder / self.denominator;
        self.remainder %= self.denominator;
        // 余りは常に分母未満なので 0..=9
        char::from_digit(digit.to_u32().unwrap_or(0), 10).unwrap_or('0')
    }

    fn write(&mut self, out: &mut String, count: usize) {
        for _ in 0..count {
            out.push(self.next_digit());
        }
    }
}

/// 循環節の長さ（2 と 5 を除いた分母を法とする 10 の位数）
///
/// 有限小数、または長さが max_len を超える場合は None。
/// 上限を超えたものは循環小数であっても非循環として表示する。
pub(crate) fn cycle_len(denominator: &BigUint, max_len: usize) -> Option<usize> {
    let mut d = denominator.clone();
    while (&d % &*TWO).is_zero() {
        d /= &*TWO;
    }
    while (&d % &*FIVE).is_zero() {
        d /= &*FIVE;
    }
    if d.is_one() {
        return None;
    }

    let mut rem = &*TEN % &d;
    let mut t = 1;
    while !rem.is_one() {
        rem = rem * &*TEN % &d;
        if t > max_len {
            debug!(max_len, %denominator, "repeating cycle exceeds search bound");
            return None;
        }
        t += 1;
    }
    Some(t)
}

/// 循環の開始位置: 10^s ≡ 10^(s+len) (mod d) を満たす最小の s
///
/// max_start までに見つからなければ 0。
pub(crate) fn cycle_start(denominator: &BigUint, len: usize, max_start: usize) -> usize {
    let mut rem1 = BigUint::one();
    let mut rem2 = TEN.modpow(&BigUint::from(len), denominator);

    for t in 0..max_start {
        if rem1 == rem2 {
            return t;
        }
        rem1 = rem1 * &*TEN % denominator;
        rem2 = rem2 * &*TEN % denominator;
    }
    0
}

/// 小数表記（既定の桁数 15）
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal_string_with(&DecimalFormat::default()))
    }
}
