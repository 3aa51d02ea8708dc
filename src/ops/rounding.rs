// src/ops/rounding.rs
//
// 小数点以下 places 桁での切り上げ・切り捨て・四捨五入
//
// いずれも 10^places 倍した値を整数除算し、余りで補正してから 10^places で割り戻す。

use num_bigint::BigUint;
use num_traits::{One, Pow, Zero};

use crate::types::fraction::{Fraction, Sign, TEN};

impl Fraction {
    /// 切り上げ（正の無限大方向）
    ///
    /// 例: 4.(3) → 5、ceil(1/3, 2) → 0.34
    pub fn ceil(&self, places: u32) -> Fraction {
        let (scale, quotient, remainder) = self.scaled_div_rem(places);
        let adjust = !remainder.is_zero() && self.sign() == Sign::Plus;
        let numerator = self.sign().apply(quotient) + if adjust { 1 } else { 0 };
        Fraction::reduced_signed(numerator, scale)
    }

    /// 切り捨て（負の無限大方向）
    ///
    /// 例: 4.(3) → 4、-4.(3) → -5
    pub fn floor(&self, places: u32) -> Fraction {
        let (scale, quotient, remainder) = self.scaled_div_rem(places);
        let adjust = !remainder.is_zero() && self.sign() == Sign::Minus;
        let numerator = self.sign().apply(quotient) - if adjust { 1 } else { 0 };
        Fraction::reduced_signed(numerator, scale)
    }

    /// 四捨五入
    ///
    /// 正の数は余りの 2 倍が分母以上なら繰り上げ、負の数は分母を超える場合のみ繰り下げる。
    /// ちょうど半分は正の無限大方向に丸まる（2.5 → 3、-2.5 → -2）。
    ///
    ///   s >= 0: round(n/d) = trunc(n/d) + (1 + 2(n mod d) > d ? 1 : 0)
    ///   s <  0: round(n/d) = -trunc(n/d) - (2(n mod d) > d ? 1 : 0)
    pub fn round(&self, places: u32) -> Fraction {
        let (scale, quotient, remainder) = self.scaled_div_rem(places);
        let bias = if self.sign() == Sign::Plus { BigUint::one() } else { BigUint::zero() };
        let carry = bias + remainder * 2u32 > *self.denominator();
        let magnitude = if carry { quotient + 1u32 } else { quotient };
        Fraction::reduced_signed(self.sign().apply(magnitude), scale)
    }

    /// (10^places, trunc(10^places·n / d), (10^places·n) mod d)
    fn scaled_div_rem(&self, places: u32) -> (BigUint, BigUint, BigUint) {
        let scale: BigUint = Pow::pow(&*TEN, places);
        let scaled = &scale * self.numerator();
        let quotient = &scaled / self.denominator();
        let remainder = scaled % self.denominator();
        (scale, quotient, remainder)
    }
}
