// src/format/continued.rs
//
// 連分数展開と、連分数の打ち切りによる近似（simplify）

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::config::DEFAULT_EPSILON;
use crate::types::fraction::{Fraction, Sign};

/// 連分数展開 [a0; a1, a2, ...] を 1 項ずつ返すイテレータ
///
/// 分子・分母に対するユークリッドの互除法で、途中の分子が 1 になった時点で終わる。
/// 符号は含まない（絶対値の展開）。clone すれば最初からやり直せる。
#[derive(Debug, Clone)]
pub struct ContinuedFraction {
    a: BigUint,
    b: BigUint,
    done: bool,
}

impl Iterator for ContinuedFraction {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        if self.done {
            return None;
        }
        let term = &self.a / &self.b;
        let rest = &self.a % &self.b;
        self.a = std::mem::replace(&mut self.b, rest);
        if self.a.is_one() {
            self.done = true;
        }
        Some(term)
    }
}

impl std::iter::FusedIterator for ContinuedFraction {}

impl Fraction {
    /// 連分数展開
    ///
    /// 例: 7/8 → [0, 1, 7]
    pub fn continued_fraction(&self) -> ContinuedFraction {
        ContinuedFraction {
            a: self.numerator().clone(),
            b: self.denominator().clone(),
            done: false,
        }
    }

    /// 連分数展開を Vec で返す
    pub fn to_continued(&self) -> Vec<BigUint> {
        self.continued_fraction().collect()
    }

    /// 誤差 epsilon 未満に収まる最短の連分数の打ち切りを返す
    ///
    /// 展開の先頭から項を 1 つずつ増やして値を再構成し、元の値との差（浮動小数点）が
    /// epsilon 未満になった最初のものを返す。見つからなければ元の値をそのまま返す。
    ///
    /// ```
    /// use fraction_core::Fraction;
    ///
    /// let pi = Fraction::new(3.14159).unwrap();
    /// assert_eq!(pi.simplify(0.001).to_fraction_string(false), "333/106");
    /// ```
    pub fn simplify(&self, epsilon: f64) -> Fraction {
        let target = self.abs();
        let terms = target.to_continued();

        for i in 1..terms.len() {
            let candidate = from_continued(&terms[..i]);
            if (&candidate - &target).to_number().abs() < epsilon {
                return Fraction::reduced(
                    self.sign(),
                    candidate.numerator().clone(),
                    candidate.denominator().clone(),
                );
            }
        }
        self.clone()
    }

    /// 既定の誤差 0.001 での simplify
    pub fn simplify_default(&self) -> Fraction {
        self.simplify(DEFAULT_EPSILON)
    }
}

/// [a0; a1, ..., ak] を後ろから p/q = a_i + 1/(p/q) で畳み込む
fn from_continued(terms: &[BigUint]) -> Fraction {
    let mut p = BigUint::zero();
    let mut q = BigUint::one();
    if let Some((last, rest)) = terms.split_last() {
        p = last.clone();
        for term in rest.iter().rev() {
            let next = term * &p + &q;
            q = std::mem::replace(&mut p, next);
        }
    }
    Fraction::reduced(Sign::Plus, p, q)
}
