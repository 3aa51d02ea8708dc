// src/parser.rs
//
// 入力値から分数への変換
//
// 対応する入力:
//   - 入力なし（`()` / `None`）      → 0
//   - 整数                           → n/1
//   - 浮動小数点数                   → Farey 探索による近似分数
//   - (分子, 分母) / [分子, 分母]    → 二引数指定（整数でなければ NonIntegerParameter）
//   - 文字列                         → 下記の文法
//   - JSON 値                        → types/json.rs を参照
//
// 文字列の文法:
//   1234          整数
//   123/456       分数（"123:456" も可）
//   123.456       小数（".5" や "5." も可）
//   123.45'6'     末尾の循環節（"123.45(6)" も可）
//   123.'456'     小数部全体が循環（"123.(456)" も可）
//   123 1/2       帯分数
//   先頭に +/- の符号を付けられる

use num_bigint::{BigInt, BigUint};
use num_traits::{FromPrimitive, One, Pow, Zero};
use std::str::FromStr;
use tracing::debug;

use crate::config::FAREY_BOUND;
use crate::error::{FractionError, Result};
use crate::tokenizer::{tokenize, Token};
use crate::types::fraction::{Fraction, Sign, TEN};

/// 正規化前の (符号, 分子, 分母)
///
/// パース結果を正規化まで運ぶだけの一時的な値。呼び出しごとに新しく作る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParseState {
    sign: Sign,
    numerator: BigUint,
    denominator: BigUint,
}

impl ParseState {
    pub(crate) fn zero() -> Self {
        ParseState {
            sign: Sign::Plus,
            numerator: BigUint::zero(),
            denominator: BigUint::one(),
        }
    }

    pub(crate) fn integer(value: BigInt) -> Self {
        let sign = Sign::of(&value);
        let (_, numerator) = value.into_parts();
        ParseState {
            sign,
            numerator,
            denominator: BigUint::one(),
        }
    }

    pub(crate) fn ratio(numerator: BigInt, denominator: BigInt) -> Self {
        let sign = Sign::of(&numerator) * Sign::of(&denominator);
        let (_, numerator) = numerator.into_parts();
        let (_, denominator) = denominator.into_parts();
        ParseState {
            sign,
            numerator,
            denominator,
        }
    }

    pub(crate) fn negate_if(mut self, negative: bool) -> Self {
        if negative {
            self.sign = self.sign.flip();
        }
        self
    }

    /// 正規化して分数を確定する
    pub(crate) fn finish(self) -> Result<Fraction> {
        Fraction::normalize(self.sign, self.numerator, self.denominator)
    }
}

/// 分数として解釈できる値
///
/// すべての二項演算は右辺をこのトレイト経由で受け取るため、
/// 生成時と同じ入力形式をそのまま演算に渡せる。
pub trait IntoFraction {
    fn into_fraction(self) -> Result<Fraction>;
}

/// 二引数指定（分子, 分母）の各要素になれる値
pub trait Integral {
    fn into_integral(self) -> Result<BigInt>;
}

impl Fraction {
    /// 任意の入力形式から分数を生成する
    ///
    /// ```
    /// use fraction_core::Fraction;
    ///
    /// let f = Fraction::new("123 1/2").unwrap();
    /// assert_eq!(f, Fraction::new((247, 2)).unwrap());
    /// ```
    pub fn new<T: IntoFraction>(value: T) -> Result<Self> {
        value.into_fraction()
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self> {
        parse_str(s)?.finish()
    }
}

impl IntoFraction for () {
    fn into_fraction(self) -> Result<Fraction> {
        Ok(Fraction::zero())
    }
}

impl<T: IntoFraction> IntoFraction for Option<T> {
    fn into_fraction(self) -> Result<Fraction> {
        match self {
            Some(value) => value.into_fraction(),
            None => ParseState::zero().finish(),
        }
    }
}

impl IntoFraction for Fraction {
    fn into_fraction(self) -> Result<Fraction> {
        Ok(self)
    }
}

impl IntoFraction for &Fraction {
    fn into_fraction(self) -> Result<Fraction> {
        Ok(self.clone())
    }
}

macro_rules! impl_integer_input {
    ($($t:ty),*) => {$(
        impl IntoFraction for $t {
            fn into_fraction(self) -> Result<Fraction> {
                ParseState::integer(BigInt::from(self)).finish()
            }
        }

        impl Integral for $t {
            fn into_integral(self) -> Result<BigInt> {
                Ok(BigInt::from(self))
            }
        }
    )*};
}

impl_integer_input!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IntoFraction for BigInt {
    fn into_fraction(self) -> Result<Fraction> {
        ParseState::integer(self).finish()
    }
}

impl IntoFraction for &BigInt {
    fn into_fraction(self) -> Result<Fraction> {
        ParseState::integer(self.clone()).finish()
    }
}

impl IntoFraction for BigUint {
    fn into_fraction(self) -> Result<Fraction> {
        ParseState::integer(BigInt::from(self)).finish()
    }
}

impl Integral for BigInt {
    fn into_integral(self) -> Result<BigInt> {
        Ok(self)
    }
}

impl Integral for BigUint {
    fn into_integral(self) -> Result<BigInt> {
        Ok(BigInt::from(self))
    }
}

impl IntoFraction for f64 {
    fn into_fraction(self) -> Result<Fraction> {
        parse_float(self)?.finish()
    }
}

impl IntoFraction for f32 {
    fn into_fraction(self) -> Result<Fraction> {
        parse_float(f64::from(self))?.finish()
    }
}

impl Integral for f64 {
    fn into_integral(self) -> Result<BigInt> {
        if !self.is_finite() || self.fract() != 0.0 {
            return Err(FractionError::NonIntegerParameter);
        }
        BigInt::from_f64(self).ok_or(FractionError::NonIntegerParameter)
    }
}

impl Integral for f32 {
    fn into_integral(self) -> Result<BigInt> {
        f64::from(self).into_integral()
    }
}

impl IntoFraction for &str {
    fn into_fraction(self) -> Result<Fraction> {
        parse_str(self)?.finish()
    }
}

impl IntoFraction for String {
    fn into_fraction(self) -> Result<Fraction> {
        parse_str(&self)?.finish()
    }
}

impl IntoFraction for &String {
    fn into_fraction(self) -> Result<Fraction> {
        parse_str(self)?.finish()
    }
}

impl<N: Integral, D: Integral> IntoFraction for (N, D) {
    fn into_fraction(self) -> Result<Fraction> {
        let (n, d) = self;
        ParseState::ratio(n.into_integral()?, d.into_integral()?).finish()
    }
}

impl<T: Integral> IntoFraction for [T; 2] {
    fn into_fraction(self) -> Result<Fraction> {
        let [n, d] = self;
        ParseState::ratio(n.into_integral()?, d.into_integral()?).finish()
    }
}

// ============================================================================
// 浮動小数点数
// ============================================================================

/// 浮動小数点数を近似分数に変換する
///
/// 実際に渡された二進浮動小数点値に対して、分子・分母が `FAREY_BOUND` 以下の
/// 範囲で Farey 探索を行う。0.1 は 3602879701896397/36028797018963968 ではなく 1/10 になる。
pub(crate) fn parse_float(value: f64) -> Result<ParseState> {
    if !value.is_finite() {
        return Err(FractionError::InvalidParameter);
    }

    let sign = if value < 0.0 { Sign::Minus } else { Sign::Plus };
    let mut x = value.abs();

    if x.fract() == 0.0 {
        let numerator = BigUint::from_f64(x).ok_or(FractionError::InvalidParameter)?;
        return Ok(ParseState {
            sign,
            numerator,
            denominator: BigUint::one(),
        });
    }

    // 1 以上は 10 の冪で (0, 1) に縮めてから探索し、分子に戻す
    let mut scale = BigUint::one();
    if x >= 1.0 {
        let exponent = (1.0 + x.log10()).floor() as i32;
        scale = Pow::pow(&*TEN, exponent as u32);
        x /= 10f64.powi(exponent);
    }

    let (n, d) = farey_search(x, FAREY_BOUND);

    #[cfg(feature = "trace-parse")]
    tracing::trace!(value, numerator = n, denominator = d, %scale, "float approximated");

    Ok(ParseState {
        sign,
        numerator: BigUint::from(n) * scale,
        denominator: BigUint::from(d),
    })
}

/// Stern-Brocot 木を中間数 (a+c)/(b+d) で辿り、x に一致するか
/// 分母が上限を超えた時点の最良の端点を返す
fn farey_search(x: f64, bound: u64) -> (u64, u64) {
    let (mut a, mut b) = (0u64, 1u64);
    let (mut c, mut d) = (1u64, 1u64);
    let (mut n, mut den) = (0u64, 1u64);

    while b <= bound && d <= bound {
        let mediant = (a + c) as f64 / (b + d) as f64;

        if x == mediant {
            if b + d <= bound {
                n = a + c;
                den = b + d;
            } else if d > b {
                n = c;
                den = d;
            } else {
                n = a;
                den = b;
            }
            break;
        }

        if x > mediant {
            a += c;
            b += d;
        } else {
            c += a;
            d += b;
        }

        if b > bound {
            n = c;
            den = d;
        } else {
            n = a;
            den = b;
        }
    }
    (n, den)
}

// ============================================================================
// 文字列
// ============================================================================

pub(crate) fn parse_str(input: &str) -> Result<ParseState> {
    let tokens = tokenize(input);
    let parser = LiteralParser {
        tokens: &tokens,
        pos: 0,
    };
    let result = parser.parse();
    if result.is_err() {
        debug!(input, "unrecognised fraction literal");
    }
    result
}

/// リテラルの構成要素
///
/// 値 = whole + fraction / scale + repeat / (scale * repeat_scale)
/// 分数・帯分数では fraction/scale がそのまま分子/分母になる。
struct Literal {
    whole: BigUint,
    fraction: BigUint,
    scale: BigUint,
    repeat: BigUint,
    repeat_scale: BigUint,
}

impl Default for Literal {
    fn default() -> Self {
        Literal {
            whole: BigUint::zero(),
            fraction: BigUint::zero(),
            scale: BigUint::one(),
            repeat: BigUint::zero(),
            repeat_scale: BigUint::one(),
        }
    }
}

impl Literal {
    fn into_state(self, sign: Sign) -> ParseState {
        let denominator = &self.scale * &self.repeat_scale;
        let numerator = self.repeat + &denominator * self.whole + self.repeat_scale * self.fraction;
        ParseState {
            sign,
            numerator,
            denominator,
        }
    }
}

struct LiteralParser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
}

impl<'t, 'a> LiteralParser<'t, 'a> {
    fn parse(mut self) -> Result<ParseState> {
        if self.tokens.is_empty() {
            return Err(FractionError::InvalidParameter);
        }

        let sign = self.sign();

        let literal = if self.remaining() == 1 {
            self.integer()?
        } else if self.symbol_at(0, '.') || self.symbol_at(1, '.') {
            self.decimal()?
        } else if self.symbol_at(1, '/') || self.symbol_at(1, ':') {
            self.ratio()?
        } else if self.symbol_at(1, ' ') && self.symbol_at(3, '/') {
            self.mixed()?
        } else {
            return Err(FractionError::InvalidParameter);
        };

        // 余ったトークンがあれば不正
        if self.remaining() > 0 {
            return Err(FractionError::InvalidParameter);
        }
        Ok(literal.into_state(sign))
    }

    fn sign(&mut self) -> Sign {
        if self.symbol_at(0, '-') {
            self.pos += 1;
            Sign::Minus
        } else {
            if self.symbol_at(0, '+') {
                self.pos += 1;
            }
            Sign::Plus
        }
    }

    /// "1234"
    fn integer(&mut self) -> Result<Literal> {
        let whole = self.take_digits()?;
        Ok(Literal {
            whole,
            ..Literal::default()
        })
    }

    /// "123.45", ".5", "5.", "123.45(6)", "123.'456'"
    fn decimal(&mut self) -> Result<Literal> {
        let mut literal = Literal::default();

        if self.digits_at(0).is_some() {
            literal.whole = self.take_digits()?;
        }
        self.expect_symbol('.')?;

        // 非循環部は末尾か、直後に循環節が続く場合のみ
        if let Some(digits) = self.digits_at(0) {
            if self.remaining() == 1 || self.repeat_group_at(1).is_some() {
                literal.fraction = number(digits)?;
                literal.scale = Pow::pow(&*TEN, digits.len());
                self.pos += 1;
            }
        }

        if let Some(digits) = self.repeat_group_at(0) {
            literal.repeat = number(digits)?;
            literal.repeat_scale = Pow::pow(&*TEN, digits.len()) - 1u32;
            self.pos += 3;
        }
        Ok(literal)
    }

    /// "123/456", "123:456"
    fn ratio(&mut self) -> Result<Literal> {
        let fraction = self.take_digits()?;
        self.pos += 1;
        let scale = self.take_digits()?;
        Ok(Literal {
            fraction,
            scale,
            ..Literal::default()
        })
    }

    /// "123 1/2"
    fn mixed(&mut self) -> Result<Literal> {
        let whole = self.take_digits()?;
        self.expect_symbol(' ')?;
        let fraction = self.take_digits()?;
        self.expect_symbol('/')?;
        let scale = self.take_digits()?;
        Ok(Literal {
            whole,
            fraction,
            scale,
            ..Literal::default()
        })
    }

    fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.pos)
    }

    fn peek(&self, offset: usize) -> Option<Token<'a>> {
        self.tokens.get(self.pos + offset).copied()
    }

    fn digits_at(&self, offset: usize) -> Option<&'a str> {
        self.peek(offset).and_then(|t| t.digits())
    }

    fn symbol_at(&self, offset: usize, c: char) -> bool {
        self.peek(offset).map_or(false, |t| t.is_symbol(c))
    }

    /// offset の位置から "(digits)" または "'digits'" が続くなら digits を返す
    fn repeat_group_at(&self, offset: usize) -> Option<&'a str> {
        let digits = self.digits_at(offset + 1)?;
        let paren = self.symbol_at(offset, '(') && self.symbol_at(offset + 2, ')');
        let quote = self.symbol_at(offset, '\'') && self.symbol_at(offset + 2, '\'');
        if paren || quote {
            Some(digits)
        } else {
            None
        }
    }

    fn take_digits(&mut self) -> Result<BigUint> {
        let digits = self.digits_at(0).ok_or(FractionError::InvalidParameter)?;
        self.pos += 1;
        number(digits)
    }

    fn expect_symbol(&mut self, c: char) -> Result<()> {
        if self.symbol_at(0, c) {
            self.pos += 1;
            Ok(())
        } else {
            Err(FractionError::InvalidParameter)
        }
    }
}

fn number(digits: &str) -> Result<BigUint> {
    BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(FractionError::InvalidParameter)
}
