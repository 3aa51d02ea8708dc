// src/wasm_api.rs
//
// JavaScript ホスト向けの wasm-bindgen インターフェース
//
// JS 側では `Fraction` クラスとして公開する。メソッド名は JS の慣習に合わせる。
// コンストラクタと二項演算はどれも `(a, b)` の二引数を受け取り、
//   - a が undefined/null                → 0
//   - b が undefined                     → a を単独の入力として解釈
//   - それ以外                           → 分子 a・分母 b の二引数指定
// とする。a には文字列・数値・BigInt・配列・{n, d, s}・Fraction インスタンスを渡せる。
// エラーはメッセージ文字列として JS の例外になる。

use num_bigint::BigInt;
use serde_json::{Map, Number, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::DecimalFormat;
use crate::error::{FractionError, Result};
use crate::parser::{Integral, IntoFraction};
use crate::types::fraction::Fraction;
use crate::types::json::{component, from_json};

#[wasm_bindgen(js_name = Fraction)]
#[derive(Debug, Clone, PartialEq)]
pub struct JsFraction {
    inner: Fraction,
}

impl From<Fraction> for JsFraction {
    fn from(inner: Fraction) -> Self {
        JsFraction { inner }
    }
}

/// JS 引数 1 つ分を Rust 側の値に移したもの
///
/// JsValue から作るのは `JsOperand::from_js` のみ。解釈（単独入力か二引数指定か）は
/// JsValue に触れずに行えるので、ネイティブのテストからも直接組み立てられる。
#[derive(Debug, Clone, PartialEq)]
pub enum JsOperand {
    /// undefined / null
    Absent,
    Number(f64),
    Integer(BigInt),
    Json(Value),
    Fraction(Fraction),
}

impl JsOperand {
    /// `(a, b)` の二引数を一つの分数にまとめる
    pub fn resolve(a: JsOperand, b: JsOperand) -> Result<Fraction> {
        match (a, b) {
            (JsOperand::Absent, _) => Ok(Fraction::zero()),
            (a, JsOperand::Absent) => a.into_fraction(),
            (n, d) => (n, d).into_fraction(),
        }
    }

    fn from_js(value: JsValue) -> std::result::Result<JsOperand, String> {
        if value.is_undefined() || value.is_null() {
            return Ok(JsOperand::Absent);
        }
        if let Some(s) = value.as_string() {
            return Ok(JsOperand::Json(Value::String(s)));
        }
        if let Some(f) = value.as_f64() {
            return Ok(JsOperand::Number(f));
        }
        if value.is_bigint() {
            return Ok(JsOperand::Integer(bigint_from_js(value)?));
        }
        if value.is_object() && !js_sys::Array::is_array(&value) {
            // Fraction インスタンスの s/n/d はプロトタイプ上の getter なので Reflect で読む
            return Ok(JsOperand::Json(Value::Object(record_from_js(&value)?)));
        }
        let json: Value = serde_wasm_bindgen::from_value(value)
            .map_err(|_| FractionError::InvalidParameter.to_string())?;
        Ok(JsOperand::Json(json))
    }
}

impl From<&str> for JsOperand {
    fn from(s: &str) -> Self {
        JsOperand::Json(Value::String(s.to_string()))
    }
}

impl From<f64> for JsOperand {
    fn from(f: f64) -> Self {
        JsOperand::Number(f)
    }
}

impl From<&JsFraction> for JsOperand {
    fn from(f: &JsFraction) -> Self {
        JsOperand::Fraction(f.inner.clone())
    }
}

impl IntoFraction for JsOperand {
    fn into_fraction(self) -> Result<Fraction> {
        match self {
            JsOperand::Absent => Ok(Fraction::zero()),
            JsOperand::Number(f) => Fraction::new(f),
            JsOperand::Integer(i) => Fraction::new(i),
            JsOperand::Json(v) => from_json(&v),
            JsOperand::Fraction(f) => Ok(f),
        }
    }
}

impl Integral for JsOperand {
    fn into_integral(self) -> Result<BigInt> {
        match self {
            JsOperand::Absent => Err(FractionError::InvalidParameter),
            JsOperand::Number(f) => f.into_integral(),
            JsOperand::Integer(i) => Ok(i),
            JsOperand::Json(v) => component(&v),
            JsOperand::Fraction(f) if f.is_integer() => Ok(f.signed_numerator()),
            JsOperand::Fraction(_) => Err(FractionError::NonIntegerParameter),
        }
    }
}

fn bigint_from_js(value: JsValue) -> std::result::Result<BigInt, String> {
    let digits: String = value
        .unchecked_into::<js_sys::BigInt>()
        .to_string(10)
        .map_err(|_| FractionError::InvalidParameter.to_string())?
        .into();
    BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| FractionError::InvalidParameter.to_string())
}

/// オブジェクトの n / d / s を JSON レコードに写す（存在しないキーは省く）
fn record_from_js(value: &JsValue) -> std::result::Result<Map<String, Value>, String> {
    let mut record = Map::new();
    for key in ["n", "d", "s"] {
        let field = js_sys::Reflect::get(value, &JsValue::from_str(key))
            .map_err(|_| FractionError::InvalidParameter.to_string())?;
        if field.is_undefined() {
            continue;
        }
        let scalar = if let Some(s) = field.as_string() {
            Value::String(s)
        } else if let Some(f) = field.as_f64() {
            Number::from_f64(f)
                .map(Value::Number)
                .ok_or_else(|| FractionError::InvalidParameter.to_string())?
        } else if field.is_bigint() {
            Value::String(bigint_from_js(field)?.to_string())
        } else {
            return Err(FractionError::InvalidParameter.to_string());
        };
        record.insert(key.to_string(), scalar);
    }
    Ok(record)
}

impl JsFraction {
    pub fn inner(&self) -> &Fraction {
        &self.inner
    }

    /// 二引数を解釈して分数を作る
    pub fn from_operands(a: JsOperand, b: JsOperand) -> std::result::Result<JsFraction, String> {
        Ok(JsOperand::resolve(a, b)?.into())
    }

    /// 右辺 `(a, b)` を解釈して二項演算を適用する
    pub fn apply<R>(
        &self,
        a: JsOperand,
        b: JsOperand,
        op: impl FnOnce(&Fraction, Fraction) -> Result<R>,
    ) -> std::result::Result<R, String> {
        let rhs = JsOperand::resolve(a, b)?;
        Ok(op(&self.inner, rhs)?)
    }

    fn apply_js<R>(
        &self,
        a: JsValue,
        b: JsValue,
        op: impl FnOnce(&Fraction, Fraction) -> Result<R>,
    ) -> std::result::Result<R, String> {
        self.apply(JsOperand::from_js(a)?, JsOperand::from_js(b)?, op)
    }
}

#[wasm_bindgen(js_class = Fraction)]
impl JsFraction {
    #[wasm_bindgen(constructor)]
    pub fn new(a: JsValue, b: JsValue) -> std::result::Result<JsFraction, String> {
        JsFraction::from_operands(JsOperand::from_js(a)?, JsOperand::from_js(b)?)
    }

    /// 文字列リテラルから生成する
    #[wasm_bindgen]
    pub fn parse(literal: &str) -> std::result::Result<JsFraction, String> {
        Ok(Fraction::new(literal)?.into())
    }

    /// 分子・分母の二引数指定
    #[wasm_bindgen(js_name = fromParts)]
    pub fn from_parts(numerator: f64, denominator: f64) -> std::result::Result<JsFraction, String> {
        JsFraction::from_operands(numerator.into(), denominator.into())
    }

    #[wasm_bindgen(getter)]
    pub fn s(&self) -> i32 {
        self.inner.sign().signum()
    }

    #[wasm_bindgen(getter)]
    pub fn n(&self) -> String {
        self.inner.numerator().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn d(&self) -> String {
        self.inner.denominator().to_string()
    }

    #[wasm_bindgen]
    pub fn add(&self, a: JsValue, b: JsValue) -> std::result::Result<JsFraction, String> {
        self.apply_js(a, b, |x, y| x.add(y)).map(JsFraction::from)
    }

    #[wasm_bindgen]
    pub fn sub(&self, a: JsValue, b: JsValue) -> std::result::Result<JsFraction, String> {
        self.apply_js(a, b, |x, y| x.sub(y)).map(JsFraction::from)
    }

    #[wasm_bindgen]
    pub fn mul(&self, a: JsValue, b: JsValue) -> std::result::Result<JsFraction, String> {
        self.apply_js(a, b, |x, y| x.mul(y)).map(JsFraction::from)
    }

    #[wasm_bindgen]
    pub fn div(&self, a: JsValue, b: JsValue) -> std::result::Result<JsFraction, String> {
        self.apply_js(a, b, |x, y| x.div(y)).map(JsFraction::from)
    }

    /// 引数なしなら分子を分母で割った余り
    #[wasm_bindgen(js_name = "mod")]
    pub fn modulo(&self, a: JsValue, b: JsValue) -> std::result::Result<JsFraction, String> {
        if a.is_undefined() {
            return Ok(self.inner.remainder().into());
        }
        self.apply_js(a, b, |x, y| x.modulo(y)).map(JsFraction::from)
    }

    #[wasm_bindgen]
    pub fn gcd(&self, a: JsValue, b: JsValue) -> std::result::Result<JsFraction, String> {
        self.apply_js(a, b, |x, y| x.gcd(y)).map(JsFraction::from)
    }

    #[wasm_bindgen]
    pub fn lcm(&self, a: JsValue, b: JsValue) -> std::result::Result<JsFraction, String> {
        self.apply_js(a, b, |x, y| x.lcm(y)).map(JsFraction::from)
    }

    /// 厳密な結果がなければ undefined
    #[wasm_bindgen]
    pub fn pow(&self, a: JsValue, b: JsValue) -> std::result::Result<Option<JsFraction>, String> {
        self.apply_js(a, b, |x, y| x.pow(y))
            .map(|result| result.map(JsFraction::from))
    }

    #[wasm_bindgen]
    pub fn inverse(&self) -> std::result::Result<JsFraction, String> {
        Ok(self.inner.inverse()?.into())
    }

    #[wasm_bindgen]
    pub fn neg(&self) -> JsFraction {
        self.inner.neg().into()
    }

    #[wasm_bindgen]
    pub fn abs(&self) -> JsFraction {
        self.inner.abs().into()
    }

    #[wasm_bindgen]
    pub fn ceil(&self, places: Option<u32>) -> JsFraction {
        self.inner.ceil(places.unwrap_or(0)).into()
    }

    #[wasm_bindgen]
    pub fn floor(&self, places: Option<u32>) -> JsFraction {
        self.inner.floor(places.unwrap_or(0)).into()
    }

    #[wasm_bindgen]
    pub fn round(&self, places: Option<u32>) -> JsFraction {
        self.inner.round(places.unwrap_or(0)).into()
    }

    /// -1 / 0 / 1
    #[wasm_bindgen]
    pub fn compare(&self, a: JsValue, b: JsValue) -> std::result::Result<i32, String> {
        self.apply_js(a, b, |x, y| x.compare(y)).map(|ord| ord as i32)
    }

    #[wasm_bindgen]
    pub fn equals(&self, a: JsValue, b: JsValue) -> std::result::Result<bool, String> {
        self.apply_js(a, b, |x, y| x.equals(y))
    }

    #[wasm_bindgen]
    pub fn divisible(&self, a: JsValue, b: JsValue) -> std::result::Result<bool, String> {
        self.apply_js(a, b, |x, y| x.divisible(y))
    }

    #[wasm_bindgen(js_name = valueOf)]
    pub fn value_of(&self) -> f64 {
        self.inner.to_number()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_decimal(&self, max_places: Option<u32>) -> String {
        match max_places {
            Some(places) => self.inner.to_decimal_string(places as usize),
            None => self.inner.to_decimal_string_with(&DecimalFormat::default()),
        }
    }

    /// `{ maxPlaces, maxCycleLen, maxCycleStart }` を指定した小数表記
    #[wasm_bindgen(js_name = toDecimal)]
    pub fn to_decimal_with(&self, options: JsValue) -> std::result::Result<String, String> {
        let format: DecimalFormat = if options.is_undefined() || options.is_null() {
            DecimalFormat::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(|e| e.to_string())?
        };
        Ok(self.inner.to_decimal_string_with(&format))
    }

    #[wasm_bindgen(js_name = toFraction)]
    pub fn to_fraction(&self, exclude_whole: Option<bool>) -> String {
        self.inner.to_fraction_string(exclude_whole.unwrap_or(false))
    }

    #[wasm_bindgen(js_name = toLatex)]
    pub fn to_latex(&self, exclude_whole: Option<bool>) -> String {
        self.inner.to_latex_string(exclude_whole.unwrap_or(false))
    }

    /// 多倍長整数を失わないよう各項を文字列で返す
    #[wasm_bindgen(js_name = toContinued)]
    pub fn to_continued(&self) -> Vec<String> {
        self.inner
            .continued_fraction()
            .map(|term| term.to_string())
            .collect()
    }

    #[wasm_bindgen]
    pub fn simplify(&self, epsilon: Option<f64>) -> JsFraction {
        match epsilon {
            Some(eps) => self.inner.simplify(eps).into(),
            None => self.inner.simplify_default().into(),
        }
    }

    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> std::result::Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = clone)]
    pub fn duplicate(&self) -> JsFraction {
        self.clone()
    }
}
