// src/types/json.rs
//
// JSON 値からの変換と serde 対応
//
// | JSON                        | 解釈                                   |
// |-----------------------------|----------------------------------------|
// | null                        | 0                                      |
// | 42 / -3                     | 整数                                   |
// | 0.1                         | 浮動小数点数（Farey 探索）             |
// | "1 1/2" など                | 文字列リテラル                         |
// | [n, d] / [n]                | 二引数指定 / n/1                       |
// | {"n": .., "d": .., "s": ..} | 分子・分母（s は省略可、負なら符号反転）|
//
// 配列・オブジェクトの要素は整数、または整数を表す文字列（"-123"）を受け付ける。
// Fraction 自体は "a/b" 形式の文字列としてシリアライズする。

use num_bigint::BigInt;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::error::{FractionError, Result};
use crate::parser::{parse_float, parse_str, Integral, IntoFraction, ParseState};
use crate::types::fraction::Fraction;

pub fn from_json(json_val: &Value) -> Result<Fraction> {
    match json_val {
        Value::Null => ParseState::zero().finish(),

        Value::Bool(_) => Err(FractionError::InvalidParameter),

        Value::Number(n) => match integral_number(n) {
            Some(i) => ParseState::integer(i).finish(),
            None => {
                let f = n.as_f64().ok_or(FractionError::InvalidParameter)?;
                parse_float(f)?.finish()
            }
        },

        Value::String(s) => parse_str(s)?.finish(),

        Value::Array(items) => match items.as_slice() {
            [n] => ParseState::integer(component(n)?).finish(),
            [n, d] => ParseState::ratio(component(n)?, component(d)?).finish(),
            _ => Err(FractionError::InvalidParameter),
        },

        Value::Object(record) => from_record(record),
    }
}

fn from_record(record: &Map<String, Value>) -> Result<Fraction> {
    let (n, d) = match (record.get("n"), record.get("d")) {
        (Some(n), Some(d)) => (component(n)?, component(d)?),
        _ => return Err(FractionError::InvalidParameter),
    };
    let negative = match record.get("s") {
        Some(s) => component(s)? < BigInt::from(0),
        None => false,
    };
    ParseState::ratio(n, d).negate_if(negative).finish()
}

/// 配列・オブジェクトの要素を整数として取り出す
pub(crate) fn component(value: &Value) -> Result<BigInt> {
    match value {
        Value::Number(n) => match integral_number(n) {
            Some(i) => Ok(i),
            None => n
                .as_f64()
                .ok_or(FractionError::InvalidParameter)?
                .into_integral(),
        },
        Value::String(s) => {
            let text = s.trim();
            let digits = text.strip_prefix(&['-', '+'][..]).unwrap_or(text);
            // parse_bytes は "_" 区切りも受け付けるため、符号と数字以外は先に弾く
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(FractionError::NonIntegerParameter);
            }
            BigInt::parse_bytes(text.as_bytes(), 10).ok_or(FractionError::NonIntegerParameter)
        }
        _ => Err(FractionError::InvalidParameter),
    }
}

fn integral_number(n: &Number) -> Option<BigInt> {
    if let Some(i) = n.as_i64() {
        Some(BigInt::from(i))
    } else {
        n.as_u64().map(BigInt::from)
    }
}

impl IntoFraction for &Value {
    fn into_fraction(self) -> Result<Fraction> {
        from_json(self)
    }
}

impl IntoFraction for Value {
    fn into_fraction(self) -> Result<Fraction> {
        from_json(&self)
    }
}

impl TryFrom<&Value> for Fraction {
    type Error = FractionError;

    fn try_from(value: &Value) -> Result<Self> {
        from_json(value)
    }
}

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_fraction_string(false))
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        from_json(&value).map_err(D::Error::custom)
    }
}
