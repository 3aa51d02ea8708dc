// tests/wasm_api_tests.rs
//
// JsValue を介さない経路（JsOperand の解釈とその上の演算）をネイティブで検証する

#[cfg(test)]
mod tests {
    use fraction_core::wasm_api::{JsFraction, JsOperand};
    use fraction_core::Fraction;
    use num_bigint::BigInt;
    use serde_json::json;

    fn js(literal: &str) -> JsFraction {
        JsFraction::parse(literal).unwrap()
    }

    fn absent() -> JsOperand {
        JsOperand::Absent
    }

    fn text(f: &Fraction) -> String {
        f.to_fraction_string(false)
    }

    // === 生成 ===

    #[test]
    fn test_parse_and_parts() {
        let f = js("-6/8");
        assert_eq!(f.s(), -1);
        assert_eq!(f.n(), "3");
        assert_eq!(f.d(), "4");
        assert_eq!(f.inner(), &Fraction::new((-3, 4)).unwrap());
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(JsFraction::from_parts(6.0, -8.0).unwrap().to_fraction(None), "-3/4");
        assert_eq!(JsFraction::from_parts(1.5, 2.0).unwrap_err(), "Parameters must be integer");
        assert_eq!(JsFraction::from_parts(1.0, 0.0).unwrap_err(), "Division by Zero");
    }

    #[test]
    fn test_two_values_are_numerator_and_denominator() {
        // new Fraction(1, 3)
        let f = JsFraction::from_operands(1.0.into(), 3.0.into()).unwrap();
        assert_eq!(f.to_fraction(None), "1/3");
        // new Fraction("10", 4n)
        let g = JsFraction::from_operands("10".into(), JsOperand::Integer(BigInt::from(4))).unwrap();
        assert_eq!(g.to_fraction(None), "5/2");
        // new Fraction("1/2", 2)
        assert_eq!(
            JsFraction::from_operands("1/2".into(), 2.0.into()).unwrap_err(),
            "Parameters must be integer"
        );
    }

    #[test]
    fn test_single_value_shapes() {
        let from = |a: JsOperand| JsFraction::from_operands(a, absent()).unwrap().to_fraction(None);
        assert_eq!(from(absent()), "0");
        assert_eq!(from(0.5.into()), "1/2");
        assert_eq!(from("0.(3)".into()), "1/3");
        assert_eq!(from(JsOperand::Integer(BigInt::from(-7))), "-7");
        assert_eq!(from(JsOperand::Json(json!([6, 8]))), "3/4");
        assert_eq!(from(JsOperand::Json(json!({"n": 3, "d": 4, "s": -1}))), "-3/4");
    }

    #[test]
    fn test_first_value_absent_is_zero() {
        // new Fraction(undefined, 5) も 0
        let f = JsFraction::from_operands(absent(), 5.0.into()).unwrap();
        assert_eq!(f.to_fraction(None), "0");
    }

    #[test]
    fn test_fraction_instance_as_input() {
        let f = js("-2/3");
        assert_eq!(JsFraction::from_operands((&f).into(), absent()).unwrap(), f);
        // getter から読んだ {n: "2", d: "3", s: -1} と同じ値
        let record = JsOperand::Json(json!({"n": f.n(), "d": f.d(), "s": f.s()}));
        assert_eq!(JsFraction::from_operands(record, absent()).unwrap(), f);
    }

    #[test]
    fn test_error_messages_surface_as_strings() {
        assert_eq!(JsFraction::parse("abc").unwrap_err(), "Invalid argument");
        let err = js("1").apply("0".into(), absent(), |x, y| x.div(y)).unwrap_err();
        assert_eq!(err, "Division by Zero");
    }

    // === 演算 ===

    #[test]
    fn test_operands_accept_parser_shapes() {
        let f = js("1/3");
        assert_eq!(text(&f.apply("1/6".into(), absent(), |x, y| x.add(y)).unwrap()), "1/2");
        assert_eq!(text(&f.apply(0.5.into(), absent(), |x, y| x.add(y)).unwrap()), "5/6");
        // f.add(1, 6)
        assert_eq!(text(&f.apply(1.0.into(), 6.0.into(), |x, y| x.add(y)).unwrap()), "1/2");
        let other = js("2/3");
        assert_eq!(text(&f.apply((&other).into(), absent(), |x, y| x.mul(y)).unwrap()), "2/9");
    }

    #[test]
    fn test_comparisons_through_operands() {
        let f = js("1/3");
        let ord = f.apply(1.0.into(), 2.0.into(), |x, y| x.compare(y)).unwrap();
        assert_eq!(ord as i32, -1);
        assert!(js("0.(3)").apply("1/3".into(), absent(), |x, y| x.equals(y)).unwrap());
        assert!(js("9/2").apply(3.0.into(), 2.0.into(), |x, y| x.divisible(y)).unwrap());
    }

    #[test]
    fn test_pow_without_exact_result_is_none() {
        let none = js("2").apply(1.0.into(), 2.0.into(), |x, y| x.pow(y)).unwrap();
        assert!(none.is_none());
        let cube_root = js("8").apply("1/3".into(), absent(), |x, y| x.pow(y)).unwrap();
        assert_eq!(cube_root.map(|f| text(&f)), Some("2".to_string()));
    }

    // === 単項演算・出力 ===

    #[test]
    fn test_rounding_defaults_to_zero_places() {
        assert_eq!(js("-2.5").round(None).to_fraction(None), "-2");
        assert_eq!(js("1/3").ceil(Some(2)).to_decimal(None), "0.34");
        assert_eq!(js("-1/3").floor(None).to_fraction(None), "-1");
    }

    #[test]
    fn test_output_forms() {
        assert_eq!(js("415/93").to_continued(), vec!["4", "2", "6", "7"]);
        assert_eq!(js("1/7").to_decimal(None), "0.(142857)");
        assert_eq!(js("1/1024").to_decimal(Some(3)), "0.000");
        assert_eq!(js("-1/2").to_latex(None), "-\\frac{1}{2}");
        assert_eq!(js("-4/3").to_fraction(Some(true)), "-1 1/3");
        assert_eq!(js("3/4").value_of(), 0.75);
    }

    #[test]
    fn test_simplify_and_sign_ops() {
        let pi = JsFraction::from(Fraction::new(3.14159).unwrap());
        assert_eq!(pi.simplify(None).to_fraction(None), "333/106");
        assert_eq!(pi.simplify(Some(0.01)).to_fraction(None), "22/7");
        assert_eq!(js("-3/4").neg().to_fraction(None), "3/4");
        assert_eq!(js("-3/4").abs().to_fraction(None), "3/4");
        assert_eq!(js("-3/4").inverse().unwrap().to_fraction(None), "-4/3");
    }

    #[test]
    fn test_duplicate_is_independent_value() {
        let a = js("2/3");
        let b = a.duplicate();
        assert_eq!(a, b);
        let sum = b.apply("1/3".into(), absent(), |x, y| x.add(y)).unwrap();
        assert_eq!(text(&sum), "1");
        assert_eq!(a.to_fraction(None), "2/3");
    }
}
