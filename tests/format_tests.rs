// tests/format_tests.rs

#[cfg(test)]
mod tests {
    use fraction_core::{DecimalFormat, Fraction};
    use num_bigint::BigUint;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new((n, d)).unwrap()
    }

    fn terms(values: &[u64]) -> Vec<BigUint> {
        values.iter().map(|&v| BigUint::from(v)).collect()
    }

    // === 小数表記 ===

    #[test]
    fn test_decimal_terminating() {
        assert_eq!(Fraction::new("0.5").unwrap().to_decimal_string(15), "0.5");
        assert_eq!(frac(-3, 4).to_decimal_string(15), "-0.75");
        assert_eq!(frac(1, 1024).to_decimal_string(15), "0.0009765625");
        assert_eq!(Fraction::new(5).unwrap().to_decimal_string(15), "5");
        assert_eq!(Fraction::zero().to_decimal_string(15), "0");
    }

    #[test]
    fn test_decimal_repeating() {
        assert_eq!(frac(1, 3).to_decimal_string(15), "0.(3)");
        assert_eq!(frac(1, 7).to_decimal_string(15), "0.(142857)");
        assert_eq!(frac(1, 6).to_decimal_string(15), "0.1(6)");
        assert_eq!(frac(-1, 12).to_decimal_string(15), "-0.08(3)");
        assert_eq!(frac(22, 7).to_decimal_string(15), "3.(142857)");
        assert_eq!(Fraction::new("123.45'6'").unwrap().to_decimal_string(15), "123.45(6)");
    }

    #[test]
    fn test_decimal_truncation() {
        assert_eq!(frac(1, 1024).to_decimal_string(3), "0.000");
        assert_eq!(frac(3, 2).to_decimal_string(0), "1");
    }

    #[test]
    fn test_decimal_cycle_beyond_search_bound() {
        let format = DecimalFormat {
            max_cycle_len: 3,
            ..DecimalFormat::default()
        };
        assert_eq!(frac(1, 7).to_decimal_string_with(&format), "0.142857142857142");
    }

    #[test]
    fn test_decimal_cycle_start_beyond_search_bound() {
        // 1/12 = 0.08(3) の循環は 2 桁目から始まる
        assert_eq!(frac(1, 12).to_decimal_string(15), "0.08(3)");
        // 開始位置が見つからなければ小数点直後から循環とみなす
        let format = DecimalFormat {
            max_cycle_start: 1,
            ..DecimalFormat::default()
        };
        assert_eq!(frac(1, 12).to_decimal_string_with(&format), "0.(0)");
        assert_eq!(frac(1, 3).to_decimal_string_with(&format), "0.(3)");
    }

    #[test]
    fn test_display_uses_defaults() {
        assert_eq!(format!("{}", frac(1, 3)), "0.(3)");
        assert_eq!(frac(-5, 2).to_string(), "-2.5");
    }

    // === 分数表記・LaTeX ===

    #[test]
    fn test_fraction_string() {
        assert_eq!(frac(-4, 3).to_fraction_string(false), "-4/3");
        assert_eq!(frac(-4, 3).to_fraction_string(true), "-1 1/3");
        assert_eq!(Fraction::new("1.'3'").unwrap().to_fraction_string(true), "1 1/3");
        assert_eq!(frac(1, 3).to_fraction_string(true), "1/3");
        assert_eq!(Fraction::new(5).unwrap().to_fraction_string(false), "5");
        assert_eq!(Fraction::new(-5).unwrap().to_fraction_string(true), "-5");
    }

    #[test]
    fn test_latex_string() {
        assert_eq!(frac(4, 3).to_latex_string(false), "\\frac{4}{3}");
        assert_eq!(frac(4, 3).to_latex_string(true), "1\\frac{1}{3}");
        assert_eq!(frac(-1, 2).to_latex_string(false), "-\\frac{1}{2}");
        assert_eq!(Fraction::new(7).unwrap().to_latex_string(false), "7");
    }

    #[test]
    fn test_fraction_string_parses_back() {
        for f in [frac(-4, 3), frac(1, 3), frac(247, 2), Fraction::new(-9).unwrap()] {
            assert_eq!(Fraction::new(f.to_fraction_string(false)).unwrap(), f);
            assert_eq!(Fraction::new(f.to_fraction_string(true)).unwrap(), f);
        }
    }

    // === 連分数・近似 ===

    #[test]
    fn test_continued_fraction() {
        assert_eq!(frac(7, 8).to_continued(), terms(&[0, 1, 7]));
        assert_eq!(frac(415, 93).to_continued(), terms(&[4, 2, 6, 7]));
        assert_eq!(frac(-415, 93).to_continued(), terms(&[4, 2, 6, 7]));
    }

    #[test]
    fn test_continued_fraction_iterator() {
        let mut iter = frac(1, 3).continued_fraction();
        assert_eq!(iter.next(), Some(BigUint::from(0u32)));
        assert_eq!(iter.next(), Some(BigUint::from(3u32)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_simplify() {
        let pi = Fraction::new(3.14159).unwrap();
        assert_eq!(pi.simplify(0.001), frac(333, 106));
        assert_eq!(pi.simplify_default(), frac(333, 106));
        assert_eq!(pi.simplify(0.01), frac(22, 7));
        assert_eq!(pi.neg().simplify(0.001), frac(-333, 106));
    }

    #[test]
    fn test_simplify_keeps_exact_value_when_no_prefix_fits() {
        assert_eq!(frac(1, 2).simplify(0.001), frac(1, 2));
        assert_eq!(Fraction::new(4).unwrap().simplify(0.001), Fraction::new(4).unwrap());
    }

    #[test]
    fn test_to_number() {
        assert_eq!(frac(1, 4).to_number(), 0.25);
        assert_eq!(frac(-3, 2).to_number(), -1.5);
    }
}
