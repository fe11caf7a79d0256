// Tests for the public parse entry points and accessors

use minijson::{get_number, get_type, parse, parse_into, parse_slice, ParseError, Tag, Value};
use test_log::test;

#[test]
fn test_literals() {
    assert_eq!(parse("null"), Ok(Value::Null));
    assert_eq!(parse("true"), Ok(Value::True));
    assert_eq!(parse("false"), Ok(Value::False));

    assert_eq!(get_type(&parse("null").unwrap()), Tag::Null);
    assert_eq!(get_type(&parse("true").unwrap()), Tag::True);
    assert_eq!(get_type(&parse("false").unwrap()), Tag::False);
}

#[test]
fn test_literals_with_whitespace() {
    assert_eq!(parse("  null  "), Ok(Value::Null));
    assert_eq!(parse("\ttrue\n"), Ok(Value::True));
    assert_eq!(parse("\r\n false \r\n"), Ok(Value::False));
}

#[test]
fn test_numbers() {
    let check = |input: &str, expected: f64| {
        let value = parse(input).unwrap_or_else(|e| panic!("{input:?} failed: {e}"));
        assert_eq!(get_type(&value), Tag::Number, "{input:?}");
        assert_eq!(get_number(&value), expected, "{input:?}");
    };

    check("0", 0.0);
    check("-0", 0.0);
    check("-0.0", 0.0);
    check("1", 1.0);
    check("-1", -1.0);
    check("1.5", 1.5);
    check("-1.5", -1.5);
    check("3.1416", 3.1416);
    check("1E10", 1e10);
    check("1e10", 1e10);
    check("1E+10", 1e10);
    check("1E-10", 1e-10);
    check("-1E10", -1e10);
    check("-1e10", -1e10);
    check("-1E+10", -1e10);
    check("-1E-10", -1e-10);
    check("1.234E+10", 1.234e10);
    check("1.234E-10", 1.234e-10);
    check("-1.5e-3", -0.0015);
    check(" 42 ", 42.0);
}

#[test]
fn test_number_limits() {
    // Smallest denormal, largest denormal, smallest normal, largest finite
    let cases = [
        ("4.9406564584124654e-324", f64::from_bits(1)),
        ("-4.9406564584124654e-324", -f64::from_bits(1)),
        ("2.2250738585072009e-308", f64::from_bits(0x000f_ffff_ffff_ffff)),
        ("2.2250738585072014e-308", f64::MIN_POSITIVE),
        ("1.7976931348623157e+308", f64::MAX),
        ("-1.7976931348623157e+308", f64::MIN),
    ];
    for (input, expected) in cases {
        assert_eq!(parse(input), Ok(Value::Number(expected)), "{input:?}");
    }
}

#[test]
fn test_negative_zero_sign() {
    let value = parse("-0").unwrap();
    assert!(value.get_number().is_sign_negative());
    let value = parse("0").unwrap();
    assert!(value.get_number().is_sign_positive());
}

#[test]
fn test_underflow_is_not_an_error() {
    assert_eq!(parse("1e-10000"), Ok(Value::Number(0.0)));
    let value = parse("-1e-10000").unwrap();
    assert!(value.get_number().is_sign_negative());
}

#[test]
fn test_parse_slice() {
    assert_eq!(parse_slice(b"true"), Ok(Value::True));
    assert_eq!(parse_slice(b"12\0trailing"), Ok(Value::Number(12.0)));
    assert_eq!(parse_slice(b"\0"), Err(ParseError::ExpectValue));
    assert_eq!(parse_slice(b"1\xff"), Err(ParseError::RootNotSingular));
}

#[test]
fn test_parse_into_success() {
    let mut value = Value::False;
    assert_eq!(parse_into(&mut value, "2.5"), Ok(()));
    assert_eq!(value, Value::Number(2.5));
    assert_eq!(parse_into(&mut value, "true"), Ok(()));
    assert_eq!(get_type(&value), Tag::True);
}

#[test]
fn test_parse_into_failure_resets_to_null() {
    for (input, expected) in [
        ("", ParseError::ExpectValue),
        ("   ", ParseError::ExpectValue),
        ("nul", ParseError::InvalidValue),
        ("1.", ParseError::InvalidValue),
        ("null x", ParseError::RootNotSingular),
        ("1e400", ParseError::NumberTooBig),
    ] {
        let mut value = Value::Number(7.0);
        assert_eq!(parse_into(&mut value, input), Err(expected), "{input:?}");
        assert_eq!(get_type(&value), Tag::Null, "{input:?}");
    }
}
