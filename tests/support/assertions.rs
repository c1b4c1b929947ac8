use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Tolerance for amounts produced by non-terminating divisions.
pub const TOLERANCE: Decimal = dec!(0.000000001);

pub fn assert_decimal_near(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

pub fn assert_close(actual: Decimal, expected: Decimal) {
    assert_decimal_near(actual, expected, TOLERANCE);
}
