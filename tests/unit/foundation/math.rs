use super::*;

#[test]
fn round_to_fixed_places() {
    assert_eq!(round_to(1.234_567_89, 3), 1.235);
    assert_eq!(round_to(-0.000_4, 3), 0.0);
    assert!(round_to(-0.000_4, 3).is_sign_positive());
    assert_eq!(round_to(0.841_470_984_8, 6), 0.841_471);
}

#[test]
fn numbers_format_without_trailing_zeroes() {
    assert_eq!(fmt_num(2400.0), "2400");
    assert_eq!(fmt_num(-799.5), "-799.5");
    assert_eq!(fmt_num(-0.0), "0");
    assert_eq!(fmt_num(f64::NAN), "0");
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(2400.0, -2400.0, 0.0), 2400.0);
    assert_eq!(lerp(2400.0, -2400.0, 1.0), -2400.0);
    assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
}
