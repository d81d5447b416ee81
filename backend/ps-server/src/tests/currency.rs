use crate::api::analysis::currency::format_usd;

#[test]
fn whole_dollars_drop_cents() {
    assert_eq!(format_usd(1500.0), "$1,500");
}

#[test]
fn small_amounts_have_no_separator() {
    assert_eq!(format_usd(0.0), "$0");
    assert_eq!(format_usd(999.0), "$999");
}

#[test]
fn fractional_amounts_keep_two_places() {
    assert_eq!(format_usd(1500.5), "$1,500.50");
    assert_eq!(format_usd(0.05), "$0.05");
}

#[test]
fn millions_group_every_three_digits() {
    assert_eq!(format_usd(12_345_678.9), "$12,345,678.90");
}

#[test]
fn negative_amounts_carry_the_sign_outside() {
    assert_eq!(format_usd(-250.0), "-$250");
}
