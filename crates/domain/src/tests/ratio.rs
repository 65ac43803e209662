// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use crate::{DomainError, TransferRatio};

#[test]
fn test_parse_whole_and_fractional_ratios() {
    assert_eq!(TransferRatio::from_str("1").unwrap().ten_thousandths(), 10_000);
    assert_eq!(TransferRatio::from_str("1.0").unwrap(), TransferRatio::ONE);
    assert_eq!(TransferRatio::from_str("1.3").unwrap().ten_thousandths(), 13_000);
    assert_eq!(TransferRatio::from_str("0.75").unwrap().ten_thousandths(), 7_500);
    assert_eq!(TransferRatio::from_str(" 2.5 ").unwrap().ten_thousandths(), 25_000);
}

#[test]
fn test_parse_rejects_zero_and_garbage() {
    assert!(matches!(
        TransferRatio::from_str("0.00"),
        Err(DomainError::InvalidTransferRatio { .. })
    ));
    assert!(TransferRatio::from_str("").is_err());
    assert!(TransferRatio::from_str("-1.0").is_err());
    assert!(TransferRatio::from_str("1.2.3").is_err());
    assert!(TransferRatio::from_str("abc").is_err());
    assert!(TransferRatio::from_str(".5").is_err());
}

#[test]
fn test_parse_rejects_excess_precision() {
    let err: DomainError = TransferRatio::from_str("1.00001").unwrap_err();
    assert!(err.to_string().contains("four decimal places"));
}

#[test]
fn test_points_for_one_to_one() {
    assert_eq!(TransferRatio::ONE.points_for(75_000), 75_000);
}

#[test]
fn test_points_for_rounds_up() {
    let bonus: TransferRatio = TransferRatio::from_str("1.3").unwrap();
    assert_eq!(bonus.points_for(75_000), 57_693);
    assert_eq!(bonus.points_for(100_000), 76_924);
}

#[test]
fn test_points_for_fractional_ratio_costs_more_points() {
    let half: TransferRatio = TransferRatio::from_str("0.5").unwrap();
    assert_eq!(half.points_for(100_000), 200_000);
}

#[test]
fn test_points_for_exact_division_does_not_round_up() {
    let ratio: TransferRatio = TransferRatio::from_str("1.2").unwrap();
    assert_eq!(ratio.points_for(60_000), 50_000);
}

#[test]
fn test_display_trims_trailing_zeros() {
    assert_eq!(TransferRatio::ONE.to_string(), "1.0");
    assert_eq!(TransferRatio::from_str("1.30").unwrap().to_string(), "1.3");
    assert_eq!(TransferRatio::from_str("0.75").unwrap().to_string(), "0.75");
}

#[test]
fn test_as_f64_for_display() {
    let ratio: TransferRatio = TransferRatio::from_str("1.25").unwrap();
    assert!((ratio.as_f64() - 1.25).abs() < f64::EPSILON);
}

#[test]
fn test_from_ten_thousandths_rejects_zero() {
    assert!(TransferRatio::from_ten_thousandths(0).is_err());
    assert_eq!(
        TransferRatio::from_ten_thousandths(15_000).unwrap().to_string(),
        "1.5"
    );
}
