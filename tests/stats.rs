use safeall::math::stats::{mean, quantile};

#[test]
fn quantile_interpolates_between_ranks() {
    let mut v = vec![4.0, 1.0, 3.0, 2.0, 5.0];
    let q = quantile(&mut v, 0.9).unwrap();
    assert!((q - 4.6).abs() < 1e-9);
}

#[test]
fn quantile_extremes() {
    let mut v = vec![7.0, 3.0, 9.0];
    assert_eq!(quantile(&mut v, 0.0), Some(3.0));
    assert_eq!(quantile(&mut v, 1.0), Some(9.0));
}

#[test]
fn quantile_rejects_empty_and_out_of_range() {
    let mut empty: Vec<f64> = Vec::new();
    assert_eq!(quantile(&mut empty, 0.5), None);
    let mut v = vec![1.0];
    assert_eq!(quantile(&mut v, 1.5), None);
}

#[test]
fn quantile_of_constant_is_constant() {
    let mut v = vec![50.0; 100];
    assert_eq!(quantile(&mut v, 0.9), Some(50.0));
}

#[test]
fn half_quantile_interpolates_even_sets() {
    let mut v1 = vec![3.0, 1.0, 2.0];
    assert_eq!(quantile(&mut v1, 0.5), Some(2.0));
    let mut v2 = vec![4.0, 1.0, 2.0, 3.0];
    assert_eq!(quantile(&mut v2, 0.5), Some(2.5));
}

#[test]
fn mean_basic() {
    assert_eq!(mean(&[]), None);
    let m = mean(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert!((m - 2.5).abs() < 1e-12);
}
