use super::{gl3, q};
use proptest::prelude::*;
use std::sync::OnceLock;
use whittaker::prelude::*;

fn gl2() -> &'static Whittaker {
    static ALGEBRA: OnceLock<Whittaker> = OnceLock::new();
    ALGEBRA.get_or_init(|| Whittaker::new(2, false).unwrap())
}

/// Ordered pair of distinct indices in 1..=3
fn pair_strategy() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=3, 1usize..=2).prop_map(|(a, offset)| (a, (a + offset - 1) % 3 + 1))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_minor_antisymmetric_in_columns(
        (r1, r2) in pair_strategy(),
        (c1, c2) in pair_strategy(),
        shift in -2i64..3
    ) {
        let w = gl3();
        let a = w.raw_minor(&[r1, r2], &[c1, c2], shift).unwrap();
        let b = w.raw_minor(&[r1, r2], &[c2, c1], shift).unwrap();
        prop_assert!((a + b).is_zero());
    }

    #[test]
    fn test_minor_antisymmetric_in_rows(
        (r1, r2) in pair_strategy(),
        (c1, c2) in pair_strategy(),
        shift in -2i64..3
    ) {
        let w = gl3();
        let a = w.minor(&[r1, r2], &[c1, c2], shift).unwrap();
        let b = w.minor(&[r2, r1], &[c1, c2], shift).unwrap();
        prop_assert!((a + b).is_zero());
    }

    #[test]
    fn test_repeated_column_vanishes(r in pair_strategy(), c in 1usize..=3, shift in -2i64..3) {
        let w = gl3();
        prop_assert!(w.raw_minor(&[r.0, r.1], &[c, c], shift).unwrap().is_zero());
    }

    #[test]
    fn test_shifted_determinant_is_central(shift in -3i64..4) {
        let w = gl2();
        let det = w.raw_minor(&[1, 2], &[1, 2], shift).unwrap();
        for i in 1..=2 {
            for j in 1..=2 {
                let e = w.generator(&Generator::matrix_unit(i, j)).unwrap();
                prop_assert!(w.algebra().commutator(&det, &e).is_zero());
            }
        }
    }

    #[test]
    fn test_shift_translates_t(shift in -3i64..4) {
        // minor(shift) is minor(0) at t := t + ħ·shift
        let w = gl3();
        let base = w.raw_minor(&[1, 2], &[1, 2], 0).unwrap();
        let offset = Element::scalar(w.hbar().clone() * q(shift));
        let moved = w.algebra().substitute_t(&base, &(w.t() + offset));
        prop_assert_eq!(moved, w.raw_minor(&[1, 2], &[1, 2], shift).unwrap());
    }
}

#[test]
fn test_full_determinant_antisymmetric_under_column_swap() {
    let w = gl3();
    let a = w.minor(&[1, 2, 3], &[1, 2, 3], 0).unwrap();
    let b = w.minor(&[1, 2, 3], &[2, 1, 3], 0).unwrap();
    assert!((a + b).is_zero());
}

#[test]
fn test_minors_specialize_consistently() {
    let formal = gl3();
    let plain: Whittaker = Whittaker::new(3, false).unwrap();
    let cases = [
        (vec![1, 2], vec![2, 3]),
        (vec![1, 3], vec![1, 2]),
        (vec![1, 2, 3], vec![1, 2, 3]),
    ];
    for (rows, cols) in cases {
        assert_eq!(
            formal.specialize_hbar(&formal.minor(&rows, &cols, 1).unwrap()),
            plain.minor(&rows, &cols, 1).unwrap()
        );
    }
}
