use super::{element_strategy, gl3};
use proptest::prelude::*;
use whittaker::prelude::*;

/// Random products of strictly lower matrix units
fn nilpotent_strategy() -> impl Strategy<Value = WElement<BigRational>> {
    let w = gl3();
    let lower: Vec<usize> = w.character().iter().map(|(_, index, _)| index).collect();
    prop::collection::vec(prop::sample::select(lower), 0..3).prop_map(move |word| {
        word.into_iter().fold(Element::one(), |acc, g| {
            w.mul(&acc, &w.algebra().generator_at(g).unwrap())
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_quotient_is_idempotent(a in element_strategy(gl3(), 3)) {
        let w = gl3();
        let once = w.quotient(&a);
        prop_assert_eq!(w.quotient(&once), once);
    }

    #[test]
    fn test_quotient_removes_nilpotent_generators(a in element_strategy(gl3(), 3)) {
        let w = gl3();
        for (term, _) in w.quotient(&a).terms() {
            for &g in term.monomial.word() {
                prop_assert!(!w.character().is_nilpotent(g));
            }
        }
    }

    #[test]
    fn test_quotient_preserves_t_degree(a in element_strategy(gl3(), 2)) {
        let w = gl3();
        let image = w.quotient(&a);
        for (term, _) in image.terms() {
            prop_assert!(Some(term.t_degree) <= a.max_t_degree());
        }
    }

    #[test]
    fn test_quotient_factors_through_left_argument(
        a in element_strategy(gl3(), 2),
        b in element_strategy(gl3(), 2)
    ) {
        let w = gl3();
        let direct = w.quotient(&w.mul(&a, &b));
        let staged = w.quotient(&w.mul(&w.quotient(&a), &b));
        prop_assert_eq!(direct, staged);
    }

    #[test]
    fn test_quotient_is_multiplicative_on_nilpotent_left_factor(
        n in nilpotent_strategy(),
        b in element_strategy(gl3(), 2)
    ) {
        let w = gl3();
        let direct = w.quotient(&w.mul(&n, &b));
        let split = w.quotient(&w.mul(&w.quotient(&n), &w.quotient(&b)));
        prop_assert_eq!(direct, split);
    }

    #[test]
    fn test_quotient_commutes_with_specialization(a in element_strategy(gl3(), 3)) {
        let w = gl3();
        prop_assert_eq!(
            w.specialize_hbar(&w.quotient(&a)),
            w.quotient(&w.specialize_hbar(&a))
        );
    }
}
