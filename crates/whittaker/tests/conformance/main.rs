//! Conformance Tests
//!
//! Property-based checks of the quotient map and of quantum minors.

mod minors;
mod quotient;

use proptest::prelude::*;
use std::sync::OnceLock;
use whittaker::prelude::*;

/// gl(3) in asymptotic mode, shared by every property
pub fn gl3() -> &'static Whittaker {
    static ALGEBRA: OnceLock<Whittaker> = OnceLock::new();
    ALGEBRA.get_or_init(|| Whittaker::new(3, true).unwrap())
}

pub fn q(n: i64) -> Laurent<BigRational> {
    Laurent::constant(BigRational::from_integer(BigInt::from(n)))
}

/// Random sums of short words in the full basis, with optional powers of t
pub fn element_strategy(
    w: &'static Whittaker,
    max_word: usize,
) -> impl Strategy<Value = WElement<BigRational>> {
    let basis = w.algebra().structure().len();
    prop::collection::vec(
        (
            prop::collection::vec(0..basis, 0..=max_word),
            0u32..2,
            -3i64..4,
        ),
        1..4,
    )
    .prop_map(move |terms| {
        let mut out = Element::zero();
        for (word, t_degree, c) in terms {
            let mut monomial = Element::scalar(q(c));
            for _ in 0..t_degree {
                monomial = w.mul(&monomial, &w.t());
            }
            for g in word {
                monomial = w.mul(&monomial, &w.algebra().generator_at(g).unwrap());
            }
            out += monomial;
        }
        out
    })
}
