//! Whittaker invariance check
//!
//! An element w is a Whittaker vector when `w·E_n − ψ(E_n)·w` vanishes in the
//! quotient for every strictly lower matrix unit E_n.

use crate::engine::{WElement, Whittaker};
use crate::error::Result;
use crate::generator::Generator;
use num_traits::Zero;
use pbw_algebra::Field;
use tracing::warn;

/// Outcome of [`Whittaker::is_inv`]
#[derive(Debug, Clone, PartialEq)]
pub struct InvarianceReport<F: Field> {
    /// Generators whose quotiented commutator is nonzero, with that commutator
    pub failures: Vec<(Generator, WElement<F>)>,
}

impl<F: Field> InvarianceReport<F> {
    /// True when every commutator vanished
    pub fn is_invariant(&self) -> bool {
        self.failures.is_empty()
    }

    /// Offending generators in check order
    pub fn failing_generators(&self) -> Vec<&Generator> {
        self.failures.iter().map(|(g, _)| g).collect()
    }
}

impl<F: Field> Whittaker<F> {
    /// Check `el` against every generator of the nilpotent subalgebra
    pub fn is_inv(&self, el: &WElement<F>) -> Result<InvarianceReport<F>> {
        let mut failures = Vec::new();
        if el.is_zero() {
            return Ok(InvarianceReport { failures });
        }
        for (generator, index, psi) in self.character().iter() {
            let g = self.algebra().generator_at(index)?;
            let commutator = self.quotient(&(self.mul(el, &g) - el.scale(psi)));
            if !commutator.is_zero() {
                warn!(
                    generator = %generator,
                    residue = %self.render(&commutator),
                    "element is not invariant"
                );
                failures.push((generator.clone(), commutator));
            }
        }
        Ok(InvarianceReport { failures })
    }
}
