//! The Whittaker character and its quotient map
//!
//! ψ(E_ij) = δ_{i,j+1} on the strictly lower matrix units. Because those
//! generators come first in the basis order, every PBW monomial factors as
//! (lower part)·(rest), and the quotient map replaces the lower part by its
//! ψ-value:
//!
//! ```text
//! quotient(n · r) = ψ(n) · r
//! ```
//!
//! This is the projection U → U / (n − ψ(n))U along a right ideal, so
//! `quotient(a·b) = quotient(quotient(a)·b)` for all a, b.

use crate::generator::Generator;
use pbw_algebra::{Element, Field, Laurent, LieStructure, Term};
use num_traits::{One, Zero};
use std::collections::HashMap;

use crate::error::Result;

/// The nilpotent dictionary: ψ on every strictly lower matrix unit
#[derive(Debug, Clone)]
pub struct Character<F> {
    entries: Vec<(Generator, usize, Laurent<F>)>,
    by_index: HashMap<usize, Laurent<F>>,
}

impl<F: Field> Character<F> {
    /// The regular character of gl(rank), resolved against a basis
    pub fn regular(rank: usize, structure: &LieStructure<Generator, Laurent<F>>) -> Result<Self> {
        let mut entries = Vec::new();
        for j in 1..rank {
            for i in (j + 1)..=rank {
                let generator = Generator::matrix_unit(i, j);
                let index = structure.index_of(&generator)?;
                let value = if i == j + 1 {
                    Laurent::one()
                } else {
                    Laurent::zero()
                };
                entries.push((generator, index, value));
            }
        }
        let by_index = entries
            .iter()
            .map(|(_, index, value)| (*index, value.clone()))
            .collect();
        Ok(Self { entries, by_index })
    }

    /// ψ(generator), `None` off the nilpotent subalgebra
    pub fn value(&self, generator: &Generator) -> Option<&Laurent<F>> {
        self.entries
            .iter()
            .find(|(g, _, _)| g == generator)
            .map(|(_, _, v)| v)
    }

    /// (generator, basis index, ψ-value) in column-major order
    pub fn iter(&self) -> impl Iterator<Item = (&Generator, usize, &Laurent<F>)> {
        self.entries.iter().map(|(g, i, v)| (g, *i, v))
    }

    /// Number of nilpotent generators
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for gl(1)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if the basis index belongs to the nilpotent subalgebra
    pub fn is_nilpotent(&self, index: usize) -> bool {
        self.by_index.contains_key(&index)
    }

    /// Image of `el` under the quotient map; preserves t-degree
    pub fn quotient(&self, el: &Element<Laurent<F>>) -> Element<Laurent<F>> {
        if el.is_one() {
            return el.clone();
        }
        let mut out = Element::zero();
        for (term, c) in el.terms() {
            let mut coefficient = c.clone();
            for (g, e) in term.monomial.exponents() {
                if let Some(value) = self.by_index.get(&g) {
                    coefficient = (0..e).fold(coefficient, |acc, _| acc * value.clone());
                }
            }
            if coefficient.is_zero() {
                continue;
            }
            let rest = term.monomial.retain(|g| !self.is_nilpotent(g));
            out.add_term(Term::new(term.t_degree, rest), coefficient);
        }
        out
    }
}
