//! Quantum minors of the Capelli matrix
//!
//! The Capelli matrix has entries `E_ij + δ_ij·t`. A minor on rows R and
//! columns C is the column-ordered determinant
//!
//! ```text
//! Σ_σ sign(σ) · Π_pos T[σ(R)_pos, C_pos](t − ħ·(pos − shift))
//! ```
//!
//! Each factor is evaluated at its own shifted value of t, which is what makes
//! the full determinant central in U(gl_N)[t].

use crate::engine::{WElement, Whittaker};
use crate::error::{Error, Result};
use crate::generator::Generator;
use num_traits::Zero;
use pbw_algebra::{Element, Field, Laurent, PbwAlgebra, Term};
use rayon::prelude::*;
use tracing::trace;

/// All permutations of a list together with their signs
///
/// The order is that of the remove-one recursion: the element at position p
/// is taken first, the remainder permuted recursively, and the sign picks up
/// (−1)^p. Permutations are produced lazily by an odometer over the removal
/// positions.
#[derive(Debug, Clone)]
pub struct SignedPermutations<T> {
    items: Vec<T>,
    choice: Vec<usize>,
    exhausted: bool,
}

impl<T: Clone> SignedPermutations<T> {
    /// Permutations of `items`; the empty list has one (empty) permutation
    pub fn new(items: Vec<T>) -> Self {
        let choice = vec![0; items.len()];
        Self {
            items,
            choice,
            exhausted: false,
        }
    }

    fn advance(&mut self) {
        let n = self.choice.len();
        for d in (0..n).rev() {
            if self.choice[d] + 1 < n - d {
                self.choice[d] += 1;
                self.choice[d + 1..].iter_mut().for_each(|c| *c = 0);
                return;
            }
        }
        self.exhausted = true;
    }
}

impl<T: Clone> Iterator for SignedPermutations<T> {
    type Item = (Vec<T>, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let mut remaining = self.items.clone();
        let mut permutation = Vec::with_capacity(remaining.len());
        let mut parity = 0;
        for &c in &self.choice {
            permutation.push(remaining.remove(c));
            parity += c;
        }
        self.advance();
        Some((permutation, if parity % 2 == 0 { 1 } else { -1 }))
    }
}

/// N×N matrix of E_ij + δ_ij·t
#[derive(Debug, Clone)]
pub struct CapelliMatrix<F> {
    rank: usize,
    entries: Vec<WElement<F>>,
}

impl<F: Field> CapelliMatrix<F> {
    /// Assemble the matrix over an algebra containing gl(rank)
    pub fn new(algebra: &PbwAlgebra<Generator, Laurent<F>>, rank: usize) -> Result<Self> {
        let mut entries = Vec::with_capacity(rank * rank);
        for i in 1..=rank {
            for j in 1..=rank {
                let mut entry = algebra.generator(&Generator::matrix_unit(i, j))?;
                if i == j {
                    entry += Element::t();
                }
                entries.push(entry);
            }
        }
        Ok(Self { rank, entries })
    }

    /// Dimension N
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Entry (i, j), 1-based
    pub fn entry(&self, i: usize, j: usize) -> Result<&WElement<F>> {
        self.check(i)?;
        self.check(j)?;
        Ok(&self.entries[(i - 1) * self.rank + (j - 1)])
    }

    /// Entry (i, j) evaluated at t := t + offset
    ///
    /// Entries are linear in t, so only the diagonal moves.
    pub fn shifted_entry(&self, i: usize, j: usize, offset: &Laurent<F>) -> Result<WElement<F>> {
        let entry = self.entry(i, j)?.clone();
        if i == j {
            Ok(entry + Element::term(Term::default(), offset.clone()))
        } else {
            Ok(entry)
        }
    }

    fn check(&self, index: usize) -> Result<()> {
        if index == 0 || index > self.rank {
            return Err(Error::IndexOutOfRange {
                index,
                rank: self.rank,
            });
        }
        Ok(())
    }
}

impl<F: Field> Whittaker<F> {
    /// Quotient image of the quantum minor on `rows` × `cols`
    pub fn minor(&self, rows: &[usize], cols: &[usize], shift: i64) -> Result<WElement<F>> {
        Ok(self.quotient(&self.raw_minor(rows, cols, shift)?))
    }

    /// Quantum minor in U(gl_N)[t], before the quotient map
    pub fn raw_minor(&self, rows: &[usize], cols: &[usize], shift: i64) -> Result<WElement<F>> {
        if rows.len() != cols.len() {
            return Err(Error::DimensionMismatch {
                rows: rows.len(),
                cols: cols.len(),
            });
        }
        let capelli = self.capelli_matrix();
        for &index in rows.iter().chain(cols) {
            if index == 0 || index > capelli.rank() {
                return Err(Error::IndexOutOfRange {
                    index,
                    rank: capelli.rank(),
                });
            }
        }

        let offsets: Vec<Laurent<F>> = (0..cols.len())
            .map(|pos| self.hbar_times(shift - pos as i64))
            .collect();

        trace!(?rows, ?cols, shift, "expanding minor");
        SignedPermutations::new(rows.to_vec())
            .par_bridge()
            .map(|(permutation, sign)| -> Result<WElement<F>> {
                let mut product = Element::one();
                for (pos, (&row, &col)) in permutation.iter().zip(cols).enumerate() {
                    let factor = capelli.shifted_entry(row, col, &offsets[pos])?;
                    product = self.algebra().mul(&product, &factor);
                }
                Ok(product.scale(&Laurent::constant(F::from_integer(sign))))
            })
            .try_reduce(Element::zero, |a, b| Ok(a + b))
    }

    /// The full quantum determinant, central in U(gl_N)[t]
    pub fn quantum_determinant(&self) -> Result<WElement<F>> {
        let all: Vec<usize> = (1..=self.rank()).collect();
        self.raw_minor(&all, &all, 0)
    }
}
