//! gl(N) acting on copies of the polynomial vector representation
//!
//! Each prefix `p` contributes commuting generators p_1, …, p_N with
//! `[E_ij, p_k] = ħ·δ_jk·p_i`. Together with gl(N) they span the Lie algebra
//! whose enveloping algebra is U(gl_N) ⊗ Sym(C^N)^{⊗m}.

use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::structure::{BracketEntry, GlStructure};
use pbw_algebra::{Field, Laurent, LieStructure};
use std::collections::HashSet;

/// Generators, brackets and triangular ordering of gl(N) ⋉ (C^N)^m
#[derive(Debug, Clone)]
pub struct TensorPowerRepresentation<F> {
    gl: GlStructure<F>,
    prefixes: Vec<String>,
}

impl<F: Field> TensorPowerRepresentation<F> {
    /// m = `prefixes.len()` copies of C^N
    pub fn new(rank: usize, asymptotic: bool, prefixes: Vec<String>) -> Result<Self> {
        {
            let mut seen = HashSet::new();
            if let Some(dup) = prefixes.iter().find(|p| !seen.insert(p.as_str())) {
                return Err(Error::InvalidConfig(format!("prefix {:?} listed twice", dup)));
            }
        }
        Ok(Self {
            gl: GlStructure::new(rank, asymptotic),
            prefixes,
        })
    }

    /// Underlying gl(N)
    pub fn gl(&self) -> &GlStructure<F> {
        &self.gl
    }

    /// Representation prefixes in declaration order
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// p_1 … p_N for every prefix, grouped by prefix
    pub fn vector_generators(&self) -> Vec<Generator> {
        let n = self.gl.rank();
        self.prefixes
            .iter()
            .flat_map(|p| (1..=n).map(move |k| Generator::vector(p.clone(), k)))
            .collect()
    }

    /// [E_ij, p_k] = ħ·δ_jk·p_i
    pub fn vector_brackets(&self) -> Vec<BracketEntry<F>> {
        let n = self.gl.rank();
        let hbar = self.gl.hbar();
        let mut table = Vec::new();
        for prefix in &self.prefixes {
            for i in 1..=n {
                for j in 1..=n {
                    for k in 1..=n {
                        let combination = if j == k {
                            vec![(Generator::vector(prefix.clone(), i), hbar.clone())]
                        } else {
                            Vec::new()
                        };
                        table.push((
                            Generator::matrix_unit(i, j),
                            Generator::vector(prefix.clone(), k),
                            combination,
                        ));
                    }
                }
            }
        }
        table
    }

    /// gl(N) generators followed by vector generators
    pub fn all_generators(&self) -> Vec<Generator> {
        let mut all = self.gl.generators();
        all.extend(self.vector_generators());
        all
    }

    /// Basis order: lower units by distance from the diagonal, the diagonal,
    /// upper units by distance, then vector generators by prefix
    pub fn triangular_basis(&self) -> Vec<Generator> {
        let n = self.gl.rank();
        let mut basis = Vec::with_capacity(n * n);
        for diff in 1..n {
            for i in (1 + diff)..=n {
                basis.push(Generator::matrix_unit(i, i - diff));
            }
        }
        for i in 1..=n {
            basis.push(Generator::matrix_unit(i, i));
        }
        for diff in 1..n {
            for i in (1 + diff)..=n {
                basis.push(Generator::matrix_unit(i - diff, i));
            }
        }
        basis.extend(self.vector_generators());
        basis
    }

    /// Freeze into an ordered Lie structure for the PBW engine
    pub fn lie_structure(&self) -> Result<LieStructure<Generator, Laurent<F>>> {
        let mut builder = LieStructure::builder();
        for g in self.all_generators() {
            builder.generator(g)?;
        }
        for (a, b, combination) in self.vector_brackets() {
            builder.bracket(a, b, combination);
        }
        for (a, b, combination) in self.gl.brackets() {
            builder.bracket(a, b, combination);
        }
        builder.ordering(self.triangular_basis());
        Ok(builder.build()?)
    }
}
