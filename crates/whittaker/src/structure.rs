//! Structure constants of gl(N)
//!
//! In the matrix-unit basis the bracket is
//!
//! ```text
//! [E_ij, E_kl] = ħ·δ_jk·E_il − ħ·δ_li·E_kj
//! ```
//!
//! with ħ = 1 outside the asymptotic mode.

use crate::generator::Generator;
use pbw_algebra::{Field, Laurent};
use num_traits::One;

/// Linear combination of named generators
pub type NamedCombination<F> = Vec<(Generator, Laurent<F>)>;

/// One bracket-table entry [a, b] = combination
pub type BracketEntry<F> = (Generator, Generator, NamedCombination<F>);

/// Generator list and bracket table of gl(N)
#[derive(Debug, Clone)]
pub struct GlStructure<F> {
    rank: usize,
    hbar: Laurent<F>,
}

impl<F: Field> GlStructure<F> {
    /// gl(rank), with ħ formal when `asymptotic` is set
    pub fn new(rank: usize, asymptotic: bool) -> Self {
        let hbar = if asymptotic {
            Laurent::generator()
        } else {
            Laurent::one()
        };
        Self { rank, hbar }
    }

    /// Dimension N
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// The deformation parameter (1 outside the asymptotic mode)
    pub fn hbar(&self) -> &Laurent<F> {
        &self.hbar
    }

    /// Matrix units in row-major order
    pub fn generators(&self) -> Vec<Generator> {
        let n = self.rank;
        (1..=n)
            .flat_map(|i| (1..=n).map(move |j| Generator::matrix_unit(i, j)))
            .collect()
    }

    /// [E_ij, E_kl]
    pub fn bracket(&self, (i, j): (usize, usize), (k, l): (usize, usize)) -> NamedCombination<F> {
        let mut combination = Vec::new();
        if j == k {
            combination.push((Generator::matrix_unit(i, l), self.hbar.clone()));
        }
        if l == i {
            combination.push((Generator::matrix_unit(k, j), -self.hbar.clone()));
        }
        combination
    }

    /// Every bracket-table entry, omitting the degenerate i = j = k = l
    pub fn brackets(&self) -> Vec<BracketEntry<F>> {
        let n = self.rank;
        let mut table = Vec::with_capacity(n.pow(4));
        for i in 1..=n {
            for j in 1..=n {
                for k in 1..=n {
                    for l in 1..=n {
                        if i == j && j == k && k == l {
                            continue;
                        }
                        table.push((
                            Generator::matrix_unit(i, j),
                            Generator::matrix_unit(k, l),
                            self.bracket((i, j), (k, l)),
                        ));
                    }
                }
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    type L = Laurent<BigRational>;

    #[test]
    fn test_generator_count() {
        let gl = GlStructure::<BigRational>::new(3, false);
        assert_eq!(gl.generators().len(), 9);
        assert_eq!(gl.brackets().len(), 81 - 3);
    }

    #[test]
    fn test_commutation_relation() {
        let gl = GlStructure::<BigRational>::new(2, true);
        let h = L::generator();

        // [E_12, E_21] = ħ(E_11 − E_22)
        assert_eq!(
            gl.bracket((1, 2), (2, 1)),
            vec![
                (Generator::matrix_unit(1, 1), h.clone()),
                (Generator::matrix_unit(2, 2), -h.clone()),
            ]
        );
        // [E_11, E_12] = ħE_12
        assert_eq!(gl.bracket((1, 1), (1, 2)), vec![(Generator::matrix_unit(1, 2), h)]);
        // [E_11, E_22] = 0
        assert!(gl.bracket((1, 1), (2, 2)).is_empty());
    }

    #[test]
    fn test_hbar_is_one_without_asymptotics() {
        let gl = GlStructure::<BigRational>::new(2, false);
        assert_eq!(*gl.hbar(), L::constant(BigRational::from_integer(BigInt::from(1))));
    }
}
