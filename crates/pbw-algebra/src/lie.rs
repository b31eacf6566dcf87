//! Lie structure tables
//!
//! A finite-dimensional Lie algebra over a ring `C` is fixed by its basis and
//! its structure constants:
//!
//! ```text
//! [g_a, g_b] = Σ_c s^c_ab g_c
//! ```
//!
//! The basis here is *ordered*: the position of a generator in the table is its
//! rank in the PBW ordering, so index comparisons are ordering comparisons.

use crate::error::{AlgebraError, Result};
use crate::ring::Ring;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

/// Sparse linear combination of basis generators, by index
pub type Combination<C> = Vec<(usize, C)>;

/// Ordered basis together with its bracket table
#[derive(Debug, Clone)]
pub struct LieStructure<G, C> {
    labels: Vec<G>,
    index: HashMap<G, usize>,
    brackets: HashMap<(usize, usize), Combination<C>>,
}

impl<G, C> LieStructure<G, C>
where
    G: Clone + Eq + Hash + Display,
    C: Ring,
{
    /// Start declaring a structure
    pub fn builder() -> LieStructureBuilder<G, C> {
        LieStructureBuilder::new()
    }

    /// Number of basis generators
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if the basis is empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Generator labels in basis order
    pub fn labels(&self) -> &[G] {
        &self.labels
    }

    /// Label of the generator at `index`
    pub fn label(&self, index: usize) -> Result<&G> {
        self.labels.get(index).ok_or(AlgebraError::IndexOutOfRange {
            index,
            len: self.labels.len(),
        })
    }

    /// Position of `label` in the basis order
    pub fn index_of(&self, label: &G) -> Result<usize> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| AlgebraError::UnknownGenerator(label.to_string()))
    }

    /// Structure constants of [g_a, g_b]; empty when the generators commute
    pub fn bracket(&self, a: usize, b: usize) -> &[(usize, C)] {
        self.brackets
            .get(&(a, b))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// [g_a, Σ c_i g_i] by linearity
    fn bracket_with(&self, a: usize, combination: &[(usize, C)]) -> HashMap<usize, C> {
        let mut out: HashMap<usize, C> = HashMap::new();
        for (b, coeff) in combination {
            for (c, s) in self.bracket(a, *b) {
                let entry = out.entry(*c).or_insert_with(C::zero);
                *entry = entry.clone() + coeff.clone() * s.clone();
            }
        }
        out.retain(|_, v| !v.is_zero());
        out
    }

    /// Verify antisymmetry: [g_a, g_b] = -[g_b, g_a] and [g_a, g_a] = 0
    pub fn verify_antisymmetry(&self) -> bool {
        (0..self.len()).all(|a| {
            self.bracket(a, a).is_empty()
                && (0..self.len()).all(|b| {
                    let ab: HashMap<usize, C> = self.bracket(a, b).iter().cloned().collect();
                    let ba = self.bracket(b, a);
                    ab.len() == ba.len()
                        && ba
                            .iter()
                            .all(|(c, s)| ab.get(c).map_or(false, |v| *v == -s.clone()))
                })
        })
    }

    /// Verify the Jacobi identity on every triple of basis generators
    pub fn verify_jacobi(&self) -> bool {
        let n = self.len();
        for x in 0..n {
            for y in 0..n {
                for z in 0..n {
                    let mut total: HashMap<usize, C> = HashMap::new();
                    for (a, b, c) in [(x, y, z), (y, z, x), (z, x, y)] {
                        let inner: Combination<C> = self.bracket(b, c).to_vec();
                        for (k, v) in self.bracket_with(a, &inner) {
                            let entry = total.entry(k).or_insert_with(C::zero);
                            *entry = entry.clone() + v;
                        }
                    }
                    if total.values().any(|v| !v.is_zero()) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

/// Incremental declaration of generators, brackets and basis order
#[derive(Debug, Clone)]
pub struct LieStructureBuilder<G, C> {
    labels: Vec<G>,
    seen: HashSet<G>,
    brackets: HashMap<(G, G), Vec<(G, C)>>,
    ordering: Option<Vec<G>>,
}

impl<G, C> LieStructureBuilder<G, C>
where
    G: Clone + Eq + Hash + Display,
    C: Ring,
{
    fn new() -> Self {
        Self {
            labels: Vec::new(),
            seen: HashSet::new(),
            brackets: HashMap::new(),
            ordering: None,
        }
    }

    /// Declare a generator; declaration order is the default basis order
    pub fn generator(&mut self, label: G) -> Result<&mut Self> {
        if !self.seen.insert(label.clone()) {
            return Err(AlgebraError::DuplicateGenerator(label.to_string()));
        }
        self.labels.push(label);
        Ok(self)
    }

    /// Set [a, b] = combination (and [b, a] = -combination)
    ///
    /// Zero coefficients are dropped; a self-bracket is ignored.
    pub fn bracket(&mut self, a: G, b: G, combination: Vec<(G, C)>) -> &mut Self {
        if a == b {
            return self;
        }
        let combination: Vec<(G, C)> = combination
            .into_iter()
            .filter(|(_, c)| !c.is_zero())
            .collect();
        let negated = combination
            .iter()
            .map(|(g, c)| (g.clone(), -c.clone()))
            .collect();
        self.brackets.insert((a.clone(), b.clone()), combination);
        self.brackets.insert((b, a), negated);
        self
    }

    /// Replace the basis order; must be a permutation of the declared generators
    pub fn ordering(&mut self, order: Vec<G>) -> &mut Self {
        self.ordering = Some(order);
        self
    }

    /// Resolve labels to indices and freeze the table
    pub fn build(&self) -> Result<LieStructure<G, C>> {
        let labels = match &self.ordering {
            Some(order) => {
                let distinct: HashSet<&G> = order.iter().collect();
                if order.len() != self.labels.len() || distinct.len() != order.len() {
                    return Err(AlgebraError::InvalidOrdering(format!(
                        "expected {} distinct generators, got {}",
                        self.labels.len(),
                        order.len()
                    )));
                }
                if let Some(stray) = order.iter().find(|g| !self.seen.contains(*g)) {
                    return Err(AlgebraError::InvalidOrdering(format!(
                        "{} is not a declared generator",
                        stray
                    )));
                }
                order.clone()
            }
            None => self.labels.clone(),
        };

        let index: HashMap<G, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, g)| (g.clone(), i))
            .collect();
        let lookup = |g: &G| {
            index
                .get(g)
                .copied()
                .ok_or_else(|| AlgebraError::UnknownGenerator(g.to_string()))
        };

        let mut brackets = HashMap::new();
        for ((a, b), combination) in &self.brackets {
            if combination.is_empty() {
                continue;
            }
            let resolved = combination
                .iter()
                .map(|(g, c)| Ok((lookup(g)?, c.clone())))
                .collect::<Result<Combination<C>>>()?;
            brackets.insert((lookup(a)?, lookup(b)?), resolved);
        }

        Ok(LieStructure {
            labels,
            index,
            brackets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    fn q(n: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(n))
    }

    /// sl2 with basis (f, h, e): [h,e] = 2e, [h,f] = -2f, [e,f] = h
    fn sl2() -> LieStructure<&'static str, BigRational> {
        let mut b = LieStructure::builder();
        b.generator("e").unwrap();
        b.generator("h").unwrap();
        b.generator("f").unwrap();
        b.bracket("h", "e", vec![("e", q(2))])
            .bracket("h", "f", vec![("f", q(-2))])
            .bracket("e", "f", vec![("h", q(1))])
            .ordering(vec!["f", "h", "e"]);
        b.build().unwrap()
    }

    #[test]
    fn test_ordering_fixes_indices() {
        let s = sl2();
        assert_eq!(s.labels(), &["f", "h", "e"]);
        assert_eq!(s.index_of(&"e").unwrap(), 2);
        assert_eq!(*s.label(0).unwrap(), "f");
    }

    #[test]
    fn test_bracket_table_is_antisymmetric_and_jacobi() {
        let s = sl2();
        assert!(s.verify_antisymmetry());
        assert!(s.verify_jacobi());
        assert_eq!(s.bracket(2, 0), &[(1, q(1))]);
        assert_eq!(s.bracket(0, 2), &[(1, q(-1))]);
        assert!(s.bracket(1, 1).is_empty());
    }

    #[test]
    fn test_broken_jacobi_is_detected() {
        let mut b = LieStructure::<&str, BigRational>::builder();
        for g in ["x", "y", "z"] {
            b.generator(g).unwrap();
        }
        // [x,[y,z]] + [y,[z,x]] + [z,[x,y]] = 0 - x - x
        b.bracket("x", "y", vec![("y", q(1))])
            .bracket("x", "z", vec![("z", q(1))])
            .bracket("y", "z", vec![("x", q(1))]);
        let s = b.build().unwrap();
        assert!(s.verify_antisymmetry());
        assert!(!s.verify_jacobi());
    }

    #[test]
    fn test_duplicate_and_unknown_generators() {
        let mut b = LieStructure::<&str, BigRational>::builder();
        b.generator("x").unwrap();
        assert_eq!(
            b.generator("x").unwrap_err(),
            AlgebraError::DuplicateGenerator("x".into())
        );

        b.bracket("x", "w", vec![("x", q(1))]);
        assert_eq!(
            b.build().unwrap_err(),
            AlgebraError::UnknownGenerator("w".into())
        );
    }

    #[test]
    fn test_ordering_must_be_permutation() {
        let mut b = LieStructure::<&str, BigRational>::builder();
        b.generator("x").unwrap();
        b.generator("y").unwrap();
        b.ordering(vec!["x", "x"]);
        assert!(matches!(b.build(), Err(AlgebraError::InvalidOrdering(_))));
        b.ordering(vec!["x", "z"]);
        assert!(matches!(b.build(), Err(AlgebraError::InvalidOrdering(_))));
    }
}
