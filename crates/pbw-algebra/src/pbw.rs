//! Poincaré–Birkhoff–Witt algebras
//!
//! Given an ordered Lie structure, the universal enveloping algebra U(g) has a
//! basis of ordered monomials g_{i₁} g_{i₂} ⋯ g_{iₖ} with i₁ ≤ i₂ ≤ ⋯ ≤ iₖ.
//! Every element is kept in that normal form; products are rewritten with
//!
//! ```text
//! x·g = g·x + [x, g]      (x > g in the basis order)
//! ```
//!
//! until each word is ordered again. A central polynomial variable `t` is
//! carried alongside, so elements live in U(g) ⊗ C[t].
//!
//! # Example
//!
//! ```rust
//! use num_bigint::BigInt;
//! use num_rational::BigRational;
//! use pbw_algebra::{LieStructure, PbwAlgebra};
//!
//! let one = BigRational::from_integer(BigInt::from(1));
//! let mut builder = LieStructure::builder();
//! builder.generator("p").unwrap();
//! builder.generator("q").unwrap();
//! builder.generator("z").unwrap();
//! builder.bracket("q", "p", vec![("z", one)]);
//! let algebra = PbwAlgebra::new(builder.build().unwrap());
//!
//! let p = algebra.generator(&"p").unwrap();
//! let q = algebra.generator(&"q").unwrap();
//! let z = algebra.generator(&"z").unwrap();
//!
//! // q·p = p·q + z
//! assert_eq!(algebra.mul(&q, &p), algebra.mul(&p, &q) + z);
//! ```

use crate::error::Result;
use crate::lie::LieStructure;
use crate::ring::Ring;
use num_traits::Zero;
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::hash::Hash;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Ordered word of generator indices (nondecreasing)
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Monomial {
    word: Vec<usize>,
}

impl Monomial {
    /// The empty word
    pub fn one() -> Self {
        Self::default()
    }

    /// A single generator
    pub fn generator(index: usize) -> Self {
        Self { word: vec![index] }
    }

    /// Build from (generator, exponent) pairs with strictly increasing generators
    pub fn from_exponents(exponents: &[(usize, u32)]) -> Self {
        let mut word = Vec::new();
        for &(g, e) in exponents {
            word.extend(std::iter::repeat(g).take(e as usize));
        }
        word.sort_unstable();
        Self { word }
    }

    /// Keep the listed factors of an ordered word; any subsequence is ordered
    pub fn retain(&self, mut keep: impl FnMut(usize) -> bool) -> Self {
        Self {
            word: self.word.iter().copied().filter(|&g| keep(g)).collect(),
        }
    }

    /// Underlying ordered word
    pub fn word(&self) -> &[usize] {
        &self.word
    }

    /// Total degree
    pub fn degree(&self) -> usize {
        self.word.len()
    }

    /// True for the empty word
    pub fn is_one(&self) -> bool {
        self.word.is_empty()
    }

    /// (generator, exponent) pairs in basis order
    pub fn exponents(&self) -> Vec<(usize, u32)> {
        let mut out: Vec<(usize, u32)> = Vec::new();
        for &g in &self.word {
            match out.last_mut() {
                Some((last, e)) if *last == g => *e += 1,
                _ => out.push((g, 1)),
            }
        }
        out
    }

    fn pushed(&self, g: usize) -> Self {
        let mut word = self.word.clone();
        word.push(g);
        Self { word }
    }
}

/// Basis element tᵈ ⊗ monomial of U(g) ⊗ C[t]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Term {
    /// Power of the central variable `t`
    pub t_degree: u32,
    /// PBW monomial
    pub monomial: Monomial,
}

impl Term {
    /// tᵈ·m
    pub fn new(t_degree: u32, monomial: Monomial) -> Self {
        Self { t_degree, monomial }
    }
}

/// Element of U(g) ⊗ C[t] in normal form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element<C> {
    terms: BTreeMap<Term, C>,
}

impl<C: Ring> Element<C> {
    /// Multiplicative identity
    pub fn one() -> Self {
        Self::scalar(C::one())
    }

    /// Scalar multiple of the identity
    pub fn scalar(c: C) -> Self {
        Self::term(Term::default(), c)
    }

    /// The central variable `t`
    pub fn t() -> Self {
        Self::term(Term::new(1, Monomial::one()), C::one())
    }

    /// c·term
    pub fn term(term: Term, c: C) -> Self {
        let mut out = Self::zero();
        out.add_term(term, c);
        out
    }

    /// True if the element is the identity
    pub fn is_one(&self) -> bool {
        *self == Self::one()
    }

    /// True if the element has no generator or `t` factors
    pub fn is_scalar(&self) -> bool {
        self.terms.keys().all(|t| *t == Term::default())
    }

    /// Number of nonzero terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if there are no nonzero terms (same as [`Zero::is_zero`])
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Nonzero terms in canonical order
    pub fn terms(&self) -> impl Iterator<Item = (&Term, &C)> {
        self.terms.iter()
    }

    /// Coefficient of a basis term
    pub fn coefficient(&self, term: &Term) -> C {
        self.terms.get(term).cloned().unwrap_or_else(C::zero)
    }

    /// Highest power of `t`, `None` for zero
    pub fn max_t_degree(&self) -> Option<u32> {
        self.terms.keys().map(|t| t.t_degree).max()
    }

    /// Decompose as Σ tᵈ·e_d with each e_d free of `t`
    pub fn by_t_degree(&self) -> BTreeMap<u32, Element<C>> {
        let mut out: BTreeMap<u32, Element<C>> = BTreeMap::new();
        for (term, c) in &self.terms {
            out.entry(term.t_degree)
                .or_insert_with(Element::zero)
                .add_term(Term::new(0, term.monomial.clone()), c.clone());
        }
        out
    }

    /// Multiply by a scalar
    pub fn scale(&self, c: &C) -> Self {
        let mut out = Self::zero();
        for (term, v) in &self.terms {
            out.add_term(term.clone(), v.clone() * c.clone());
        }
        out
    }

    /// Apply a coefficient map term by term
    pub fn map_coefficients<D: Ring>(&self, mut f: impl FnMut(&C) -> D) -> Element<D> {
        let mut out = Element::zero();
        for (term, c) in &self.terms {
            out.add_term(term.clone(), f(c));
        }
        out
    }

    /// Add c·term, dropping the term if it cancels
    pub fn add_term(&mut self, term: Term, c: C) {
        if c.is_zero() {
            return;
        }
        match self.terms.get_mut(&term) {
            Some(existing) => {
                *existing = existing.clone() + c;
                if existing.is_zero() {
                    self.terms.remove(&term);
                }
            }
            None => {
                self.terms.insert(term, c);
            }
        }
    }
}

impl<C: Ring> Zero for Element<C> {
    fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<C: Ring> AddAssign for Element<C> {
    fn add_assign(&mut self, rhs: Self) {
        for (term, c) in rhs.terms {
            self.add_term(term, c);
        }
    }
}

impl<C: Ring> Add for Element<C> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<C: Ring> Neg for Element<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            terms: self.terms.into_iter().map(|(t, c)| (t, -c)).collect(),
        }
    }
}

impl<C: Ring> Sub for Element<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

/// Sparse combination of PBW monomials (no `t`)
type Straightened<C> = BTreeMap<Monomial, C>;

fn accumulate<C: Ring>(acc: &mut Straightened<C>, m: Monomial, c: C) {
    if c.is_zero() {
        return;
    }
    let entry = acc.entry(m.clone()).or_insert_with(C::zero);
    *entry = entry.clone() + c;
    if entry.is_zero() {
        acc.remove(&m);
    }
}

/// Universal enveloping algebra of an ordered Lie structure
#[derive(Debug, Clone)]
pub struct PbwAlgebra<G, C> {
    structure: LieStructure<G, C>,
}

impl<G, C> PbwAlgebra<G, C>
where
    G: Clone + Eq + Hash + Display,
    C: Ring,
{
    /// Wrap a frozen Lie structure
    pub fn new(structure: LieStructure<G, C>) -> Self {
        Self { structure }
    }

    /// Underlying Lie structure
    pub fn structure(&self) -> &LieStructure<G, C> {
        &self.structure
    }

    /// The generator with the given label
    pub fn generator(&self, label: &G) -> Result<Element<C>> {
        let index = self.structure.index_of(label)?;
        Ok(Element::term(
            Term::new(0, Monomial::generator(index)),
            C::one(),
        ))
    }

    /// The generator at a basis position
    pub fn generator_at(&self, index: usize) -> Result<Element<C>> {
        self.structure.label(index)?;
        Ok(Element::term(
            Term::new(0, Monomial::generator(index)),
            C::one(),
        ))
    }

    /// Normal-form product a·b
    pub fn mul(&self, a: &Element<C>, b: &Element<C>) -> Element<C> {
        let mut out = Element::zero();
        for (ta, ca) in a.terms() {
            for (tb, cb) in b.terms() {
                let coeff = ca.clone() * cb.clone();
                let t_degree = ta.t_degree + tb.t_degree;
                for (m, c) in self.mul_monomials(&ta.monomial, &tb.monomial) {
                    out.add_term(Term::new(t_degree, m), coeff.clone() * c);
                }
            }
        }
        out
    }

    /// aᵏ
    pub fn pow(&self, a: &Element<C>, k: u32) -> Element<C> {
        (0..k).fold(Element::one(), |acc, _| self.mul(&acc, a))
    }

    /// a·b - b·a
    pub fn commutator(&self, a: &Element<C>, b: &Element<C>) -> Element<C> {
        self.mul(a, b) - self.mul(b, a)
    }

    /// Substitute t := value
    ///
    /// `value` must be central (a polynomial in `t` with scalar coefficients,
    /// or a scalar); powers of it are placed on the left of each monomial.
    pub fn substitute_t(&self, el: &Element<C>, value: &Element<C>) -> Element<C> {
        let mut powers = vec![Element::one()];
        let mut out = Element::zero();
        for (term, c) in el.terms() {
            let d = term.t_degree as usize;
            while powers.len() <= d {
                let next = self.mul(&powers[powers.len() - 1], value);
                powers.push(next);
            }
            let rest = Element::term(Term::new(0, term.monomial.clone()), c.clone());
            out += self.mul(&powers[d], &rest);
        }
        out
    }

    /// Display adapter using generator labels
    pub fn render<'a>(&'a self, el: &'a Element<C>) -> Rendered<'a, G, C> {
        Rendered {
            structure: &self.structure,
            element: el,
        }
    }

    fn mul_monomials(&self, left: &Monomial, right: &Monomial) -> Straightened<C> {
        let mut current: Straightened<C> = BTreeMap::new();
        current.insert(left.clone(), C::one());
        for &g in right.word() {
            let mut next = BTreeMap::new();
            for (m, c) in current {
                for (m2, c2) in self.push_generator(m.word(), g) {
                    accumulate(&mut next, m2, c.clone() * c2);
                }
            }
            current = next;
        }
        current
    }

    /// Normal form of word·g, with `word` already ordered
    fn push_generator(&self, word: &[usize], g: usize) -> Straightened<C> {
        match word.split_last() {
            Some((&x, rest)) if x > g => {
                // rest·x·g = (rest·g)·x + rest·[x, g]
                let mut out = BTreeMap::new();
                for (m, c) in self.push_generator(rest, g) {
                    for (m2, c2) in self.push_generator(m.word(), x) {
                        accumulate(&mut out, m2, c.clone() * c2);
                    }
                }
                for (y, s) in self.structure.bracket(x, g) {
                    for (m2, c2) in self.push_generator(rest, *y) {
                        accumulate(&mut out, m2, s.clone() * c2);
                    }
                }
                out
            }
            _ => {
                let mut out = BTreeMap::new();
                out.insert(Monomial { word: word.to_vec() }.pushed(g), C::one());
                out
            }
        }
    }
}

/// Element formatted with generator labels
pub struct Rendered<'a, G, C> {
    structure: &'a LieStructure<G, C>,
    element: &'a Element<C>,
}

fn format_term(coefficient: String, factors: Vec<String>) -> String {
    if factors.is_empty() {
        return coefficient;
    }
    let product = factors.join("*");
    let coefficient = if coefficient.contains(' ') {
        format!("({})", coefficient)
    } else {
        coefficient
    };
    match coefficient.as_str() {
        "1" => product,
        "-1" => format!("-{}", product),
        _ => format!("{}*{}", coefficient, product),
    }
}

fn write_sum(f: &mut fmt::Formatter<'_>, terms: Vec<String>) -> fmt::Result {
    if terms.is_empty() {
        return write!(f, "0");
    }
    for (pos, term) in terms.iter().enumerate() {
        match (pos, term.strip_prefix('-')) {
            (0, _) => write!(f, "{}", term)?,
            (_, Some(rest)) => write!(f, " - {}", rest)?,
            (_, None) => write!(f, " + {}", term)?,
        }
    }
    Ok(())
}

fn t_factor(t_degree: u32) -> Option<String> {
    match t_degree {
        0 => None,
        1 => Some("t".to_string()),
        d => Some(format!("t^{}", d)),
    }
}

impl<G, C> Display for Rendered<'_, G, C>
where
    G: Clone + Eq + Hash + Display,
    C: Ring,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = Vec::new();
        for (term, c) in self.element.terms() {
            let mut factors: Vec<String> = t_factor(term.t_degree).into_iter().collect();
            for (g, e) in term.monomial.exponents() {
                let label = self
                    .structure
                    .label(g)
                    .map(|l| l.to_string())
                    .unwrap_or_else(|_| format!("g{}", g));
                factors.push(if e == 1 { label } else { format!("{}^{}", label, e) });
            }
            terms.push(format_term(c.to_string(), factors));
        }
        write_sum(f, terms)
    }
}

impl<C: Ring> Display for Element<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = Vec::new();
        for (term, c) in self.terms() {
            let mut factors: Vec<String> = t_factor(term.t_degree).into_iter().collect();
            for (g, e) in term.monomial.exponents() {
                factors.push(if e == 1 {
                    format!("g{}", g)
                } else {
                    format!("g{}^{}", g, e)
                });
            }
            terms.push(format_term(c.to_string(), factors));
        }
        write_sum(f, terms)
    }
}
