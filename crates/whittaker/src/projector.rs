//! The Kirillov projector
//!
//! For each strictly lower pair (i, j) the operator `noe(i, j, ·)` expands
//!
//! ```text
//! Σ_k ħ^{-k}/k! · (quotient of el·(ψ − E_ij)^k) · Π_{l<k} A(−ħ·(l − shift))
//! ```
//!
//! where A is the signed quotiented minor on rows and columns j..i−1. The sum
//! is finite: every factor (ψ − E_ij) lowers the Kazhdan degree by one, and
//! elements of negative degree vanish in the quotient. `proj` composes these
//! operators column by column, right to left.

use crate::engine::{WElement, Whittaker};
use crate::error::{Error, Result};
use crate::generator::Generator;
use num_traits::Zero;
use pbw_algebra::{factorial, AlgebraError, Element, Field, Laurent};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Result of one series expansion
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesExpansion<F: Field> {
    /// Quotient image of the accumulated sum
    pub value: WElement<F>,
    /// Number of nonzero terms accumulated
    pub terms: usize,
}

/// Named projector shifts `u_k = value`, k in 2..=N
///
/// Absent names mean shift 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shifts {
    values: BTreeMap<usize, i64>,
}

impl Shifts {
    /// No shifts
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Shifts::set`]
    pub fn with(mut self, k: usize, value: i64) -> Self {
        self.set(k, value);
        self
    }

    /// Set u_k
    pub fn set(&mut self, k: usize, value: i64) {
        self.values.insert(k, value);
    }

    /// u_k, 0 when unset
    pub fn get(&self, k: usize) -> i64 {
        self.values.get(&k).copied().unwrap_or(0)
    }

    /// (k, value) pairs in increasing k
    pub fn iter(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.values.iter().map(|(&k, &v)| (k, v))
    }

    /// True if no shift is set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse `u_k=value`
    pub fn parse_assignment(s: &str) -> Result<(usize, i64)> {
        let invalid = || Error::InvalidShift(s.to_string());
        let (name, value) = s.split_once('=').ok_or_else(invalid)?;
        let (name, value) = (name.trim(), value.trim());
        let k = name
            .strip_prefix("u_")
            .ok_or_else(|| Error::UnknownShift(name.to_string()))?
            .parse::<usize>()
            .map_err(|_| Error::UnknownShift(name.to_string()))?;
        let value = value.parse::<i64>().map_err(|_| invalid())?;
        Ok((k, value))
    }

    /// Reject names outside u_2..u_rank
    pub fn validate(&self, rank: usize) -> Result<()> {
        match self.values.keys().find(|&&k| k < 2 || k > rank) {
            Some(k) => Err(Error::UnknownShift(format!("u_{}", k))),
            None => Ok(()),
        }
    }
}

impl FromIterator<(usize, i64)> for Shifts {
    fn from_iter<I: IntoIterator<Item = (usize, i64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl FromStr for Shifts {
    type Err = Error;

    /// Comma-separated `u_k=value` assignments; the empty string is no shifts
    fn from_str(s: &str) -> Result<Self> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Shifts::parse_assignment)
            .collect()
    }
}

impl fmt::Display for Shifts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("u_{}={}", k, v)).collect();
        write!(f, "{}", parts.join(","))
    }
}

impl<F: Field> Whittaker<F> {
    /// Kazhdan degree of an element: the maximum over its monomials, clamped at 0
    ///
    /// Fails if `el` mentions a basis index this algebra does not have.
    pub fn kazhdan_degree(&self, el: &WElement<F>) -> Result<usize> {
        let table = self.kazhdan_table();
        let mut best = 0i64;
        for (term, _) in el.terms() {
            let mut degree = 0i64;
            for &g in term.monomial.word() {
                degree += table.get(g).copied().ok_or(AlgebraError::IndexOutOfRange {
                    index: g,
                    len: table.len(),
                })?;
            }
            best = best.max(degree);
        }
        Ok(best as usize)
    }

    /// Apply the projector factor for E_ij to `el`
    pub fn noe(&self, i: usize, j: usize, el: &WElement<F>, shift: i64) -> Result<WElement<F>> {
        Ok(self.noe_expansion(i, j, el, shift)?.value)
    }

    /// [`Whittaker::noe`] together with the number of series terms used
    pub fn noe_expansion(
        &self,
        i: usize,
        j: usize,
        el: &WElement<F>,
        shift: i64,
    ) -> Result<SeriesExpansion<F>> {
        let n = self.rank();
        if j == 0 || j >= i || i > n {
            return Err(Error::InvalidPair { i, j, rank: n });
        }

        let generator = Generator::matrix_unit(i, j);
        let psi = self
            .character()
            .value(&generator)
            .cloned()
            .ok_or_else(|| Error::InvalidPair { i, j, rank: n })?;
        let step = Element::scalar(psi) - self.generator(&generator)?;

        let block: Vec<usize> = (j..i).collect();
        let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
        let a = self
            .minor(&block, &block, 0)?
            .scale(&Laurent::constant(F::from_integer(sign)));

        let bound = self.kazhdan_degree(el)? + 1 + self.config().series_slack;
        let mut current = el.clone();
        let mut k_factor: WElement<F> = Element::one();
        let mut sum = Element::zero();
        let mut k = 0usize;

        while !current.is_zero() {
            if k >= bound {
                return Err(Error::SeriesDiverged { i, j, bound });
            }
            let coefficient = self.series_coefficient(k)?;
            sum += self.mul(&current, &k_factor).scale(&coefficient);
            debug!(i, j, k, terms = current.len(), "series step");

            current = self.quotient(&self.mul(&current, &step));
            let at = Element::scalar(self.hbar_times(shift - k as i64));
            let a_k = self.algebra().substitute_t(&a, &at);
            k_factor = self.mul(&k_factor, &a_k);
            k += 1;
        }

        Ok(SeriesExpansion {
            value: self.quotient(&sum),
            terms: k,
        })
    }

    /// Project `el` onto Whittaker vectors, skipping the first `truncation`
    /// columns
    pub fn proj(
        &self,
        el: &WElement<F>,
        truncation: usize,
        shifts: &Shifts,
    ) -> Result<WElement<F>> {
        let n = self.rank();
        shifts.validate(n)?;

        let mut out = el.clone();
        for j in ((1 + truncation)..n).rev() {
            let shift = shifts.get(j + 1);
            info!(column = j, shift, terms = out.len(), "projecting column");
            for i in (j + 1)..=n {
                out = self.noe(i, j, &out, shift)?;
            }
        }
        Ok(out)
    }

    /// ħ^{-k} / k!
    fn series_coefficient(&self, k: usize) -> Result<Laurent<F>> {
        let k = k as u32;
        let inverse_factorial = factorial::<F>(k)
            .inverse()
            .ok_or_else(|| AlgebraError::NotInvertible(format!("{}!", k)))?;
        let power = self.hbar().pow(-(k as i32))?;
        Ok(power.scale(&inverse_factorial))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gl(rank: usize, asymptotic: bool) -> Whittaker {
        Whittaker::new(rank, asymptotic).unwrap()
    }

    #[test]
    fn test_shift_parsing() {
        assert_eq!(Shifts::parse_assignment("u_2=3").unwrap(), (2, 3));
        assert_eq!(Shifts::parse_assignment(" u_3 = -1 ").unwrap(), (3, -1));
        assert!(matches!(
            Shifts::parse_assignment("u_2"),
            Err(Error::InvalidShift(_))
        ));
        assert!(matches!(
            Shifts::parse_assignment("u_2=x"),
            Err(Error::InvalidShift(_))
        ));
        assert!(matches!(
            Shifts::parse_assignment("v_2=1"),
            Err(Error::UnknownShift(_))
        ));

        let shifts: Shifts = "u_2=1, u_4=-2".parse().unwrap();
        assert_eq!(shifts.get(2), 1);
        assert_eq!(shifts.get(3), 0);
        assert_eq!(shifts.to_string(), "u_2=1,u_4=-2");
        assert!("".parse::<Shifts>().unwrap().is_empty());
    }

    #[test]
    fn test_shift_validation() {
        assert!(Shifts::new().with(3, 1).validate(3).is_ok());
        assert!(matches!(
            Shifts::new().with(1, 1).validate(3),
            Err(Error::UnknownShift(name)) if name == "u_1"
        ));
        assert!(Shifts::new().with(4, 1).validate(3).is_err());
    }

    #[test]
    fn test_kazhdan_degree_of_elements() {
        let w = gl(3, false);
        let e13 = w.generator_named("E_1_3").unwrap();
        let u1 = w.generator_named("u_1").unwrap();
        let e31 = w.generator_named("E_3_1").unwrap();
        assert_eq!(w.kazhdan_degree(&e13).unwrap(), 3);
        assert_eq!(w.kazhdan_degree(&w.mul(&e13, &u1)).unwrap(), 5);
        assert_eq!(w.kazhdan_degree(&e31).unwrap(), 0);
        assert_eq!(w.kazhdan_degree(&(w.t() + u1)).unwrap(), 2);
        assert_eq!(w.kazhdan_degree(&Element::zero()).unwrap(), 0);
    }

    #[test]
    fn test_kazhdan_degree_rejects_foreign_elements() {
        let big = gl(3, false);
        let small = gl(2, false);
        let v3 = big.generator_named("v_3").unwrap();
        assert!(matches!(
            small.kazhdan_degree(&v3),
            Err(Error::Algebra(AlgebraError::IndexOutOfRange { .. }))
        ));
        assert!(matches!(
            small.noe(2, 1, &v3, 0),
            Err(Error::Algebra(AlgebraError::IndexOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_noe_of_zero_is_zero() {
        for asymptotic in [false, true] {
            let w = gl(3, asymptotic);
            for i in 2..=3 {
                for j in 1..i {
                    for shift in -2..3 {
                        let out = w.noe_expansion(i, j, &Element::zero(), shift).unwrap();
                        assert!(out.value.is_zero(), "E_{}_{} shift {}", i, j, shift);
                        assert_eq!(out.terms, 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_noe_rejects_invalid_pairs() {
        let w = gl(3, false);
        let one = Element::one();
        for (i, j) in [(1, 2), (2, 2), (4, 1), (1, 0)] {
            assert!(matches!(
                w.noe(i, j, &one, 0),
                Err(Error::InvalidPair { .. })
            ));
        }
    }

    #[test]
    fn test_noe_term_count_within_bound() {
        let w = gl(3, true);
        let basis: Vec<WElement<num_rational::BigRational>> = w
            .algebra()
            .structure()
            .labels()
            .iter()
            .map(|g| w.generator(g).unwrap())
            .collect();
        let mut inputs = basis.clone();
        for a in ["E_1_2", "E_1_3", "u_1", "E_2_3"] {
            for b in ["E_1_2", "v_1", "E_1_1"] {
                let x = w.generator_named(a).unwrap();
                let y = w.generator_named(b).unwrap();
                inputs.push(w.mul(&x, &y));
            }
        }

        for el in &inputs {
            let bound = w.kazhdan_degree(el).unwrap() + 1;
            for i in 2..=3 {
                for j in 1..i {
                    for shift in [0, 2] {
                        let out = w.noe_expansion(i, j, el, shift).unwrap();
                        assert!(
                            out.terms <= bound,
                            "{} at E_{}_{}: {} terms, bound {}",
                            w.render(el),
                            i,
                            j,
                            out.terms,
                            bound
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_noe_term_bound_is_attained() {
        let w = gl(3, true);
        let e12 = w.generator_named("E_1_2").unwrap();
        let square = w.mul(&e12, &e12);
        assert_eq!(w.kazhdan_degree(&square).unwrap(), 4);
        assert_eq!(w.noe_expansion(2, 1, &square, 0).unwrap().terms, 5);
    }

    #[test]
    fn test_proj_gl2() {
        for asymptotic in [false, true] {
            let w = gl(2, asymptotic);
            let u1 = w.generator_named("u_1").unwrap();
            let out = w.proj(&u1, 0, &Shifts::new()).unwrap();
            assert_eq!(w.render(&out).to_string(), "-E_1_1*u_2 + u_1");
        }
    }

    #[test]
    fn test_proj_of_raising_generator() {
        let w = gl(2, false);
        let e12 = w.generator_named("E_1_2").unwrap();
        let out = w.proj(&e12, 0, &Shifts::new()).unwrap();
        assert_eq!(w.render(&out).to_string(), "E_1_1 - E_1_1*E_2_2 + E_1_2");

        let w = gl(2, true);
        let e12 = w.generator_named("E_1_2").unwrap();
        let out = w.proj(&e12, 0, &Shifts::new()).unwrap();
        assert_eq!(w.render(&out).to_string(), "h*E_1_1 - E_1_1*E_2_2 + E_1_2");
    }

    #[test]
    fn test_proj_fixed_and_vanishing_inputs() {
        let w = gl(3, false);
        let u3 = w.generator_named("u_3").unwrap();
        assert_eq!(w.proj(&u3, 0, &Shifts::new()).unwrap(), u3);

        let e11 = w.generator_named("E_1_1").unwrap();
        assert!(w.proj(&e11, 0, &Shifts::new()).unwrap().is_zero());

        let e12 = w.generator_named("E_1_2").unwrap();
        assert!(w.proj(&e12, 0, &Shifts::new()).unwrap().is_zero());
    }

    #[test]
    fn test_proj_full_truncation_is_identity() {
        let w = gl(3, false);
        let u1 = w.generator_named("u_1").unwrap();
        assert_eq!(w.proj(&u1, 2, &Shifts::new()).unwrap(), u1);
    }

    #[test]
    fn test_proj_rejects_unknown_shift() {
        let w = gl(3, false);
        let u1 = w.generator_named("u_1").unwrap();
        assert!(matches!(
            w.proj(&u1, 0, &Shifts::new().with(5, 1)),
            Err(Error::UnknownShift(_))
        ));
    }

    #[test]
    fn test_zero_shift_matches_default() {
        let w = gl(3, false);
        let u1 = w.generator_named("u_1").unwrap();
        let explicit = Shifts::new().with(2, 0).with(3, 0);
        assert_eq!(
            w.proj(&u1, 0, &explicit).unwrap(),
            w.proj(&u1, 0, &Shifts::new()).unwrap()
        );
    }
}
