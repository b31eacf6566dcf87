//! Laurent polynomials in the deformation parameter `h`
//!
//! `Laurent<F>` is the ring F[h, h⁻¹]. It carries the asymptotic parameter ħ
//! through the PBW engine: bracket structure constants are scaled by `h`, and
//! series expansions divide by powers of `h`, so negative exponents are needed.
//!
//! Only monomials c·hᵏ with c ≠ 0 are units; [`Laurent::pow`] with a negative
//! exponent fails for anything else.

use crate::error::{AlgebraError, Result};
use crate::ring::{Field, Ring};
use num_traits::{One, Zero};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Element of F[h, h⁻¹], stored as exponent → nonzero coefficient
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Laurent<F> {
    coefficients: BTreeMap<i32, F>,
}

impl<F: Field> Laurent<F> {
    /// Constant polynomial
    pub fn constant(c: F) -> Self {
        Self::monomial(c, 0)
    }

    /// The deformation parameter `h`
    pub fn generator() -> Self {
        Self::monomial(F::one(), 1)
    }

    /// c·hᵏ
    pub fn monomial(c: F, exponent: i32) -> Self {
        let mut coefficients = BTreeMap::new();
        if !c.is_zero() {
            coefficients.insert(exponent, c);
        }
        Self { coefficients }
    }

    /// Iterate over (exponent, coefficient) pairs in increasing exponent order
    pub fn terms(&self) -> impl Iterator<Item = (i32, &F)> {
        self.coefficients.iter().map(|(&e, c)| (e, c))
    }

    /// Coefficient of hᵏ
    pub fn coefficient(&self, exponent: i32) -> F {
        self.coefficients.get(&exponent).cloned().unwrap_or_else(F::zero)
    }

    /// Lowest exponent with nonzero coefficient
    pub fn lowest_degree(&self) -> Option<i32> {
        self.coefficients.keys().next().copied()
    }

    /// Highest exponent with nonzero coefficient
    pub fn highest_degree(&self) -> Option<i32> {
        self.coefficients.keys().next_back().copied()
    }

    /// True if the element lies in F (no `h` dependence)
    pub fn is_constant(&self) -> bool {
        self.coefficients.keys().all(|&e| e == 0)
    }

    /// Multiply every coefficient by a scalar from the base field
    pub fn scale(&self, c: &F) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self {
            coefficients: self
                .coefficients
                .iter()
                .map(|(&e, v)| (e, v.clone() * c.clone()))
                .collect(),
        }
    }

    /// Multiplicative inverse, defined for nonzero monomials only
    pub fn inverse(&self) -> Result<Self> {
        let mut terms = self.coefficients.iter();
        match (terms.next(), terms.next()) {
            (Some((&e, c)), None) => {
                let inv = c
                    .inverse()
                    .ok_or_else(|| AlgebraError::NotInvertible(self.to_string()))?;
                Ok(Self::monomial(inv, -e))
            }
            _ => Err(AlgebraError::NotInvertible(self.to_string())),
        }
    }

    /// Integer power; negative exponents require a unit
    pub fn pow(&self, k: i32) -> Result<Self> {
        let base = if k < 0 { self.inverse()? } else { self.clone() };
        let mut acc = Self::one();
        for _ in 0..k.unsigned_abs() {
            acc = acc * base.clone();
        }
        Ok(acc)
    }

    /// Substitute h := value
    pub fn evaluate(&self, value: &F) -> Result<F> {
        let mut acc = F::zero();
        for (&e, c) in &self.coefficients {
            let base = if e < 0 {
                value
                    .inverse()
                    .ok_or_else(|| AlgebraError::NotInvertible(value.to_string()))?
            } else {
                value.clone()
            };
            let power = (0..e.unsigned_abs()).fold(F::one(), |p, _| p * base.clone());
            acc = acc + c.clone() * power;
        }
        Ok(acc)
    }

    /// Substitute h := 1 (total, unlike [`Laurent::evaluate`] at zero)
    pub fn specialize_one(&self) -> F {
        self.coefficients
            .values()
            .fold(F::zero(), |acc, c| acc + c.clone())
    }

    fn insert_term(&mut self, exponent: i32, c: F) {
        let entry = self.coefficients.entry(exponent).or_insert_with(F::zero);
        *entry = entry.clone() + c;
        if entry.is_zero() {
            self.coefficients.remove(&exponent);
        }
    }
}

impl<F: Field> Zero for Laurent<F> {
    fn zero() -> Self {
        Self {
            coefficients: BTreeMap::new(),
        }
    }

    fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }
}

impl<F: Field> One for Laurent<F> {
    fn one() -> Self {
        Self::constant(F::one())
    }
}

impl<F: Field> Add for Laurent<F> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for (e, c) in rhs.coefficients {
            self.insert_term(e, c);
        }
        self
    }
}

impl<F: Field> Sub for Laurent<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<F: Field> Neg for Laurent<F> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            coefficients: self
                .coefficients
                .into_iter()
                .map(|(e, c)| (e, -c))
                .collect(),
        }
    }
}

impl<F: Field> Mul for Laurent<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::zero();
        for (&e1, c1) in &self.coefficients {
            for (&e2, c2) in &rhs.coefficients {
                out.insert_term(e1 + e2, c1.clone() * c2.clone());
            }
        }
        out
    }
}

impl<F: Field> Ring for Laurent<F> {
    fn from_integer(n: i64) -> Self {
        Self::constant(F::from_integer(n))
    }
}

impl<F: Field> fmt::Display for Laurent<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "0");
        }
        let minus_one = -F::one();
        for (pos, (&e, c)) in self.coefficients.iter().rev().enumerate() {
            let power = match e {
                0 => String::new(),
                1 => "h".to_string(),
                _ => format!("h^{}", e),
            };
            let term = if e == 0 {
                c.to_string()
            } else if c.is_one() {
                power
            } else if *c == minus_one {
                format!("-{}", power)
            } else {
                format!("{}*{}", c, power)
            };
            match (pos, term.strip_prefix('-')) {
                (0, _) => write!(f, "{}", term)?,
                (_, Some(rest)) => write!(f, " - {}", rest)?,
                (_, None) => write!(f, " + {}", term)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    type L = Laurent<BigRational>;

    fn q(n: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(n))
    }

    #[test]
    fn test_laurent_ring_axioms() {
        let h = L::generator();
        let a = h.clone() + L::constant(q(3));
        let b = L::monomial(q(-2), -1) + h.clone() * h.clone();
        let c = L::constant(q(5)) - h;

        assert!(a.verify_ring_axioms(&b, &c));
    }

    #[test]
    fn test_negative_powers_of_units() {
        let h = L::generator();
        let inv = h.pow(-3).unwrap();
        assert_eq!(inv, L::monomial(q(1), -3));
        assert_eq!(inv * h.pow(3).unwrap(), L::one());
    }

    #[test]
    fn test_non_unit_has_no_inverse() {
        let x = L::generator() + L::one();
        assert!(matches!(x.inverse(), Err(AlgebraError::NotInvertible(_))));
        assert!(L::zero().inverse().is_err());
    }

    #[test]
    fn test_evaluate_and_specialize() {
        // 2h - 3 + h^-1
        let x = L::monomial(q(2), 1) + L::constant(q(-3)) + L::monomial(q(1), -1);
        assert_eq!(x.specialize_one(), q(0));
        assert_eq!(x.evaluate(&q(2)).unwrap(), BigRational::new(BigInt::from(3), BigInt::from(2)));
        assert!(x.evaluate(&q(0)).is_err());
    }

    #[test]
    fn test_zero_coefficients_are_dropped() {
        let h = L::generator();
        let x = h.clone() - h;
        assert!(x.is_zero());
        assert_eq!(x.lowest_degree(), None);
    }

    #[test]
    fn test_display() {
        let x = L::monomial(q(2), 1) + L::constant(q(-3)) - L::monomial(q(1), -1);
        assert_eq!(x.to_string(), "2*h - 3 - h^-1");
        assert_eq!(L::zero().to_string(), "0");
        assert_eq!(L::generator().to_string(), "h");
    }
}
