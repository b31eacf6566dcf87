//! Coefficient Rings
//!
//! A ring (R, +, ×) is a set R with two binary operations satisfying:
//! 1. (R, +) is an abelian group
//! 2. (R, ×) is a commutative monoid (associative with identity)
//! 3. Distributivity: a × (b + c) = (a × b) + (a × c)
//!
//! Every coefficient ring used by the PBW engine is commutative; the
//! non-commutativity lives entirely in the generators.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// Abstract commutative ring with exact arithmetic
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Display
    + Send
    + Sync
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Image of an integer under the canonical map ℤ → R
    fn from_integer(n: i64) -> Self;

    // Ring axiom verification

    /// Verify left distributivity: a × (b + c) = (a × b) + (a × c)
    fn verify_left_distributivity(&self, b: &Self, c: &Self) -> bool {
        let lhs = self.clone() * (b.clone() + c.clone());
        let rhs = self.clone() * b.clone() + self.clone() * c.clone();
        lhs == rhs
    }

    /// Verify multiplicative associativity: (a × b) × c = a × (b × c)
    fn verify_mul_associativity(&self, b: &Self, c: &Self) -> bool {
        let lhs = (self.clone() * b.clone()) * c.clone();
        let rhs = self.clone() * (b.clone() * c.clone());
        lhs == rhs
    }

    /// Verify commutativity: a × b = b × a
    fn verify_mul_commutativity(&self, b: &Self) -> bool {
        self.clone() * b.clone() == b.clone() * self.clone()
    }

    /// Verify multiplicative identity: a × 1 = a
    fn verify_mul_identity(&self) -> bool {
        self.clone() * Self::one() == *self
    }

    /// Verify all ring axioms
    fn verify_ring_axioms(&self, b: &Self, c: &Self) -> bool {
        self.verify_left_distributivity(b, c)
            && self.verify_mul_associativity(b, c)
            && self.verify_mul_commutativity(b)
            && self.verify_mul_identity()
    }
}

/// Field (commutative ring where every non-zero element has multiplicative inverse)
pub trait Field: Ring {
    /// Multiplicative inverse, `None` for zero
    fn inverse(&self) -> Option<Self>;

    /// Verify multiplicative inverse: a × a⁻¹ = 1
    fn verify_mul_inverse(&self) -> bool {
        match self.inverse() {
            Some(inv) => self.clone() * inv == Self::one(),
            None => self.is_zero(),
        }
    }
}

impl Ring for BigRational {
    fn from_integer(n: i64) -> Self {
        BigRational::from_integer(BigInt::from(n))
    }
}

impl Field for BigRational {
    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.recip())
        }
    }
}

/// n! in the ring, computed exactly
pub fn factorial<R: Ring>(n: u32) -> R {
    (1..=i64::from(n)).fold(R::one(), |acc, k| acc * R::from_integer(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_rational_ring_axioms() {
        let a = q(3, 4);
        let b = q(-5, 7);
        let c = q(11, 2);

        assert!(a.verify_ring_axioms(&b, &c));
        assert!(b.verify_ring_axioms(&c, &a));
    }

    #[test]
    fn test_rational_inverse() {
        assert!(q(-2, 9).verify_mul_inverse());
        assert!(BigRational::zero().verify_mul_inverse());
        assert_eq!(BigRational::zero().inverse(), None);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial::<BigRational>(0), BigRational::one());
        assert_eq!(factorial::<BigRational>(5), q(120, 1));
        // 25! overflows i64 but not the exact ring
        let big: BigRational = factorial(25);
        assert_eq!(big.to_string(), "15511210043330985984000000");
    }
}
