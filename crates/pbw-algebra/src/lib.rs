//! # pbw-algebra
//!
//! Exact non-commutative algebra for universal enveloping algebras.
//!
//! ## Layers
//!
//! - **Rings** ([`ring`]): commutative coefficient rings and fields, with
//!   `BigRational` as the base field
//! - **Laurent** ([`laurent`]): F[h, h⁻¹], the ring carrying the deformation
//!   parameter ħ
//! - **Lie structure** ([`lie`]): ordered basis plus bracket table
//! - **PBW algebra** ([`pbw`]): U(g) ⊗ C[t] with normal-form multiplication
//!
//! All arithmetic is exact; there is no floating point anywhere in this crate.

#![warn(missing_docs)]

pub mod laurent;
pub mod lie;
pub mod pbw;
pub mod ring;

mod error;

pub use error::{AlgebraError, Result};
pub use laurent::Laurent;
pub use lie::{Combination, LieStructure, LieStructureBuilder};
pub use pbw::{Element, Monomial, PbwAlgebra, Rendered, Term};
pub use ring::{factorial, Field, Ring};

/// Prelude - commonly used types and traits
pub mod prelude {
    pub use crate::laurent::Laurent;
    pub use crate::lie::LieStructure;
    pub use crate::pbw::{Element, Monomial, PbwAlgebra, Term};
    pub use crate::ring::{Field, Ring};

    // External
    pub use num_bigint::BigInt;
    pub use num_rational::BigRational;
    pub use num_traits::{One, Zero};
}
