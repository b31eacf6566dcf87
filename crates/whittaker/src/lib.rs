//! # whittaker
//!
//! Exact Whittaker vectors in U(gl_N) ⊗ Sym(C^N)^{⊗m} via the Kirillov
//! projector.
//!
//! ## Overview
//!
//! The algebra is generated by the matrix units E_i_j of gl(N) and, for each
//! representation prefix `p`, the coordinates p_1 … p_N. A formal central
//! variable `t` and, in asymptotic mode, a formal parameter ħ are carried
//! alongside. The pipeline is:
//!
//! 1. **Structure** ([`structure`], [`representation`]): bracket table and
//!    triangular basis order
//! 2. **Quotient** ([`quotient`]): collapse the nilpotent generators onto the
//!    Whittaker character ψ
//! 3. **Minors** ([`capelli`]): quantum minors of the Capelli matrix
//! 4. **Projector** ([`projector`]): the series operators `noe` and their
//!    composition `proj`
//! 5. **Check** ([`invariance`]): confirm the result is a Whittaker vector
//!
//! ## Usage
//!
//! ```rust
//! use whittaker::prelude::*;
//!
//! let w: Whittaker = Whittaker::new(2, false).unwrap();
//! let u1 = w.generator_named("u_1").unwrap();
//!
//! let vector = w.proj(&u1, 0, &Shifts::new()).unwrap();
//! assert!(w.is_inv(&vector).unwrap().is_invariant());
//! println!("{}", w.render(&vector));
//! ```

#![warn(missing_docs)]

pub mod capelli;
pub mod config;
pub mod engine;
pub mod generator;
pub mod invariance;
pub mod projector;
pub mod quotient;
pub mod representation;
pub mod structure;

mod error;

pub use capelli::{CapelliMatrix, SignedPermutations};
pub use config::WhittakerConfig;
pub use engine::{WElement, Whittaker};
pub use error::{Error, Result};
pub use generator::Generator;
pub use invariance::InvarianceReport;
pub use projector::{SeriesExpansion, Shifts};
pub use quotient::Character;
pub use representation::TensorPowerRepresentation;
pub use structure::GlStructure;

/// Prelude - commonly used types and traits
pub mod prelude {
    pub use crate::config::WhittakerConfig;
    pub use crate::engine::{WElement, Whittaker};
    pub use crate::error::{Error, Result};
    pub use crate::generator::Generator;
    pub use crate::invariance::InvarianceReport;
    pub use crate::projector::Shifts;

    pub use pbw_algebra::prelude::*;
}
