//! The assembled algebra: PBW engine, character and Capelli matrix for one
//! choice of rank, mode and representation prefixes

use crate::capelli::CapelliMatrix;
use crate::config::WhittakerConfig;
use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::quotient::Character;
use crate::representation::TensorPowerRepresentation;
use num_rational::BigRational;
use num_traits::Zero;
use pbw_algebra::{Element, Field, Laurent, PbwAlgebra, Rendered};
use tracing::debug;

/// Elements of U(gl_N) ⊗ Sym(C^N)^{⊗m} ⊗ C[t] over Laurent polynomials in ħ
pub type WElement<F> = Element<Laurent<F>>;

/// Entry point for building Whittaker vectors
///
/// Construction freezes the bracket table, the basis order, the character
/// and the Capelli matrix. Every operation afterwards takes elements by
/// reference and returns new ones.
#[derive(Debug, Clone)]
pub struct Whittaker<F: Field = BigRational> {
    config: WhittakerConfig,
    representation: TensorPowerRepresentation<F>,
    algebra: PbwAlgebra<Generator, Laurent<F>>,
    character: Character<F>,
    capelli: CapelliMatrix<F>,
    kazhdan: Vec<i64>,
}

impl<F: Field> Whittaker<F> {
    /// gl(rank) with the default prefixes `u` and `v`
    pub fn new(rank: usize, asymptotic: bool) -> Result<Self> {
        Self::from_config(WhittakerConfig::new(rank).with_asymptotic(asymptotic))
    }

    /// Build from a validated configuration
    pub fn from_config(config: WhittakerConfig) -> Result<Self> {
        config.validate()?;
        let representation = TensorPowerRepresentation::new(
            config.rank,
            config.asymptotic,
            config.prefixes.clone(),
        )?;
        let structure = representation.lie_structure()?;
        let character = Character::regular(config.rank, &structure)?;
        let kazhdan = structure
            .labels()
            .iter()
            .map(|g| g.kazhdan_degree(config.rank))
            .collect();
        let algebra = PbwAlgebra::new(structure);
        let capelli = CapelliMatrix::new(&algebra, config.rank)?;

        debug!(
            rank = config.rank,
            asymptotic = config.asymptotic,
            generators = algebra.structure().len(),
            "built algebra"
        );

        Ok(Self {
            config,
            representation,
            algebra,
            character,
            capelli,
            kazhdan,
        })
    }

    /// Configuration this instance was built from
    pub fn config(&self) -> &WhittakerConfig {
        &self.config
    }

    /// Dimension N
    pub fn rank(&self) -> usize {
        self.config.rank
    }

    /// True when ħ is carried as a formal parameter
    pub fn is_asymptotic(&self) -> bool {
        self.config.asymptotic
    }

    /// ħ as a coefficient (`h` or 1)
    pub fn hbar(&self) -> &Laurent<F> {
        self.representation.gl().hbar()
    }

    /// The central variable t
    pub fn t(&self) -> WElement<F> {
        Element::t()
    }

    /// Underlying PBW engine
    pub fn algebra(&self) -> &PbwAlgebra<Generator, Laurent<F>> {
        &self.algebra
    }

    /// The Whittaker character on the nilpotent subalgebra
    pub fn character(&self) -> &Character<F> {
        &self.character
    }

    /// Matrix of E_ij + δ_ij·t
    pub fn capelli_matrix(&self) -> &CapelliMatrix<F> {
        &self.capelli
    }

    /// Representation prefixes
    pub fn prefixes(&self) -> &[String] {
        self.representation.prefixes()
    }

    /// Algebra element of a generator
    pub fn generator(&self, generator: &Generator) -> Result<WElement<F>> {
        Ok(self.algebra.generator(generator)?)
    }

    /// Algebra element of a generator given as `E_i_j` or `prefix_k`
    pub fn generator_named(&self, name: &str) -> Result<WElement<F>> {
        self.generator(&name.parse()?)
    }

    /// `[0, prefix_1, …, prefix_N]`, so that index k holds prefix_k
    pub fn vector(&self, prefix: &str) -> Result<Vec<WElement<F>>> {
        if !self.prefixes().iter().any(|p| p == prefix) {
            return Err(Error::UnknownPrefix(prefix.to_string()));
        }
        let mut out = Vec::with_capacity(self.rank() + 1);
        out.push(Element::zero());
        for k in 1..=self.rank() {
            out.push(self.generator(&Generator::vector(prefix, k))?);
        }
        Ok(out)
    }

    /// Normal-form product
    pub fn mul(&self, a: &WElement<F>, b: &WElement<F>) -> WElement<F> {
        self.algebra.mul(a, b)
    }

    /// Product of a sequence of elements, left to right
    pub fn product<'a>(&self, factors: impl IntoIterator<Item = &'a WElement<F>>) -> WElement<F>
    where
        F: 'a,
    {
        factors
            .into_iter()
            .fold(Element::one(), |acc, x| self.algebra.mul(&acc, x))
    }

    /// Image in the commutative quotient
    pub fn quotient(&self, el: &WElement<F>) -> WElement<F> {
        self.character.quotient(el)
    }

    /// Substitute h := 1 in every coefficient
    pub fn specialize_hbar(&self, el: &WElement<F>) -> WElement<F> {
        el.map_coefficients(|c| Laurent::constant(c.specialize_one()))
    }

    /// Display adapter with `E_i_j` / `prefix_k` labels
    pub fn render<'a>(&'a self, el: &'a WElement<F>) -> Rendered<'a, Generator, Laurent<F>> {
        self.algebra.render(el)
    }

    /// Kazhdan degree of each basis index
    pub(crate) fn kazhdan_table(&self) -> &[i64] {
        &self.kazhdan
    }

    /// ħ·n as an element coefficient
    pub(crate) fn hbar_times(&self, n: i64) -> Laurent<F> {
        self.hbar().scale(&F::from_integer(n))
    }
}
