//! Pauli operator strings and the Hamiltonian term list.
//!
//! A Hamiltonian is an ordered sequence of weighted Pauli strings:
//!
//!   H = Σ_k  c_k · P_k
//!
//! where each P_k is a tensor product of single-site Pauli operators
//! (I, X, Y, Z) and c_k ∈ ℝ. The sequence order is a construction
//! artifact (the represented quantity is a sum) but is reproducible for a
//! fixed momentum draw.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Single-site Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauliOp {
    /// Identity.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl PauliOp {
    /// One-letter symbol.
    pub fn symbol(self) -> char {
        match self {
            PauliOp::I => 'I',
            PauliOp::X => 'X',
            PauliOp::Y => 'Y',
            PauliOp::Z => 'Z',
        }
    }
}

impl fmt::Display for PauliOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A dense tensor product of Pauli operators: exactly one symbol per site.
///
/// Stored densely, identities included. The term expansion emits
/// snapshots of a length-N buffer, and two snapshots differing only in
/// identity placement are distinct terms of the output sequence, so the
/// identity positions are semantic here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PauliString {
    ops: Vec<PauliOp>,
}

impl PauliString {
    /// The all-identity string on `n_sites` sites.
    pub fn identity(n_sites: usize) -> Self {
        Self {
            ops: vec![PauliOp::I; n_sites],
        }
    }

    /// Construct from one operator per site, in site order.
    pub fn from_ops(ops: impl IntoIterator<Item = PauliOp>) -> Self {
        Self {
            ops: ops.into_iter().collect(),
        }
    }

    /// The per-site operators, in site order.
    pub fn ops(&self) -> &[PauliOp] {
        &self.ops
    }

    /// Number of sites the string acts on.
    pub fn n_sites(&self) -> usize {
        self.ops.len()
    }

    /// Overwrite the operator at `site`.
    pub fn set(&mut self, site: usize, op: PauliOp) {
        self.ops[site] = op;
    }

    /// True if every site carries the identity.
    pub fn is_identity(&self) -> bool {
        self.ops.iter().all(|op| *op == PauliOp::I)
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

/// A single weighted Pauli term: `coeff · pauli`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HamiltonianTerm {
    /// Real coefficient.
    pub coeff: f64,
    /// The Pauli string.
    pub pauli: PauliString,
}

impl HamiltonianTerm {
    /// Create a new term.
    pub fn new(coeff: f64, pauli: PauliString) -> Self {
        Self { coeff, pauli }
    }
}

/// A sum-of-Pauli-strings Hamiltonian.
///
/// H = Σ_k  c_k · P_k
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hamiltonian {
    terms: Vec<HamiltonianTerm>,
}

impl Hamiltonian {
    /// Create from a list of terms.
    pub fn from_terms(terms: Vec<HamiltonianTerm>) -> Self {
        Self { terms }
    }

    /// All terms, in construction order.
    pub fn terms(&self) -> &[HamiltonianTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// True if there are no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Spectral norm upper bound: Σ |c_k|.
    pub fn lambda(&self) -> f64 {
        self.terms.iter().map(|t| t.coeff.abs()).sum()
    }

    /// Number of sites the Hamiltonian acts on, taken from the first
    /// term. Returns 0 for an empty Hamiltonian.
    pub fn n_sites(&self) -> usize {
        self.terms.first().map_or(0, |t| t.pauli.n_sites())
    }
}

impl FromIterator<HamiltonianTerm> for Hamiltonian {
    fn from_iter<T: IntoIterator<Item = HamiltonianTerm>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}
