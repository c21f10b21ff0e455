//! `nuscat-ham` — forward-scattering neutrino Hamiltonian construction.
//!
//! Builds the many-body Hamiltonian describing forward-scattering
//! interactions among simulated neutrinos as a weighted sum of Pauli
//! strings:
//!
//!   H = Σ_k  c_k · P_k
//!
//! The pipeline has three stages, composed by
//! [`generate_forward_scattering_with_rng`]:
//!
//! 1. **Momentum sampling** — one random unit vector in 3-space per
//!    particle ([`sample_momentum`]).
//! 2. **Coupling graph** — a complete graph over the particles; each edge
//!    carries the forward-scattering coupling
//!    `(1/(√2·n)) · (1 − mᵢ·mⱼ)` ([`ScatteringGraph::build`]).
//! 3. **Pauli term expansion** — each edge becomes a block of `3·N`
//!    weighted operator strings ([`expand`]).
//!
//! The resulting term sequence is handed by value to an external
//! qubit-operator conversion and resource-estimation step; nothing here
//! persists or post-processes it.
//!
//! # Quick start
//!
//! ```rust
//! use nuscat_ham::generate_forward_scattering_with_rng;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let h = generate_forward_scattering_with_rng(2, 0.0, &mut rng).unwrap();
//!
//! // One edge, three axis passes over two sites: 6 terms.
//! assert_eq!(h.n_terms(), 6);
//! ```

pub mod error;
pub mod expand;
pub mod graph;
pub mod momentum;
pub mod pauli;
pub mod pipeline;

pub use error::{HamError, HamResult};
pub use expand::expand;
pub use graph::{Particle, ParticleId, ScatteringGraph, forward_scattering_coupling};
pub use momentum::{Momentum, sample_momentum};
pub use pauli::{Hamiltonian, HamiltonianTerm, PauliOp, PauliString};
pub use pipeline::{generate_forward_scattering, generate_forward_scattering_with_rng};
