//! Expansion of the coupling graph into Pauli terms.
//!
//! Each edge (a, b, w) contributes one block of `3·N` terms, N per Pauli
//! axis in the fixed order X, Y, Z. The three axis passes share one
//! buffer that starts all-identity and is never reset between passes, and
//! a snapshot is appended on every site index whether or not that index
//! changed the buffer. Most snapshots therefore duplicate their
//! predecessor; downstream consumers rely on the exact term count and
//! duplication pattern, so both are part of the contract.

use tracing::debug;

use crate::error::{HamError, HamResult};
use crate::graph::{ParticleId, ScatteringGraph};
use crate::pauli::{Hamiltonian, HamiltonianTerm, PauliOp, PauliString};

/// Axis order for the per-edge passes.
const AXES: [PauliOp; 3] = [PauliOp::X, PauliOp::Y, PauliOp::Z];

/// Expand the weighted coupling graph into the forward-scattering
/// Hamiltonian term sequence.
///
/// Every emitted string has length N (the particle count) and every edge
/// yields exactly `3·N` terms carrying that edge's coupling weight, so the
/// output holds `3·N·|E|` terms in edge iteration order.
///
/// # Errors
///
/// Returns [`HamError::ParticleOutOfRange`] if an edge references a
/// particle id outside 0..N. Graphs from [`ScatteringGraph::build`]
/// followed by [`ScatteringGraph::flatten`] always satisfy this.
pub fn expand(graph: &ScatteringGraph) -> HamResult<Hamiltonian> {
    let n = graph.n_particles();
    let mut terms = Vec::with_capacity(3 * n * graph.n_edges());

    for (a, b, weight) in graph.edges() {
        let a = site_index(a, n)?;
        let b = site_index(b, n)?;

        let mut buffer = PauliString::identity(n);
        for axis in AXES {
            for site in 0..n {
                if site == a || site == b {
                    buffer.set(site, axis);
                }
                terms.push(HamiltonianTerm::new(weight, buffer.clone()));
            }
        }
    }

    debug!(
        n_particles = n,
        n_terms = terms.len(),
        "expanded scattering graph into Pauli terms"
    );
    Ok(Hamiltonian::from_terms(terms))
}

fn site_index(id: ParticleId, n_particles: usize) -> HamResult<usize> {
    let site = id.0 as usize;
    if site >= n_particles {
        return Err(HamError::ParticleOutOfRange {
            particle: id.0,
            n_particles,
        });
    }
    Ok(site)
}
