//! Pipeline entry point: sample, build, flatten, expand.

use rand::Rng;

use crate::error::HamResult;
use crate::expand::expand;
use crate::graph::ScatteringGraph;
use crate::pauli::Hamiltonian;

/// Generate the forward-scattering Hamiltonian for `n_particles`
/// neutrinos using the given random number generator.
///
/// Builds the complete coupling graph, relabels particle ids to the
/// contiguous 0..n range, and expands every edge into its `3·N` Pauli
/// terms. All randomness comes from `rng`; seeding it makes the output
/// reproducible.
pub fn generate_forward_scattering_with_rng<R: Rng>(
    n_particles: usize,
    site_interaction: f64,
    rng: &mut R,
) -> HamResult<Hamiltonian> {
    let graph = ScatteringGraph::build(n_particles, site_interaction, rng).flatten();
    expand(&graph)
}

/// As [`generate_forward_scattering_with_rng`], drawing momenta from the
/// thread-local RNG.
///
/// Two invocations with identical arguments produce different
/// Hamiltonians; this is the expected production behavior.
pub fn generate_forward_scattering(
    n_particles: usize,
    site_interaction: f64,
) -> HamResult<Hamiltonian> {
    generate_forward_scattering_with_rng(n_particles, site_interaction, &mut rand::thread_rng())
}
