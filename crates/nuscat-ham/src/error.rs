//! Error types for Hamiltonian construction.

use thiserror::Error;

/// Errors produced by the Hamiltonian construction pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HamError {
    /// An edge references a particle id outside the contiguous 0..n range.
    #[error(
        "edge references particle {particle} but the graph has {n_particles} particles — flatten the graph first"
    )]
    ParticleOutOfRange {
        /// The offending particle id.
        particle: u32,
        /// Number of particles in the graph.
        n_particles: usize,
    },
}

/// Result type for Hamiltonian construction operations.
pub type HamResult<T> = Result<T, HamError>;
