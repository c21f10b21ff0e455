//! The forward-scattering coupling graph.
//!
//! A complete, undirected, weighted graph over the simulated neutrinos:
//! each node carries a particle (momentum plus an inert site weight), each
//! edge carries the pairwise forward-scattering coupling. Randomness
//! enters only through the momentum sampler; for a fixed momentum draw
//! the graph is fully determined.

use std::fmt;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::momentum::{Momentum, sample_momentum};

/// Unique identifier for a particle within a scattering graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticleId(pub u32);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

impl From<u32> for ParticleId {
    fn from(id: u32) -> Self {
        ParticleId(id)
    }
}

impl From<usize> for ParticleId {
    fn from(id: usize) -> Self {
        ParticleId(u32::try_from(id).expect("ParticleId overflow: exceeds u32::MAX"))
    }
}

/// A neutrino in the forward-scattering model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// The unique identifier; contiguous 0..n after [`ScatteringGraph::flatten`].
    pub id: ParticleId,
    /// Momentum direction (unit norm up to floating-point error).
    pub momentum: Momentum,
    /// Site interaction strength. Carried for graph consumers; the term
    /// expansion never reads it.
    pub site_weight: f64,
}

/// Forward-scattering coupling between two momentum directions.
///
///   weight = (1 / (√2 · n)) · (1 − mᵢ · mⱼ)
///
/// Zero for parallel momenta, maximal for back-to-back ones; the 1/n
/// factor is the mean-field normalization. Symmetric in its momentum
/// arguments because the inner product is.
pub fn forward_scattering_coupling(n_particles: usize, curr: &Momentum, neighbor: &Momentum) -> f64 {
    let normalization = 1.0 / (f64::sqrt(2.0) * n_particles as f64);
    normalization * (1.0 - curr.dot(neighbor))
}

/// Complete undirected coupling graph over the simulated neutrinos.
#[derive(Debug, Clone)]
pub struct ScatteringGraph {
    graph: UnGraph<Particle, f64>,
}

impl ScatteringGraph {
    /// Build the complete coupling graph for `n_particles` neutrinos.
    ///
    /// Creates nodes with sequential ids 0..n, a freshly sampled momentum
    /// each, and the constant `site_interaction` as the site weight; then
    /// adds one edge per unordered pair carrying the forward-scattering
    /// coupling. A particle count of 0 or 1 degenerates to a graph with
    /// no edges rather than an error.
    pub fn build<R: Rng>(n_particles: usize, site_interaction: f64, rng: &mut R) -> Self {
        let n_pairs = n_particles * n_particles.saturating_sub(1) / 2;
        let mut graph = UnGraph::with_capacity(n_particles, n_pairs);

        let mut nodes = Vec::with_capacity(n_particles);
        for id in 0..n_particles {
            nodes.push(graph.add_node(Particle {
                id: ParticleId::from(id),
                momentum: sample_momentum(rng),
                site_weight: site_interaction,
            }));
        }

        for (idx, &curr) in nodes.iter().enumerate() {
            for &neighbor in &nodes[idx + 1..] {
                let weight = forward_scattering_coupling(
                    n_particles,
                    &graph[curr].momentum,
                    &graph[neighbor].momentum,
                );
                graph.add_edge(curr, neighbor, weight);
            }
        }

        debug!(
            n_particles,
            n_edges = graph.edge_count(),
            site_interaction,
            "built scattering graph"
        );
        Self { graph }
    }

    /// Wrap an existing particle graph.
    ///
    /// The ids need not be contiguous; run [`ScatteringGraph::flatten`]
    /// before term expansion.
    pub fn from_graph(graph: UnGraph<Particle, f64>) -> Self {
        Self { graph }
    }

    /// Number of particles (nodes).
    pub fn n_particles(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of coupling edges.
    pub fn n_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// The particle stored at a node.
    pub fn particle(&self, node: NodeIndex) -> &Particle {
        &self.graph[node]
    }

    /// All particles, in node order.
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.graph.node_weights()
    }

    /// Edges as `(id_a, id_b, coupling)`, in insertion order.
    ///
    /// Insertion order is deterministic for a built graph: pairs (i, j)
    /// with i < j, outer index ascending.
    pub fn edges(&self) -> impl Iterator<Item = (ParticleId, ParticleId, f64)> + '_ {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].id,
                self.graph[e.target()].id,
                *e.weight(),
            )
        })
    }

    /// Relabel particle ids to the contiguous range 0..n, in node order.
    ///
    /// Graphs built by [`ScatteringGraph::build`] already satisfy this;
    /// the step stays explicit so graphs assembled by external utilities
    /// meet the term-expansion precondition too.
    #[must_use]
    pub fn flatten(mut self) -> Self {
        let nodes: Vec<NodeIndex> = self.graph.node_indices().collect();
        for (pos, node) in nodes.into_iter().enumerate() {
            self.graph[node].id = ParticleId::from(pos);
        }
        self
    }
}
