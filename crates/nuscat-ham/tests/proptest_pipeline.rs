//! Property-based tests for the Hamiltonian construction pipeline.
//!
//! Checks the structural invariants that must hold for every particle
//! count and every random draw: term counts, string lengths, weight
//! bounds, and momentum normalization.

use nuscat_ham::graph::ScatteringGraph;
use nuscat_ham::momentum::sample_momentum;
use nuscat_ham::pipeline::generate_forward_scattering_with_rng;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    #[test]
    fn momenta_always_have_unit_norm(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let m = sample_momentum(&mut rng);
        prop_assert!((m.norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn graph_is_complete(n in 1usize..12, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let g = ScatteringGraph::build(n, 0.0, &mut rng);
        prop_assert_eq!(g.n_particles(), n);
        prop_assert_eq!(g.n_edges(), n * (n - 1) / 2);
    }

    #[test]
    fn couplings_stay_within_the_mean_field_bound(n in 2usize..12, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let g = ScatteringGraph::build(n, 0.0, &mut rng);
        // 1 − mᵢ·mⱼ ∈ [0, 2] for unit vectors, so the coupling lies in
        // [0, √2/n] up to floating-point error.
        let bound = f64::sqrt(2.0) / n as f64 + 1e-12;
        for (_, _, w) in g.edges() {
            prop_assert!(w.is_finite());
            prop_assert!((-1e-12..=bound).contains(&w));
        }
    }

    #[test]
    fn term_count_is_three_n_per_edge(n in 1usize..10, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let h = generate_forward_scattering_with_rng(n, 0.0, &mut rng).unwrap();
        let n_edges = n * (n - 1) / 2;
        prop_assert_eq!(h.n_terms(), 3 * n * n_edges);
        prop_assert!(h.terms().iter().all(|t| t.pauli.n_sites() == n));
        prop_assert!(h.terms().iter().all(|t| t.coeff.is_finite()));
    }
}
