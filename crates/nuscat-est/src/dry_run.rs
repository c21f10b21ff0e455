//! A logging stand-in for an external estimator.

use tracing::info;

use nuscat_ham::Hamiltonian;

use crate::error::EstResult;
use crate::estimator::{EstimateRequest, TrotterEstimator};
use crate::metadata::TrotterMetadata;

/// Registry name of the built-in dry-run estimator.
pub const DRY_RUN: &str = "dry-run";

/// Estimator that logs the handoff and produces no estimate.
///
/// Lets the pipeline run end to end when no external estimator is linked
/// in; the handoff contents are visible at info level.
#[derive(Debug, Default)]
pub struct DryRunEstimator;

impl TrotterEstimator for DryRunEstimator {
    fn name(&self) -> &str {
        DRY_RUN
    }

    fn estimate(
        &self,
        hamiltonian: &Hamiltonian,
        request: &EstimateRequest,
        metadata: &TrotterMetadata,
    ) -> EstResult<()> {
        info!(
            run_id = metadata.id,
            name = %request.hamiltonian_name,
            n_terms = hamiltonian.n_terms(),
            n_sites = hamiltonian.n_sites(),
            lambda = hamiltonian.lambda(),
            evolution_time = request.evolution_time,
            energy_precision = request.energy_precision,
            trotter_order = request.trotter_order,
            nsteps = ?request.nsteps,
            is_extrapolated = metadata.is_extrapolated,
            outdir = %request.outdir.display(),
            "dry-run estimator received Hamiltonian handoff"
        );
        Ok(())
    }
}
