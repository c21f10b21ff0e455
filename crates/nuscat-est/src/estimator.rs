//! Estimator trait and handoff request.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use nuscat_ham::Hamiltonian;

use crate::error::EstResult;
use crate::metadata::TrotterMetadata;

/// Parameters for one estimation handoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Total evolution time t.
    pub evolution_time: f64,
    /// Acceptable shift in state energy.
    pub energy_precision: f64,
    /// Directory for estimation artifacts.
    pub outdir: PathBuf,
    /// Name used to label artifacts, e.g. `10_step_fs_100`.
    pub hamiltonian_name: String,
    /// Fixed Trotter step count; `None` lets the estimator choose.
    pub nsteps: Option<usize>,
    /// Trotter order.
    pub trotter_order: usize,
    /// Prefer the analytical error bound over empirical sampling.
    pub use_analytical: bool,
}

/// Trait for Trotter resource estimators.
///
/// The construction pipeline hands the Hamiltonian term sequence across
/// this boundary by reference; implementations build whatever internal
/// qubit-operator representation they consume. The trait is synchronous:
/// the whole pipeline runs to completion on one thread with no
/// suspension points.
///
/// # Contract
///
/// - `estimate()` MUST NOT mutate the Hamiltonian (it is shared).
/// - Implementations own all persistence of their results; the core
///   produces no artifacts of its own.
/// - Failures surface as [`EstError`](crate::EstError); the core neither
///   retries nor recovers them.
pub trait TrotterEstimator: Send + Sync {
    /// Name of this estimator.
    fn name(&self) -> &str;

    /// Predict the cost of simulating `exp(-i H t)` for the given run.
    fn estimate(
        &self,
        hamiltonian: &Hamiltonian,
        request: &EstimateRequest,
        metadata: &TrotterMetadata,
    ) -> EstResult<()>;
}
