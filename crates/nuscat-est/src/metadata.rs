//! Run metadata handed to the estimator.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::estimator::EstimateRequest;

/// Metadata record describing one resource-estimation run.
///
/// Travels with the Hamiltonian across the estimator boundary and labels
/// whatever artifacts the estimator produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrotterMetadata {
    /// Time-based run identifier: nanoseconds since the Unix epoch.
    pub id: i64,
    /// Hamiltonian name, e.g. `estimated_fs_100`.
    pub name: String,
    /// Workload category.
    pub category: String,
    /// Human-readable size descriptor, e.g. `Neutrino Count: 100`.
    pub size: String,
    /// Task label.
    pub task: String,
    /// Total evolution time t.
    pub evolution_time: f64,
    /// Trotter order.
    pub trotter_order: usize,
    /// Fixed Trotter step count; `None` lets the estimator choose.
    pub nsteps: Option<usize>,
    /// Acceptable shift in state energy.
    pub energy_precision: f64,
    /// Whether the estimate should be extrapolated.
    pub is_extrapolated: bool,
}

impl TrotterMetadata {
    /// Build the metadata record for a forward-scattering run, stamping a
    /// fresh time-based id.
    pub fn for_run(n_neutrinos: usize, request: &EstimateRequest, is_extrapolated: bool) -> Self {
        Self {
            // timestamp_nanos_opt overflows in 2262; fall back to 0 then.
            id: Utc::now().timestamp_nanos_opt().unwrap_or_default(),
            name: request.hamiltonian_name.clone(),
            category: "scientific".to_string(),
            size: format!("Neutrino Count: {n_neutrinos}"),
            task: "Time-Dependent Dynamics".to_string(),
            evolution_time: request.evolution_time,
            trotter_order: request.trotter_order,
            nsteps: request.nsteps,
            energy_precision: request.energy_precision,
            is_extrapolated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn request() -> EstimateRequest {
        EstimateRequest {
            evolution_time: 10.0,
            energy_precision: 1e-3,
            outdir: PathBuf::from("."),
            hamiltonian_name: "estimated_fs_100".to_string(),
            nsteps: None,
            trotter_order: 2,
            use_analytical: true,
        }
    }

    #[test]
    fn test_for_run_fields() {
        let md = TrotterMetadata::for_run(100, &request(), false);
        assert!(md.id > 0);
        assert_eq!(md.name, "estimated_fs_100");
        assert_eq!(md.category, "scientific");
        assert_eq!(md.size, "Neutrino Count: 100");
        assert_eq!(md.task, "Time-Dependent Dynamics");
        assert_eq!(md.nsteps, None);
        assert!(!md.is_extrapolated);
    }

    #[test]
    fn test_ids_are_time_ordered() {
        let a = TrotterMetadata::for_run(2, &request(), false);
        let b = TrotterMetadata::for_run(2, &request(), false);
        assert!(b.id >= a.id);
    }

    #[test]
    fn test_metadata_serializes() {
        let md = TrotterMetadata::for_run(5, &request(), true);
        let json = serde_json::to_value(&md).unwrap();
        assert_eq!(json["size"], "Neutrino Count: 5");
        assert_eq!(json["is_extrapolated"], true);
    }
}
