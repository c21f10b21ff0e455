//! Estimate command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use tracing::debug;

use nuscat_est::{DRY_RUN, EstimateRequest, EstimatorRegistry, TrotterMetadata};
use nuscat_ham::generate_forward_scattering;

/// Execute the estimate command: construct the Hamiltonian and hand it
/// across the estimator boundary.
pub fn execute(
    n_neutrinos: usize,
    trotter_steps: Option<usize>,
    directory: &Path,
    site_inter: f64,
    energy_precision: f64,
    trotter_order: usize,
    extrapolate: bool,
) -> Result<()> {
    println!(
        "{} Generating forward-scattering Hamiltonian for {} neutrinos",
        style("→").cyan().bold(),
        style(n_neutrinos).green()
    );

    let hamiltonian = generate_forward_scattering(n_neutrinos, site_inter)
        .context("Hamiltonian construction failed")?;
    println!(
        "  Terms: {} across {} sites",
        hamiltonian.n_terms(),
        hamiltonian.n_sites()
    );

    let evolution_time = (n_neutrinos as f64).sqrt();
    let name = hamiltonian_name(n_neutrinos, trotter_steps);

    let request = EstimateRequest {
        evolution_time,
        energy_precision,
        outdir: directory.to_path_buf(),
        hamiltonian_name: name.clone(),
        nsteps: trotter_steps,
        trotter_order,
        use_analytical: true,
    };
    let metadata = TrotterMetadata::for_run(n_neutrinos, &request, extrapolate);
    debug!(run_id = metadata.id, name = %name, evolution_time, "prepared estimation handoff");

    let registry = EstimatorRegistry::with_builtins();
    let estimator = registry.create(DRY_RUN)?;
    estimator
        .estimate(&hamiltonian, &request, &metadata)
        .with_context(|| format!("Estimator '{}' failed", estimator.name()))?;

    println!(
        "{} Handed '{}' to estimator '{}'",
        style("✓").green().bold(),
        style(&name).green(),
        estimator.name()
    );

    Ok(())
}

/// Artifact label: `{steps}_step_fs_{n}` when the step count is fixed,
/// `estimated_fs_{n}` when the estimator chooses.
fn hamiltonian_name(n_neutrinos: usize, trotter_steps: Option<usize>) -> String {
    match trotter_steps {
        Some(steps) => format!("{steps}_step_fs_{n_neutrinos}"),
        None => format!("estimated_fs_{n_neutrinos}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_hamiltonian_name() {
        assert_eq!(hamiltonian_name(100, None), "estimated_fs_100");
        assert_eq!(hamiltonian_name(100, Some(10)), "10_step_fs_100");
    }

    #[test]
    fn test_execute_hands_off_end_to_end() {
        // Dry-run estimator: the whole delegation path runs without an
        // external estimator linked in.
        let result = execute(3, Some(5), &PathBuf::from("."), 0.0, 1e-3, 2, false);
        assert!(result.is_ok());
    }
}
