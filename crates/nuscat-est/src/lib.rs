//! `nuscat-est` — resource-estimator boundary contract.
//!
//! The construction pipeline in `nuscat-ham` ends at a handoff: the
//! Hamiltonian term sequence, a request describing the run, and a
//! metadata record are passed to a Trotter resource estimator. The
//! estimation algorithm itself (and the qubit-operator representation it
//! consumes) live outside this repository; this crate defines the
//! contract that boundary must satisfy:
//!
//! - [`TrotterEstimator`] — the estimator trait. Implementations convert
//!   the term sequence to whatever internal operator object they need.
//! - [`EstimateRequest`] / [`TrotterMetadata`] — the handoff data model.
//! - [`EstimatorRegistry`] — name-to-factory registry through which
//!   external estimator crates make themselves available.
//! - [`DryRunEstimator`] — a built-in sink that logs the handoff and
//!   estimates nothing, so the pipeline runs end to end without an
//!   external estimator linked in.

pub mod dry_run;
pub mod error;
pub mod estimator;
pub mod metadata;
pub mod registry;

pub use dry_run::{DRY_RUN, DryRunEstimator};
pub use error::{EstError, EstResult};
pub use estimator::{EstimateRequest, TrotterEstimator};
pub use metadata::TrotterMetadata;
pub use registry::EstimatorRegistry;
