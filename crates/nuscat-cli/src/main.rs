//! nuscat Command-Line Interface
//!
//! Generates the forward-scattering neutrino Hamiltonian and hands it to
//! a Trotter resource estimator. The binary only parses arguments and
//! delegates: construction lives in `nuscat-ham`, the estimator boundary
//! in `nuscat-est`.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

/// nuscat - forward-scattering neutrino resource estimate generator
#[derive(Parser)]
#[command(name = "nuscat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of neutrinos in the forward scattering model
    #[arg(short = 'N', long)]
    n_neutrinos: usize,

    /// Number of trotter steps; omitted, the estimator chooses
    #[arg(short = 'T', long)]
    trotter_steps: Option<usize>,

    /// Output file directory
    #[arg(short = 'D', long, default_value = ".")]
    directory: PathBuf,

    /// Site interaction terms
    #[arg(short = 'S', long, default_value_t = 0.0)]
    site_inter: f64,

    /// Acceptable shift in state energy
    #[arg(short = 'P', long)]
    energy_precision: f64,

    /// Specify the trotter order used
    #[arg(short = 'O', long, default_value_t = 2)]
    trotter_order: usize,

    /// Request an extrapolated estimate
    #[arg(short = 'X', long)]
    extrapolate: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let result = commands::estimate::execute(
        cli.n_neutrinos,
        cli.trotter_steps,
        &cli.directory,
        cli.site_inter,
        cli.energy_precision,
        cli.trotter_order,
        cli.extrapolate,
    );

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
