//! Driver binary: scan the variational parameter, then locate its optimum.
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]
//!
//! Runs an alpha scan over a grid (printing energy ± stderr per point), then a
//! golden-section search for the precise optimum, and optionally writes the
//! local-energy trace at the optimal alpha as CSV.

use std::path::{Path, PathBuf};

use clap::Parser;

use harmonic_vmc::{
    estimate_energy, golden_section_search, read_config, OptimizeConfig, SimulationConfig,
    SystemConfig, VmcParams, VmcResults,
};

#[derive(Parser, Debug)]
#[command(version, about = "Variational Monte Carlo for interacting particles in a harmonic trap")]
struct Args {
    /// YAML config file; overrides the system/sampling flags below
    #[arg(short, long)]
    config: Option<String>,

    /// Number of particles
    #[arg(short = 'n', long, default_value_t = 4)]
    particles: usize,

    /// Number of spatial dimensions
    #[arg(short = 'd', long, default_value_t = 3)]
    dimensions: usize,

    /// Comma-separated trap frequencies, one per dimension (default: 1,2,...,d)
    #[arg(long)]
    omegas: Option<String>,

    /// Gaussian pair-interaction strength g
    #[arg(short = 'g', long, default_value_t = 3.0)]
    interaction: f64,

    /// Metropolis steps per campaign
    #[arg(short = 's', long, default_value_t = 200_000)]
    steps: usize,

    /// Steps between retained energy samples
    #[arg(long, default_value_t = 100)]
    thinning: usize,

    /// Half-width of the uniform proposal box
    #[arg(long, default_value_t = 0.8)]
    step_width: f64,

    /// Random seed (each campaign reuses it for reproducibility)
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Alpha scan grid start
    #[arg(long, default_value_t = 0.5)]
    scan_start: f64,

    /// Alpha scan grid stop (exclusive)
    #[arg(long, default_value_t = 1.15)]
    scan_stop: f64,

    /// Alpha scan grid spacing
    #[arg(long, default_value_t = 0.05)]
    scan_step: f64,

    /// Lower bound of the golden-section bracket
    #[arg(long, default_value_t = 0.5)]
    alpha_lower: f64,

    /// Upper bound of the golden-section bracket
    #[arg(long, default_value_t = 1.1)]
    alpha_upper: f64,

    /// Bracket-width tolerance for the golden-section search
    #[arg(long, default_value_t = 1e-3)]
    tolerance: f64,

    /// Write the local-energy trace at the optimal alpha as CSV
    #[arg(long)]
    trace_csv: Option<PathBuf>,
}

fn parse_omegas(s: &str) -> Result<Vec<f64>, String> {
    let values: Result<Vec<f64>, _> = s
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect();
    let values = values.map_err(|e| format!("invalid trap frequency list '{s}': {e}"))?;
    if values.is_empty() {
        return Err(format!("trap frequency list '{s}' was empty"));
    }
    Ok(values)
}

fn build_config(args: &Args) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    if let Some(path) = &args.config {
        return Ok(read_config(path)?);
    }

    let omegas = match args.omegas.as_deref() {
        Some(s) => parse_omegas(s)?,
        // Default frequencies 1, 2, ..., d, one per dimension.
        None => (1..=args.dimensions).map(|d| d as f64).collect(),
    };

    Ok(SimulationConfig {
        system: SystemConfig {
            particles: args.particles,
            dimensions: args.dimensions,
            omegas,
            interaction: args.interaction,
        },
        sampling: VmcParams {
            n_steps: args.steps,
            thinning: args.thinning,
            step_width: args.step_width,
            seed: args.seed,
        },
        optimize: Some(OptimizeConfig {
            lower: args.alpha_lower,
            upper: args.alpha_upper,
            tolerance: args.tolerance,
        }),
    })
}

fn run_campaign(config: &SimulationConfig, alpha: f64) -> Result<VmcResults, harmonic_vmc::VmcError> {
    let system = config.system.build(alpha)?;
    estimate_energy(system, config.sampling)
}

fn write_trace_csv(path: &Path, samples: &[f64]) -> std::io::Result<()> {
    let mut csv = String::from("sample,energy\n");
    for (i, e) in samples.iter().enumerate() {
        csv.push_str(&format!("{i},{e:.8}\n"));
    }
    std::fs::write(path, csv)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(args)?;

    println!("VMC for {} particles in {} dimensions", config.system.particles, config.system.dimensions);
    println!(
        "omegas = {:?}, g = {}, {} steps, thinning {}, seed {}",
        config.system.omegas,
        config.system.interaction,
        config.sampling.n_steps,
        config.sampling.thinning,
        config.sampling.seed,
    );
    println!();

    // Alpha scan over the grid
    println!("Scanning alpha grid...");
    let mut alpha = args.scan_start;
    while alpha < args.scan_stop {
        let results = run_campaign(&config, alpha)?;
        println!(
            "Alpha: {:.2}, Energy: {:.5} +/- {:.5}",
            alpha, results.energy, results.error
        );
        alpha += args.scan_step;
    }

    // Precise optimum via golden-section search
    let opt = config.optimize.unwrap_or(OptimizeConfig {
        lower: args.alpha_lower,
        upper: args.alpha_upper,
        tolerance: args.tolerance,
    });
    println!();
    println!("Searching for the optimal alpha (golden-section search)...");
    let result = golden_section_search(
        |alpha| run_campaign(&config, alpha).map(|r| r.energy),
        opt.lower,
        opt.upper,
        opt.tolerance,
    )?;

    println!();
    println!("Optimal alpha:  {:.5}", result.alpha);
    println!("Minimum energy: {:.5}", result.energy);
    println!("Objective evaluations: {}", result.evaluations);

    if let Some(path) = &args.trace_csv {
        let results = run_campaign(&config, result.alpha)?;
        write_trace_csv(path, &results.samples)?;
        println!(
            "Wrote {} local-energy samples (acceptance {:.1}%) to {}",
            results.samples.len(),
            100.0 * results.acceptance_rate,
            path.display()
        );
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
