mod error;
mod logging;
mod server;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use ltesim_core::{
    NoiseKind, Simulation, SimulationConfig, DEFAULT_NUM_BITS, DEFAULT_PORT, DEFAULT_SNR_DB,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "ltesim")]
#[command(about = "BPSK/OFDM transmission over a simulated Rayleigh fading channel")]
struct Cli {
    /// Log intermediate sequences (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct SimArgs {
    /// Number of random bits to transmit
    #[arg(short, long, default_value_t = DEFAULT_NUM_BITS)]
    bits: usize,

    /// Seed for the bit, fading and noise generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Use complex Gaussian noise instead of the default uniform noise
    #[arg(long)]
    gaussian_noise: bool,
}

impl SimArgs {
    fn config(&self, snr_db: f64) -> SimulationConfig {
        SimulationConfig {
            num_bits: self.bits,
            snr_db,
            seed: self.seed,
            noise_kind: if self.gaussian_noise {
                NoiseKind::Gaussian
            } else {
                NoiseKind::Uniform
            },
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation and print the bit match ratio
    Run {
        #[command(flatten)]
        sim: SimArgs,

        /// Target SNR in dB
        #[arg(short, long, default_value_t = DEFAULT_SNR_DB, allow_negative_numbers = true)]
        snr: f64,
    },

    /// Run one independent simulation per SNR value in a range
    Sweep {
        #[command(flatten)]
        sim: SimArgs,

        /// First SNR in dB
        #[arg(long, allow_negative_numbers = true)]
        snr_start: f64,

        /// Last SNR in dB (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        snr_stop: f64,

        /// SNR increment in dB
        #[arg(long, default_value = "5.0")]
        snr_step: f64,
    },

    /// Run one simulation and serve the result arrays over HTTP
    Serve {
        #[command(flatten)]
        sim: SimArgs,

        /// Target SNR in dB
        #[arg(short, long, default_value_t = DEFAULT_SNR_DB, allow_negative_numbers = true)]
        snr: f64,

        /// Listen address
        #[arg(long, default_value_t = SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)))]
        addr: SocketAddr,

        /// Directory served for every non-API path
        #[arg(long, default_value = ".")]
        static_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Run { sim, snr } => run_command(&sim.config(snr))?,
        Commands::Sweep { sim, snr_start, snr_stop, snr_step } => {
            sweep_command(&sim, snr_start, snr_stop, snr_step)?
        }
        Commands::Serve { sim, snr, addr, static_dir } => {
            serve_command(&sim.config(snr), addr, static_dir).await?
        }
    }

    Ok(())
}

fn run_command(config: &SimulationConfig) -> Result<(), CliError> {
    info!(
        "Simulating {} bits at {} dB SNR ({:?} noise)",
        config.num_bits, config.snr_db, config.noise_kind
    );

    let report = Simulation::from_config(config).run(config)?;

    println!(
        "Bit errors: {} of {}",
        report.bit_errors()?,
        report.original_bits.len()
    );
    println!("Bit match ratio: {:.6}", report.match_ratio);
    Ok(())
}

fn sweep_command(sim: &SimArgs, start: f64, stop: f64, step: f64) -> Result<(), CliError> {
    let snrs = snr_range(start, stop, step)?;
    let config = sim.config(start);

    info!("Sweeping {} SNR values with {} bits each", snrs.len(), config.num_bits);

    let reports = Simulation::from_config(&config).sweep(&config, &snrs)?;
    for report in reports {
        println!(
            "SNR {:>8.2} dB: bit match ratio {:.6} ({} errors)",
            report.snr_db,
            report.match_ratio,
            report.bit_errors()?
        );
    }
    Ok(())
}

async fn serve_command(config: &SimulationConfig, addr: SocketAddr, static_dir: PathBuf) -> Result<(), CliError> {
    let report = Simulation::from_config(config).run(config)?;
    info!("Bit match ratio: {:.6}", report.match_ratio);

    let app = server::router(Arc::new(report), Some(static_dir));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Serving results on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

// Upper bound on the number of runs a single sweep may request
const MAX_SWEEP_POINTS: usize = 10_000;

/// Inclusive range `start..=stop` in increments of `step`
fn snr_range(start: f64, stop: f64, step: f64) -> Result<Vec<f64>, CliError> {
    if !start.is_finite() || !stop.is_finite() {
        return Err(CliError::InvalidArgument(format!(
            "SNR bounds must be finite, got {} and {}",
            start, stop
        )));
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "SNR step must be a positive number, got {}",
            step
        )));
    }
    if stop < start {
        return Err(CliError::InvalidArgument(format!(
            "SNR stop ({}) is below start ({})",
            stop, start
        )));
    }

    // Small slack so a stop value reached by accumulated steps is included
    let intervals = ((stop - start) / step + 1e-9).floor();
    if !intervals.is_finite() || intervals >= MAX_SWEEP_POINTS as f64 {
        return Err(CliError::InvalidArgument(format!(
            "SNR sweep from {} to {} in steps of {} exceeds {} points",
            start, stop, step, MAX_SWEEP_POINTS
        )));
    }

    let count = intervals as usize + 1;
    Ok((0..count).map(|i| start + i as f64 * step).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snr_range_inclusive() {
        assert_eq!(snr_range(0.0, 20.0, 5.0).unwrap(), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
        assert_eq!(snr_range(-10.0, -10.0, 1.0).unwrap(), vec![-10.0]);
        assert_eq!(snr_range(0.0, 1.0, 0.3).unwrap().len(), 4);
    }

    #[test]
    fn test_snr_range_rejects_bad_step() {
        assert!(snr_range(0.0, 10.0, 0.0).is_err());
        assert!(snr_range(0.0, 10.0, -1.0).is_err());
        assert!(snr_range(0.0, 10.0, f64::NAN).is_err());
        assert!(snr_range(10.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_snr_range_rejects_bad_bounds() {
        assert!(snr_range(f64::NAN, 10.0, 1.0).is_err());
        assert!(snr_range(0.0, f64::NAN, 1.0).is_err());
        assert!(snr_range(f64::NEG_INFINITY, 0.0, 1.0).is_err());
        assert!(snr_range(0.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_snr_range_rejects_oversized_sweep() {
        assert!(snr_range(0.0, 1e300, 1e-300).is_err());
        assert!(snr_range(0.0, 1e18, 1.0).is_err());
        assert!(snr_range(0.0, MAX_SWEEP_POINTS as f64, 1.0).is_err());
        assert_eq!(
            snr_range(0.0, (MAX_SWEEP_POINTS - 1) as f64, 1.0).unwrap().len(),
            MAX_SWEEP_POINTS
        );
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["ltesim", "run"]).unwrap();
        match cli.command {
            Commands::Run { sim, snr } => {
                assert_eq!(sim.bits, 1000);
                assert_eq!(snr, 20.0);
                assert_eq!(sim.seed, None);
                assert!(!sim.gaussian_noise);
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_negative_snr_accepted() {
        let cli = Cli::try_parse_from(["ltesim", "run", "--snr", "-5", "--seed", "3"]).unwrap();
        match cli.command {
            Commands::Run { sim, snr } => {
                assert_eq!(snr, -5.0);
                assert_eq!(sim.config(snr).seed, Some(3));
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_serve_default_addr() {
        let cli = Cli::try_parse_from(["ltesim", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { addr, static_dir, .. } => {
                assert_eq!(addr.port(), 8080);
                assert_eq!(static_dir, PathBuf::from("."));
            }
            _ => panic!("expected serve command"),
        }
    }
}
