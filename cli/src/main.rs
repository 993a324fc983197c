mod config;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, Context, Result};
use tracing_subscriber::EnvFilter;
use vrn_core::{checksum, series::GridSpec};

use crate::config::GridConfig;
use crate::output::{render_grid, ComputedVrn, OutputFormat};

#[derive(Parser)]
#[command(name = "vrn", version, about = "Vehicle registration number check letters")]
struct Cli {
    /// more log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// computes the check letter of each VRN
    Compute {
        /// VRNs without check letter, e.g. SKA1
        #[arg(required = true, value_name = "VRN")]
        vrns: Vec<String>,

        /// prints a json array instead of tab separated lines
        #[arg(long)]
        json: bool,
    },

    /// verifies the trailing check letter of each plate
    Verify {
        /// full plates including check letter, e.g. SKA1L
        #[arg(required = true, value_name = "PLATE")]
        plates: Vec<String>,
    },

    /// prints check letters for series crossed with numbers
    Grid {
        /// toml file with optional `series` and `numbers` lists
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_compute(vrns: &[String], json: bool) -> Result<()> {
    let computed = vrns
        .iter()
        .map(|vrn| -> Result<ComputedVrn> {
            let check = checksum::compute_checksum(vrn)?;
            Ok(ComputedVrn {
                vrn: vrn.clone(),
                checksum: check,
                plate: format!("{vrn}{check}"),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if json {
        let text = serde_json::to_string_pretty(&computed)
            .wrap_err("serializing checksums to json")?;
        println!("{}", text);
    } else {
        for c in &computed {
            println!("{}\t{}", c.vrn, c.checksum);
        }
    }

    Ok(())
}

fn handle_verify(plates: &[String]) -> Result<()> {
    let mut failed = 0usize;

    for plate in plates {
        let check = checksum::check_plate(plate)?;

        if check.is_valid() {
            println!("{}\tok", plate);
        } else {
            tracing::info!(
                plate = %plate,
                expected = %check.expected,
                found = %check.found,
                "check letter mismatch"
            );
            println!("{}\tmismatch (expected {})", plate, check.expected);
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{} of {} plate(s) failed verification", failed, plates.len());
    }
    Ok(())
}

fn handle_grid(config: Option<&PathBuf>, format: OutputFormat) -> Result<()> {
    let config = match config {
        Some(path) => GridConfig::load(path)?,
        None => GridConfig::default(),
    };
    let spec: GridSpec = config.try_into().wrap_err("grid config")?;

    tracing::info!(
        series = spec.series.len(),
        numbers = spec.numbers.len(),
        "building series grid"
    );

    let grid = spec.build()?;
    println!("{}", render_grid(&grid, format)?);
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Compute { vrns, json } => handle_compute(vrns, *json),
        Commands::Verify { plates } => handle_verify(plates),
        Commands::Grid { config, format } => handle_grid(config.as_ref(), *format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_all_valid() {
        assert!(handle_verify(&["SKA1L".into(), "skb1g".into()]).is_ok());
    }

    #[test]
    fn test_verify_fails_on_mismatch() {
        let err = handle_verify(&["SKA1L".into(), "SKA1M".into()]).unwrap_err();
        assert!(err.to_string().contains("1 of 2"), "unexpected error: {err}");
    }

    #[test]
    fn test_verify_fails_without_check_letter() {
        assert!(handle_verify(&["SKA1".into()]).is_err());
    }

    #[test]
    fn test_compute() {
        assert!(handle_compute(&["SKA1".into(), "SKB1".into()], false).is_ok());
        assert!(handle_compute(&["SKA1".into()], true).is_ok());
    }

    #[test]
    fn test_compute_fails_on_malformed_vrn() {
        assert!(handle_compute(&["SKA1".into(), "AB".into()], false).is_err());
        assert!(handle_compute(&["1234".into()], true).is_err());
    }

    #[test]
    fn test_grid_defaults() {
        assert!(handle_grid(None, OutputFormat::Csv).is_ok());
    }

    #[test]
    fn test_grid_missing_config() {
        let path = PathBuf::from("does/not/exist/grid.toml");
        assert!(handle_grid(Some(&path), OutputFormat::Table).is_err());
    }
}
