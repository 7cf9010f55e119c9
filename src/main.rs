//! SOFC Polarization - entry point
//!
//! Computes the steady-state operating voltage of a methane/oxygen
//! solid-oxide fuel cell at the requested current densities.
//!
//! CLI Usage:
//!   cargo run                        # Evaluate the default points 1.0 and 2.5 A/cm2
//!   cargo run -- 0.5 1.0 1.5 2.0     # Evaluate specific current densities
//!   cargo run -- --csv --json 1.0    # Also export the curve under exports/

use anyhow::Result;
use sofc_polarization::export::{export_curve_json, write_curve_csv};
use sofc_polarization::{OperatingPoint, Parameters, PolarizationSolver};

struct CliOptions {
    current_densities_A_per_cm2: Vec<f64>,
    params_dir: Option<String>,
    export_csv: bool,
    export_json: bool,
}

/// Parse CLI arguments
fn parse_args() -> CliOptions {
    let args: Vec<String> = std::env::args().collect();
    let mut options = CliOptions {
        current_densities_A_per_cm2: Vec::new(),
        params_dir: None,
        export_csv: false,
        export_json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--csv" => options.export_csv = true,
            "--json" => options.export_json = true,
            "--params" | "-p" => {
                i += 1;
                if i < args.len() {
                    options.params_dir = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!("SOFC Polarization");
                println!();
                println!("Usage: sofc-polarization [OPTIONS] [CURRENT_DENSITIES...]");
                println!();
                println!("Arguments:");
                println!("  CURRENT_DENSITIES  Current densities in A/cm2 (default: 1.0 2.5)");
                println!();
                println!("Options:");
                println!("  --csv              Export the curve as CSV under exports/");
                println!("  --json             Export the curve as JSON under exports/");
                println!("  -p, --params DIR   Load parameter JSON files from DIR");
                println!("  --help, -h         Show this help");
                std::process::exit(0);
            }
            other => match other.parse::<f64>() {
                Ok(value) => options.current_densities_A_per_cm2.push(value),
                Err(_) => log::warn!("Ignoring unrecognized argument {:?}", other),
            },
        }
        i += 1;
    }

    if options.current_densities_A_per_cm2.is_empty() {
        options.current_densities_A_per_cm2 = vec![1.0, 2.5];
    }

    options
}

fn main() -> Result<()> {
    env_logger::init();

    let options = parse_args();

    let params = match &options.params_dir {
        Some(dir) => Parameters::load_from_dir(dir),
        None => Parameters::load_or_default(),
    };

    let solver = PolarizationSolver::from_parameters(&params)?;
    solver.print_summary();
    println!();

    // Each point is independent: report failures individually and
    // keep evaluating the rest of the sequence.
    let mut curve: Vec<OperatingPoint> = Vec::new();
    for result in solver.sweep(&options.current_densities_A_per_cm2) {
        match result {
            Ok(point) => {
                println!(
                    "i = {:.4} A/cm2  ->  V = {:.4} V  (activation {:.4} V, diffusion {:.4} V, ohmic {:.4} V)",
                    point.current_density_A_per_cm2,
                    point.voltage_V,
                    point.activation_cathode_V + point.activation_anode_V,
                    point.diffusion_cathode_V + point.diffusion_anode_V,
                    point.ohmic_V,
                );
                curve.push(point);
            }
            Err(e) => {
                log::error!("Skipping operating point: {}", e);
                println!("i = <invalid>  ->  {}", e);
            }
        }
    }

    if options.export_csv && !curve.is_empty() {
        let path = write_curve_csv(&curve)?;
        println!("\nCSV written to {}", path.display());
    }
    if options.export_json && !curve.is_empty() {
        let path = export_curve_json(&params, &curve)?;
        println!("JSON written to {}", path.display());
    }

    Ok(())
}
