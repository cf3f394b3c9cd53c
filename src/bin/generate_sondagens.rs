//! Command-line site plan generator.
//!
//! Reads borehole groups from a JSON file and writes the generated DXF:
//!
//! ```text
//! generate_sondagens input.json output.dxf
//! ```

use std::fs;
use std::process;

use anyhow::{Context, Result};

use sondagens_dxf::{generate_boreholes_dxf, BoreholeGroup};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <input.json> <output.dxf>", args[0]);
        process::exit(2);
    }

    if let Err(err) = run(&args[1], &args[2]) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run(input_path: &str, output_path: &str) -> Result<()> {
    let json = fs::read_to_string(input_path)
        .with_context(|| format!("reading {}", input_path))?;
    let groups: Vec<BoreholeGroup> =
        serde_json::from_str(&json).with_context(|| format!("parsing {}", input_path))?;

    let dxf = generate_boreholes_dxf(&groups).context("generating drawing")?;

    fs::write(output_path, dxf).with_context(|| format!("writing {}", output_path))?;

    let total: usize = groups.iter().map(|g| g.boreholes.len()).sum();
    println!(
        "Wrote {} ({} groups, {} boreholes)",
        output_path,
        groups.len(),
        total
    );
    Ok(())
}
