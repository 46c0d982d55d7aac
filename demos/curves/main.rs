//! Curves demo: builds a collection of curves, prints their points and
//! derivatives at `t = PI/4`, then the sorted circle radii and their sum.
//!
//! Usage:
//! ```text
//! cargo run --example curves                   # random, seeded from the clock
//! cargo run --example curves -- --seed 42      # random, fixed seed
//! cargo run --example curves -- curves.txt     # one spec per line, e.g. "ellipse 2 5"
//! ```

use std::error::Error;
use std::f64::consts::FRAC_PI_4;
use std::time::{SystemTime, UNIX_EPOCH};

use geocurves::generate::{GeneratorConfig, RandomSpecs, SpecSource, TextSpecs};
use geocurves::geometry::{CurveKind, CurveSpec};
use geocurves::math::Coordinates;
use geocurves::operations::{RadiusReport, SampleCurves};
use geocurves::store::CurveStore;

fn load_specs(args: &[String]) -> Result<Vec<CurveSpec>, Box<dyn Error>> {
    match args {
        [flag, seed] if flag == "--seed" => {
            let seed = seed.parse()?;
            Ok(RandomSpecs::new(GeneratorConfig::default(), seed).specs()?)
        }
        [path] => {
            let text = std::fs::read_to_string(path)?;
            Ok(TextSpecs::new(&text).specs()?)
        }
        [] => {
            let seed = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
            tracing::info!(seed, "seeding curve generator from the clock");
            Ok(RandomSpecs::new(GeneratorConfig::default(), seed).specs()?)
        }
        _ => Err("usage: curves [--seed N | FILE]".into()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for geocurves and this demo.
    // Override with RUST_LOG (e.g. RUST_LOG=geocurves=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("curves=info".parse().unwrap_or_default())
        .add_directive("geocurves=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let specs = load_specs(&args)?;
    let store = CurveStore::from_specs(&specs);
    tracing::info!(curves = store.len(), "curve store ready");

    for sample in SampleCurves::new(FRAC_PI_4).execute(&store, store.ids())? {
        let curve = store.curve(sample.id)?;
        let (x, y, z) = sample.position.coordinates();
        let (dx, dy, dz) = sample.derivative.coordinates();
        println!("{curve:?}");
        println!("  point at t=PI/4:      ({x:.4} ; {y:.4} ; {z:.4})");
        println!("  derivative at t=PI/4: ({dx:.4} ; {dy:.4} ; {dz:.4})");
    }

    let report = RadiusReport::new(CurveKind::Circle).execute(&store, store.ids())?;
    let radii: Vec<String> = report.radii.iter().map(ToString::to_string).collect();
    println!("Circle radii: {}", radii.join(" "));
    println!("Total sum of radii: {}", report.total);
    Ok(())
}
