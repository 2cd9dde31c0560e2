mod kinematics;

use anyhow::{bail, Context, Result};
use clap::Parser;
use kinematics::Kinematics;
use linear_math::{vector_from_components, Components, Vector2D};
use tracing::debug;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Advance a point by one step and print the vectors involved
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Initial position, as a RON mapping with `x` and `y` keys
    #[arg(long, default_value = "(x: 2.0, y: 3.0)")]
    position: String,

    /// Initial velocity
    #[arg(
        long,
        num_args = 2,
        value_names = ["X", "Y"],
        default_values_t = [0.0, 0.0],
        allow_negative_numbers = true
    )]
    velocity: Vec<f64>,

    /// Constant acceleration
    #[arg(
        long,
        num_args = 2,
        value_names = ["X", "Y"],
        default_values_t = [0.1, 0.0],
        allow_negative_numbers = true
    )]
    acceleration: Vec<f64>,
}

impl Args {
    fn kinematics(&self) -> Result<Kinematics> {
        let position: Components = ron::from_str(&self.position)
            .with_context(|| format!("Invalid position {:?}", self.position))?;

        Ok(Kinematics {
            position: vector_from_components(position),
            velocity: pair(&self.velocity).context("Invalid velocity")?,
            acceleration: pair(&self.acceleration).context("Invalid acceleration")?,
        })
    }
}

fn pair(values: &[f64]) -> Result<Vector2D> {
    match values {
        &[x, y] => Ok(Vector2D::new(x, y)),
        _ => bail!("expected 2 components, got {}", values.len()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    debug!("Parsed arguments: {args:?}");

    for (label, value) in args.kinematics()?.step() {
        println!("{label:12} => {value}");
    }

    Ok(())
}
