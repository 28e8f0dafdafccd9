use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use crystal_symmetry::config::SYMMETRY_TOLERANCE;
use crystal_symmetry::{SymmetryGroup, SymmetryResult};
use env_logger::Env;
use log::{debug, info, warn};
use nalgebra::Vector3;

#[derive(Parser)]
#[command(name = "crystal-symmetry")]
#[command(about = "Analyze sets of crystallographic symmetry operators")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long, global = true)]
    threads: Option<usize>,
}

#[derive(clap::Args)]
struct OperatorInput {
    /// Operators as algebraic triplets, e.g. "-x+1/2,-y,z+1/2"
    operators: Vec<String>,

    /// Read operators from a file (one per line, '#' starts a comment)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse operators and print them in canonical form
    Parse {
        #[command(flatten)]
        input: OperatorInput,
    },
    /// Report centering, closure and point-group operators
    Analyze {
        #[command(flatten)]
        input: OperatorInput,
    },
    /// Count operators that leave a point invariant
    Multiplicity {
        #[command(flatten)]
        input: OperatorInput,

        /// Fractional coordinates "x,y,z"
        #[arg(short, long)]
        point: String,

        /// Tolerance for the point-group count
        #[arg(short, long, default_value_t = SYMMETRY_TOLERANCE)]
        eps: f64,
    },
    /// Form the product of two operator sets
    Convolute {
        #[command(flatten)]
        input: OperatorInput,

        /// Second operator set, separated by ';' (e.g. "x,y,z;x+1/2,y+1/2,z")
        #[arg(short, long)]
        with: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!("Thread count {} specified but parallel feature not enabled. Ignoring.", threads);
        }
    }

    debug!("Starting crystal-symmetry v{}", crystal_symmetry::VERSION);

    match cli.command {
        Commands::Parse { input } => parse_operators(&load_group(&input)?),
        Commands::Analyze { input } => analyze_group(load_group(&input)?),
        Commands::Multiplicity { input, point, eps } => {
            report_multiplicity(&load_group(&input)?, &point, eps)
        }
        Commands::Convolute { input, with } => {
            let other = SymmetryGroup::from_xyz_strings(with.split(';').map(str::trim))?;
            convolute_groups(&load_group(&input)?, &other)
        }
    }
}

fn load_group(input: &OperatorInput) -> anyhow::Result<SymmetryGroup> {
    let mut operators = input.operators.clone();
    if let Some(path) = &input.file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read operators from {}", path.display()))?;
        operators.extend(read_operator_lines(&text));
    }
    if operators.is_empty() {
        bail!("No operators given; pass them as arguments or with --file");
    }
    let group = SymmetryGroup::from_xyz_strings(&operators)?;
    info!("Loaded {} operators", group.len());
    Ok(group)
}

fn read_operator_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_operators(group: &SymmetryGroup) -> anyhow::Result<()> {
    for (i, op) in group.iter().enumerate() {
        let m = op.matrix();
        let t = op.translation();
        println!("{:>3}  {}", i + 1, op);
        for row in 0..3 {
            println!(
                "       [{:>2} {:>2} {:>2}] {:>9.6}",
                m[(row, 0)],
                m[(row, 1)],
                m[(row, 2)],
                t[row]
            );
        }
    }
    Ok(())
}

fn analyze_group(mut group: SymmetryGroup) -> anyhow::Result<()> {
    let is_space_group = group.is_space_group()?;
    // is_group normalizes in place; the queries below see translations in [0, 1)
    let is_group = group.is_group()?;
    let centering = group.centering();
    let translations = group.pure_translations();
    let point_operators = group.non_translations();

    println!("Operators:        {}", group.len());
    println!("Centering:        {} ({:?})", centering, centering);
    println!("Closed (exact):   {}", is_group);
    println!("Space group:      {}", is_space_group);
    println!("Pure translations:");
    for t in &translations {
        println!("    {}", t);
    }
    println!("Operators without translation:");
    for op in &point_operators {
        println!("    {}", op);
    }
    if !is_space_group {
        warn!("Operator set is not closed modulo lattice translations");
    }
    Ok(())
}

fn report_multiplicity(group: &SymmetryGroup, point: &str, eps: f64) -> anyhow::Result<()> {
    let p = parse_point(point)?;
    println!("Point:                     ({}, {}, {})", p.x, p.y, p.z);
    println!("Point-group multiplicity:  {}", group.point_group_multiplicity(p, eps));
    println!("Space-group multiplicity:  {}", group.space_group_multiplicity(Some(p)));
    Ok(())
}

fn convolute_groups(group: &SymmetryGroup, other: &SymmetryGroup) -> anyhow::Result<()> {
    let product = group.convolute(other);
    info!("{} x {} operators -> {} products", group.len(), other.len(), product.len());
    for op in &product {
        println!("{}", op);
    }
    Ok(())
}

fn parse_point(text: &str) -> anyhow::Result<Vector3<f64>> {
    let coords = text
        .split(',')
        .map(|c| parse_coordinate(c.trim()))
        .collect::<SymmetryResult<Vec<f64>>>()?;
    if coords.len() != 3 {
        bail!("Expected three coordinates in '{}', found {}", text, coords.len());
    }
    Ok(Vector3::new(coords[0], coords[1], coords[2]))
}

// Coordinates accept the same constants as operator strings (e.g. "1/3")
fn parse_coordinate(text: &str) -> SymmetryResult<f64> {
    let (coefficients, constant) = crystal_symmetry::symmetries::parse_axis_expression(text)?;
    if coefficients.iter().any(|c| *c != 0.0) {
        return Err(crystal_symmetry::SymmetryError::parse(
            text,
            "coordinates must be numbers",
        ));
    }
    Ok(constant)
}
