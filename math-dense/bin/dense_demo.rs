use anyhow::Context;
use clap::{Parser, ValueEnum};
use math_audio_dense::{
    AugmentedMatrix, EliminationConfig, LuFactors, SquareMatrix, is_diagonally_dominant,
    is_positive_definite_with_config, leading_principal_minors, lu_factorize_with_config,
    solve_with_config,
};
use ndarray::Array2;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "dense_demo",
    about = "Run the dense linear algebra routines on fixed example matrices"
)]
struct Cli {
    /// Which routine to demonstrate
    #[arg(long, value_enum, default_value_t = Part::All)]
    part: Part,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Pivots with magnitude below this value are treated as zero
    #[arg(long, default_value_t = math_audio_dense::PIVOT_EPSILON)]
    pivot_tolerance: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Part {
    All,
    Solve,
    Lu,
    Dominance,
    Definite,
}

impl Part {
    fn includes(self, other: Part) -> bool {
        self == Part::All || self == other
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Default, Serialize)]
struct DemoReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lu: Option<LuReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagonally_dominant: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    positive_definite: Option<DefiniteReport>,
}

#[derive(Debug, Serialize)]
struct LuReport {
    determinant: f64,
    l: Vec<Vec<f64>>,
    u: Vec<Vec<f64>>,
    degenerate_columns: Vec<usize>,
}

impl From<LuFactors<f64>> for LuReport {
    fn from(lu: LuFactors<f64>) -> Self {
        Self {
            determinant: lu.determinant,
            l: to_rows(&lu.l),
            u: to_rows(&lu.u),
            degenerate_columns: lu.degenerate_columns,
        }
    }
}

#[derive(Debug, Serialize)]
struct DefiniteReport {
    positive_definite: bool,
    leading_minors: Vec<f64>,
}

fn to_rows(a: &Array2<f64>) -> Vec<Vec<f64>> {
    a.outer_iter().map(|row| row.to_vec()).collect()
}

fn run(cli: &Cli) -> anyhow::Result<DemoReport> {
    let config = EliminationConfig::with_pivot_tolerance(cli.pivot_tolerance);
    let mut report = DemoReport::default();

    if cli.part.includes(Part::Solve) {
        let system = AugmentedMatrix::from_rows(&[
            [2.0, -1.0, 1.0, 6.0],
            [1.0, 3.0, 1.0, 0.0],
            [-1.0, 5.0, 4.0, -3.0],
        ])?;
        let x = solve_with_config(&system, &config).context("example system should be solvable")?;
        report.solution = Some(x.to_vec());
    }

    if cli.part.includes(Part::Lu) {
        let a = SquareMatrix::from_rows(&[
            [1.0, 1.0, 0.0, 3.0],
            [2.0, 1.0, -1.0, 1.0],
            [3.0, -1.0, -1.0, 2.0],
            [-1.0, 2.0, 3.0, -1.0],
        ])?;
        report.lu = Some(lu_factorize_with_config(&a, &config).into());
    }

    if cli.part.includes(Part::Dominance) {
        let a = SquareMatrix::from_rows(&[
            [9.0, 0.0, 5.0, 2.0, 1.0],
            [3.0, 9.0, 1.0, 2.0, 1.0],
            [0.0, 1.0, 7.0, 2.0, 3.0],
            [4.0, 2.0, 3.0, 12.0, 2.0],
            [3.0, 2.0, 4.0, 0.0, 8.0],
        ])?;
        report.diagonally_dominant = Some(is_diagonally_dominant(&a));
    }

    if cli.part.includes(Part::Definite) {
        let a = SquareMatrix::from_rows(&[[2.0, 2.0, 1.0], [2.0, 3.0, 0.0], [1.0, 0.0, 2.0]])?;
        report.positive_definite = Some(DefiniteReport {
            positive_definite: is_positive_definite_with_config(&a, &config),
            leading_minors: leading_principal_minors(&a, &config),
        });
    }

    Ok(report)
}

fn print_text(report: &DemoReport) {
    if let Some(solution) = &report.solution {
        println!("1) Solution to the system [Gaussian Elimination]:");
        for (i, val) in solution.iter().enumerate() {
            println!("   x{} = {:?}", i + 1, val);
        }
        println!();
    }

    if let Some(lu) = &report.lu {
        println!("2) LU Factorization Results:");
        println!("   Determinant of A: {:?}", lu.determinant);
        println!("   L matrix:");
        print_rounded(&lu.l);
        println!("   U matrix:");
        print_rounded(&lu.u);
        if !lu.degenerate_columns.is_empty() {
            println!("   Degenerate pivot columns: {:?}", lu.degenerate_columns);
        }
        println!();
    }

    if let Some(dd) = report.diagonally_dominant {
        println!("3) Is the matrix diagonally dominant? {}", yes_no(dd));
        println!();
    }

    if let Some(pd) = &report.positive_definite {
        println!(
            "4) Is the matrix positive definite? {}",
            yes_no(pd.positive_definite)
        );
        println!();
    }
}

/// Capitalised booleans, as the reference output prints them
fn yes_no(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}

/// Round to the nearest integer, halves to even
fn round_entries(row: &[f64]) -> Vec<i64> {
    row.iter().map(|x| x.round_ties_even() as i64).collect()
}

fn print_rounded(rows: &[Vec<f64>]) {
    for row in rows {
        println!("      {:?}", round_entries(row));
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("running dense demo with {:?}", cli);

    let report = run(&cli)?;

    match cli.format {
        Format::Text => print_text(&report),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
