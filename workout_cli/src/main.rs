use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use workout_core::*;

#[derive(Parser)]
#[command(name = "workout-report")]
#[command(about = "Workout metrics report from sensor packages", long_about = None)]
struct Cli {
    /// Packages file (.json or .csv); the demonstration dataset is used if omitted
    #[arg(long)]
    packages: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Division used for the speed/height term of the walking calorie formula
    #[arg(long, value_enum)]
    walking_division: Option<DivisionArg>,

    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DivisionArg {
    Floor,
    True,
}

impl From<DivisionArg> for WalkingDivision {
    fn from(arg: DivisionArg) -> Self {
        match arg {
            DivisionArg::Floor => WalkingDivision::Floor,
            DivisionArg::True => WalkingDivision::True,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        workout_core::logging::init_with_level("debug");
    } else {
        workout_core::logging::init();
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Command line wins over config
    let mut formulas = config.formulas;
    if let Some(division) = cli.walking_division {
        formulas.walking_division = division.into();
    }
    let format = cli.format.map(ReportFormat::from).unwrap_or(config.report.format);

    let packages = match cli.packages.or(config.input.packages) {
        Some(path) => load_packages(&path)?,
        None => demo_packages().to_vec(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let count = process_packages(&packages, &formulas, format, &mut out)?;
    tracing::info!("Processed {} packages", count);

    Ok(())
}
