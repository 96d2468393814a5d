use anyhow::Context;
use clap::{Parser, ValueEnum};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use skypoint_coords::HorizontalPosition;
use skypoint_core::Location;
use skypoint_pointing::PointingSolution;
use skypoint_time::parse_timestamp;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "skypoint")]
#[command(about = "Convert a horizontal pointing to equatorial and Galactic coordinates")]
struct Cli {
    /// Site latitude in degrees, +N
    #[arg(long, required_unless_present = "interactive")]
    lat: Option<f64>,

    /// Site east longitude in degrees, +E
    #[arg(long, required_unless_present = "interactive")]
    lon: Option<f64>,

    /// Altitude of the pointing in degrees
    #[arg(long, required_unless_present = "interactive")]
    alt: Option<f64>,

    /// Azimuth of the pointing in degrees, 0=N, 90=E
    #[arg(long, required_unless_present = "interactive")]
    az: Option<f64>,

    /// Observation time, UTC, as "YYYY-MM-DD HH:MM:SS"
    #[arg(long, required_unless_present = "interactive")]
    time: Option<String>,

    /// Prompt for each value instead of taking flags
    #[arg(long, conflicts_with_all = ["lat", "lon", "alt", "az", "time"])]
    interactive: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

struct Inputs {
    lat: f64,
    lon: f64,
    alt: f64,
    az: f64,
    time: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let inputs = if cli.interactive {
        prompt_inputs()?
    } else {
        // clap enforces presence outside interactive mode.
        Inputs {
            lat: cli.lat.unwrap(),
            lon: cli.lon.unwrap(),
            alt: cli.alt.unwrap(),
            az: cli.az.unwrap(),
            time: cli.time.unwrap(),
        }
    };

    let site = Location::from_degrees(inputs.lat, inputs.lon).context("invalid site")?;
    let pointing =
        HorizontalPosition::from_degrees(inputs.alt, inputs.az).context("invalid pointing")?;
    let time = parse_timestamp(&inputs.time)
        .with_context(|| format!("invalid observation time '{}'", inputs.time))?;

    let solution =
        PointingSolution::resolve(site, pointing, time).context("pointing could not be resolved")?;

    match cli.format {
        OutputFormat::Text => println!("{solution}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&solution.report())?),
    }

    Ok(())
}

fn prompt_inputs() -> anyhow::Result<Inputs> {
    println!("Enter observation site and antenna orientation details:");

    let mut rl = DefaultEditor::new().context("failed to initialize prompt")?;

    let lat = prompt_number(&mut rl, "Latitude (in degrees, +N): ")?;
    let lon = prompt_number(&mut rl, "Longitude (in degrees, +E): ")?;
    let alt = prompt_number(&mut rl, "Altitude (in degrees): ")?;
    let az = prompt_number(&mut rl, "Azimuth (in degrees, 0=N, 90=E): ")?;
    let time = prompt_line(&mut rl, "Enter observation time (YYYY-MM-DD HH:MM:SS): ")?;

    Ok(Inputs {
        lat,
        lon,
        alt,
        az,
        time,
    })
}

fn prompt_line(rl: &mut DefaultEditor, prompt: &str) -> anyhow::Result<String> {
    match rl.readline(prompt) {
        Ok(line) => Ok(line.trim().to_string()),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
            anyhow::bail!("input cancelled")
        }
        Err(e) => Err(e).context("failed to read input"),
    }
}

fn prompt_number(rl: &mut DefaultEditor, prompt: &str) -> anyhow::Result<f64> {
    let line = prompt_line(rl, prompt)?;
    line.parse()
        .with_context(|| format!("'{line}' is not a number"))
}
