//! TempConv: temperature conversion with favorites and current weather.

mod command;
mod session;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tempconv_core::{App, AppError, Config};
use tempconv_units::TemperatureUnit;

use crate::session::{unit_lines, Session};

#[derive(Parser, Debug)]
#[command(
    name = "tempconv",
    author,
    version,
    about = "Temperature converter with favorites and weather",
    long_about = None
)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: per-user config directory)
    #[arg(long, global = true, env = "TEMPCONV_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a temperature
    Convert {
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit (c, f, k); defaults to the configured unit
        #[arg(short, long)]
        from: Option<TemperatureUnit>,

        /// Target unit (c, f, k); defaults to the configured unit
        #[arg(short, long)]
        to: Option<TemperatureUnit>,
    },

    /// Show current weather here, for a city, or at coordinates
    Weather {
        /// City name to look up
        #[arg(long, conflicts_with = "at")]
        city: Option<String>,

        /// Latitude and longitude
        #[arg(long, num_args = 2, value_names = ["LAT", "LON"], allow_hyphen_values = true)]
        at: Option<Vec<f64>>,
    },

    /// List supported units
    Units,

    /// Print the effective configuration
    Config {
        /// Only report validation problems
        #[arg(long)]
        validate: bool,
    },

    /// Start an interactive session
    Session,
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    tempconv_core::init(log_level(cli.verbose))?;

    // Shown even when the file fails validation
    if let Commands::Config { validate } = cli.command {
        return show_config(cli.config, validate);
    }

    let mut app = match App::new(cli.config.as_deref()) {
        Ok(app) => app,
        Err(e) => return Ok(report(Err(e))),
    };
    app.initialize()?;

    let mut session = Session::new(app.shared_config())?;
    let outcome = match cli.command {
        Commands::Convert { value, from, to } => {
            if let Some(unit) = from {
                session.set_from(unit);
            }
            if let Some(unit) = to {
                session.set_to(unit);
            }
            session.convert(&value)
        }
        Commands::Weather { city, at } => match at.as_deref() {
            Some([latitude, longitude]) => session.weather_at(*latitude, *longitude).await,
            _ => session.weather(city.as_deref()).await,
        },
        Commands::Units => Ok(unit_lines().join("\n")),
        Commands::Session => session
            .run(
                tokio::io::BufReader::new(tokio::io::stdin()),
                tokio::io::stdout(),
            )
            .await
            .map(|()| String::new())
            .map_err(AppError::from),
        Commands::Config { .. } => Ok(String::new()),
    };

    app.shutdown()?;
    Ok(report(outcome))
}

fn report(outcome: Result<String, AppError>) -> ExitCode {
    match outcome {
        Ok(text) => {
            if !text.is_empty() {
                println!("{}", text);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn show_config(path: Option<PathBuf>, validate_only: bool) -> Result<ExitCode> {
    let config = match path {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };
    let validation = config.validate();

    if !validate_only {
        println!("{}", toml::to_string_pretty(&config)?);
    }
    for warning in &validation.warnings {
        println!("warning: {}", warning);
    }
    for error in &validation.errors {
        println!("error: {}", error);
    }

    if validation.is_valid() {
        if validate_only {
            println!("Configuration is valid");
        }
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
