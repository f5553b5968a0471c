//! GridSim CLI - Renewable Energy Dashboard Simulator
//!
//! Usage:
//!   gridsim run [OPTIONS]       Run the dashboard TUI
//!   gridsim sample [OPTIONS]    Print headless ticks to stdout
//!
//! Examples:
//!   gridsim run --speed fast
//!   gridsim run --config gridsim.yaml
//!   gridsim sample --ticks 25

use clap::{Parser, Subcommand};
use gridsim::config::{Config, ConfigError};
use gridsim::render::{self, ScreenModel, Target};
use gridsim::sim;

#[derive(Parser)]
#[command(name = "gridsim")]
#[command(author, version, about = "Renewable Energy Dashboard Simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard TUI
    Run {
        /// Configuration file path (YAML)
        #[arg(short, long)]
        config: Option<String>,

        /// Starting speed (slow, normal, fast)
        #[arg(long)]
        speed: Option<String>,
    },
    /// Print a headless run of the simulation to stdout
    Sample {
        /// Configuration file path (YAML)
        #[arg(short, long)]
        config: Option<String>,

        /// Starting speed (slow, normal, fast)
        #[arg(long)]
        speed: Option<String>,

        /// Number of ticks to simulate
        #[arg(long, default_value = "10")]
        ticks: u32,
    },
}

fn build_config(config_file: Option<String>, speed: Option<String>) -> Result<Config, ConfigError> {
    let mut config = if let Some(path) = config_file {
        Config::from_file(&path)?
    } else {
        Config::default()
    };

    // Override with CLI arguments
    if let Some(speed) = speed {
        config.simulation.speed = speed;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, speed } => {
            let config = build_config(config, speed)?;
            let speed = config.speed()?;

            gridsim::tui::run(&config, speed).await?;
        }
        Commands::Sample {
            config,
            speed,
            ticks,
        } => {
            // Initialize tracing for headless mode only; the TUI owns the terminal
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive("gridsim=info".parse().unwrap()),
                )
                .init();

            let config = build_config(config, speed)?;
            config.speed()?;

            run_sample(&config, ticks);
        }
    }

    Ok(())
}

/// Tick the simulation against an in-memory surface and print each frame.
fn run_sample(config: &Config, ticks: u32) {
    let mut state = config.initial_state();
    let mut screen = ScreenModel::new();
    let mut rng = rand::rng();

    render::render(&mut state, &mut screen);
    print_frame(0, &screen);

    for tick in 1..=ticks {
        sim::tick(&mut state, &mut rng);
        render::render(&mut state, &mut screen);
        print_frame(tick, &screen);
    }
}

fn print_frame(tick: u32, screen: &ScreenModel) {
    println!(
        "tick {:>3}  solar {:>9}  wind {:>9}  battery {:>4}  total {:>9}  co2 {:>9}  saved {:>8}",
        tick,
        screen.text(Target::SolarPower).unwrap_or("--"),
        screen.text(Target::WindPower).unwrap_or("--"),
        screen.text(Target::BatteryLevel).unwrap_or("--"),
        screen.text(Target::TotalPower).unwrap_or("--"),
        screen.text(Target::Co2Saved).unwrap_or("--"),
        screen.text(Target::MoneySaved).unwrap_or("--"),
    );
}
