//! # GridSim - Renewable Energy Dashboard Simulator
//!
//! A terminal dashboard over synthetic solar/wind data. Readings drift with
//! bounded random deltas on a repeating timer and are projected onto named
//! display regions through a presentation port, so the simulation logic
//! never touches the terminal directly.
//!
//! ## Features
//!
//! - Randomized simulation tick with self-clamping readings
//! - Rolling 20-sample total-power trend window
//! - Presentation-port renderer, testable without a display
//! - Reconfigurable tick period (slow/normal/fast) with a single live timer
//! - Section navigation with per-section theme
//!
//! ## Usage
//!
//! ### As a CLI
//!
//! ```bash
//! # Run the dashboard TUI
//! gridsim run
//!
//! # Print 25 headless ticks
//! gridsim sample --ticks 25
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use gridsim::{render, sim, ScreenModel, SimState, Target};
//!
//! let mut state = SimState::new();
//! let mut screen = ScreenModel::new();
//!
//! sim::tick(&mut state, &mut rand::rng());
//! render::render(&mut state, &mut screen);
//!
//! assert!(screen.text(Target::SolarPower).is_some());
//! ```

// Core library modules
pub mod clock;
pub mod config;
pub mod interval;
pub mod nav;
pub mod render;
pub mod settings;
pub mod sim;
pub mod state;

// TUI module (for `gridsim run`)
pub mod tui;

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use interval::{spawn_clock, IntervalController, Speed, TimerEvent, CLOCK_PERIOD};
pub use nav::{activate, Section};
pub use render::{ScreenModel, Surface, Target};
pub use settings::{SettingsPanel, ThemeLabel};
pub use state::{History, SimState, MAX_HISTORY};
