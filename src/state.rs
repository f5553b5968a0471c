//! Simulation state for the energy dashboard.
//!
//! All readings live in a single [`SimState`] record owned by the app loop.
//! Values are synthetic: they start from fixed constants and drift on each
//! tick. Nothing is persisted; the state lives for the process session.

/// Maximum number of total-power samples kept for the trend chart.
pub const MAX_HISTORY: usize = 20;

/// Rolling window of the most recent total-power samples.
///
/// Fixed capacity, FIFO: appending the 21st sample evicts the oldest.
#[derive(Debug, Clone, Default)]
pub struct History {
    samples: Vec<f64>,
}

impl History {
    pub fn new() -> Self {
        Self {
            samples: Vec::with_capacity(MAX_HISTORY),
        }
    }

    /// Append a sample, evicting the oldest when the window is full.
    pub fn push(&mut self, total_kw: f64) {
        self.samples.push(total_kw);
        if self.samples.len() > MAX_HISTORY {
            self.samples.remove(0);
        }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// The flat record of simulated readings.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Solar output in kW, clamped to >= 0.
    pub solar_kw: f64,
    /// Wind output in kW, clamped to >= 0.
    pub wind_kw: f64,
    /// Battery charge percent, clamped to [0, 100].
    pub battery_pct: f64,
    /// Accumulated CO2 savings in kg, non-decreasing, kept at 1 decimal.
    pub co2_kg: f64,
    /// Accumulated money savings in whole currency units, non-decreasing.
    pub money_saved: u64,
    /// Rolling window of recent total-power samples.
    pub history: History,
}

impl SimState {
    /// Starting readings shown before the first tick.
    pub fn new() -> Self {
        Self::with_readings(3.5, 2.1, 78.0, 12.4, 540)
    }

    pub fn with_readings(
        solar_kw: f64,
        wind_kw: f64,
        battery_pct: f64,
        co2_kg: f64,
        money_saved: u64,
    ) -> Self {
        Self {
            solar_kw: solar_kw.max(0.0),
            wind_kw: wind_kw.max(0.0),
            battery_pct: battery_pct.clamp(0.0, 100.0),
            co2_kg,
            money_saved,
            history: History::new(),
        }
    }

    /// Instantaneous total power, rounded to 2 decimals.
    ///
    /// Recomputed from the inputs on every call, never stored.
    pub fn total_kw(&self) -> f64 {
        round2(self.solar_kw + self.wind_kw)
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
