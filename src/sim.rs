//! The simulation tick: bounded random perturbations of the readings.
//!
//! Every branch is self-clamping, so a tick can never produce out-of-range
//! state and has no error path.

use crate::state::{round1, round2, SimState};
use rand::Rng;

/// Apply one round of random drift to the readings.
///
/// Solar and wind each shift by a uniform value in [-0.5, 0.5) kW, rounded to
/// 2 decimals and clamped to >= 0. Battery shifts by a uniform value in
/// [-2, 2) percent, clamped to [0, 100]. CO2 savings grow by a uniform value
/// in [0, 1) kg, money savings by a uniform integer in [0, 9].
pub fn tick<R: Rng>(state: &mut SimState, rng: &mut R) {
    state.solar_kw = round2(state.solar_kw + rng.random_range(-0.5..0.5)).max(0.0);
    state.wind_kw = round2(state.wind_kw + rng.random_range(-0.5..0.5)).max(0.0);

    state.battery_pct = (state.battery_pct + rng.random_range(-2.0..2.0)).clamp(0.0, 100.0);

    state.co2_kg = round1(state.co2_kg + rng.random::<f64>());
    state.money_saved += rng.random_range(0..10);

    tracing::debug!(
        solar_kw = state.solar_kw,
        wind_kw = state.wind_kw,
        battery_pct = state.battery_pct,
        "tick applied"
    );
}
