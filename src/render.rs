//! Projection of the simulation state onto a presentation surface.
//!
//! The renderer never touches a terminal directly. It writes formatted
//! strings, fill percentages and bar heights to named [`Target`] regions on a
//! [`Surface`], so the update logic is testable without any real display.
//! [`ScreenModel`] is the concrete surface used by both the TUI and the
//! headless sample mode.

use crate::clock;
use crate::nav::Section;
use crate::state::SimState;
use std::collections::{HashMap, HashSet};

/// A named display region.
///
/// The set of targets is the only "protocol" between the renderer and a
/// surface; a surface that does not host a given region simply ignores
/// writes to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    SolarPower,
    WindPower,
    BatteryLevel,
    TotalPower,
    Co2Saved,
    MoneySaved,
    BatteryFill,
    BatteryText,
    SolarBar,
    WindBar,
    SolarValue,
    WindValue,
    PowerHistory,
    Year,
    CurrentTime,
    SettingsMessage,
}

/// Presentation port for the dashboard.
///
/// Implementations must treat writes to regions they do not display as
/// silent no-ops. The renderer only queries [`has`](Surface::has) where a
/// write carries a state side effect.
pub trait Surface {
    /// Write a formatted text value to a region.
    fn set_text(&mut self, target: Target, text: &str);

    /// Set a fill percentage (0-100) for a bar-style region.
    fn set_fill(&mut self, target: Target, pct: f64);

    /// Replace the bar heights (each 0-100) of a chart region.
    fn set_bars(&mut self, target: Target, heights: &[f64]);

    /// Whether the surface hosts a region. Defaults to true; the renderer
    /// only asks when a write has a state side effect attached.
    fn has(&self, target: Target) -> bool {
        let _ = target;
        true
    }

    /// Mark the given section as the only active one.
    fn set_active_section(&mut self, section: Section);

    /// Replace the root theme class, removing any previous theme marker.
    fn set_theme_class(&mut self, class: &'static str);

    /// The currently active section, per the surface's own markers.
    fn active_section(&self) -> Section;

    /// The current root theme class.
    fn theme_class(&self) -> &'static str;
}

/// In-memory surface holding the last value written to each region.
///
/// Backs the TUI (which reads it when drawing frames) and the headless
/// sample mode, and doubles as the test double for render logic.
#[derive(Debug, Clone)]
pub struct ScreenModel {
    texts: HashMap<Target, String>,
    fills: HashMap<Target, f64>,
    bars: HashMap<Target, Vec<f64>>,
    active: Section,
    theme: &'static str,
    missing: HashSet<Target>,
}

impl ScreenModel {
    pub fn new() -> Self {
        Self {
            texts: HashMap::new(),
            fills: HashMap::new(),
            bars: HashMap::new(),
            active: Section::Dashboard,
            theme: Section::Dashboard.theme_class(),
            missing: HashSet::new(),
        }
    }

    /// A surface that does not host the given regions. Writes to them are
    /// dropped, mirroring a document with those elements absent.
    pub fn without(targets: &[Target]) -> Self {
        Self {
            missing: targets.iter().copied().collect(),
            ..Self::new()
        }
    }

    pub fn text(&self, target: Target) -> Option<&str> {
        self.texts.get(&target).map(String::as_str)
    }

    pub fn fill(&self, target: Target) -> Option<f64> {
        self.fills.get(&target).copied()
    }

    pub fn bars(&self, target: Target) -> Option<&[f64]> {
        self.bars.get(&target).map(Vec::as_slice)
    }
}

impl Default for ScreenModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for ScreenModel {
    fn set_text(&mut self, target: Target, text: &str) {
        if self.missing.contains(&target) {
            return;
        }
        self.texts.insert(target, text.to_string());
    }

    fn set_fill(&mut self, target: Target, pct: f64) {
        if self.missing.contains(&target) {
            return;
        }
        self.fills.insert(target, pct);
    }

    fn set_bars(&mut self, target: Target, heights: &[f64]) {
        if self.missing.contains(&target) {
            return;
        }
        self.bars.insert(target, heights.to_vec());
    }

    fn has(&self, target: Target) -> bool {
        !self.missing.contains(&target)
    }

    fn set_active_section(&mut self, section: Section) {
        self.active = section;
    }

    fn set_theme_class(&mut self, class: &'static str) {
        self.theme = class;
    }

    fn active_section(&self) -> Section {
        self.active
    }

    fn theme_class(&self) -> &'static str {
        self.theme
    }
}

/// Project the current state onto the surface.
///
/// Also appends the current total power to the rolling history, so every
/// render advances the trend chart by one sample.
pub fn render(state: &mut SimState, surface: &mut impl Surface) {
    let total = state.total_kw();

    // Dashboard cards
    surface.set_text(Target::SolarPower, &format!("{:.2} kW", state.solar_kw));
    surface.set_text(Target::WindPower, &format!("{:.2} kW", state.wind_kw));
    surface.set_text(Target::BatteryLevel, &format!("{:.0}%", state.battery_pct));
    surface.set_text(Target::TotalPower, &format!("{} kW", total));

    // Savings
    surface.set_text(Target::Co2Saved, &format!("{:.1} kg", state.co2_kg));
    surface.set_text(Target::MoneySaved, &format!("₹ {}", state.money_saved));

    // Battery bar
    surface.set_fill(Target::BatteryFill, state.battery_pct);
    surface.set_text(
        Target::BatteryText,
        &format!("{:.0}% charged", state.battery_pct),
    );

    // Contribution bars
    let (solar_pct, wind_pct) = contribution_split(state.solar_kw, state.wind_kw, total);
    surface.set_fill(Target::SolarBar, solar_pct);
    surface.set_fill(Target::WindBar, wind_pct);
    surface.set_text(Target::SolarValue, &format!("{:.2} kW", state.solar_kw));
    surface.set_text(Target::WindValue, &format!("{:.2} kW", state.wind_kw));

    // History chart. The sample is only taken when the chart region exists,
    // matching the per-widget skip: no region, no advance.
    if surface.has(Target::PowerHistory) {
        state.history.push(total);
        surface.set_bars(Target::PowerHistory, &bar_heights(state.history.samples()));
    }

    surface.set_text(Target::Year, &clock::current_year().to_string());
}

/// Percent contribution of each source to the total, both 0 when the total
/// power is 0.
fn contribution_split(solar_kw: f64, wind_kw: f64, total_kw: f64) -> (f64, f64) {
    if total_kw > 0.0 {
        (solar_kw / total_kw * 100.0, wind_kw / total_kw * 100.0)
    } else {
        (0.0, 0.0)
    }
}

/// Bar heights in percent, scaled to the window maximum.
///
/// The maximum is floored at 1.0 so an empty or all-zero window never
/// divides by zero.
fn bar_heights(samples: &[f64]) -> Vec<f64> {
    let max = samples.iter().copied().fold(1.0_f64, f64::max);
    samples.iter().map(|v| v / max * 100.0).collect()
}
