//! Settings panel: simulation speed and the cosmetic theme label.
//!
//! Two independent radio groups. Speed changes reconfigure the interval
//! controller; theme changes only rewrite the status message. The theme
//! label deliberately never touches the root theme class, which navigation
//! owns (preserved as-is from the observed behavior).

use crate::interval::{IntervalController, Speed};
use crate::render::{Surface, Target};
use std::str::FromStr;

/// Cosmetic theme label. Unrelated to the per-section theme class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeLabel {
    Eco,
    Cool,
    Storm,
}

impl ThemeLabel {
    /// Display label used in the settings status message.
    pub fn label(&self) -> &'static str {
        match self {
            ThemeLabel::Eco => "Eco Green",
            ThemeLabel::Cool => "Cool Blue",
            ThemeLabel::Storm => "Storm Mode",
        }
    }
}

impl FromStr for ThemeLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eco" => Ok(ThemeLabel::Eco),
            "cool" => Ok(ThemeLabel::Cool),
            "storm" => Ok(ThemeLabel::Storm),
            other => Err(format!(
                "unknown theme '{}', expected eco, cool or storm",
                other
            )),
        }
    }
}

/// Current radio selections. Both groups start unselected; the status
/// message falls back to "Slow" / "Eco Green" until a choice is made.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsPanel {
    speed: Option<Speed>,
    theme: Option<ThemeLabel>,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speed(&self) -> Option<Speed> {
        self.speed
    }

    pub fn theme(&self) -> Option<ThemeLabel> {
        self.theme
    }

    /// Select a speed: reconfigure the tick period (replacing the timer)
    /// and rewrite the status message.
    pub fn select_speed(
        &mut self,
        speed: Speed,
        intervals: &mut IntervalController,
        surface: &mut impl Surface,
    ) {
        self.speed = Some(speed);
        intervals.set_speed(speed);
        surface.set_text(Target::SettingsMessage, &self.status_message());
        tracing::debug!(speed = speed.title(), "simulation speed selected");
    }

    /// Select a theme label: rewrites the status message only.
    pub fn select_theme(&mut self, theme: ThemeLabel, surface: &mut impl Surface) {
        self.theme = Some(theme);
        surface.set_text(Target::SettingsMessage, &self.status_message());
    }

    /// The status line reporting both current selections.
    pub fn status_message(&self) -> String {
        let speed = self.speed.map_or("Slow", |s| s.title());
        let theme = self.theme.map_or("Eco Green", |t| t.label());
        format!("Current mode: {speed} simulation \u{2022} {theme} label (visual only).")
    }
}
