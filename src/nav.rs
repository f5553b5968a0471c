//! Navigation between page sections.
//!
//! Exactly one section is active at a time, and the active section drives a
//! cosmetic theme class on the surface root. There is no shadow navigation
//! variable: the current section is always read back from the surface's own
//! markers.

use crate::render::Surface;

/// A page section reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Analytics,
    Reports,
    Team,
    Settings,
}

impl Section {
    /// All sections, in navigation order.
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Analytics,
        Section::Reports,
        Section::Team,
        Section::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Analytics => "Analytics",
            Section::Reports => "Reports",
            Section::Team => "Team",
            Section::Settings => "Settings",
        }
    }

    /// Theme class applied to the surface root while this section is active.
    pub fn theme_class(&self) -> &'static str {
        match self {
            Section::Dashboard => "theme-dashboard",
            Section::Analytics => "theme-analytics",
            Section::Reports => "theme-reports",
            Section::Team => "theme-team",
            Section::Settings => "theme-settings",
        }
    }

    /// The section after this one, wrapping around.
    pub fn next(&self) -> Section {
        let idx = Section::ALL.iter().position(|s| s == self).unwrap_or(0);
        Section::ALL[(idx + 1) % Section::ALL.len()]
    }

    /// The section before this one, wrapping around.
    pub fn prev(&self) -> Section {
        let idx = Section::ALL.iter().position(|s| s == self).unwrap_or(0);
        Section::ALL[(idx + Section::ALL.len() - 1) % Section::ALL.len()]
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::Dashboard
    }
}

/// Activate a section: mark it as the only active one and swap the root
/// theme class to the section's theme.
pub fn activate(section: Section, surface: &mut impl Surface) {
    surface.set_active_section(section);
    surface.set_theme_class(section.theme_class());
    tracing::debug!(section = section.title(), "section activated");
}
