//! Integration tests for GridSim
//!
//! These tests verify end-to-end behavior including:
//! - Simulation invariants across long tick sequences
//! - History window contents and eviction order
//! - Renderer output through the presentation port
//! - Timer replacement on speed changes
//! - Navigation and settings semantics

use gridsim::config::Config;
use gridsim::interval::{IntervalController, Speed, TimerEvent};
use gridsim::render::{self, ScreenModel, Surface, Target};
use gridsim::settings::{SettingsPanel, ThemeLabel};
use gridsim::{nav, sim, Section, SimState, MAX_HISTORY};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time;

mod simulation_tests {
    use super::*;

    #[test]
    fn test_invariants_hold_over_many_ticks() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut state = SimState::new();
        let mut last_co2 = state.co2_kg;
        let mut last_money = state.money_saved;

        for _ in 0..5000 {
            sim::tick(&mut state, &mut rng);

            assert!(state.solar_kw >= 0.0);
            assert!(state.wind_kw >= 0.0);
            assert!((0.0..=100.0).contains(&state.battery_pct));
            assert!(state.co2_kg >= last_co2);
            assert!(state.money_saved >= last_money);

            last_co2 = state.co2_kg;
            last_money = state.money_saved;
        }
    }

    #[test]
    fn test_history_holds_last_twenty_samples_in_order() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = SimState::new();
        let mut screen = ScreenModel::new();
        let mut totals = Vec::new();

        for _ in 0..25 {
            sim::tick(&mut state, &mut rng);
            totals.push(state.total_kw());
            render::render(&mut state, &mut screen);
            assert!(state.history.len() <= MAX_HISTORY);
        }

        // Exactly the last 20 totals, oldest first
        assert_eq!(state.history.samples(), &totals[5..]);
    }
}

mod render_tests {
    use super::*;

    #[test]
    fn test_zero_power_yields_zero_contribution() {
        let mut state = SimState::with_readings(0.0, 0.0, 50.0, 0.0, 0);
        let mut screen = ScreenModel::new();
        render::render(&mut state, &mut screen);

        assert_eq!(screen.fill(Target::SolarBar), Some(0.0));
        assert_eq!(screen.fill(Target::WindBar), Some(0.0));
        assert_eq!(screen.text(Target::TotalPower), Some("0 kW"));
    }

    #[test]
    fn test_render_writes_all_dashboard_regions() {
        let mut state = SimState::new();
        let mut screen = ScreenModel::new();
        render::render(&mut state, &mut screen);

        for target in [
            Target::SolarPower,
            Target::WindPower,
            Target::BatteryLevel,
            Target::TotalPower,
            Target::Co2Saved,
            Target::MoneySaved,
            Target::BatteryText,
            Target::SolarValue,
            Target::WindValue,
            Target::Year,
        ] {
            assert!(screen.text(target).is_some(), "{target:?} not written");
        }
        assert_eq!(screen.bars(Target::PowerHistory).map(<[f64]>::len), Some(1));
    }

    #[test]
    fn test_missing_regions_never_fail() {
        let mut state = SimState::new();
        let mut screen = ScreenModel::without(&[
            Target::BatteryFill,
            Target::SolarBar,
            Target::PowerHistory,
        ]);

        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            sim::tick(&mut state, &mut rng);
            render::render(&mut state, &mut screen);
        }

        assert!(screen.fill(Target::BatteryFill).is_none());
        assert!(screen.bars(Target::PowerHistory).is_none());
        assert!(screen.text(Target::SolarPower).is_some());
    }
}

mod interval_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fast_speed_runs_exactly_one_timer() {
        let (tx, mut rx) = mpsc::channel(32);
        let mut controller = IntervalController::new(tx);

        // Two consecutive speed changes must not leave a duplicate task
        controller.set_speed(Speed::Fast);
        controller.set_speed(Speed::Fast);
        assert_eq!(controller.speed().period(), Duration::from_millis(1500));
        assert!(controller.is_running());

        for expected_total in 1..=3 {
            time::advance(Duration::from_millis(1500)).await;
            for _ in 0..8 {
                tokio::task::yield_now().await;
            }
            let mut received = 0;
            while rx.try_recv().is_ok() {
                received += 1;
            }
            assert_eq!(received, 1, "window {expected_total} saw duplicate ticks");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_events_every_thirty_seconds() {
        let (tx, mut rx) = mpsc::channel(32);
        let clock = gridsim::spawn_clock(tx);

        time::advance(Duration::from_secs(30)).await;
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }

        assert_eq!(rx.try_recv(), Ok(TimerEvent::Clock));
        assert!(rx.try_recv().is_err());

        clock.abort();
    }
}

mod nav_tests {
    use super::*;

    #[test]
    fn test_analytics_activation_sets_theme() {
        let mut screen = ScreenModel::new();
        nav::activate(Section::Dashboard, &mut screen);
        nav::activate(Section::Analytics, &mut screen);

        assert_eq!(screen.active_section(), Section::Analytics);
        assert_eq!(screen.theme_class(), "theme-analytics");
    }

    #[test]
    fn test_every_section_is_reachable_by_cycling() {
        let mut screen = ScreenModel::new();
        let mut seen = Vec::new();

        let mut section = Section::Dashboard;
        for _ in 0..Section::ALL.len() {
            nav::activate(section, &mut screen);
            seen.push(screen.active_section());
            section = screen.active_section().next();
        }

        assert_eq!(seen, Section::ALL);
    }
}

mod settings_tests {
    use super::*;

    #[tokio::test]
    async fn test_fast_cool_status_message() {
        let (tx, _rx) = mpsc::channel(8);
        let mut intervals = IntervalController::new(tx);
        let mut screen = ScreenModel::new();
        let mut panel = SettingsPanel::new();

        panel.select_speed(Speed::Fast, &mut intervals, &mut screen);
        panel.select_theme(ThemeLabel::Cool, &mut screen);

        assert_eq!(intervals.speed(), Speed::Fast);
        assert_eq!(
            screen.text(Target::SettingsMessage),
            Some("Current mode: Fast simulation • Cool Blue label (visual only).")
        );
    }

    #[tokio::test]
    async fn test_theme_selection_never_touches_root_theme() {
        let (tx, _rx) = mpsc::channel(8);
        let mut intervals = IntervalController::new(tx);
        let mut screen = ScreenModel::new();
        let mut panel = SettingsPanel::new();

        nav::activate(Section::Reports, &mut screen);
        panel.select_speed(Speed::Slow, &mut intervals, &mut screen);
        panel.select_theme(ThemeLabel::Storm, &mut screen);

        // The settings theme label is cosmetic; navigation owns the root theme
        assert_eq!(screen.theme_class(), "theme-reports");
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_config_drives_initial_state_and_speed() {
        let yaml = r#"
simulation:
  speed: "fast"

readings:
  solar_kw: 10.0
  wind_kw: 0.0
  battery_pct: 5.0
  co2_kg: 0.0
  money_saved: 0
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.speed().unwrap(), Speed::Fast);

        let mut state = config.initial_state();
        let mut screen = ScreenModel::new();
        render::render(&mut state, &mut screen);

        assert_eq!(screen.text(Target::SolarPower), Some("10.00 kW"));
        assert_eq!(screen.fill(Target::SolarBar), Some(100.0));
        assert_eq!(screen.fill(Target::WindBar), Some(0.0));
        assert_eq!(screen.text(Target::BatteryLevel), Some("5%"));
    }
}
