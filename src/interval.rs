//! Timer tasks driving the simulation and the clock display.
//!
//! The [`IntervalController`] owns at most one live tick task. Changing the
//! period is an atomic cancel-then-schedule: the old task is aborted before
//! the replacement is spawned, so there are never two tick sources. The
//! clock task is independent, fixed-period and started exactly once.

use std::str::FromStr;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// How often the clock display refreshes. Never reconfigured.
pub const CLOCK_PERIOD: Duration = Duration::from_secs(30);

/// Events delivered to the app loop by the timer tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Run one simulation tick and re-render.
    Tick,
    /// Refresh the clock display.
    Clock,
}

/// Simulation refresh speed, selecting the tick period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    Slow,
    Normal,
    Fast,
}

impl Speed {
    pub fn period(&self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(4000),
            Speed::Normal => Duration::from_millis(3000),
            Speed::Fast => Duration::from_millis(1500),
        }
    }

    /// Capitalized name used in the settings status message.
    pub fn title(&self) -> &'static str {
        match self {
            Speed::Slow => "Slow",
            Speed::Normal => "Normal",
            Speed::Fast => "Fast",
        }
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed::Normal
    }
}

impl FromStr for Speed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "slow" => Ok(Speed::Slow),
            "normal" => Ok(Speed::Normal),
            "fast" => Ok(Speed::Fast),
            other => Err(format!(
                "unknown speed '{}', expected slow, normal or fast",
                other
            )),
        }
    }
}

/// Owner of the single repeating tick task.
pub struct IntervalController {
    tx: mpsc::Sender<TimerEvent>,
    speed: Speed,
    handle: Option<JoinHandle<()>>,
}

impl IntervalController {
    /// Create a controller at the default speed. No task runs until the
    /// first [`restart`](Self::restart) or [`set_speed`](Self::set_speed).
    pub fn new(tx: mpsc::Sender<TimerEvent>) -> Self {
        Self {
            tx,
            speed: Speed::default(),
            handle: None,
        }
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Whether a tick task is currently live.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Change the period and replace the tick task.
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
        self.restart();
    }

    /// Cancel any existing tick task and schedule a fresh one at the
    /// current speed. The first tick fires one full period from now.
    pub fn restart(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }

        let tx = self.tx.clone();
        let period = self.speed.period();
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if tx.send(TimerEvent::Tick).await.is_err() {
                    break;
                }
            }
        }));

        tracing::debug!(period_ms = period.as_millis() as u64, "tick task replaced");
    }
}

impl Drop for IntervalController {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Start the fixed-period clock task. Runs until the receiver is dropped.
pub fn spawn_clock(tx: mpsc::Sender<TimerEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval_at(Instant::now() + CLOCK_PERIOD, CLOCK_PERIOD);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if tx.send(TimerEvent::Clock).await.is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Let spawned timer tasks observe the advanced clock and push events.
    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    fn drain(rx: &mut mpsc::Receiver<TimerEvent>) -> usize {
        let mut n = 0;
        while rx.try_recv().is_ok() {
            n += 1;
        }
        n
    }

    #[test]
    fn test_speed_periods() {
        assert_eq!(Speed::Slow.period(), Duration::from_millis(4000));
        assert_eq!(Speed::Normal.period(), Duration::from_millis(3000));
        assert_eq!(Speed::Fast.period(), Duration::from_millis(1500));
        assert_eq!(Speed::default(), Speed::Normal);
    }

    #[test]
    fn test_speed_parsing() {
        assert_eq!("fast".parse::<Speed>(), Ok(Speed::Fast));
        assert_eq!("SLOW".parse::<Speed>(), Ok(Speed::Slow));
        assert!("warp".parse::<Speed>().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_arrive_at_period() {
        let (tx, mut rx) = mpsc::channel(32);
        let mut controller = IntervalController::new(tx);
        controller.restart();

        for _ in 0..3 {
            time::advance(Duration::from_millis(3000)).await;
            settle().await;
        }
        assert_eq!(drain(&mut rx), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_speed_changes_leave_one_timer() {
        let (tx, mut rx) = mpsc::channel(32);
        let mut controller = IntervalController::new(tx);

        controller.set_speed(Speed::Fast);
        controller.set_speed(Speed::Fast);
        assert_eq!(controller.speed(), Speed::Fast);
        assert!(controller.is_running());

        // A duplicate task would produce two ticks per window.
        time::advance(Duration::from_millis(1500)).await;
        settle().await;
        assert_eq!(drain(&mut rx), 1);

        time::advance(Duration::from_millis(1500)).await;
        settle().await;
        assert_eq!(drain(&mut rx), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_speed_cancels_pending_tick() {
        let (tx, mut rx) = mpsc::channel(32);
        let mut controller = IntervalController::new(tx);
        controller.set_speed(Speed::Slow);

        // Almost due, then replaced: the old deadline must not fire.
        time::advance(Duration::from_millis(3900)).await;
        settle().await;
        controller.set_speed(Speed::Fast);

        time::advance(Duration::from_millis(200)).await;
        settle().await;
        assert_eq!(drain(&mut rx), 0);

        time::advance(Duration::from_millis(1300)).await;
        settle().await;
        assert_eq!(drain(&mut rx), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_is_independent_of_speed() {
        let (tx, mut rx) = mpsc::channel(32);
        let mut controller = IntervalController::new(tx.clone());
        controller.set_speed(Speed::Fast);
        let clock = spawn_clock(tx);

        time::advance(Duration::from_secs(30)).await;
        settle().await;

        let mut ticks = 0;
        let mut clocks = 0;
        while let Ok(event) = rx.try_recv() {
            match event {
                TimerEvent::Tick => ticks += 1,
                TimerEvent::Clock => clocks += 1,
            }
        }
        assert_eq!(clocks, 1);
        assert!(ticks >= 1);

        clock.abort();
    }
}
