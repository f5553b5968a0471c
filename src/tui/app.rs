//! TUI application logic and event handling.

use super::ui;
use crate::clock;
use crate::config::Config;
use crate::interval::{spawn_clock, IntervalController, Speed, TimerEvent};
use crate::nav::{self, Section};
use crate::render::{self, ScreenModel, Surface, Target};
use crate::settings::{SettingsPanel, ThemeLabel};
use crate::sim;
use crate::state::SimState;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long each frame waits for keyboard input.
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Application state for the dashboard
pub struct App {
    /// Simulated readings
    pub state: SimState,
    /// Surface the renderer writes to and the drawing code reads from
    pub screen: ScreenModel,
    /// Owner of the repeating tick task
    pub intervals: IntervalController,
    /// Speed/theme radio selections
    pub settings: SettingsPanel,
    /// Whether to exit
    pub should_quit: bool,
}

impl App {
    pub fn new(state: SimState, tx: mpsc::Sender<TimerEvent>) -> Self {
        Self {
            state,
            screen: ScreenModel::new(),
            intervals: IntervalController::new(tx),
            settings: SettingsPanel::new(),
            should_quit: false,
        }
    }

    /// One simulation tick followed by a full re-render.
    pub fn on_tick(&mut self) {
        sim::tick(&mut self.state, &mut rand::rng());
        render::render(&mut self.state, &mut self.screen);
    }

    /// Rewrite the header clock.
    pub fn refresh_clock(&mut self) {
        self.screen.set_text(Target::CurrentTime, &clock::now_hhmm());
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Right => {
                nav::activate(self.screen.active_section().next(), &mut self.screen);
            }
            KeyCode::BackTab | KeyCode::Left => {
                nav::activate(self.screen.active_section().prev(), &mut self.screen);
            }
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                nav::activate(Section::ALL[idx], &mut self.screen);
            }
            KeyCode::Char('s') => self.select_speed(Speed::Slow),
            KeyCode::Char('n') => self.select_speed(Speed::Normal),
            KeyCode::Char('f') => self.select_speed(Speed::Fast),
            KeyCode::Char('e') => self
                .settings
                .select_theme(ThemeLabel::Eco, &mut self.screen),
            KeyCode::Char('c') => self
                .settings
                .select_theme(ThemeLabel::Cool, &mut self.screen),
            KeyCode::Char('m') => self
                .settings
                .select_theme(ThemeLabel::Storm, &mut self.screen),
            _ => {}
        }
    }

    fn select_speed(&mut self, speed: Speed) {
        self.settings
            .select_speed(speed, &mut self.intervals, &mut self.screen);
    }
}

/// Run the dashboard TUI until the user quits.
pub async fn run(config: &Config, speed: Speed) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::channel(32);
    let mut app = App::new(config.initial_state(), tx.clone());
    app.intervals.set_speed(speed);
    let clock_task = spawn_clock(tx);

    // Initial paint before the first tick arrives
    render::render(&mut app.state, &mut app.screen);
    app.refresh_clock();
    nav::activate(Section::Dashboard, &mut app.screen);

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Handle events with timeout
        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        // Drain timer events; each one runs to completion before the next
        while let Ok(timer_event) = rx.try_recv() {
            match timer_event {
                TimerEvent::Tick => app.on_tick(),
                TimerEvent::Clock => app.refresh_clock(),
            }
        }

        if app.should_quit {
            break;
        }
    }

    clock_task.abort();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
