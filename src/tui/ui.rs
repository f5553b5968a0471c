//! Dashboard rendering logic using Ratatui.
//!
//! Drawing reads everything back from the app's [`ScreenModel`]: the widgets
//! here are projections of whatever the renderer last wrote, never of the
//! raw simulation state.

use super::app::App;
use crate::interval::Speed;
use crate::nav::Section;
use crate::render::{Surface, Target};
use crate::settings::ThemeLabel;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph, Tabs},
    Frame,
};

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Navigation tabs
            Constraint::Min(10),   // Active section
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    let theme = theme_color(app.screen.theme_class());

    draw_header(f, app, theme, chunks[0]);
    draw_tabs(f, app, theme, chunks[1]);
    match app.screen.active_section() {
        Section::Dashboard => draw_dashboard(f, app, theme, chunks[2]),
        Section::Analytics => draw_analytics(f, app, theme, chunks[2]),
        Section::Reports => draw_reports(f, app, theme, chunks[2]),
        Section::Team => draw_team(f, theme, chunks[2]),
        Section::Settings => draw_settings(f, app, theme, chunks[2]),
    }
    draw_footer(f, chunks[3]);
}

/// Border color for the active theme class.
fn theme_color(class: &str) -> Color {
    match class {
        "theme-dashboard" => Color::Green,
        "theme-analytics" => Color::Cyan,
        "theme-reports" => Color::Yellow,
        "theme-team" => Color::Magenta,
        "theme-settings" => Color::Blue,
        _ => Color::White,
    }
}

fn text_or_dash(app: &App, target: Target) -> &str {
    app.screen.text(target).unwrap_or("--")
}

fn draw_header(f: &mut Frame, app: &App, theme: Color, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "  GridSim Energy Dashboard  ",
            Style::default().fg(theme).bold(),
        ),
        Span::raw(" │ "),
        Span::styled(
            text_or_dash(app, Target::CurrentTime),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" │ "),
        Span::styled(
            text_or_dash(app, Target::Year),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme)),
    );

    f.render_widget(header, area);
}

fn draw_tabs(f: &mut Frame, app: &App, theme: Color, area: Rect) {
    let titles: Vec<Line> = Section::ALL
        .iter()
        .map(|s| Line::from(format!(" {} ", s.title())))
        .collect();
    let selected = Section::ALL
        .iter()
        .position(|s| *s == app.screen.active_section())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().fg(theme).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme)),
        );

    f.render_widget(tabs, area);
}

fn draw_dashboard(f: &mut Frame, app: &App, theme: Color, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Power cards
            Constraint::Length(3), // Battery gauge
            Constraint::Length(3), // Contribution gauges
            Constraint::Min(5),    // History chart
        ])
        .split(area);

    draw_cards(f, app, rows[0]);
    draw_battery(f, app, rows[1]);
    draw_contribution(f, app, rows[2]);
    draw_history(f, app, theme, rows[3]);
}

fn draw_cards(f: &mut Frame, app: &App, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    draw_card(f, " Solar ", text_or_dash(app, Target::SolarPower), Color::Yellow, cells[0]);
    draw_card(f, " Wind ", text_or_dash(app, Target::WindPower), Color::Cyan, cells[1]);
    draw_card(f, " Battery ", text_or_dash(app, Target::BatteryLevel), Color::Green, cells[2]);
    draw_card(f, " Total Power ", text_or_dash(app, Target::TotalPower), Color::Magenta, cells[3]);
}

fn draw_card(f: &mut Frame, title: &str, value: &str, color: Color, area: Rect) {
    let card = Paragraph::new(Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(color).bold(),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(title)
            .title_style(Style::default().fg(color))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    f.render_widget(card, area);
}

fn draw_battery(f: &mut Frame, app: &App, area: Rect) {
    let pct = app.screen.fill(Target::BatteryFill).unwrap_or(0.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Battery ")
                .title_style(Style::default().fg(Color::Green))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio((pct / 100.0).clamp(0.0, 1.0))
        .label(text_or_dash(app, Target::BatteryText).to_string());

    f.render_widget(gauge, area);
}

fn draw_contribution(f: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let solar_pct = app.screen.fill(Target::SolarBar).unwrap_or(0.0);
    let solar = Gauge::default()
        .block(
            Block::default()
                .title(" Solar share ")
                .title_style(Style::default().fg(Color::Yellow))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .ratio((solar_pct / 100.0).clamp(0.0, 1.0))
        .label(text_or_dash(app, Target::SolarValue).to_string());
    f.render_widget(solar, halves[0]);

    let wind_pct = app.screen.fill(Target::WindBar).unwrap_or(0.0);
    let wind = Gauge::default()
        .block(
            Block::default()
                .title(" Wind share ")
                .title_style(Style::default().fg(Color::Cyan))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio((wind_pct / 100.0).clamp(0.0, 1.0))
        .label(text_or_dash(app, Target::WindValue).to_string());
    f.render_widget(wind, halves[1]);
}

fn draw_history(f: &mut Frame, app: &App, theme: Color, area: Rect) {
    let heights = app.screen.bars(Target::PowerHistory).unwrap_or(&[]);

    if heights.is_empty() {
        let empty = Paragraph::new("No samples yet")
            .style(Style::default().fg(Color::Gray))
            .block(
                Block::default()
                    .title(" Power trend ")
                    .title_style(Style::default().fg(theme).bold())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme)),
            );
        f.render_widget(empty, area);
        return;
    }

    let bars: Vec<Bar> = heights
        .iter()
        .map(|h| {
            Bar::default()
                .value(h.round() as u64)
                .text_value(String::new())
                .style(Style::default().fg(theme))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(format!(
                    " Power trend (last {} samples, total {}) ",
                    heights.len(),
                    text_or_dash(app, Target::TotalPower)
                ))
                .title_style(Style::default().fg(theme).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme)),
        )
        .data(BarGroup::default().bars(&bars))
        .max(100)
        .bar_width(2)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme));

    f.render_widget(chart, area);
}

fn draw_analytics(f: &mut Frame, app: &App, theme: Color, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    draw_contribution(f, app, rows[0]);
    draw_history(f, app, theme, rows[1]);
}

fn draw_reports(f: &mut Frame, app: &App, theme: Color, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    draw_card(f, " CO₂ saved ", text_or_dash(app, Target::Co2Saved), Color::Green, cells[0]);
    draw_card(f, " Money saved ", text_or_dash(app, Target::MoneySaved), Color::Yellow, cells[1]);

    let note = Paragraph::new("Savings accumulate while the simulation runs and reset on restart.")
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .title(" Reports ")
                .title_style(Style::default().fg(theme).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme)),
        );
    f.render_widget(note, rows[1]);
}

fn draw_team(f: &mut Frame, theme: Color, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from("  Site operations     on-call"),
        Line::from("  Grid engineering    weekdays"),
        Line::from("  Maintenance crew    rotating shifts"),
    ];
    let team = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .title(" Team ")
                .title_style(Style::default().fg(theme).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme)),
        );
    f.render_widget(team, area);
}

fn draw_settings(f: &mut Frame, app: &App, theme: Color, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Length(3)])
        .split(area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let speed_lines: Vec<Line> = [
        (Speed::Slow, 's'),
        (Speed::Normal, 'n'),
        (Speed::Fast, 'f'),
    ]
    .iter()
    .map(|(speed, key)| {
        radio_line(
            app.settings.speed() == Some(*speed),
            speed.title(),
            *key,
        )
    })
    .collect();

    let speed_group = Paragraph::new(speed_lines).block(
        Block::default()
            .title(" Simulation speed ")
            .title_style(Style::default().fg(theme).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme)),
    );
    f.render_widget(speed_group, halves[0]);

    let theme_lines: Vec<Line> = [
        (ThemeLabel::Eco, 'e'),
        (ThemeLabel::Cool, 'c'),
        (ThemeLabel::Storm, 'm'),
    ]
    .iter()
    .map(|(label, key)| {
        radio_line(
            app.settings.theme() == Some(*label),
            label.label(),
            *key,
        )
    })
    .collect();

    let theme_group = Paragraph::new(theme_lines).block(
        Block::default()
            .title(" Theme label (visual only) ")
            .title_style(Style::default().fg(theme).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme)),
    );
    f.render_widget(theme_group, halves[1]);

    let message = app
        .screen
        .text(Target::SettingsMessage)
        .unwrap_or("No changes yet.");
    let status = Paragraph::new(message)
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme)),
        );
    f.render_widget(status, rows[1]);
}

fn radio_line(selected: bool, label: &str, key: char) -> Line<'static> {
    let marker = if selected { "(•)" } else { "( )" };
    let style = if selected {
        Style::default().fg(Color::White).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(format!("  {marker} {label}"), style),
        Span::styled(format!("  [{key}]"), Style::default().fg(Color::DarkGray)),
    ])
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(" q ", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw(" Quit  "),
        Span::styled(" Tab/1-5 ", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw(" Section  "),
        Span::styled(" s/n/f ", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw(" Speed  "),
        Span::styled(" e/c/m ", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw(" Theme label  "),
    ]))
    .style(Style::default().fg(Color::Gray));

    f.render_widget(footer, area);
}
