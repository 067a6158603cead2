//! Stateless UI rendering.

use super::app::App;
use clicker_core::{Element, Marker, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = app.screen();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(5), // Counters
            Constraint::Length(5), // Click trigger
            Constraint::Min(3),    // Upgrades
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Clicker")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_counters(frame, chunks[1], &screen);
    draw_trigger(frame, chunks[2], &screen);
    draw_upgrades(frame, chunks[3], &screen, app.selected());

    let help = Paragraph::new("Space: Click | ↑/↓: Select | U or 1-9: Unlock | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);
}

fn draw_counters(frame: &mut Frame, area: Rect, screen: &Screen) {
    let lines = vec![
        Line::from(Span::styled(
            screen.text(Element::ClickCounter).to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(screen.text(Element::LevelDisplay).to_string()),
        Line::from(Span::styled(
            screen.text(Element::BonusMessage).to_string(),
            Style::default().fg(Color::Yellow),
        )),
    ];
    let counters = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(counters, area);
}

fn draw_trigger(frame: &mut Frame, area: Rect, screen: &Screen) {
    let won = screen.has_marker(Element::ClickButton, Marker::Won);
    let style = if won {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let button_area = center_rect(area, 30, 3);
    let button = Paragraph::new(screen.text(Element::ClickButton).to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, button_area);
}

fn draw_upgrades(frame: &mut Frame, area: Rect, screen: &Screen, selected: usize) {
    let items: Vec<ListItem> = screen
        .upgrades()
        .iter()
        .enumerate()
        .map(|(index, upgrade)| {
            let (mark, style) = if *upgrade.unlocked() {
                ("✔", Style::default().fg(Color::Green))
            } else {
                ("🔒", Style::default().fg(Color::Gray))
            };
            ListItem::new(Line::from(Span::styled(
                format!(
                    "{} {}. {} ({} clicks)",
                    mark,
                    index + 1,
                    upgrade.name(),
                    upgrade.required_clicks()
                ),
                style,
            )))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Upgrades"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
