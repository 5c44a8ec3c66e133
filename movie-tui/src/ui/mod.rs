use crate::app::{App, Focus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

mod results_view;
mod search_box;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Results / suggestions
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, root[0], app);
    search_box::render_search_box(frame, root[1], app);
    results_view::render_body(frame, root[2], app);
    render_controls(frame, root[3], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            "Movie Search",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]", app.source_label),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if let Some(status) = &app.status_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(status.clone(), Style::default().fg(Color::Yellow)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let mut controls = vec![key("Type"), Span::raw(": Search  ")];
    match app.focus {
        Focus::Input => {
            controls.extend([key("Enter"), Span::raw(": Search now  ")]);
            controls.extend([key("Ctrl+X"), Span::raw(": Clear  ")]);
        }
        Focus::List => {
            controls.extend([key("↑↓/j/k"), Span::raw(": Navigate  ")]);
            controls.extend([key("Enter"), Span::raw(": Select  ")]);
        }
    }
    controls.extend([key("Tab"), Span::raw(": Focus  ")]);
    if app.controller.can_load_more() {
        controls.extend([key("Ctrl+N"), Span::raw(": More  ")]);
    }
    controls.extend([key("Ctrl+R"), Span::raw(": Reset  ")]);
    controls.extend([key("Ctrl+D"), Span::raw(": Forget recents  ")]);
    controls.extend([key("Esc"), Span::raw(": Quit")]);

    let paragraph = Paragraph::new(Line::from(controls))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(paragraph, area);
}
