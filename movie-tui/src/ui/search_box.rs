use super::*;

pub fn render_search_box(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::Input;

    let text = if app.input.value.is_empty() {
        if focused {
            "█".to_string()
        } else {
            "Search movie by title (example: \"Deadpool\")".to_string()
        }
    } else if focused {
        let (before, after) = app.input.split_at_cursor();
        format!("{}█{}", before, after)
    } else {
        app.input.value.clone()
    };

    let border = if app.controller.has_error() {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = if app.controller.is_debouncing() {
        " Search … "
    } else {
        " Search "
    };

    let search_box = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, area);

    if app.controller.is_loading() {
        let throbber_area = Rect {
            x: area.x + area.width.saturating_sub(16),
            y: area.y,
            width: 14.min(area.width),
            height: 1,
        };
        let throbber = throbber_widgets_tui::Throbber::default()
            .label("Loading")
            .style(Style::default().fg(Color::Yellow))
            .throbber_style(Style::default().fg(Color::Yellow))
            .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
            .use_type(throbber_widgets_tui::WhichUse::Spin);
        frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    }
}
