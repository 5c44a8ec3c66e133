use super::*;
use crate::app::ListRow;
use crate::controller::Panel;
use omdb::MovieSummary;
use ratatui::widgets::{List, ListItem, ListState, Wrap};

pub fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    match app.controller.panel() {
        Panel::Suggestions => render_list(frame, area, app, suggestions_title(app)),
        Panel::Results => render_list(frame, area, app, results_title(app)),
        Panel::Searching => render_message(
            frame,
            area,
            format!("Searching for \"{}\"...", app.controller.active_query()),
            Color::DarkGray,
        ),
        Panel::NoResults { title } => render_message(
            frame,
            area,
            format!(
                "Sorry! We could not find any movies with the title \"{}\"",
                title
            ),
            Color::Red,
        ),
    }
}

fn suggestions_title(app: &App) -> String {
    if app.controller.recents().is_empty() {
        " Suggestions ".to_string()
    } else if app.controller.query().trim().is_empty() {
        format!(" Recent searches ({}) ", app.controller.recents().terms().len())
    } else {
        " Matching recent searches ".to_string()
    }
}

fn results_title(app: &App) -> String {
    let count = app.controller.results().len();
    let suffix = if app.controller.is_exhausted() {
        ", all loaded"
    } else {
        ""
    };
    format!(
        " Results for \"{}\" ({}, page {}{}) ",
        app.controller.active_query(),
        count,
        app.controller.cursor(),
        suffix
    )
}

fn movie_line(movie: &MovieSummary) -> Line<'_> {
    let poster = if movie.poster_url().is_some() {
        Span::styled("▣ ", Style::default().fg(Color::Green))
    } else {
        Span::styled("□ ", Style::default().fg(Color::DarkGray))
    };
    Line::from(vec![
        poster,
        Span::styled(movie.title.as_str(), Style::default().fg(Color::White)),
        Span::styled(format!("  ({})", movie.year), Style::default().fg(Color::Magenta)),
    ])
}

fn render_list(frame: &mut Frame, area: Rect, app: &App, title: String) {
    let list_focused = app.focus == Focus::List;

    let items: Vec<ListItem> = app
        .rows()
        .into_iter()
        .map(|row| match row {
            ListRow::Movie(movie) => ListItem::new(movie_line(movie)),
            ListRow::Term(term) => ListItem::new(Line::from(vec![
                Span::styled("↺ ", Style::default().fg(Color::DarkGray)),
                Span::styled(term, Style::default().fg(Color::Cyan)),
            ])),
            ListRow::LoadMore => ListItem::new(Line::from(Span::styled(
                "[ Load more ]",
                Style::default().fg(Color::Yellow),
            ))),
        })
        .collect();

    let empty = items.is_empty();
    let border = if list_focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
        .padding(Padding::horizontal(1));

    if empty {
        let hint = Paragraph::new(format!(
            "Press Enter to search for \"{}\"",
            app.controller.query().trim()
        ))
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(if list_focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        })
        .highlight_symbol(if list_focused { "› " } else { "  " });

    let mut state = ListState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_message(frame: &mut Frame, area: Rect, message: String, color: Color) {
    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(message)])
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::LookupOutcome;
    use crate::lookup::mock::movies_for;
    use crate::lookup::LookupError;
    use crate::term_store::MemoryTermStore;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn test_app() -> App {
        App::new(
            Box::new(MemoryTermStore::new()),
            Duration::from_millis(500),
            "dev catalog",
        )
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| crate::ui::render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn idle_screen_shows_suggestions() {
        let mut app = test_app();
        let text = screen(&mut app);
        assert!(text.contains("Suggestions"));
        assert!(text.contains("Deadpool"));
    }

    #[test]
    fn failed_search_shows_sorry_message() {
        let mut app = test_app();
        app.input.set("zzzz");
        let request = app.search_now().unwrap();
        app.controller.complete(LookupOutcome {
            request,
            result: Err(LookupError::Failed("Movie not found!".to_string())),
        });

        let text = screen(&mut app);
        assert!(text.contains("Sorry! We could not find any movies"));
    }

    #[test]
    fn results_show_titles_and_load_more() {
        let mut app = test_app();
        app.input.set("Star");
        let request = app.search_now().unwrap();
        let result = Ok(movies_for("Star", 1, 10));
        app.controller.complete(LookupOutcome { request, result });

        let text = screen(&mut app);
        assert!(text.contains("Results for \"Star\" (10, page 1)"));
        assert!(text.contains("Star p1 #0"));
    }
}
