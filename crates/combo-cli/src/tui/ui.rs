//! Frame rendering.

use combo_core::{ListKind, ScoreTier};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState},
};

use super::app::{App, Pane};

/// Draw the whole screen
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Percentage(45),
        ])
        .split(chunks[0]);

    let [genre_title, game_title, result_title] = app.labels().pane_titles();
    draw_checklist(f, app, ListKind::Genre, genre_title, panes[0]);
    draw_checklist(f, app, ListKind::Game, game_title, panes[1]);
    draw_results(f, app, result_title, panes[2]);
    draw_footer(f, chunks[1]);
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { Color::Yellow } else { Color::Gray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}

/// Draw one checkbox list
fn draw_checklist(f: &mut Frame, app: &App, list: ListKind, title: &str, area: Rect) {
    let checklist = app.selector().list(list);
    let pane = match list {
        ListKind::Genre => Pane::Genres,
        ListKind::Game => Pane::Games,
    };
    let focused = app.focus() == pane;

    let items: Vec<ListItem> = checklist
        .iter()
        .map(|(label, checked)| {
            let (mark, style) = if checked {
                ("[x] ", Style::default().fg(Color::Green))
            } else {
                ("[ ] ", Style::default())
            };
            ListItem::new(Line::from(vec![Span::styled(mark, style), Span::raw(label)]))
        })
        .collect();

    let title = format!(" {} ({}/{}) ", title, checklist.checked_count(), checklist.len());
    let widget = List::new(items)
        .block(pane_block(title, focused))
        .highlight_style(highlight_style(focused));

    let mut state = ListState::default().with_selected(Some(app.cursor(list)));
    f.render_stateful_widget(widget, area, &mut state);
}

/// Draw the result rows, best tier first
fn draw_results(f: &mut Frame, app: &App, title: &str, area: Rect) {
    let results = app.results();
    let labels = app.labels();
    let focused = app.focus() == Pane::Results;

    let rows: Vec<Row> = results
        .rows()
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(labels.tier(row.tier)).style(tier_style(row.tier)),
                Cell::from(row.genre.as_str()),
                Cell::from(row.game.as_str()),
            ])
        })
        .collect();

    let title = format!(" {} ({}) ", title, results.rows().len());
    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Percentage(40),
            Constraint::Percentage(60),
        ],
    )
    .block(pane_block(title, focused))
    .row_highlight_style(highlight_style(focused));

    let selected = (!results.rows().is_empty()).then_some(results.cursor());
    let mut state = TableState::default().with_selected(selected);
    f.render_stateful_widget(table, area, &mut state);
}

/// Draw footer with keyboard shortcuts
fn draw_footer(f: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Black).bg(Color::Gray);
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(" Tab/←→ ", key),
        Span::raw(" Pane  "),
        Span::styled(" ↑↓/jk ", key),
        Span::raw(" Move  "),
        Span::styled(" Space ", key),
        Span::raw(" Toggle  "),
        Span::styled(" r ", key),
        Span::raw(" Reset  "),
        Span::styled(" q/Esc ", key),
        Span::raw(" Quit"),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );

    f.render_widget(footer, area);
}

fn highlight_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::UNDERLINED)
    }
}

fn tier_style(tier: ScoreTier) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match tier {
        ScoreTier::Masterpiece => style.fg(Color::Yellow),
        ScoreTier::Original => style.fg(Color::Cyan),
        ScoreTier::NotBad => style,
    }
}
