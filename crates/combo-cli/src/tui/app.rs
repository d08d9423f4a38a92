//! Interactive application state and key handling.

use std::cell::RefCell;
use std::rc::Rc;

use combo_core::{ListKind, ResultRow, ScoreTable, Selector};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::cli::LabelSet;

/// Focusable pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Genres,
    Games,
    Results,
}

impl Pane {
    fn next(self) -> Self {
        match self {
            Self::Genres => Self::Games,
            Self::Games => Self::Results,
            Self::Results => Self::Genres,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Genres => Self::Results,
            Self::Games => Self::Genres,
            Self::Results => Self::Games,
        }
    }

    fn list(self) -> Option<ListKind> {
        match self {
            Self::Genres => Some(ListKind::Genre),
            Self::Games => Some(ListKind::Game),
            Self::Results => None,
        }
    }
}

/// Rows shown in the result pane.
///
/// Replaced wholesale on every selection change.
#[derive(Debug, Default)]
pub struct ResultPane {
    rows: Vec<ResultRow>,
    cursor: usize,
}

impl ResultPane {
    pub fn set_rows(&mut self, rows: &[ResultRow]) {
        self.rows.clear();
        self.rows.extend_from_slice(rows);
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn move_cursor(&mut self, delta: isize) {
        self.cursor = step(self.cursor, delta, self.rows.len());
    }
}

pub struct App {
    selector: Selector,
    results: Rc<RefCell<ResultPane>>,
    labels: LabelSet,
    focus: Pane,
    genre_cursor: usize,
    game_cursor: usize,
    should_quit: bool,
}

impl App {
    pub fn new(table: ScoreTable, labels: LabelSet) -> Self {
        let mut selector = Selector::new(table);
        let results = Rc::new(RefCell::new(ResultPane::default()));

        let pane = Rc::clone(&results);
        selector.connect(move |change| pane.borrow_mut().set_rows(&change.rows));

        Self {
            selector,
            results,
            labels,
            focus: Pane::Genres,
            genre_cursor: 0,
            game_cursor: 0,
            should_quit: false,
        }
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn results(&self) -> std::cell::Ref<'_, ResultPane> {
        self.results.borrow()
    }

    pub fn labels(&self) -> LabelSet {
        self.labels
    }

    pub fn focus(&self) -> Pane {
        self.focus
    }

    pub fn cursor(&self, list: ListKind) -> usize {
        match list {
            ListKind::Genre => self.genre_cursor,
            ListKind::Game => self.game_cursor,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            self.handle_key(key);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.focus = self.focus.prev()
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_current(),
            KeyCode::Char('r') => self.selector.reset(),
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.focus.list() {
            Some(ListKind::Genre) => {
                let len = self.selector.list(ListKind::Genre).len();
                self.genre_cursor = step(self.genre_cursor, delta, len);
            }
            Some(ListKind::Game) => {
                let len = self.selector.list(ListKind::Game).len();
                self.game_cursor = step(self.game_cursor, delta, len);
            }
            None => self.results.borrow_mut().move_cursor(delta),
        }
    }

    fn toggle_current(&mut self) {
        if let Some(list) = self.focus.list() {
            let index = self.cursor(list);
            self.selector.toggle(list, index);
        }
    }
}

/// Move `current` by `delta`, clamped to `0..len`.
fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}
