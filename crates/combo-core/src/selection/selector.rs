use tracing::debug;

use super::{CheckList, ResultRow, Signal, compute_results};
use crate::score::ScoreTable;

/// Which checkbox list an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Genre,
    Game,
}

/// What triggered a recompute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    Toggled {
        list: ListKind,
        index: usize,
        checked: bool,
    },
    Reset,
}

/// Payload delivered to listeners after every recompute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub cause: SelectionEvent,
    pub rows: Vec<ResultRow>,
}

/// Selection state over an immutable score table.
///
/// Every state transition recomputes the full result list and then notifies
/// listeners synchronously.
#[derive(Debug)]
pub struct Selector {
    table: ScoreTable,
    genres: CheckList,
    games: CheckList,
    rows: Vec<ResultRow>,
    changed: Signal<SelectionChange>,
}

impl Selector {
    pub fn new(table: ScoreTable) -> Self {
        let genres = CheckList::new(table.genres());
        let games = CheckList::new(table.games());
        Self {
            table,
            genres,
            games,
            rows: Vec::new(),
            changed: Signal::new(),
        }
    }

    pub fn list(&self, kind: ListKind) -> &CheckList {
        match kind {
            ListKind::Genre => &self.genres,
            ListKind::Game => &self.games,
        }
    }

    fn list_mut(&mut self, kind: ListKind) -> &mut CheckList {
        match kind {
            ListKind::Genre => &mut self.genres,
            ListKind::Game => &mut self.games,
        }
    }

    /// Current result rows, best tier first
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Register a listener for recomputed results.
    pub fn connect<F>(&mut self, listener: F)
    where
        F: FnMut(&SelectionChange) + 'static,
    {
        self.changed.connect(listener);
    }

    /// Flip one checkbox. Returns the new state, or `None` if out of range.
    pub fn toggle(&mut self, list: ListKind, index: usize) -> Option<bool> {
        let checked = self.list_mut(list).toggle(index)?;
        self.refresh(SelectionEvent::Toggled {
            list,
            index,
            checked,
        });
        Some(checked)
    }

    /// Set one checkbox. Recomputes only when the state actually changes.
    pub fn set_checked(&mut self, list: ListKind, index: usize, checked: bool) -> bool {
        match self.list_mut(list).set(index, checked) {
            Some(previous) if previous != checked => {
                self.refresh(SelectionEvent::Toggled {
                    list,
                    index,
                    checked,
                });
                true
            }
            _ => false,
        }
    }

    /// Check the item labelled `label`. Returns `false` if no such item exists.
    pub fn check_label(&mut self, list: ListKind, label: &str) -> bool {
        let Some(index) = self.list(list).labels().iter().position(|l| l == label) else {
            return false;
        };
        self.set_checked(list, index, true);
        true
    }

    /// Uncheck everything in both lists.
    pub fn reset(&mut self) {
        let cleared = self.genres.clear() + self.games.clear();
        debug!("Reset cleared {} checkboxes", cleared);
        self.refresh(SelectionEvent::Reset);
    }

    fn refresh(&mut self, cause: SelectionEvent) {
        self.rows = compute_results(
            &self.table,
            self.genres.checked_labels(),
            self.games.checked_labels(),
        );
        debug!("{:?} -> {} result rows", cause, self.rows.len());

        let change = SelectionChange {
            cause,
            rows: self.rows.clone(),
        };
        self.changed.emit(&change);
    }
}
