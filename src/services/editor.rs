use std::sync::Arc;

use crate::domain::{Board, Confirmation, DragIntent, DragKind, LoadingScope};

use super::{BoardStore, DragSession};

/// Everything the single editing session mutates: the board store, the drag
/// gesture in flight and the AI loading indicator.
///
/// Callers hold it behind one mutex so each method runs as a single atomic
/// update.
#[derive(Debug, Default)]
pub struct Editor {
    store: BoardStore,
    drag: DragSession,
    ai_loading: Option<LoadingScope>,
}

impl Editor {
    pub fn new(store: BoardStore) -> Self {
        Self {
            store,
            drag: DragSession::new(),
            ai_loading: None,
        }
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BoardStore {
        &mut self.store
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    // Switching boards abandons any gesture started on the previous one.

    /// Create a board; the new board becomes active.
    pub fn create_board(&mut self, title: &str) -> Option<Arc<Board>> {
        let board = self.store.create_board(title)?;
        self.drag.end();
        Some(board)
    }

    pub fn select_board(&mut self, board_id: &str) -> bool {
        let changed = self.store.select_board(board_id);
        if changed {
            self.drag.end();
        }
        changed
    }

    pub fn delete_board(&mut self, board_id: &str, confirmation: Confirmation) -> bool {
        let was_active = self.store.active_board_id() == Some(board_id);
        let changed = self.store.delete_board(board_id, confirmation);
        if changed && was_active {
            self.drag.end();
        }
        changed
    }

    // ── Drag gestures ──────────────────────────────────────────

    pub fn start_drag(&mut self, intent: DragIntent) {
        self.drag.start(intent);
    }

    /// Returns whether the active board changed.
    pub fn drag_over(&mut self, target_id: &str, target_kind: DragKind) -> bool {
        let Some(columns) = self.store.active_columns() else {
            return false;
        };
        match self.drag.drag_over(columns, target_id, target_kind) {
            Some(next) => self.store.replace_active_columns(next),
            None => false,
        }
    }

    /// Returns whether the active board changed. The session is idle afterwards.
    pub fn drop_on(&mut self, target_column_id: &str) -> bool {
        let Some(columns) = self.store.active_columns() else {
            self.drag.end();
            return false;
        };
        match self.drag.drop(columns, target_column_id) {
            Some(next) => self.store.replace_active_columns(next),
            None => false,
        }
    }

    pub fn end_drag(&mut self) -> bool {
        self.drag.end()
    }

    // ── AI loading indicator ───────────────────────────────────

    pub fn ai_loading(&self) -> Option<&LoadingScope> {
        self.ai_loading.as_ref()
    }

    pub fn begin_ai(&mut self, scope: LoadingScope) {
        self.ai_loading = Some(scope);
    }

    /// Clear the indicator if it still shows `scope`; a newer request for a
    /// different scope keeps its indicator.
    pub fn finish_ai(&mut self, scope: &LoadingScope) -> bool {
        if self.ai_loading.as_ref() == Some(scope) {
            self.ai_loading = None;
            true
        } else {
            false
        }
    }
}
