use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Board, Column, ColumnPatch, Confirmation, Priority, Task, TaskPatch};

pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

pub const AI_GENERATED_TAG: &str = "AI Generated";

/// In-memory collection of boards and the active board selection.
///
/// Every mutation replaces the affected board with a new snapshot whose
/// untouched columns and tasks are shared with the previous one. Operations
/// that reference a board, column or task that no longer exists are no-ops
/// and report `false` / `None`.
#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    boards: Vec<Arc<Board>>,
    active_board_id: Option<String>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing boards; the first one becomes active.
    pub fn from_boards(boards: Vec<Board>) -> Self {
        let active_board_id = boards.first().map(|b| b.id.clone());
        Self {
            boards: boards.into_iter().map(Arc::new).collect(),
            active_board_id,
        }
    }

    pub fn boards(&self) -> &[Arc<Board>] {
        &self.boards
    }

    pub fn board(&self, board_id: &str) -> Option<&Arc<Board>> {
        self.boards.iter().find(|b| b.id == board_id)
    }

    pub fn active_board_id(&self) -> Option<&str> {
        self.active_board_id.as_deref()
    }

    pub fn active_board(&self) -> Option<&Arc<Board>> {
        self.active_board_id
            .as_deref()
            .and_then(|id| self.board(id))
    }

    pub fn active_columns(&self) -> Option<&[Arc<Column>]> {
        self.active_board().map(|b| b.columns.as_slice())
    }

    // ── Boards ─────────────────────────────────────────────────

    /// Append a new empty board and make it active.
    pub fn create_board(&mut self, title: &str) -> Option<Arc<Board>> {
        let title = non_blank(title)?;
        let board = Arc::new(Board::new(generate_id(), title));
        self.boards.push(Arc::clone(&board));
        self.active_board_id = Some(board.id.clone());
        tracing::debug!(board_id = board.id.as_str(), "Board created");
        Some(board)
    }

    pub fn rename_board(&mut self, board_id: &str, title: &str) -> bool {
        let Some(title) = non_blank(title) else {
            return false;
        };
        let Some(pos) = self.board_position(board_id) else {
            return false;
        };
        let mut board = Board::clone(&self.boards[pos]);
        board.title = title;
        self.boards[pos] = Arc::new(board);
        true
    }

    pub fn select_board(&mut self, board_id: &str) -> bool {
        if self.board(board_id).is_none() || self.active_board_id() == Some(board_id) {
            return false;
        }
        self.active_board_id = Some(board_id.to_string());
        true
    }

    /// Delete a board. Deleting the active board selects the first remaining
    /// board, or no board at all when none remain.
    pub fn delete_board(&mut self, board_id: &str, confirmation: Confirmation) -> bool {
        if !confirmation.is_confirmed() {
            return false;
        }
        let Some(pos) = self.board_position(board_id) else {
            return false;
        };
        self.boards.remove(pos);

        if self.active_board_id() == Some(board_id) {
            self.active_board_id = self.boards.first().map(|b| b.id.clone());
        }
        tracing::debug!(
            board_id,
            active_board_id = self.active_board_id.as_deref().unwrap_or(""),
            "Board deleted"
        );
        true
    }

    // ── Columns (active board) ─────────────────────────────────

    /// Install a new column sequence on the active board.
    pub fn replace_active_columns(&mut self, columns: Vec<Arc<Column>>) -> bool {
        let Some(board_id) = self.active_board_id.clone() else {
            return false;
        };
        self.update_columns(&board_id, |_| Some(columns))
    }

    pub fn create_column(&mut self, title: &str) -> Option<Arc<Column>> {
        let title = non_blank(title)?;
        let column = Arc::new(Column::new(generate_id(), title));
        let board_id = self.active_board_id.clone()?;

        let created = self.update_columns(&board_id, |columns| {
            let mut next = columns.to_vec();
            next.push(Arc::clone(&column));
            Some(next)
        });
        created.then_some(column)
    }

    pub fn update_column(&mut self, column_id: &str, patch: &ColumnPatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return false;
            }
        }
        self.update_active_column(column_id, |column| Some(patch.apply(column)))
    }

    pub fn delete_column(&mut self, column_id: &str, confirmation: Confirmation) -> bool {
        if !confirmation.is_confirmed() {
            return false;
        }
        self.update_active(|columns| {
            let pos = columns.iter().position(|c| c.id == column_id)?;
            let mut next = columns.to_vec();
            next.remove(pos);
            Some(next)
        })
    }

    // ── Tasks (active board) ───────────────────────────────────

    /// Append a task with the default priority to a column.
    pub fn create_task(&mut self, column_id: &str, content: &str) -> Option<Arc<Task>> {
        let content = non_blank(content)?;
        let task = Arc::new(Task::new(generate_id(), content));

        let created = self.update_active_column(column_id, |column| {
            let mut next = column.clone();
            next.tasks.push(Arc::clone(&task));
            Some(next)
        });
        created.then_some(task)
    }

    pub fn update_task(&mut self, task_id: &str, patch: &TaskPatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        if let Some(content) = &patch.content {
            if content.trim().is_empty() {
                return false;
            }
        }
        self.update_active_task(task_id, |task| Some(patch.apply(task)))
    }

    pub fn delete_task(
        &mut self,
        column_id: &str,
        task_id: &str,
        confirmation: Confirmation,
    ) -> bool {
        if !confirmation.is_confirmed() {
            return false;
        }
        self.update_active_column(column_id, |column| {
            let pos = column.task_position(task_id)?;
            let mut next = column.clone();
            next.tasks.remove(pos);
            Some(next)
        })
    }

    /// Add a tag unless the task already carries it.
    pub fn add_tag(&mut self, task_id: &str, tag: &str) -> bool {
        let Some(tag) = non_blank(tag) else {
            return false;
        };
        self.update_active_task(task_id, |task| {
            if task.tags().contains(&tag) {
                return None;
            }
            let mut next = task.clone();
            next.tags.get_or_insert_with(Vec::new).push(tag);
            Some(next)
        })
    }

    pub fn remove_tag(&mut self, task_id: &str, tag: &str) -> bool {
        self.update_active_task(task_id, |task| {
            if !task.tags().iter().any(|t| t == tag) {
                return None;
            }
            let mut next = task.clone();
            if let Some(tags) = next.tags.as_mut() {
                tags.retain(|t| t != tag);
            }
            Some(next)
        })
    }

    // ── Late-bound AI results ──────────────────────────────────

    /// Append AI generated titles to a column of `board_id`, resolved against
    /// the current state. Blank titles are skipped.
    pub fn append_generated_tasks(
        &mut self,
        board_id: &str,
        column_id: &str,
        titles: &[String],
    ) -> Vec<Arc<Task>> {
        let created: Vec<Arc<Task>> = titles
            .iter()
            .filter_map(|title| non_blank(title))
            .map(|content| {
                Arc::new(Task {
                    id: generate_id(),
                    content,
                    description: None,
                    tags: Some(vec![AI_GENERATED_TAG.to_string()]),
                    priority: Some(Priority::Low),
                })
            })
            .collect();

        if created.is_empty() {
            return created;
        }

        let applied = self.update_columns(board_id, |columns| {
            let pos = columns.iter().position(|c| c.id == column_id)?;
            let mut column = Column::clone(&columns[pos]);
            column.tasks.extend(created.iter().cloned());
            let mut next = columns.to_vec();
            next[pos] = Arc::new(column);
            Some(next)
        });

        if applied {
            created
        } else {
            Vec::new()
        }
    }

    /// Set a task description on `board_id`, resolved against the current state.
    pub fn set_description(&mut self, board_id: &str, task_id: &str, description: &str) -> bool {
        let patch = TaskPatch {
            description: Some(Some(description.to_string())),
            ..Default::default()
        };
        self.update_columns(board_id, |columns| {
            map_task(columns, task_id, |task| Some(patch.apply(task)))
        })
    }

    // ── Helpers ────────────────────────────────────────────────

    fn board_position(&self, board_id: &str) -> Option<usize> {
        self.boards.iter().position(|b| b.id == board_id)
    }

    fn update_columns<F>(&mut self, board_id: &str, f: F) -> bool
    where
        F: FnOnce(&[Arc<Column>]) -> Option<Vec<Arc<Column>>>,
    {
        let Some(pos) = self.board_position(board_id) else {
            return false;
        };
        match f(&self.boards[pos].columns) {
            Some(columns) => {
                self.boards[pos] = Arc::new(self.boards[pos].with_columns(columns));
                true
            }
            None => false,
        }
    }

    fn update_active<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&[Arc<Column>]) -> Option<Vec<Arc<Column>>>,
    {
        match self.active_board_id.clone() {
            Some(board_id) => self.update_columns(&board_id, f),
            None => false,
        }
    }

    fn update_active_column<F>(&mut self, column_id: &str, f: F) -> bool
    where
        F: FnOnce(&Column) -> Option<Column>,
    {
        self.update_active(|columns| {
            let pos = columns.iter().position(|c| c.id == column_id)?;
            let column = f(&columns[pos])?;
            let mut next = columns.to_vec();
            next[pos] = Arc::new(column);
            Some(next)
        })
    }

    fn update_active_task<F>(&mut self, task_id: &str, f: F) -> bool
    where
        F: FnOnce(&Task) -> Option<Task>,
    {
        self.update_active(|columns| map_task(columns, task_id, f))
    }
}

fn map_task<F>(columns: &[Arc<Column>], task_id: &str, f: F) -> Option<Vec<Arc<Column>>>
where
    F: FnOnce(&Task) -> Option<Task>,
{
    let (col_pos, task_pos) = columns
        .iter()
        .enumerate()
        .find_map(|(i, c)| c.task_position(task_id).map(|j| (i, j)))?;
    let task = f(&columns[col_pos].tasks[task_pos])?;

    let mut column = Column::clone(&columns[col_pos]);
    column.tasks[task_pos] = Arc::new(task);
    let mut next = columns.to_vec();
    next[col_pos] = Arc::new(column);
    Some(next)
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> BoardStore {
        BoardStore::with_demo_boards()
    }

    fn column_task_ids(store: &BoardStore, column_id: &str) -> Vec<String> {
        store
            .active_board()
            .and_then(|b| b.column(column_id))
            .map(|c| c.tasks.iter().map(|t| t.id.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn create_board_appends_and_activates() {
        let mut store = store();

        let board = store.create_board("  Launch  ").unwrap();

        assert_eq!(board.title, "Launch");
        assert!(board.columns.is_empty());
        assert_eq!(store.boards().len(), 3);
        assert_eq!(store.active_board_id(), Some(board.id.as_str()));
    }

    #[test]
    fn blank_titles_are_refused() {
        let mut store = store();

        assert!(store.create_board("   ").is_none());
        assert!(store.create_column("").is_none());
        assert!(store.create_task("todo", " \t").is_none());
        assert_eq!(store.boards().len(), 2);
        assert_eq!(store.active_columns().unwrap().len(), 3);
    }

    #[test]
    fn deleting_active_board_selects_first_remaining() {
        let mut store = store();
        let third = store.create_board("Third").unwrap();

        assert!(store.delete_board(&third.id, Confirmation::Confirmed));

        assert_eq!(store.active_board_id(), Some("b1"));
    }

    #[test]
    fn deleting_last_board_leaves_no_active_board() {
        let mut store = store();

        assert!(store.delete_board("b1", Confirmation::Confirmed));
        assert_eq!(store.active_board_id(), Some("b2"));
        assert!(store.delete_board("b2", Confirmation::Confirmed));

        assert!(store.boards().is_empty());
        assert!(store.active_board().is_none());
        assert!(store.create_column("Orphan").is_none());
    }

    #[test]
    fn deleting_inactive_board_keeps_selection() {
        let mut store = store();

        assert!(store.delete_board("b2", Confirmation::Confirmed));

        assert_eq!(store.active_board_id(), Some("b1"));
    }

    #[test]
    fn declined_deletes_change_nothing() {
        let mut store = store();
        let before = store.active_board().cloned();

        assert!(!store.delete_board("b1", Confirmation::Declined));
        assert!(!store.delete_column("todo", Confirmation::Declined));
        assert!(!store.delete_task("todo", "t1", Confirmation::Declined));

        assert_eq!(store.active_board().cloned(), before);
        assert_eq!(store.boards().len(), 2);
    }

    #[test]
    fn select_unknown_board_is_no_op() {
        let mut store = store();
        assert!(!store.select_board("nope"));
        assert!(store.select_board("b2"));
        assert_eq!(store.active_board().unwrap().title, "Marketing Campaign");
    }

    #[test]
    fn mutations_leave_other_boards_untouched() {
        let mut store = store();
        let other = Arc::clone(store.board("b2").unwrap());

        store.create_column("Review").unwrap();
        store.create_task("todo", "Ship it").unwrap();

        assert!(Arc::ptr_eq(store.board("b2").unwrap(), &other));
    }

    #[test]
    fn create_task_defaults_to_medium_priority() {
        let mut store = store();

        let task = store.create_task("done", "Retro").unwrap();

        assert_eq!(task.priority, Some(Priority::Medium));
        assert_eq!(column_task_ids(&store, "done").last(), Some(&task.id));
    }

    #[test]
    fn create_task_in_missing_column_is_no_op() {
        let mut store = store();
        let before = store.active_board().cloned();

        assert!(store.create_task("deleted", "Ghost").is_none());
        assert_eq!(store.active_board().cloned(), before);
    }

    #[test]
    fn update_task_merges_only_given_fields() {
        let mut store = store();
        let patch = TaskPatch {
            priority: Some(Priority::Low),
            ..Default::default()
        };

        assert!(store.update_task("t1", &patch));

        let board = store.active_board().unwrap();
        let (_, task) = board.find_task("t1").unwrap();
        assert_eq!(task.priority, Some(Priority::Low));
        assert_eq!(task.content, "Research competitors");
        assert_eq!(task.tags(), ["Strategy".to_string()]);
        assert_eq!(task.description, None);
    }

    #[test]
    fn update_column_title_and_color() {
        let mut store = store();
        let patch = ColumnPatch {
            title: Some("Backlog".into()),
            color: Some(Some("#083818".into())),
        };

        assert!(store.update_column("todo", &patch));

        let column = store.active_board().unwrap().column("todo").unwrap().clone();
        assert_eq!(column.title, "Backlog");
        assert_eq!(column.color.as_deref(), Some("#083818"));
        assert_eq!(column.tasks.len(), 2);
    }

    #[test]
    fn delete_column_and_task() {
        let mut store = store();

        assert!(store.delete_task("todo", "t2", Confirmation::Confirmed));
        assert_eq!(column_task_ids(&store, "todo"), vec!["t1"]);

        assert!(store.delete_column("done", Confirmation::Confirmed));
        assert!(store.active_board().unwrap().column("done").is_none());

        assert!(!store.delete_task("todo", "t2", Confirmation::Confirmed));
    }

    #[test]
    fn tags_are_trimmed_and_not_duplicated() {
        let mut store = store();

        assert!(store.add_tag("t1", " Research "));
        assert!(!store.add_tag("t1", "Research"));
        assert!(!store.add_tag("t1", "  "));
        assert!(store.add_tag("t1", "research"));

        let board = store.active_board().unwrap();
        let (_, task) = board.find_task("t1").unwrap();
        assert_eq!(task.tags(), ["Strategy", "Research", "research"].map(String::from));

        assert!(store.remove_tag("t1", "Strategy"));
        assert!(!store.remove_tag("t1", "Strategy"));
    }

    #[test]
    fn generated_tasks_land_in_original_board_after_switch() {
        let mut store = store();
        store.select_board("b2");

        let titles = vec!["Benchmark pricing".to_string(), " ".to_string()];
        let created = store.append_generated_tasks("b1", "todo", &titles);

        assert_eq!(created.len(), 1);
        assert_eq!(created[0].priority, Some(Priority::Low));
        assert_eq!(created[0].tags(), [AI_GENERATED_TAG.to_string()]);
        assert_eq!(store.board("b1").unwrap().column("todo").unwrap().tasks.len(), 3);
    }

    #[test]
    fn empty_generation_leaves_column_unchanged() {
        let mut store = store();
        let before = store.active_board().cloned();

        assert!(store.append_generated_tasks("b1", "todo", &[]).is_empty());
        assert_eq!(store.active_board().cloned(), before);
    }

    #[test]
    fn generation_for_deleted_column_is_discarded() {
        let mut store = store();
        store.delete_column("todo", Confirmation::Confirmed);

        let created = store.append_generated_tasks("b1", "todo", &["New".to_string()]);

        assert!(created.is_empty());
    }

    #[test]
    fn description_for_deleted_task_is_discarded() {
        let mut store = store();
        store.delete_task("todo", "t1", Confirmation::Confirmed);

        assert!(!store.set_description("b1", "t1", "text"));
        assert!(store.set_description("b1", "t2", "text"));
    }

    #[test]
    fn replace_active_columns_swaps_sequence() {
        let mut store = store();
        let mut columns = store.active_columns().unwrap().to_vec();
        columns.reverse();

        assert!(store.replace_active_columns(columns));

        let ids: Vec<_> = store
            .active_columns()
            .unwrap()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["done", "in-progress", "todo"]);
    }
}
