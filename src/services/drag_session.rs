use std::sync::Arc;

use serde::Serialize;

use crate::domain::{Column, DragIntent, DragKind};

use super::reorder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DragState {
    Idle,
    DraggingTask,
    DraggingColumn,
}

/// Transient drag gesture state owned by the interaction layer.
///
/// Columns reorder live on every drag-over; tasks only move on drop. Every
/// completed or aborted gesture leaves the session idle.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    intent: Option<DragIntent>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        match self.intent.as_ref().map(|i| i.kind) {
            None => DragState::Idle,
            Some(DragKind::Task) => DragState::DraggingTask,
            Some(DragKind::Column) => DragState::DraggingColumn,
        }
    }

    pub fn intent(&self) -> Option<&DragIntent> {
        self.intent.as_ref()
    }

    /// Begin a gesture. A previous gesture that never delivered its drop is
    /// replaced.
    pub fn start(&mut self, intent: DragIntent) {
        if let Some(previous) = self.intent.replace(intent) {
            tracing::debug!(dragged_id = previous.id.as_str(), "Replacing stale drag intent");
        }
    }

    /// Handle a drag-over on `target_id`.
    ///
    /// Returns the new column sequence when a dragged column was moved live.
    /// The dragged column is located by id, so a column deleted mid-drag makes
    /// every further drag-over a no-op. The recorded index follows the column.
    pub fn drag_over(
        &mut self,
        columns: &[Arc<Column>],
        target_id: &str,
        target_kind: DragKind,
    ) -> Option<Vec<Arc<Column>>> {
        let intent = self.intent.as_mut()?;
        if intent.kind != DragKind::Column || target_kind != DragKind::Column {
            return None;
        }

        let Some(source_index) = columns.iter().position(|c| c.id == intent.id) else {
            tracing::debug!(column_id = intent.id.as_str(), "Dragged column no longer exists");
            return None;
        };
        if source_index != intent.index {
            tracing::debug!(
                column_id = intent.id.as_str(),
                recorded = intent.index,
                actual = source_index,
                "Drag index out of date, using actual position"
            );
        }
        let target_index = columns.iter().position(|c| c.id == target_id)?;
        intent.index = source_index;
        let next = reorder::move_column(columns, source_index, target_index)?;
        intent.index = target_index;
        Some(next)
    }

    /// Finish the gesture over `target_column_id`.
    ///
    /// A dragged task is appended to the drop column. It is looked up by id in
    /// its source column; if it is gone the drop does nothing. Columns were
    /// already placed during drag-over, so a column drop only clears the session.
    pub fn drop(
        &mut self,
        columns: &[Arc<Column>],
        target_column_id: &str,
    ) -> Option<Vec<Arc<Column>>> {
        let intent = self.intent.take()?;
        if intent.kind != DragKind::Task {
            return None;
        }

        let source_column_id = intent.column_id.as_deref()?;
        let source_index = columns
            .iter()
            .find(|c| c.id == source_column_id)
            .and_then(|c| c.task_position(&intent.id));
        let Some(source_index) = source_index else {
            tracing::debug!(
                task_id = intent.id.as_str(),
                source_column_id,
                "Dragged task no longer in its column"
            );
            return None;
        };

        let next = reorder::move_task(columns, source_column_id, source_index, target_column_id);
        if next.is_none() {
            tracing::debug!(
                task_id = intent.id.as_str(),
                source_column_id,
                target_column_id,
                "Task drop had no effect"
            );
        }
        next
    }

    /// Abort the gesture without touching the board. Returns whether a drag
    /// was in progress.
    pub fn end(&mut self) -> bool {
        self.intent.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;

    fn column(id: &str, task_ids: &[&str]) -> Arc<Column> {
        let mut col = Column::new(id.into(), id.to_uppercase());
        col.tasks = task_ids
            .iter()
            .map(|t| Arc::new(Task::new((*t).into(), (*t).into())))
            .collect();
        Arc::new(col)
    }

    fn ids(columns: &[Arc<Column>]) -> Vec<&str> {
        columns.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn starts_idle() {
        let session = DragSession::new();
        assert_eq!(session.state(), DragState::Idle);
        assert!(session.intent().is_none());
    }

    #[test]
    fn start_records_kind() {
        let mut session = DragSession::new();
        session.start(DragIntent::task("t1", "todo", 0));
        assert_eq!(session.state(), DragState::DraggingTask);

        session.start(DragIntent::column("todo", 0));
        assert_eq!(session.state(), DragState::DraggingColumn);
    }

    #[test]
    fn column_drag_reorders_live_and_tracks_index() {
        let mut cols = vec![column("a", &[]), column("b", &[]), column("c", &[])];
        let mut session = DragSession::new();
        session.start(DragIntent::column("a", 0));

        cols = session.drag_over(&cols, "b", DragKind::Column).unwrap();
        assert_eq!(ids(&cols), vec!["b", "a", "c"]);
        assert_eq!(session.intent().unwrap().index, 1);

        cols = session.drag_over(&cols, "c", DragKind::Column).unwrap();
        assert_eq!(ids(&cols), vec!["b", "c", "a"]);
        assert_eq!(session.intent().unwrap().index, 2);

        // pointer still over the same slot
        assert!(session.drag_over(&cols, "a", DragKind::Column).is_none());
        assert_eq!(session.state(), DragState::DraggingColumn);
    }

    #[test]
    fn column_drag_over_unknown_target_is_ignored() {
        let cols = vec![column("a", &[]), column("b", &[])];
        let mut session = DragSession::new();
        session.start(DragIntent::column("a", 0));

        assert!(session.drag_over(&cols, "zzz", DragKind::Column).is_none());
        assert_eq!(session.intent().unwrap().index, 0);
    }

    #[test]
    fn column_drag_over_task_surface_is_ignored() {
        let cols = vec![column("a", &["t1"]), column("b", &[])];
        let mut session = DragSession::new();
        session.start(DragIntent::column("a", 0));

        assert!(session.drag_over(&cols, "t1", DragKind::Task).is_none());
    }

    #[test]
    fn task_drag_over_never_mutates() {
        let cols = vec![column("a", &["t1"]), column("b", &[])];
        let mut session = DragSession::new();
        session.start(DragIntent::task("t1", "a", 0));

        assert!(session.drag_over(&cols, "b", DragKind::Column).is_none());
        assert!(session.drag_over(&cols, "t1", DragKind::Task).is_none());
        assert_eq!(session.state(), DragState::DraggingTask);
    }

    #[test]
    fn task_drop_moves_and_clears() {
        let cols = vec![column("x", &["t1", "t2", "t3"]), column("y", &[])];
        let mut session = DragSession::new();
        session.start(DragIntent::task("t2", "x", 1));

        let next = session.drop(&cols, "y").unwrap();

        assert_eq!(next[1].tasks[0].id, "t2");
        assert_eq!(next[0].tasks.len(), 2);
        assert_eq!(session.state(), DragState::Idle);
    }

    #[test]
    fn task_drop_on_deleted_column_clears_without_change() {
        let cols = vec![column("x", &["t1"])];
        let mut session = DragSession::new();
        session.start(DragIntent::task("t1", "x", 0));

        assert!(session.drop(&cols, "deleted").is_none());
        assert_eq!(session.state(), DragState::Idle);
    }

    #[test]
    fn column_drop_only_clears() {
        let cols = vec![column("a", &[]), column("b", &[])];
        let mut session = DragSession::new();
        session.start(DragIntent::column("a", 0));

        assert!(session.drop(&cols, "b").is_none());
        assert_eq!(session.state(), DragState::Idle);
    }

    #[test]
    fn drop_while_idle_is_no_op() {
        let cols = vec![column("a", &["t1"])];
        let mut session = DragSession::new();

        assert!(session.drop(&cols, "a").is_none());
        assert!(!session.end());
    }

    #[test]
    fn column_drag_uses_position_of_dragged_id() {
        let cols = vec![column("a", &[]), column("b", &[]), column("c", &[])];
        let mut session = DragSession::new();
        // recorded index points at "a", but "c" is the column being dragged
        session.start(DragIntent::column("c", 0));

        let next = session.drag_over(&cols, "a", DragKind::Column).unwrap();

        assert_eq!(ids(&next), vec!["c", "a", "b"]);
        assert_eq!(session.intent().unwrap().index, 0);
    }

    #[test]
    fn column_drag_after_column_deleted_is_ignored() {
        let cols = vec![column("b", &[]), column("c", &[])];
        let mut session = DragSession::new();
        session.start(DragIntent::column("a", 0));

        assert!(session.drag_over(&cols, "c", DragKind::Column).is_none());
        assert_eq!(session.state(), DragState::DraggingColumn);
    }

    #[test]
    fn task_drop_uses_position_of_dragged_id() {
        let cols = vec![column("x", &["t1", "t2"]), column("y", &[])];
        let mut session = DragSession::new();
        session.start(DragIntent::task("t1", "x", 1));

        let next = session.drop(&cols, "y").unwrap();

        assert_eq!(next[0].tasks[0].id, "t2");
        assert_eq!(next[1].tasks[0].id, "t1");
    }

    #[test]
    fn task_drop_after_task_deleted_changes_nothing() {
        let cols = vec![column("x", &["t2"]), column("y", &[])];
        let mut session = DragSession::new();
        session.start(DragIntent::task("t1", "x", 0));

        assert!(session.drop(&cols, "y").is_none());
        assert_eq!(session.state(), DragState::Idle);
    }

    #[test]
    fn task_intent_without_column_is_dropped_silently() {
        let cols = vec![column("a", &["t1"]), column("b", &[])];
        let mut session = DragSession::new();
        session.start(DragIntent {
            id: "t1".into(),
            column_id: None,
            index: 0,
            kind: DragKind::Task,
        });

        assert!(session.drop(&cols, "b").is_none());
        assert_eq!(session.state(), DragState::Idle);
    }
}
