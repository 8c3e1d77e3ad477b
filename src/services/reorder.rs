//! Pure reordering transitions for columns and tasks.
//!
//! Both functions take the current column sequence by reference and return a
//! new sequence, or `None` when the move would not change anything (same
//! position, stale index, or a column that no longer exists). Untouched
//! columns and tasks are shared with the input.

use std::sync::Arc;

use crate::domain::Column;

/// Move the column at `source_index` so that it ends up at `target_index`.
///
/// The element is removed first and then inserted at `target_index` of the
/// shortened sequence, so the moved column always lands exactly at
/// `target_index` in the result.
pub fn move_column(
    columns: &[Arc<Column>],
    source_index: usize,
    target_index: usize,
) -> Option<Vec<Arc<Column>>> {
    if source_index == target_index
        || source_index >= columns.len()
        || target_index >= columns.len()
    {
        return None;
    }

    let mut next = columns.to_vec();
    let moved = next.remove(source_index);
    next.insert(target_index, moved);
    Some(next)
}

/// Move the task at `source_index` of one column to the end of another.
///
/// When source and target are the same column the task moves to the end of
/// it. Only the affected columns are rebuilt.
pub fn move_task(
    columns: &[Arc<Column>],
    source_column_id: &str,
    source_index: usize,
    target_column_id: &str,
) -> Option<Vec<Arc<Column>>> {
    let source_pos = columns.iter().position(|c| c.id == source_column_id)?;
    let target_pos = columns.iter().position(|c| c.id == target_column_id)?;
    let source_len = columns[source_pos].tasks.len();

    if source_index >= source_len {
        return None;
    }
    if source_pos == target_pos && source_index + 1 == source_len {
        // already the last task of its own column
        return None;
    }

    let mut next = columns.to_vec();
    let mut source = Column::clone(&columns[source_pos]);
    let moved = source.tasks.remove(source_index);

    if source_pos == target_pos {
        source.tasks.push(moved);
    } else {
        let mut target = Column::clone(&columns[target_pos]);
        target.tasks.push(moved);
        next[target_pos] = Arc::new(target);
    }
    next[source_pos] = Arc::new(source);

    Some(next)
}
