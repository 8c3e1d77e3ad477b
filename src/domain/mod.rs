pub mod board;
pub mod confirmation;
pub mod drag;
pub mod error;
pub mod loading;
pub mod palette;
pub mod priority;

pub use board::{Board, Column, ColumnPatch, Task, TaskPatch};
pub use confirmation::Confirmation;
pub use drag::{DragIntent, DragKind};
pub use error::KanbanError;
pub use loading::LoadingScope;
pub use palette::{ColumnColor, COLUMN_COLORS, DEFAULT_COLUMN_COLOR};
pub use priority::Priority;
