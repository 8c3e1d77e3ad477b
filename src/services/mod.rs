pub mod ai;
pub mod ai_service;
pub mod board_store;
pub mod drag_session;
pub mod editor;
pub mod events;
pub mod reorder;
pub mod seed;

pub use ai::{AiAssistant, DisabledAssistant, GeminiClient};
pub use ai_service::{AiService, Enhancement};
pub use board_store::BoardStore;
pub use drag_session::{DragSession, DragState};
pub use editor::Editor;
pub use events::{BoardEvent, EventBus};
