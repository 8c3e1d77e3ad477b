use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::services::{AiAssistant, AiService, BoardEvent, BoardStore, Editor, EventBus};

#[derive(Clone)]
pub struct AppState {
    pub editor: Arc<Mutex<Editor>>,
    pub events: EventBus,
    pub ai: AiService,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: BoardStore, assistant: Arc<dyn AiAssistant>, config: Arc<Config>) -> Self {
        let editor = Arc::new(Mutex::new(Editor::new(store)));
        let events = EventBus::default();
        let ai = AiService::new(Arc::clone(&editor), assistant, events.clone());

        Self {
            editor,
            events,
            ai,
            config,
        }
    }

    pub fn publish(&self, event: BoardEvent) {
        self.events.publish(&event);
    }
}
