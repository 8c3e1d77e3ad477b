use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::domain::LoadingScope;

/// Change notifications pushed to the editing client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BoardEvent {
    /// Boards were added, removed, renamed or the active board changed.
    #[serde(rename_all = "camelCase")]
    BoardsChanged { active_board_id: Option<String> },
    #[serde(rename_all = "camelCase")]
    BoardChanged { board_id: String },
    DragChanged,
    AiStatusChanged { loading: Option<LoadingScope> },
}

#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<String>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }

    pub fn publish(&self, event: &BoardEvent) {
        match serde_json::to_string(event) {
            // no subscribers is fine
            Ok(payload) => {
                let _ = self.tx.send(payload);
            }
            Err(e) => tracing::warn!(error = %e, "Failed to serialize board event"),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_json_events() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.publish(&BoardEvent::BoardChanged {
            board_id: "b1".into(),
        });

        let payload = rx.recv().await.unwrap();
        assert_eq!(payload, r#"{"type":"boardChanged","boardId":"b1"}"#);
    }

    #[test]
    fn publishing_without_subscribers_does_not_fail() {
        EventBus::default().publish(&BoardEvent::DragChanged);
    }

    #[test]
    fn ai_status_carries_scope() {
        let json = serde_json::to_value(BoardEvent::AiStatusChanged {
            loading: Some(LoadingScope::column("todo")),
        })
        .unwrap();

        assert_eq!(json["loading"]["scope"], "column");
        assert_eq!(json["loading"]["columnId"], "todo");
    }
}
