use std::sync::Arc;

use crate::domain::{Board, Column, Priority, Task};

use super::BoardStore;

impl BoardStore {
    /// Store pre-filled with the starter boards, "Product Roadmap" active.
    pub fn with_demo_boards() -> Self {
        Self::from_boards(demo_boards())
    }
}

pub fn demo_boards() -> Vec<Board> {
    vec![
        board(
            "b1",
            "Product Roadmap",
            vec![
                column(
                    "todo",
                    "To Do",
                    vec![
                        task("t1", "Research competitors", Priority::High, "Strategy"),
                        task("t2", "Draft initial concepts", Priority::Medium, "Design"),
                    ],
                ),
                column(
                    "in-progress",
                    "In Progress",
                    vec![task("t3", "Wireframe dashboard", Priority::High, "UX")],
                ),
                column(
                    "done",
                    "Completed",
                    vec![task("t4", "Client kickoff meeting", Priority::Low, "Meeting")],
                ),
            ],
        ),
        board(
            "b2",
            "Marketing Campaign",
            vec![
                column(
                    "ideas",
                    "Content Ideas",
                    vec![
                        task("m1", "Viral tweet thread", Priority::High, "Social"),
                        task("m2", "Product launch video", Priority::Medium, "Video"),
                    ],
                ),
                column("scheduled", "Scheduled", vec![]),
            ],
        ),
    ]
}

fn board(id: &str, title: &str, columns: Vec<Column>) -> Board {
    Board {
        id: id.into(),
        title: title.into(),
        columns: columns.into_iter().map(Arc::new).collect(),
    }
}

fn column(id: &str, title: &str, tasks: Vec<Task>) -> Column {
    Column {
        id: id.into(),
        title: title.into(),
        tasks: tasks.into_iter().map(Arc::new).collect(),
        color: None,
    }
}

fn task(id: &str, content: &str, priority: Priority, tag: &str) -> Task {
    Task {
        id: id.into(),
        content: content.into(),
        description: None,
        tags: Some(vec![tag.into()]),
        priority: Some(priority),
    }
}
