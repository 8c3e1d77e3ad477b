use serde::{Deserialize, Serialize};

/// What an outstanding AI request is working on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "camelCase")]
pub enum LoadingScope {
    #[serde(rename_all = "camelCase")]
    Column { column_id: String },
    Global,
}

impl LoadingScope {
    pub fn column(column_id: impl Into<String>) -> Self {
        LoadingScope::Column {
            column_id: column_id.into(),
        }
    }
}
