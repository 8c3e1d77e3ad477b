use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnColor {
    pub name: &'static str,
    pub value: &'static str,
}

pub const DEFAULT_COLUMN_COLOR: &str = "#101204";

/// Colors offered by the column color picker. Columns may still carry any token.
pub const COLUMN_COLORS: &[ColumnColor] = &[
    ColumnColor { name: "Default", value: DEFAULT_COLUMN_COLOR },
    ColumnColor { name: "Red", value: "#380808" },
    ColumnColor { name: "Orange", value: "#382208" },
    ColumnColor { name: "Yellow", value: "#383308" },
    ColumnColor { name: "Green", value: "#083818" },
    ColumnColor { name: "Teal", value: "#082538" },
    ColumnColor { name: "Blue", value: "#0a152a" },
    ColumnColor { name: "Purple", value: "#220838" },
    ColumnColor { name: "Pink", value: "#380828" },
];
