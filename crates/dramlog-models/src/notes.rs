use serde::{Deserialize, Serialize};

/// Free-text tasting notes per category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Notes {
    #[serde(default)]
    pub nose: String,
    #[serde(default)]
    pub palate: String,
    #[serde(default)]
    pub finish: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall: Option<String>,
}
