use serde::{Deserialize, Serialize};

/// One search hit: the context text around the match and the work it was
/// found in.
///
/// Field names are fixed by the wire contract with the frontend
/// (`ResultString` / `WorkTitle`).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResult {
    pub result_string: String,
    pub work_title: String,
}

impl SearchResult {
    pub fn new(result_string: impl Into<String>, work_title: impl Into<String>) -> Self {
        Self {
            result_string: result_string.into(),
            work_title: work_title.into(),
        }
    }
}
