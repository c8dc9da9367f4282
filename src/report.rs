use serde::Serialize;
use serde_json::Value;

/// Maximum number of characters of SQL kept in a result entry.
const PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementStatus {
    Success,
    Error,
}

/// Outcome record for one executed statement. Immutable once built.
#[derive(Debug, Serialize)]
pub struct StatementResult {
    pub sequence: usize,
    pub sql: String,
    pub status: StatementStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate outcome of a full migration run.
///
/// `success_count + error_count` always equals `results.len()`; the two
/// counters are only bumped by the push methods below.
#[derive(Debug, Default, Serialize)]
pub struct MigrationReport {
    pub success_count: usize,
    pub error_count: usize,
    pub results: Vec<StatementResult>,
}

impl MigrationReport {
    pub fn push_success(&mut self, sequence: usize, sql: &str, result: Value) {
        self.success_count += 1;
        self.results.push(StatementResult {
            sequence,
            sql: preview(sql),
            status: StatementStatus::Success,
            result: Some(result),
            error: None,
        });
    }

    pub fn push_error(&mut self, sequence: usize, sql: &str, error: String) {
        self.error_count += 1;
        self.results.push(StatementResult {
            sequence,
            sql: preview(sql),
            status: StatementStatus::Error,
            result: None,
            error: Some(error),
        });
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// First 100 characters of the trimmed SQL, with a trailing ellipsis marker
/// only when something was cut off. Counted in chars, not bytes.
pub fn preview(sql: &str) -> String {
    let trimmed = sql.trim();
    if trimmed.chars().count() > PREVIEW_CHARS {
        let head: String = trimmed.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        trimmed.to_string()
    }
}
